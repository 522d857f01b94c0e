//! # AppError
//!
//! Centralized error handling for the Heartboard ecosystem.
//! The domain has exactly one failure mode: a lookup by id that matches
//! nothing. Everything else (malformed payloads, transport faults) is
//! rejected before it reaches the store.

use std::fmt;

use thiserror::Error;

/// The entity kind a failed lookup was scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Thread,
    Reply,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Thread => f.write_str("Thread"),
            Entity::Reply => f.write_str("Reply"),
        }
    }
}

/// The primary error type for all hb-core operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AppError {
    /// Lookup failed for the given entity kind.
    /// The message is client-visible ("Thread not found" / "Reply not found").
    #[error("{0} not found")]
    NotFound(Entity),
}

/// A specialized Result type for Heartboard logic.
pub type Result<T> = std::result::Result<T, AppError>;
