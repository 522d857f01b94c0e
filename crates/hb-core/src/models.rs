//! # Domain Models
//!
//! These structs represent the core entities of Heartboard.
//! Ids are opaque strings (random 128-bit identifiers rendered as text) and
//! dates are server-assigned `YYYY-MM-DD` calendar strings, so both stay
//! plain `String`s at the domain boundary.

use serde::{Deserialize, Serialize};

/// A top-level forum post with its nested replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    pub id: String,
    pub title: String,
    pub author: String,
    pub content: String,
    /// Calendar date the thread was created, assigned by the server.
    pub date: String,
    /// Reaction counter. Only ever incremented.
    #[serde(default)]
    pub hearts: u32,
    /// Replies in append order. The thread exclusively owns them.
    #[serde(default)]
    pub replies: Vec<Reply>,
}

/// A response attached to exactly one [`Thread`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub id: String,
    pub author: String,
    pub content: String,
    pub date: String,
    #[serde(default)]
    pub hearts: u32,
}

/// Payload for creating a thread.
///
/// Deliberately omits `id`, `date`, `hearts`, and `replies`: those are
/// server-assigned, and a payload type without the fields cannot spoof them.
/// Unknown fields in the request body are ignored, so clients that submit a
/// full `Thread` shape still work.
#[derive(Debug, Clone, Deserialize)]
pub struct NewThread {
    pub title: String,
    pub author: String,
    pub content: String,
}

/// Payload for creating a reply. Same field policy as [`NewThread`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewReply {
    pub author: String,
    pub content: String,
}
