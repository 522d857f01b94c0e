//! # Core Traits (Ports)
//!
//! Any store plugin must implement these traits to be used by the binary.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{NewReply, NewThread, Reply, Thread};

/// Data access contract for threads, replies, and heart reactions.
///
/// Ordering contract: `list_threads` yields the newest thread first, and each
/// thread carries its replies in append order.
#[async_trait]
pub trait ForumStore: Send + Sync {
    // Thread Operations
    async fn list_threads(&self) -> Result<Vec<Thread>>;

    /// Assigns a fresh id and the current date, inserts at the front of the
    /// sequence, and returns the stored thread. Never fails.
    async fn create_thread(&self, new: NewThread) -> Result<Thread>;

    async fn get_thread(&self, thread_id: &str) -> Result<Thread>;

    // Reply Operations

    /// Assigns a fresh id and the current date, appends to the end of the
    /// owning thread's reply sequence, and returns the stored reply.
    async fn create_reply(&self, thread_id: &str, new: NewReply) -> Result<Reply>;

    // Reactions

    /// Increments the thread's heart count by one and returns the new count.
    async fn heart_thread(&self, thread_id: &str) -> Result<u32>;

    /// Increments a reply's heart count by one, locating the reply across all
    /// threads, and returns the new count.
    async fn heart_reply(&self, reply_id: &str) -> Result<u32>;
}
