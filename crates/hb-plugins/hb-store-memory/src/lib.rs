//! # hb-store-memory Implementation
//!
//! In-memory implementation of `ForumStore`. The whole forum is one ordered
//! `Vec<Thread>` (newest first) behind a single `RwLock`; data lives exactly
//! as long as the process.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Local;
use hb_core::error::{AppError, Entity, Result};
use hb_core::models::{NewReply, NewThread, Reply, Thread};
use hb_core::traits::ForumStore;
use uuid::Uuid;

/// Random 128-bit identifier rendered as text. Uniqueness across the process
/// lifetime is probabilistic; collisions are not detected.
fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// The server's local calendar date, e.g. "2026-08-06".
fn current_date() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

pub struct MemoryForumStore {
    threads: RwLock<Vec<Thread>>,
}

impl MemoryForumStore {
    /// Creates a store pre-seeded with the example thread the forum ships
    /// with, so a fresh deployment is not an empty page.
    pub fn new() -> Self {
        Self {
            threads: RwLock::new(vec![seed_thread()]),
        }
    }

    /// Creates a store with no threads at all.
    pub fn empty() -> Self {
        Self {
            threads: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryForumStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The well-known starter thread (fixed ids "1" / "1-1").
fn seed_thread() -> Thread {
    Thread {
        id: "1".to_string(),
        title: "What are your favorite feel-good anime?".to_string(),
        author: "Sakura".to_string(),
        content: "Hi everyone! Tell us about the cutest anime that lift your mood! \
                  I adore 'My Neighbor Totoro' and 'K-On!'"
            .to_string(),
        date: "2023-05-15".to_string(),
        hearts: 5,
        replies: vec![Reply {
            id: "1-1".to_string(),
            author: "Miku".to_string(),
            content: "Ooh, I love cozy slice-of-life shows! They are so sweet and comfy!"
                .to_string(),
            date: "2023-05-15".to_string(),
            hearts: 2,
        }],
    }
}

// All six operations lock synchronously and never hold a guard across an
// `.await`, so the coarse lock cannot deadlock the executor. Readers clone
// out under the read lock and can never observe a half-applied mutation.
#[async_trait]
impl ForumStore for MemoryForumStore {
    async fn list_threads(&self) -> Result<Vec<Thread>> {
        let threads = self.threads.read().expect("threads lock poisoned");
        Ok(threads.clone())
    }

    /// Inserts at the front: the listing is newest-thread-first.
    async fn create_thread(&self, new: NewThread) -> Result<Thread> {
        let thread = Thread {
            id: generate_id(),
            title: new.title,
            author: new.author,
            content: new.content,
            date: current_date(),
            hearts: 0,
            replies: Vec::new(),
        };

        let mut threads = self.threads.write().expect("threads lock poisoned");
        threads.insert(0, thread.clone());
        log::debug!("created thread {}", thread.id);
        Ok(thread)
    }

    async fn get_thread(&self, thread_id: &str) -> Result<Thread> {
        let threads = self.threads.read().expect("threads lock poisoned");
        threads
            .iter()
            .find(|t| t.id == thread_id)
            .cloned()
            .ok_or(AppError::NotFound(Entity::Thread))
    }

    /// Appends to the end of the owning thread's reply list.
    async fn create_reply(&self, thread_id: &str, new: NewReply) -> Result<Reply> {
        let reply = Reply {
            id: generate_id(),
            author: new.author,
            content: new.content,
            date: current_date(),
            hearts: 0,
        };

        let mut threads = self.threads.write().expect("threads lock poisoned");
        let thread = threads
            .iter_mut()
            .find(|t| t.id == thread_id)
            .ok_or(AppError::NotFound(Entity::Thread))?;
        thread.replies.push(reply.clone());
        log::debug!("created reply {} in thread {}", reply.id, thread_id);
        Ok(reply)
    }

    async fn heart_thread(&self, thread_id: &str) -> Result<u32> {
        let mut threads = self.threads.write().expect("threads lock poisoned");
        let thread = threads
            .iter_mut()
            .find(|t| t.id == thread_id)
            .ok_or(AppError::NotFound(Entity::Thread))?;
        thread.hearts += 1;
        Ok(thread.hearts)
    }

    /// Reply ids are globally unique, so the first match is the only match.
    async fn heart_reply(&self, reply_id: &str) -> Result<u32> {
        let mut threads = self.threads.write().expect("threads lock poisoned");
        for thread in threads.iter_mut() {
            if let Some(reply) = thread.replies.iter_mut().find(|r| r.id == reply_id) {
                reply.hearts += 1;
                return Ok(reply.hearts);
            }
        }
        Err(AppError::NotFound(Entity::Reply))
    }
}
