//! In-memory session store using a Tokio mutex for single-node deployments.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use sharebox_core::result::AppResult;

use super::store::SessionStore;

/// A stored refresh-token id with its expiry.
#[derive(Debug)]
struct Entry {
    refresh_token_id: Uuid,
    expires_at: Instant,
}

/// In-memory session store. Suitable for single-node deployments and tests;
/// records do not survive a process restart.
#[derive(Debug, Clone)]
pub struct MemorySessionStore {
    /// Protected principal → entry map.
    entries: Arc<Mutex<HashMap<Uuid, Entry>>>,
    /// Record lifetime, matching the refresh-token TTL.
    ttl: Duration,
}

impl MemorySessionStore {
    /// Creates a new memory store whose records live as long as a
    /// refresh token does.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn insert(&self, principal_id: Uuid, refresh_token_id: Uuid) -> AppResult<()> {
        let mut entries = self.entries.lock().await;
        entries.insert(
            principal_id,
            Entry {
                refresh_token_id,
                expires_at: Instant::now() + self.ttl,
            },
        );
        debug!(principal_id = %principal_id, "Session record installed");
        Ok(())
    }

    async fn validate(&self, principal_id: Uuid, refresh_token_id: Uuid) -> AppResult<bool> {
        let mut entries = self.entries.lock().await;
        Ok(match entries.get(&principal_id) {
            Some(entry) if entry.expires_at > Instant::now() => {
                entry.refresh_token_id == refresh_token_id
            }
            Some(_) => {
                // Dead record; drop it rather than leave it behind.
                entries.remove(&principal_id);
                false
            }
            None => false,
        })
    }

    async fn invalidate(&self, principal_id: Uuid) -> AppResult<()> {
        let mut entries = self.entries.lock().await;
        entries.remove(&principal_id);
        debug!(principal_id = %principal_id, "Session record invalidated");
        Ok(())
    }

    async fn consume(&self, principal_id: Uuid, refresh_token_id: Uuid) -> AppResult<bool> {
        let mut entries = self.entries.lock().await;
        match entries.get(&principal_id) {
            Some(entry) if entry.expires_at <= Instant::now() => {
                entries.remove(&principal_id);
                Ok(false)
            }
            Some(entry) if entry.refresh_token_id == refresh_token_id => {
                entries.remove(&principal_id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
