//! Session store (refresh-token-id storage) configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the shared store holding the single valid
/// refresh-token id per principal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStoreConfig {
    /// Store backend: `"redis"` or `"memory"`.
    #[serde(default = "default_backend")]
    pub backend: String,
    /// Redis connection URL.
    #[serde(default = "default_redis_url")]
    pub url: String,
    /// Key prefix for all ShareBox session keys.
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
    /// Upper bound for a single store operation, in milliseconds.
    /// An operation exceeding this fails the enclosing check closed.
    #[serde(default = "default_operation_timeout")]
    pub operation_timeout_ms: u64,
}

impl Default for SessionStoreConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            url: default_redis_url(),
            key_prefix: default_key_prefix(),
            operation_timeout_ms: default_operation_timeout(),
        }
    }
}

fn default_backend() -> String {
    "memory".to_string()
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

fn default_key_prefix() -> String {
    "sharebox:".to_string()
}

fn default_operation_timeout() -> u64 {
    2000
}
