//! Redis-backed session store.
//!
//! Records survive restarts of the caller and are shared across nodes.
//! The consume step uses a Lua script so that rotation stays atomic even
//! with multiple nodes hitting the same key.

#[cfg(feature = "redis-store")]
mod implementation {
    use std::future::Future;
    use std::time::Duration;

    use async_trait::async_trait;
    use redis::AsyncCommands;
    use tracing::{debug, info, warn};
    use uuid::Uuid;

    use sharebox_core::config::session_store::SessionStoreConfig;
    use sharebox_core::error::AppError;
    use sharebox_core::result::AppResult;

    use crate::session::store::SessionStore;

    /// Lua script for atomic validate-and-invalidate.
    ///
    /// KEYS[1] = session key
    /// ARGV[1] = presented refresh token id
    ///
    /// Returns 1 if the stored id matched and was deleted, 0 otherwise.
    const CONSUME_SCRIPT: &str = r#"
        if redis.call('GET', KEYS[1]) == ARGV[1] then
            redis.call('DEL', KEYS[1])
            return 1
        end
        return 0
    "#;

    /// Redis-backed session store for multi-node deployments.
    ///
    /// The connection is a scoped resource acquired at process start and
    /// released at shutdown. Every operation is bounded by the configured
    /// timeout; a timeout fails the enclosing check closed.
    #[derive(Debug, Clone)]
    pub struct RedisSessionStore {
        /// Redis connection manager.
        conn: redis::aio::ConnectionManager,
        /// Prefix for all session keys.
        key_prefix: String,
        /// Record TTL in seconds, matching the refresh-token TTL.
        ttl_seconds: u64,
        /// Per-operation timeout.
        operation_timeout: Duration,
    }

    impl RedisSessionStore {
        /// Connects to Redis and returns the store.
        pub async fn connect(
            config: &SessionStoreConfig,
            refresh_ttl_seconds: u64,
        ) -> AppResult<Self> {
            let client = redis::Client::open(config.url.as_str())
                .map_err(|e| AppError::session_store(format!("Redis connection failed: {e}")))?;

            let conn = client.get_connection_manager().await.map_err(|e| {
                AppError::session_store(format!("Redis connection manager failed: {e}"))
            })?;

            info!(url = %config.url, "Session store connected");

            Ok(Self {
                conn,
                key_prefix: config.key_prefix.clone(),
                ttl_seconds: refresh_ttl_seconds,
                operation_timeout: Duration::from_millis(config.operation_timeout_ms),
            })
        }

        fn key(&self, principal_id: Uuid) -> String {
            format!("{}refresh:{}", self.key_prefix, principal_id)
        }

        /// Runs a store operation under the configured timeout.
        async fn bounded<T>(
            &self,
            op: impl Future<Output = Result<T, redis::RedisError>>,
        ) -> AppResult<T> {
            match tokio::time::timeout(self.operation_timeout, op).await {
                Ok(result) => result
                    .map_err(|e| AppError::session_store(format!("Redis operation failed: {e}"))),
                Err(_) => {
                    warn!("Session store operation timed out");
                    Err(AppError::session_store("Session store operation timed out"))
                }
            }
        }
    }

    #[async_trait]
    impl SessionStore for RedisSessionStore {
        async fn insert(&self, principal_id: Uuid, refresh_token_id: Uuid) -> AppResult<()> {
            let mut conn = self.conn.clone();
            let key = self.key(principal_id);
            let value = refresh_token_id.to_string();
            let ttl = self.ttl_seconds;

            let _: () = self.bounded(conn.set_ex(&key, value, ttl)).await?;
            debug!(principal_id = %principal_id, "Session record installed");
            Ok(())
        }

        async fn validate(&self, principal_id: Uuid, refresh_token_id: Uuid) -> AppResult<bool> {
            let mut conn = self.conn.clone();
            let key = self.key(principal_id);

            let stored: Option<String> = self.bounded(conn.get(&key)).await?;
            Ok(stored.as_deref() == Some(refresh_token_id.to_string().as_str()))
        }

        async fn invalidate(&self, principal_id: Uuid) -> AppResult<()> {
            let mut conn = self.conn.clone();
            let key = self.key(principal_id);

            let _: i64 = self.bounded(conn.del(&key)).await?;
            debug!(principal_id = %principal_id, "Session record invalidated");
            Ok(())
        }

        async fn consume(&self, principal_id: Uuid, refresh_token_id: Uuid) -> AppResult<bool> {
            let mut conn = self.conn.clone();
            let key = self.key(principal_id);

            let matched: i64 = self
                .bounded(
                    redis::Script::new(CONSUME_SCRIPT)
                        .key(&key)
                        .arg(refresh_token_id.to_string())
                        .invoke_async(&mut conn),
                )
                .await?;

            Ok(matched == 1)
        }
    }
}

#[cfg(feature = "redis-store")]
pub use implementation::RedisSessionStore;
