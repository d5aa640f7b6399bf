//! Single-active-refresh-token session storage.
//!
//! Tracks, per principal, the one currently valid refresh-token id.
//! Backed by either:
//! - Redis (for multi-node deployments, atomic consume via Lua)
//! - In-memory mutex (for single-node deployments and tests)

pub mod memory;
#[cfg(feature = "redis-store")]
pub mod redis;
pub mod store;

pub use memory::MemorySessionStore;
#[cfg(feature = "redis-store")]
pub use redis::RedisSessionStore;
pub use store::SessionStore;
