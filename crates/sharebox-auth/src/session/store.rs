//! Session store trait: one valid refresh-token id per principal.

use async_trait::async_trait;
use uuid::Uuid;

use sharebox_core::result::AppResult;

/// Stores the single currently valid refresh-token id per principal.
///
/// The store is the only shared mutable state in the authentication core.
/// Every operation is a single-key call relying on the backend's own
/// per-key atomicity; no multi-key transaction is needed.
#[async_trait]
pub trait SessionStore: Send + Sync + std::fmt::Debug + 'static {
    /// Installs `refresh_token_id` as the principal's session,
    /// unconditionally overwriting any prior record.
    ///
    /// Concurrent inserts for the same principal are a last-write-wins
    /// race: a refresh and a concurrent sign-in by the same principal are
    /// expected to race in exactly this way.
    async fn insert(&self, principal_id: Uuid, refresh_token_id: Uuid) -> AppResult<()>;

    /// Returns `true` only if the stored id equals the supplied id.
    /// A missing record is invalid, not an error.
    async fn validate(&self, principal_id: Uuid, refresh_token_id: Uuid) -> AppResult<bool>;

    /// Removes the principal's record, making any previously issued
    /// refresh token permanently unusable. Idempotent.
    async fn invalidate(&self, principal_id: Uuid) -> AppResult<()>;

    /// Atomically validates and invalidates in one step: removes the
    /// record and returns `true` iff the stored id equals the supplied id.
    ///
    /// This backs refresh-token rotation: of two concurrent refreshes
    /// presenting the same id, exactly one observes `true`.
    async fn consume(&self, principal_id: Uuid, refresh_token_id: Uuid) -> AppResult<bool>;
}
