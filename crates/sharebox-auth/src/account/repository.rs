//! Collaborator traits for account and role persistence.
//!
//! Both stores are external, independently synchronized services; this
//! core consumes them through these narrow interfaces and never
//! implements persistence itself.

use async_trait::async_trait;
use uuid::Uuid;

use sharebox_core::result::AppResult;
use sharebox_entity::{Permission, RoleName, RoleRecord, User};

/// The account persistence collaborator.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Finds an account by its unique email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Finds an account by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Persists a new account and returns it.
    async fn create(&self, user: &User) -> AppResult<User>;

    /// Replaces the account's role.
    async fn update_role(&self, user_id: Uuid, role_id: Uuid) -> AppResult<()>;
}

/// The role/permission collaborator. Read-only from this core's side.
#[async_trait]
pub trait RoleDirectory: Send + Sync + 'static {
    /// Resolves a role record by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<RoleRecord>>;

    /// Resolves a role record by its well-known name.
    async fn find_by_name(&self, name: RoleName) -> AppResult<Option<RoleRecord>>;

    /// Resolves the persisted permission list for a role.
    async fn permissions_for_role(&self, role_id: Uuid) -> AppResult<Vec<Permission>>;
}
