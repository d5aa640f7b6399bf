//! Shared test harness: in-memory collaborator doubles.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use sharebox_auth::account::{AccountService, RoleDirectory, UserRepository};
use sharebox_auth::jwt::{JwtDecoder, JwtEncoder};
use sharebox_auth::session::MemorySessionStore;
use sharebox_core::config::auth::AuthConfig;
use sharebox_core::events::AuditBus;
use sharebox_core::result::AppResult;
use sharebox_entity::{Permission, RoleName, RoleRecord, User};

/// In-memory stand-in for the account persistence collaborator.
#[derive(Debug, Default)]
pub struct InMemoryUsers {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.lock().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let users = self.users.lock().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, user: &User) -> AppResult<User> {
        let mut users = self.users.lock().await;
        users.push(user.clone());
        Ok(user.clone())
    }

    async fn update_role(&self, user_id: Uuid, role_id: Uuid) -> AppResult<()> {
        let mut users = self.users.lock().await;
        if let Some(user) = users.iter_mut().find(|u| u.id == user_id) {
            user.role_id = role_id;
        }
        Ok(())
    }
}

/// In-memory stand-in for the role directory, seeded with the four
/// well-known roles carrying their static permission sets.
#[derive(Debug)]
pub struct InMemoryRoles {
    roles: HashMap<RoleName, RoleRecord>,
}

impl InMemoryRoles {
    pub fn seeded() -> Self {
        let roles = RoleName::ALL
            .into_iter()
            .map(|name| {
                (
                    name,
                    RoleRecord::with_static_permissions(name, name.as_str()),
                )
            })
            .collect();
        Self { roles }
    }

    /// A directory with no guest role, for configuration-error tests.
    pub fn without_guest() -> Self {
        let mut directory = Self::seeded();
        directory.roles.remove(&RoleName::Guest);
        directory
    }
}

#[async_trait]
impl RoleDirectory for InMemoryRoles {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<RoleRecord>> {
        Ok(self.roles.values().find(|r| r.id == id).cloned())
    }

    async fn find_by_name(&self, name: RoleName) -> AppResult<Option<RoleRecord>> {
        Ok(self.roles.get(&name).cloned())
    }

    async fn permissions_for_role(&self, role_id: Uuid) -> AppResult<Vec<Permission>> {
        Ok(self
            .roles
            .values()
            .find(|r| r.id == role_id)
            .map(|r| r.permissions.clone())
            .unwrap_or_default())
    }
}

pub fn test_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "integration-test-secret".into(),
        jwt_issuer: "sharebox".into(),
        jwt_audience: "sharebox-api".into(),
        jwt_access_ttl_seconds: 900,
        jwt_refresh_ttl_seconds: 3600,
        password_min_length: 8,
    }
}

/// Everything a test needs, wired against in-memory doubles.
pub struct Harness {
    pub service: AccountService,
    pub users: Arc<InMemoryUsers>,
    pub roles: Arc<InMemoryRoles>,
    pub sessions: Arc<MemorySessionStore>,
    pub encoder: JwtEncoder,
    pub decoder: JwtDecoder,
    pub audit: AuditBus,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_roles(InMemoryRoles::seeded())
    }

    pub fn with_roles(roles: InMemoryRoles) -> Self {
        let config = test_config();
        let users = Arc::new(InMemoryUsers::default());
        let roles = Arc::new(roles);
        let sessions = Arc::new(MemorySessionStore::new(Duration::from_secs(
            config.jwt_refresh_ttl_seconds,
        )));
        let audit = AuditBus::new();

        let service = AccountService::new(
            &config,
            users.clone(),
            roles.clone(),
            sessions.clone(),
            audit.clone(),
        )
        .expect("account service construction");

        Self {
            service,
            users,
            roles,
            sessions,
            encoder: JwtEncoder::new(&config),
            decoder: JwtDecoder::new(&config),
            audit,
        }
    }

    /// Registers and signs in a user, returning their id.
    pub async fn register(&self, email: &str, password: &str) -> Uuid {
        self.service
            .sign_up(email, password, "Test User")
            .await
            .expect("sign-up")
            .id
    }
}
