//! User account entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account, as stored by the account persistence collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Primary key.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Unique login email.
    pub email: String,
    /// Salted one-way password digest. Never serialized outward.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// The role this account holds (one role per user).
    pub role_id: Uuid,
    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh id.
    pub fn new(name: impl Into<String>, email: impl Into<String>, password_hash: impl Into<String>, role_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            role_id,
            created_at: Utc::now(),
        }
    }
}
