//! # sharebox-auth
//!
//! The authentication and authorization core of ShareBox. Decides, for
//! every incoming request, whether the caller is who they claim to be and
//! whether they are allowed to perform the requested action.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and length policy
//! - `jwt`: access/refresh token signing and verification
//! - `session`: single-active-refresh-token store (Redis or in-memory)
//! - `guard`: per-route authentication and role/permission authorization
//! - `account`: sign-up, sign-in, token refresh, sign-out

pub mod account;
pub mod guard;
pub mod jwt;
pub mod password;
pub mod session;

pub use account::{AccountService, RoleDirectory, UserRepository};
pub use guard::{AuthType, Authenticator, Authorizer, Principal, RequestGuard, RoutePolicy};
pub use jwt::{AccessClaims, JwtDecoder, JwtEncoder, RefreshClaims, TokenPair};
pub use password::PasswordHasher;
#[cfg(feature = "redis-store")]
pub use session::RedisSessionStore;
pub use session::{MemorySessionStore, SessionStore};
