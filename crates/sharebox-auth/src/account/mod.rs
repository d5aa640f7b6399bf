//! Account lifecycle: sign-up, sign-in, token refresh, sign-out.

pub mod repository;
pub mod service;

pub use repository::{RoleDirectory, UserRepository};
pub use service::AccountService;
