//! User entity and role name enumeration.

pub mod model;
pub mod role;

pub use model::User;
pub use role::RoleName;
