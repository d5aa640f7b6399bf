//! Permissions, role records, and the static role→permission map.

pub mod action;
pub mod map;
pub mod model;

pub use action::Permission;
pub use map::permissions_for_role;
pub use model::RoleRecord;
