//! # sharebox-entity
//!
//! Domain entities shared across ShareBox crates.

pub mod permission;
pub mod user;

pub use permission::{Permission, RoleRecord};
pub use user::{RoleName, User};
