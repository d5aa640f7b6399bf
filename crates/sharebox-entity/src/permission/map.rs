//! Static role→permission mapping.
//!
//! This is the compile-time source of truth for what each role may do.
//! Dynamically fetched role records must agree with it; both paths produce
//! the same principal shape.

use super::action::Permission;
use crate::user::role::RoleName;

/// Return the permission set granted to a role.
pub fn permissions_for_role(role: RoleName) -> Vec<Permission> {
    match role {
        RoleName::Admin => Permission::ALL.to_vec(),
        RoleName::Manager => vec![
            Permission::FileUpload,
            Permission::FileRead,
            Permission::FileUpdateMetadata,
            Permission::FileDelete,
            Permission::FileShare,
            Permission::UserManage,
        ],
        RoleName::Employee => vec![Permission::FileUpload, Permission::FileRead],
        RoleName::Guest => vec![Permission::FileRead],
    }
}
