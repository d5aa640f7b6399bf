//! Atomic capability permissions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An atomic capability. The set is fixed at compile time; the dotted
/// string form is what appears in token claims and persisted role records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    /// Upload new files.
    #[serde(rename = "file.upload")]
    FileUpload,
    /// Read own and shared files.
    #[serde(rename = "file.read")]
    FileRead,
    /// Read every file in the tenant.
    #[serde(rename = "file.read.all")]
    FileReadAll,
    /// Edit file metadata.
    #[serde(rename = "file.update.metadata")]
    FileUpdateMetadata,
    /// Delete files.
    #[serde(rename = "file.delete")]
    FileDelete,
    /// Share files with other accounts.
    #[serde(rename = "file.share")]
    FileShare,
    /// View the audit log.
    #[serde(rename = "audit.view")]
    AuditView,
    /// Manage user accounts.
    #[serde(rename = "user.manage")]
    UserManage,
    /// Manage roles and their permission sets.
    #[serde(rename = "role.manage")]
    RoleManage,
    /// Change system-wide settings.
    #[serde(rename = "system.settings")]
    SystemSettings,
}

impl Permission {
    /// Every permission in the system.
    pub const ALL: [Permission; 10] = [
        Self::FileUpload,
        Self::FileRead,
        Self::FileReadAll,
        Self::FileUpdateMetadata,
        Self::FileDelete,
        Self::FileShare,
        Self::AuditView,
        Self::UserManage,
        Self::RoleManage,
        Self::SystemSettings,
    ];

    /// Return the capability as its dotted string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FileUpload => "file.upload",
            Self::FileRead => "file.read",
            Self::FileReadAll => "file.read.all",
            Self::FileUpdateMetadata => "file.update.metadata",
            Self::FileDelete => "file.delete",
            Self::FileShare => "file.share",
            Self::AuditView => "audit.view",
            Self::UserManage => "user.manage",
            Self::RoleManage => "role.manage",
            Self::SystemSettings => "system.settings",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Permission {
    type Err = sharebox_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|p| p.as_str() == s)
            .copied()
            .ok_or_else(|| {
                sharebox_core::AppError::validation(format!("Unknown permission: '{s}'"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_round_trip_dotted_form() {
        let json = serde_json::to_string(&Permission::FileUpdateMetadata).unwrap();
        assert_eq!(json, "\"file.update.metadata\"");
        let back: Permission = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Permission::FileUpdateMetadata);
    }

    #[test]
    fn test_from_str_matches_as_str() {
        for perm in Permission::ALL {
            assert_eq!(perm.as_str().parse::<Permission>().unwrap(), perm);
        }
        assert!("file.rename".parse::<Permission>().is_err());
    }
}
