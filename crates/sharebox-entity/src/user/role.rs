//! Role name enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the access-control system. One role per user.
///
/// `Guest` is the lowest-privilege role and the default for self-service
/// sign-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleName {
    /// Full system administrator.
    Admin,
    /// Can manage files and users within the tenant.
    Manager,
    /// Regular employee: uploads and reads files.
    Employee,
    /// Read-only access to shared content.
    Guest,
}

impl RoleName {
    /// All roles, in descending privilege order.
    pub const ALL: [RoleName; 4] = [Self::Admin, Self::Manager, Self::Employee, Self::Guest];

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Employee => "employee",
            Self::Guest => "guest",
        }
    }

}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoleName {
    type Err = sharebox_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "employee" => Ok(Self::Employee),
            "guest" => Ok(Self::Guest),
            _ => Err(sharebox_core::AppError::validation(format!(
                "Invalid role name: '{s}'. Expected one of: admin, manager, employee, guest"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("admin".parse::<RoleName>().unwrap(), RoleName::Admin);
        assert_eq!("GUEST".parse::<RoleName>().unwrap(), RoleName::Guest);
        assert!("superuser".parse::<RoleName>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&RoleName::Manager).unwrap();
        assert_eq!(json, "\"manager\"");
    }
}
