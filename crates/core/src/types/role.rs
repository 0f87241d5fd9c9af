//! Admin role enum.

use serde::{Deserialize, Serialize};

/// Permission level of a back-office account.
///
/// The set of roles is closed: an account is either a regular admin or a
/// super admin, nothing else. Stored in Postgres as text (`standard_admin`
/// or `super_admin`) and parsed back through [`FromStr`](std::str::FromStr),
/// so an unrecognized value in the database surfaces as a decode error
/// instead of silently granting or denying access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    /// Day-to-day content management: members, boards, news.
    #[default]
    StandardAdmin,
    /// Everything a standard admin can do, plus managing admin accounts.
    SuperAdmin,
}

impl AdminRole {
    /// Whether this role may manage other admin accounts.
    #[must_use]
    pub const fn is_super_admin(self) -> bool {
        matches!(self, Self::SuperAdmin)
    }
}

impl std::fmt::Display for AdminRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StandardAdmin => write!(f, "standard_admin"),
            Self::SuperAdmin => write!(f, "super_admin"),
        }
    }
}

impl std::str::FromStr for AdminRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard_admin" => Ok(Self::StandardAdmin),
            "super_admin" => Ok(Self::SuperAdmin),
            _ => Err(format!("invalid admin role: {s}")),
        }
    }
}
