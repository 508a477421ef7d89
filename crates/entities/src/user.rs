//! User-related entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of an account.
///
/// Roles are immutable after creation; no role-change operation exists
/// anywhere in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Regular account: requests loans and sees only its own.
    User,
    /// Reviews pending requests and decides them.
    Admin,
}

impl Role {
    /// True for administrator accounts.
    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }
}

/// A registered account as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned identifier.
    pub id: String,
    /// Email address.
    pub email: String,
    /// Full display name.
    pub full_name: String,
    /// Account role.
    pub role: Role,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}
