//! Session entity definitions.

use serde::{Deserialize, Serialize};

use crate::Role;

/// An authenticated session.
///
/// Returned by the identity endpoints and persisted between runs as the
/// serialized session record. Destroyed on logout or when a persisted copy
/// turns out to be malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Opaque bearer token.
    pub token: String,
    /// Email address of the authenticated account.
    pub email: String,
    /// Full display name.
    pub full_name: String,
    /// Role of the authenticated account.
    pub role: Role,
}

impl Session {
    /// True when this session belongs to an administrator.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
