//! Route admission: decides whether the current session may view a page.

use crate::services::SessionState;

/// Outcome of an admission check for a protected view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Session restoration is still in flight; render a neutral
    /// placeholder and make no decision yet.
    Wait,
    /// No session; send the visitor to the login view.
    RedirectToLogin,
    /// Authenticated but not an admin on an admin-only view.
    RedirectToDashboard,
    /// Render the protected content.
    Grant,
}

/// Decides admission for a protected view.
///
/// Pure in the current state: callers re-evaluate whenever identity,
/// loading state, or the admin requirement changes. Admin content is never
/// granted to a non-admin session, not even transiently.
pub fn admit(state: &SessionState, require_admin: bool) -> Admission {
    match state {
        SessionState::Loading => Admission::Wait,
        SessionState::Unauthenticated => Admission::RedirectToLogin,
        SessionState::Authenticated(session) => {
            if require_admin && !session.is_admin() {
                Admission::RedirectToDashboard
            } else {
                Admission::Grant
            }
        }
    }
}
