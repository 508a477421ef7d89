//! Navigation seam between the client core and the UI shell.

/// Views the client can ask the shell to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Login form.
    Login,
    /// Registration form.
    Register,
    /// User dashboard: own loans and the request form.
    Dashboard,
    /// Admin view: every loan, with approve/reject actions.
    Admin,
}

/// Shell-provided navigation.
///
/// The core decides *where* to go after login, register, and logout; the
/// shell owns how routes map to actual screens.
pub trait Navigator: Send + Sync {
    /// Navigates to the given route.
    fn navigate(&self, route: Route);
}
