//! Role-gated navigation.
//!
//! `RoleGate` turns a [`Session`] into one of four navigation states. It
//! starts in `Loading` and is re-resolved on every session change.

use crate::claims::{Role, TokenStatus, inspect_token_at, now_secs};
use crate::session::Session;

/// Which screen tree is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Loading,
    Unauthenticated,
    User,
    Admin,
}

/// Every screen reachable from a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Login,
    Signup,
    Home,
    Search,
    Notifications,
    Profile,
    Dashboard,
    Analytics,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Login => "Login",
            Screen::Signup => "Sign Up",
            Screen::Home => "Home",
            Screen::Search => "Search",
            Screen::Notifications => "Notifications",
            Screen::Profile => "Profile",
            Screen::Dashboard => "Dashboard",
            Screen::Analytics => "Analytics",
        }
    }
}

impl NavState {
    /// Screens of the mounted tree, in tab order.
    pub fn screens(self) -> &'static [Screen] {
        match self {
            NavState::Loading => &[],
            NavState::Unauthenticated => &[Screen::Login, Screen::Signup],
            NavState::User => &[
                Screen::Home,
                Screen::Search,
                Screen::Notifications,
                Screen::Profile,
            ],
            NavState::Admin => &[Screen::Dashboard, Screen::Analytics, Screen::Profile],
        }
    }

    /// Screen shown when the tree is first mounted.
    pub fn initial_screen(self) -> Option<Screen> {
        self.screens().first().copied()
    }

    pub fn contains(self, screen: Screen) -> bool {
        self.screens().contains(&screen)
    }
}

impl From<Role> for NavState {
    fn from(role: Role) -> Self {
        match role {
            Role::User => NavState::User,
            Role::Admin => NavState::Admin,
        }
    }
}

/// Outcome of resolving a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub state: NavState,
    /// The stored token is expired and should be cleared.
    pub clear_session: bool,
    /// Name taken from the token (`username`, then `sub`).
    pub display_name: Option<String>,
}

impl Resolution {
    fn unauthenticated(clear_session: bool) -> Self {
        Self {
            state: NavState::Unauthenticated,
            clear_session,
            display_name: None,
        }
    }
}

/// Navigation state machine.
#[derive(Debug, Clone)]
pub struct RoleGate {
    state: NavState,
    admin_role: String,
}

impl RoleGate {
    pub fn new(admin_role: impl Into<String>) -> Self {
        Self {
            state: NavState::Loading,
            admin_role: admin_role.into(),
        }
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    /// Resolves `session` against the system clock.
    pub fn resolve(&mut self, session: &Session) -> Resolution {
        self.resolve_at(session, now_secs())
    }

    /// Resolves `session` at `now_secs` and moves to the resulting state.
    ///
    /// Fails closed: a missing, unreadable or expired token yields
    /// `Unauthenticated`.
    pub fn resolve_at(&mut self, session: &Session, now_secs: u64) -> Resolution {
        let resolution = resolve_session(session, &self.admin_role, now_secs);
        if resolution.state != self.state {
            tracing::info!(from = ?self.state, to = ?resolution.state, "navigation state changed");
        }
        self.state = resolution.state;
        resolution
    }
}

fn resolve_session(session: &Session, admin_role: &str, now_secs: u64) -> Resolution {
    let Some(token) = session.token.as_deref() else {
        return Resolution::unauthenticated(false);
    };

    match inspect_token_at(token, admin_role, now_secs) {
        Ok(TokenStatus::Valid { role, claims }) => Resolution {
            state: role.into(),
            clear_session: false,
            display_name: claims.display_name().map(ToString::to_string),
        },
        Ok(TokenStatus::Expired) => {
            tracing::info!("stored token expired");
            Resolution::unauthenticated(true)
        }
        Err(err) => {
            tracing::warn!(error = %err, "stored token unreadable, treating as logged out");
            Resolution::unauthenticated(false)
        }
    }
}
