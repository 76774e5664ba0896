//! Route guard
//!
//! Gate for the `/dashboard/*` surface: checks session presence once on
//! mount and decides to render or redirect. No background re-validation; a
//! token that dies mid-session is caught by the next API call, not here.

use crate::session::SessionManager;

/// Route surface of the dashboard
pub mod routes {
    pub const LOGIN: &str = "/login";
    pub const FORGOT_PASSWORD: &str = "/forgot-password";
    pub const RESET_PASSWORD: &str = "/reset-password";
    pub const DASHBOARD: &str = "/dashboard";
    pub const NEWS_LIST: &str = "/dashboard/news";
    pub const EVENTS_LIST: &str = "/dashboard/events";
    pub const MEMBERS_LIST: &str = "/dashboard/members";
    pub const USERS_LIST: &str = "/dashboard/users";
    pub const PROFILE: &str = "/dashboard/profile";
    pub const SETTINGS: &str = "/dashboard/settings";
}

/// Outcome of the guard check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Render the protected content
    Allow,
    /// Navigate away and render nothing
    Redirect(&'static str),
}

/// Guard lifecycle: one check per mount, then terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GuardState {
    Checking,
    Decided(Decision),
}

/// Per-mount route guard
#[derive(Debug)]
pub struct RouteGuard {
    state: GuardState,
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteGuard {
    pub fn new() -> Self {
        Self {
            state: GuardState::Checking,
        }
    }

    /// Decide from session presence. The first call decides; later calls
    /// return the recorded decision without re-reading the session.
    pub fn evaluate(&mut self, session: &SessionManager) -> Decision {
        if let GuardState::Decided(decision) = self.state {
            return decision;
        }

        let decision = if session.is_authenticated() {
            Decision::Allow
        } else {
            tracing::debug!("no session, redirecting to login");
            Decision::Redirect(routes::LOGIN)
        };
        self.state = GuardState::Decided(decision);
        decision
    }

    /// The recorded decision, if the check already ran
    pub fn decision(&self) -> Option<Decision> {
        match self.state {
            GuardState::Checking => None,
            GuardState::Decided(decision) => Some(decision),
        }
    }
}
