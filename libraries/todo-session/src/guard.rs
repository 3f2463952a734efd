//! Route guards and the dispatcher built on them.
//!
//! Guards hold no state of their own: every decision is a pure function of
//! the [`SessionState`] at the moment of rendering.

use crate::route::Route;
use crate::session::{AuthStatus, SessionState};

/// Text shown while the initial session probe is in flight
pub const LOADING_PLACEHOLDER: &str = "Loading...";

/// Which side of the authentication wall a page lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Only for signed-in users; everyone else goes to `/login`
    Protected,
    /// Only for signed-out users; signed-in users go to `/`
    Public,
}

/// Outcome of a single guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Placeholder,
    Redirect(Route),
    Render,
}

impl Guard {
    pub fn decide(self, state: &SessionState) -> GuardDecision {
        match (self, state.status()) {
            (_, AuthStatus::Loading) => GuardDecision::Placeholder,
            (Guard::Protected, AuthStatus::Unauthenticated) => GuardDecision::Redirect(Route::Login),
            (Guard::Protected, AuthStatus::Authenticated) => GuardDecision::Render,
            (Guard::Public, AuthStatus::Authenticated) => GuardDecision::Redirect(Route::Home),
            (Guard::Public, AuthStatus::Unauthenticated) => GuardDecision::Render,
        }
    }
}

/// What the shell should do for a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Session still settling; show [`LOADING_PLACEHOLDER`]
    Placeholder,
    /// Replace the current location with this route
    Redirect(Route),
    /// Render this route's page
    Render(Route),
    /// No route matches the location
    NotFound,
}

/// Resolve a location against the route table and its guard.
pub fn dispatch(path: &str, state: &SessionState) -> Dispatch {
    let Some(route) = Route::from_path(path) else {
        return Dispatch::NotFound;
    };

    match route.guard().decide(state) {
        GuardDecision::Placeholder => Dispatch::Placeholder,
        GuardDecision::Redirect(target) => Dispatch::Redirect(target),
        GuardDecision::Render => Dispatch::Render(route),
    }
}
