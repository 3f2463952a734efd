//! Navigation: the seam through which guards and session operations move
//! the user between pages.

use crate::route::Route;
use tokio::sync::watch;
use tracing::debug;

/// Something that can move the user to another page.
///
/// Navigation always replaces the current location.
pub trait Navigator: Send + Sync {
    fn navigate(&self, to: Route);
}

/// In-memory location holder for the shell.
///
/// Stores the raw location so unknown paths can be reported as not found.
#[derive(Debug)]
pub struct History {
    location: watch::Sender<String>,
}

impl History {
    pub fn new(initial: Route) -> Self {
        Self::at_path(initial.path())
    }

    /// Start at an arbitrary location, known or not
    pub fn at_path(path: impl Into<String>) -> Self {
        let (location, _) = watch::channel(path.into());
        Self { location }
    }

    /// Current location
    pub fn location(&self) -> String {
        self.location.borrow().clone()
    }

    /// Current route, if the location matches one
    pub fn route(&self) -> Option<Route> {
        Route::from_path(&self.location.borrow())
    }

    /// Go to an arbitrary location (typed by the user)
    pub fn go(&self, path: impl Into<String>) {
        let path = path.into();
        debug!(to = %path, "Navigating");
        self.location.send_replace(path);
    }

    /// Watch location changes
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.location.subscribe()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

impl Navigator for History {
    fn navigate(&self, to: Route) {
        self.go(to.path());
    }
}
