//! Client-side route table.

use crate::error::SessionError;
use crate::guard::Guard;
use std::fmt;
use std::str::FromStr;

/// The three pages of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Task board (`/`)
    Home,
    /// Sign in form (`/login`)
    Login,
    /// Sign up form (`/signup`)
    Signup,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Home, Route::Login, Route::Signup];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
        }
    }

    /// Match a location to a route.
    ///
    /// Query strings, fragments and a trailing slash are ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim();
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Guard wrapping this route's page
    pub fn guard(self) -> Guard {
        match self {
            Route::Home => Guard::Protected,
            Route::Login | Route::Signup => Guard::Public,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_path(s).ok_or_else(|| SessionError::UnknownRoute(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path(""), Some(Route::Home));
        assert_eq!(Route::from_path("/login"), Some(Route::Login));
        assert_eq!(Route::from_path("/login/"), Some(Route::Login));
        assert_eq!(Route::from_path("/signup?ref=home"), Some(Route::Signup));
        assert_eq!(Route::from_path("/settings"), None);
    }

    #[test]
    fn test_from_str_unknown() {
        assert_eq!(
            "/calendar".parse::<Route>(),
            Err(SessionError::UnknownRoute("/calendar".into()))
        );
        assert_eq!("/login".parse::<Route>(), Ok(Route::Login));
    }

    #[test]
    fn test_guards() {
        assert_eq!(Route::Home.guard(), Guard::Protected);
        assert_eq!(Route::Login.guard(), Guard::Public);
        assert_eq!(Route::Signup.guard(), Guard::Public);
    }
}
