use strum_macros::EnumIter;

use crate::session::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Route {
    Home,
    About,
    Login,
    Signup,
    Dashboard,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Dashboard => "/dashboard",
        }
    }

    pub fn hash(self) -> String {
        format!("#{}", self.path())
    }

    /// Parses a `location.hash` value; unknown paths land on Home.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#');
        let path = path.trim_end_matches('/');
        match path {
            "/about" => Route::About,
            "/login" => Route::Login,
            "/signup" => Route::Signup,
            "/dashboard" => Route::Dashboard,
            _ => Route::Home,
        }
    }

    pub fn requires_auth(self) -> bool {
        matches!(self, Route::Dashboard)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// The session has not been restored yet.
    Pending,
    Allow,
    Redirect { to: Route, from: Route },
}

pub fn guard(route: Route, user: Option<&User>, initializing: bool) -> GuardDecision {
    if !route.requires_auth() {
        return GuardDecision::Allow;
    }
    if initializing {
        return GuardDecision::Pending;
    }
    match user {
        Some(_) => GuardDecision::Allow,
        None => GuardDecision::Redirect {
            to: Route::Login,
            from: route,
        },
    }
}

/// Where a successful login lands: the route the guard turned away, else
/// the dashboard.
pub fn post_login_target(return_to: Option<Route>) -> Route {
    match return_to {
        Some(route) if route != Route::Login && route != Route::Signup => route,
        _ => Route::Dashboard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn user() -> User {
        User {
            id: "abc".into(),
            email: "a@b.com".into(),
            name: "a".into(),
        }
    }

    #[test]
    fn hash_round_trip() {
        for route in Route::iter() {
            assert_eq!(Route::from_hash(&route.hash()), route);
        }
        assert_eq!(Route::from_hash(""), Route::Home);
        assert_eq!(Route::from_hash("#/dashboard/"), Route::Dashboard);
        assert_eq!(Route::from_hash("#/nowhere"), Route::Home);
    }

    #[test]
    fn public_routes_always_allowed() {
        assert_eq!(guard(Route::About, None, true), GuardDecision::Allow);
        assert_eq!(guard(Route::Login, None, false), GuardDecision::Allow);
    }

    #[test]
    fn dashboard_waits_for_restore() {
        assert_eq!(guard(Route::Dashboard, None, true), GuardDecision::Pending);
    }

    #[test]
    fn dashboard_redirects_visitors() {
        assert_eq!(
            guard(Route::Dashboard, None, false),
            GuardDecision::Redirect {
                to: Route::Login,
                from: Route::Dashboard
            }
        );
        let user = user();
        assert_eq!(guard(Route::Dashboard, Some(&user), false), GuardDecision::Allow);
    }

    #[test]
    fn login_returns_to_the_denied_route() {
        let GuardDecision::Redirect { to, from } = guard(Route::Dashboard, None, false) else {
            panic!("visitor should be redirected");
        };
        assert_eq!(to, Route::Login);

        let target = post_login_target(Some(from));
        assert_eq!(target, Route::Dashboard);
        let user = user();
        assert_eq!(guard(target, Some(&user), false), GuardDecision::Allow);
    }

    #[test]
    fn login_without_redirect_lands_on_dashboard() {
        assert_eq!(post_login_target(None), Route::Dashboard);
        assert_eq!(post_login_target(Some(Route::About)), Route::About);
        assert_eq!(post_login_target(Some(Route::Login)), Route::Dashboard);
    }
}
