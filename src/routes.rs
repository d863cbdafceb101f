//! Route table for the console
//!
//! Every page path lives here together with the access rule the route gate
//! applies to it, plus the path comparison used to highlight the active
//! navigation entry.

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const OAUTH_CALLBACK: &str = "/auth/callback";
pub const DASHBOARD: &str = "/dashboard";
pub const GENIES: &str = "/genies";
pub const ANALYTICS: &str = "/analytics";
pub const BILLING: &str = "/billing";
pub const SETTINGS: &str = "/settings";

/// Who may view a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Requires a session; anonymous visitors are sent to the login page
    Protected,
    /// Only for anonymous visitors (login, register); signed-in users are
    /// sent to the home view
    PublicOnly,
    /// Rendered for everyone
    Open,
}

#[derive(Debug, Clone)]
struct RouteRule {
    prefix: String,
    access: RouteAccess,
}

/// Ordered list of path rules. The longest matching prefix wins; paths with
/// no matching rule are [`RouteAccess::Open`].
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    rules: Vec<RouteRule>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule for `prefix` and everything below it.
    pub fn with(mut self, prefix: impl Into<String>, access: RouteAccess) -> Self {
        let prefix: String = prefix.into();
        self.rules.push(RouteRule {
            prefix: normalize(&prefix).to_string(),
            access,
        });
        self
    }

    /// Access rule for `path`
    pub fn access_for(&self, path: &str) -> RouteAccess {
        self.rules
            .iter()
            .filter(|rule| is_active(path, &rule.prefix))
            .max_by_key(|rule| rule.prefix.len())
            .map(|rule| rule.access)
            .unwrap_or(RouteAccess::Open)
    }
}

/// The console's own routes.
pub fn console_routes() -> RouteTable {
    RouteTable::new()
        .with(LOGIN, RouteAccess::PublicOnly)
        .with(REGISTER, RouteAccess::PublicOnly)
        .with(DASHBOARD, RouteAccess::Protected)
        .with(GENIES, RouteAccess::Protected)
        .with(ANALYTICS, RouteAccess::Protected)
        .with(BILLING, RouteAccess::Protected)
        .with(SETTINGS, RouteAccess::Protected)
}

/// Whether the navigation entry for `target` should be highlighted while
/// `current` is displayed.
///
/// `/` only matches itself. Any other target matches exactly or as a
/// `/`-bounded prefix, so `/genies` is active on `/genies/42` but not on
/// `/genies-archive`.
pub fn is_active(current: &str, target: &str) -> bool {
    let current = normalize(current);
    let target = normalize(target);

    if target == HOME {
        return current == HOME;
    }

    match current.strip_prefix(target) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        HOME
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_only_matches_itself() {
        assert!(is_active("/", "/"));
        assert!(is_active("", "/"));
        assert!(!is_active("/dashboard", "/"));
    }

    #[test]
    fn test_prefix_match_is_segment_bounded() {
        assert!(is_active("/genies", "/genies"));
        assert!(is_active("/genies/42/edit", "/genies"));
        assert!(is_active("/genies/", "/genies"));
        assert!(!is_active("/genies-archive", "/genies"));
        assert!(!is_active("/billing", "/genies"));
    }

    #[test]
    fn test_query_string_is_ignored() {
        assert!(is_active("/billing?plan=pro", "/billing"));
        assert!(is_active("/?ref=mail", "/"));
    }

    #[test]
    fn test_console_route_access() {
        let routes = console_routes();

        assert_eq!(routes.access_for("/login"), RouteAccess::PublicOnly);
        assert_eq!(routes.access_for("/register"), RouteAccess::PublicOnly);
        assert_eq!(routes.access_for("/dashboard"), RouteAccess::Protected);
        assert_eq!(routes.access_for("/genies/abc"), RouteAccess::Protected);
        assert_eq!(routes.access_for("/billing"), RouteAccess::Protected);
        assert_eq!(routes.access_for("/"), RouteAccess::Open);
        assert_eq!(routes.access_for("/auth/callback"), RouteAccess::Open);
        assert_eq!(routes.access_for("/pricing"), RouteAccess::Open);
    }

    #[test]
    fn test_longest_prefix_wins() {
        let routes = RouteTable::new()
            .with("/genies", RouteAccess::Protected)
            .with("/genies/public", RouteAccess::Open);

        assert_eq!(routes.access_for("/genies/public/1"), RouteAccess::Open);
        assert_eq!(routes.access_for("/genies/1"), RouteAccess::Protected);
    }
}
