//! Navigation capability used by the session store after login and logout.

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

/// Route shown after logout.
pub const LOGIN_ROUTE: &[&str] = &["login"];
/// Route shown after a successful login.
pub const HOME_ROUTE: &[&str] = &["home"];

/// Something that can move the user to another view.
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, segments: &[&str]);
}

/// Navigator for hosts with no views to move between.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate_to(&self, _segments: &[&str]) {}
}

/// Absolute path for `segments`, e.g. `["login"]` becomes `/login`.
#[must_use]
pub fn path_for(segments: &[&str]) -> String {
    let joined = segments
        .iter()
        .map(|s| s.trim_matches('/'))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    format!("/{joined}")
}
