//! Browser navigation for the session store.

use session::Navigator;
use session::navigator::path_for;

/// Navigates by assigning `window.location.href`.
///
/// A full page load is fine here: the session is restored from
/// `localStorage` when the app boots again.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn navigate_to(&self, segments: &[&str]) {
        let path = path_for(segments);
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(&path) {
                    log::warn!("navigation to {path} failed: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::debug!("navigation to {path} skipped outside the browser");
        }
    }
}
