// src/services/visibility.rs

use super::SHOW_ON_HOME_MARK;

/// Check whether a category is marked for the home page.
///
/// Only root categories qualify, and only when the title carries the `#` marker.
pub fn should_show_on_home_screen(is_root: bool, title: &str) -> bool {
    is_root && title.contains(SHOW_ON_HOME_MARK)
}
