//! Scroll-position math: in-page anchor targets and the navbar background.

/// Fragment identifier of an in-page link (`"#pricing"` -> `"pricing"`).
///
/// A bare `#` or a non-fragment href has no target.
pub fn fragment_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Document offset to scroll to so the target lands just below the fixed header.
pub fn scroll_target(rect_top: f64, page_y_offset: f64, header_offset: f64) -> f64 {
    rect_top + page_y_offset - header_offset
}

/// Translucent navbar background toggle.
///
/// Derived from the current offset only; there is no hysteresis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavbarStyle {
    threshold: f64,
}

impl NavbarStyle {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Whether the translucent background applies at `scroll_y`.
    pub fn is_scrolled(self, scroll_y: f64) -> bool {
        scroll_y > self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_ids() {
        assert_eq!(fragment_id("#pricing"), Some("pricing"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("/about#team"), None);
        assert_eq!(fragment_id(""), None);
    }

    #[test]
    fn target_accounts_for_header() {
        // Element 400px below the viewport top while already scrolled 1000px.
        assert_eq!(scroll_target(400.0, 1000.0, 80.0), 1320.0);
        // Element above the viewport.
        assert_eq!(scroll_target(-200.0, 1000.0, 80.0), 720.0);
    }

    #[test]
    fn navbar_follows_scroll_position() {
        let nav = NavbarStyle::new(50.0);
        assert!(!nav.is_scrolled(0.0));
        assert!(nav.is_scrolled(51.0));
        assert!(!nav.is_scrolled(0.0));
    }

    #[test]
    fn navbar_threshold_is_exclusive() {
        let nav = NavbarStyle::new(50.0);
        assert!(!nav.is_scrolled(50.0));
        assert!(nav.is_scrolled(50.5));
    }
}
