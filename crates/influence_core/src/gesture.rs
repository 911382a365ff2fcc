/// Suppresses the browser's pull-to-refresh when the page is already at the top.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PullToRefreshGuard {
    start_y: f64,
}

impl PullToRefreshGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch_start(&mut self, client_y: f64) {
        self.start_y = client_y;
    }

    /// True when a touch-move at `client_y` should have its default cancelled:
    /// the finger moves down from where it started and the page sits at the top.
    pub fn should_suppress(&self, client_y: f64, scroll_y: f64) -> bool {
        client_y - self.start_y > 0.0 && scroll_y == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downward_drag_at_top_is_suppressed() {
        let mut g = PullToRefreshGuard::new();
        g.touch_start(120.0);
        assert!(g.should_suppress(160.0, 0.0));
    }

    #[test]
    fn downward_drag_below_top_is_left_alone() {
        let mut g = PullToRefreshGuard::new();
        g.touch_start(120.0);
        assert!(!g.should_suppress(160.0, 300.0));
    }

    #[test]
    fn upward_or_still_drag_is_left_alone() {
        let mut g = PullToRefreshGuard::new();
        g.touch_start(120.0);
        assert!(!g.should_suppress(80.0, 0.0));
        assert!(!g.should_suppress(120.0, 0.0));
    }

    #[test]
    fn new_touch_resets_origin() {
        let mut g = PullToRefreshGuard::new();
        g.touch_start(10.0);
        g.touch_start(500.0);
        assert!(!g.should_suppress(300.0, 0.0));
    }
}
