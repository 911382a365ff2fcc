/// Visibility of the mobile navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuToggle {
    hidden: bool,
}

impl MenuToggle {
    /// Start from whatever the markup says (the menu ships hidden).
    pub fn new(hidden: bool) -> Self {
        Self { hidden }
    }

    pub fn is_hidden(self) -> bool {
        self.hidden
    }

    /// Trigger clicked. Returns the new hidden state.
    pub fn toggle(&mut self) -> bool {
        self.hidden = !self.hidden;
        self.hidden
    }

    /// A link inside the menu was followed.
    pub fn close(&mut self) {
        self.hidden = true;
    }
}

impl Default for MenuToggle {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_toggle_restores_hidden() {
        let mut m = MenuToggle::default();
        assert!(!m.toggle());
        assert!(m.toggle());
        assert!(m.is_hidden());
    }

    #[test]
    fn double_toggle_restores_visible() {
        let mut m = MenuToggle::new(false);
        m.toggle();
        m.toggle();
        assert!(!m.is_hidden());
    }

    #[test]
    fn link_click_always_closes() {
        let mut m = MenuToggle::default();
        m.toggle();
        m.close();
        assert!(m.is_hidden());
        m.close();
        assert!(m.is_hidden());
    }
}
