/// One-shot bookkeeping for entrance animations.
///
/// Each observed element is registered once and gets an index; the first
/// intersecting entry for that index reveals it and later ones are ignored,
/// even if the element scrolls away and back.
#[derive(Debug, Clone, Default)]
pub struct RevealLedger {
    revealed: Vec<bool>,
}

impl RevealLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self) -> usize {
        self.revealed.push(false);
        self.revealed.len() - 1
    }

    /// Returns true exactly once per registered index.
    pub fn mark_revealed(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(done) if !*done => {
                *done = true;
                true
            }
            _ => false,
        }
    }

    pub fn pending(&self) -> usize {
        self.revealed.iter().filter(|done| !**done).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_even_on_reentry() {
        let mut l = RevealLedger::new();
        let a = l.register();
        let b = l.register();
        assert_eq!(l.pending(), 2);

        assert!(l.mark_revealed(a));
        assert!(!l.mark_revealed(a));
        assert_eq!(l.pending(), 1);

        assert!(l.mark_revealed(b));
        assert_eq!(l.pending(), 0);
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut l = RevealLedger::new();
        assert!(!l.mark_revealed(3));
    }
}
