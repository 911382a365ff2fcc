//! Install-banner controller for the PWA install flow.
//!
//! The browser hands us a one-shot capability (the deferred
//! `beforeinstallprompt` event) when the page becomes installable. We hold it,
//! reveal our own banner after a delay unless the visitor opted out earlier,
//! and hand the capability out at most once when they click install.

use tracing::debug;

/// Value written under the dismissal key. Anything else counts as "not dismissed".
pub const DISMISSED_VALUE: &str = "true";

/// Persistent opt-out flag for the install banner.
pub trait DismissalStore {
    fn is_dismissed(&self) -> bool;
    fn mark_dismissed(&mut self);
}

/// Interpret a raw stored value.
pub fn is_dismissed_value(raw: Option<&str>) -> bool {
    raw == Some(DISMISSED_VALUE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstallState {
    #[default]
    Idle,
    EligiblePending,
    EligibleShown,
    Consumed,
    Dismissed,
}

/// What the binding layer should do after an install-eligibility signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalOutcome {
    /// Start the reveal timer.
    ScheduleReveal,
    /// A reveal is already pending or the banner is up; only the token changed.
    AlreadyPending,
    /// The visitor opted out; never show the banner.
    Suppressed,
}

/// Result of the native install dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Accepted,
    Dismissed,
    Other(String),
}

impl InstallOutcome {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "accepted" => InstallOutcome::Accepted,
            "dismissed" => InstallOutcome::Dismissed,
            other => InstallOutcome::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            InstallOutcome::Accepted => "accepted",
            InstallOutcome::Dismissed => "dismissed",
            InstallOutcome::Other(s) => s,
        }
    }
}

#[derive(Debug)]
pub struct InstallPrompt<T> {
    state: InstallState,
    token: Option<T>,
}

impl<T> Default for InstallPrompt<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InstallPrompt<T> {
    pub fn new() -> Self {
        Self {
            state: InstallState::Idle,
            token: None,
        }
    }

    pub fn state(&self) -> InstallState {
        self.state
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn banner_visible(&self) -> bool {
        self.state == InstallState::EligibleShown
    }

    /// The browser says the page is installable. The native prompt has already
    /// been suppressed by the caller; `token` replaces any unconsumed one.
    pub fn on_eligible(&mut self, token: T, store: &impl DismissalStore) -> SignalOutcome {
        match self.state {
            InstallState::Dismissed => {
                self.token = None;
                SignalOutcome::Suppressed
            }
            InstallState::EligiblePending | InstallState::EligibleShown => {
                self.token = Some(token);
                SignalOutcome::AlreadyPending
            }
            InstallState::Idle | InstallState::Consumed => {
                self.token = Some(token);
                if store.is_dismissed() {
                    debug!("install banner suppressed: dismissed earlier");
                    return SignalOutcome::Suppressed;
                }
                self.state = InstallState::EligiblePending;
                SignalOutcome::ScheduleReveal
            }
        }
    }

    /// The reveal delay elapsed. Returns true if the banner should be shown now.
    pub fn on_reveal_due(&mut self) -> bool {
        if self.state != InstallState::EligiblePending {
            return false;
        }
        self.state = InstallState::EligibleShown;
        true
    }

    /// Install clicked. Hands out the token at most once; `None` means nothing to do.
    pub fn take_token(&mut self) -> Option<T> {
        self.token.take()
    }

    /// The native dialog settled. Hide the banner.
    pub fn finish_install(&mut self) {
        if self.state != InstallState::Dismissed {
            self.state = InstallState::Consumed;
        }
    }

    /// Dismiss clicked. Hides the banner and writes the flag. Returns false if
    /// the banner was already dismissed in this session (no second write).
    pub fn dismiss(&mut self, store: &mut impl DismissalStore) -> bool {
        self.token = None;
        if self.state == InstallState::Dismissed {
            return false;
        }
        self.state = InstallState::Dismissed;
        store.mark_dismissed();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        value: Option<String>,
        writes: u32,
    }

    impl DismissalStore for MemoryStore {
        fn is_dismissed(&self) -> bool {
            is_dismissed_value(self.value.as_deref())
        }

        fn mark_dismissed(&mut self) {
            self.value = Some(DISMISSED_VALUE.to_string());
            self.writes += 1;
        }
    }

    #[test]
    fn dismissed_flag_never_reveals_banner() {
        let store = MemoryStore {
            value: Some("true".to_string()),
            writes: 0,
        };
        let mut p = InstallPrompt::new();
        assert_eq!(p.on_eligible(1u8, &store), SignalOutcome::Suppressed);
        assert!(!p.on_reveal_due());
        assert!(!p.banner_visible());
        // A second signal is suppressed too.
        assert_eq!(p.on_eligible(2u8, &store), SignalOutcome::Suppressed);
        assert!(!p.on_reveal_due());
    }

    #[test]
    fn only_exact_true_counts_as_dismissed() {
        assert!(is_dismissed_value(Some("true")));
        assert!(!is_dismissed_value(Some("TRUE")));
        assert!(!is_dismissed_value(Some("1")));
        assert!(!is_dismissed_value(None));
    }

    #[test]
    fn signal_then_delay_reveals_exactly_once() {
        let store = MemoryStore::default();
        let mut p = InstallPrompt::new();
        assert_eq!(p.on_eligible("a", &store), SignalOutcome::ScheduleReveal);
        assert_eq!(p.state(), InstallState::EligiblePending);
        // Another signal while pending does not schedule a second reveal.
        assert_eq!(p.on_eligible("b", &store), SignalOutcome::AlreadyPending);
        assert!(p.on_reveal_due());
        assert!(!p.on_reveal_due());
        assert!(p.banner_visible());
    }

    #[test]
    fn dismiss_hides_and_writes_flag_once() {
        let mut store = MemoryStore::default();
        let mut p = InstallPrompt::new();
        p.on_eligible((), &store);
        p.on_reveal_due();

        assert!(p.dismiss(&mut store));
        assert_eq!(p.state(), InstallState::Dismissed);
        assert!(!p.banner_visible());
        assert!(!p.has_token());
        assert_eq!(store.writes, 1);
        assert!(store.is_dismissed());

        assert!(!p.dismiss(&mut store));
        assert_eq!(store.writes, 1);
    }

    #[test]
    fn dismiss_is_terminal_for_the_session() {
        let mut store = MemoryStore::default();
        let mut p = InstallPrompt::new();
        p.on_eligible(1u8, &store);
        p.dismiss(&mut store);
        store.value = None;
        assert_eq!(p.on_eligible(2u8, &store), SignalOutcome::Suppressed);
        assert!(!p.has_token());
    }

    #[test]
    fn dismiss_during_pending_cancels_reveal() {
        let mut store = MemoryStore::default();
        let mut p = InstallPrompt::new();
        p.on_eligible(1u8, &store);
        p.dismiss(&mut store);
        assert!(!p.on_reveal_due());
    }

    #[test]
    fn token_is_handed_out_at_most_once() {
        let store = MemoryStore::default();
        let mut p = InstallPrompt::new();
        p.on_eligible(7u8, &store);
        p.on_reveal_due();

        assert_eq!(p.take_token(), Some(7));
        assert_eq!(p.take_token(), None);
        p.finish_install();
        assert_eq!(p.state(), InstallState::Consumed);
        assert!(!p.banner_visible());
    }

    #[test]
    fn later_signal_after_install_starts_a_new_cycle() {
        let store = MemoryStore::default();
        let mut p = InstallPrompt::new();
        p.on_eligible(1u8, &store);
        p.on_reveal_due();
        p.take_token();
        p.finish_install();

        assert_eq!(p.on_eligible(2u8, &store), SignalOutcome::ScheduleReveal);
        assert!(p.on_reveal_due());
    }

    #[test]
    fn dismiss_while_dialog_open_stays_dismissed() {
        let mut store = MemoryStore::default();
        let mut p = InstallPrompt::new();
        p.on_eligible(1u8, &store);
        p.on_reveal_due();
        let _token = p.take_token();
        p.dismiss(&mut store);
        p.finish_install();
        assert_eq!(p.state(), InstallState::Dismissed);
    }

    #[test]
    fn outcome_parsing() {
        assert_eq!(InstallOutcome::parse("accepted"), InstallOutcome::Accepted);
        assert_eq!(InstallOutcome::parse("dismissed"), InstallOutcome::Dismissed);
        let other = InstallOutcome::parse("later");
        assert_eq!(other.as_str(), "later");
    }
}
