//! Cosmetic contact-form submission.
//!
//! Nothing is sent anywhere: the submit button walks through a sending and a
//! sent look on fixed delays, then returns to how it started.

use crate::SiteConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
    Sent,
}

/// DOM changes to apply to the submit button at a phase boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonChange {
    pub label: String,
    pub disabled: bool,
    pub add_classes: Vec<String>,
    pub remove_classes: Vec<String>,
    pub reset_form: bool,
}

#[derive(Debug, Clone)]
pub struct SubmitCycle {
    phase: SubmitPhase,
    original_label: String,
    sending_label: String,
    sent_label: String,
    idle_classes: Vec<String>,
    sent_classes: Vec<String>,
}

impl SubmitCycle {
    pub fn new(cfg: &SiteConfig) -> Self {
        Self {
            phase: SubmitPhase::Idle,
            original_label: String::new(),
            sending_label: cfg.sending_label.clone(),
            sent_label: cfg.sent_label.clone(),
            idle_classes: cfg.idle_button_classes.clone(),
            sent_classes: cfg.sent_button_classes.clone(),
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Submit pressed. `None` if a cycle is already running.
    pub fn begin(&mut self, current_label: &str) -> Option<ButtonChange> {
        if self.phase != SubmitPhase::Idle {
            return None;
        }
        self.phase = SubmitPhase::Sending;
        self.original_label = current_label.to_string();
        Some(ButtonChange {
            label: self.sending_label.clone(),
            disabled: true,
            add_classes: Vec::new(),
            remove_classes: Vec::new(),
            reset_form: false,
        })
    }

    /// The simulated send finished.
    pub fn sent(&mut self) -> Option<ButtonChange> {
        if self.phase != SubmitPhase::Sending {
            return None;
        }
        self.phase = SubmitPhase::Sent;
        Some(ButtonChange {
            label: self.sent_label.clone(),
            disabled: true,
            add_classes: self.sent_classes.clone(),
            remove_classes: self.idle_classes.clone(),
            reset_form: true,
        })
    }

    /// Back to the look the button had before `begin`.
    pub fn restore(&mut self) -> Option<ButtonChange> {
        if self.phase != SubmitPhase::Sent {
            return None;
        }
        self.phase = SubmitPhase::Idle;
        Some(ButtonChange {
            label: std::mem::take(&mut self.original_label),
            disabled: false,
            add_classes: self.idle_classes.clone(),
            remove_classes: self.sent_classes.clone(),
            reset_form: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle_restores_original_button() {
        let cfg = SiteConfig::default();
        let mut c = SubmitCycle::new(&cfg);

        let sending = c.begin("Send Message").unwrap();
        assert!(sending.disabled);
        assert_eq!(sending.label, "Sending...");
        assert!(!sending.reset_form);

        let sent = c.sent().unwrap();
        assert_eq!(sent.label, "✓ Message Sent!");
        assert!(sent.disabled);
        assert!(sent.reset_form);
        assert!(sent.add_classes.contains(&"bg-green-600".to_string()));
        assert!(sent.remove_classes.contains(&"bg-primary-600".to_string()));

        let back = c.restore().unwrap();
        assert_eq!(back.label, "Send Message");
        assert!(!back.disabled);
        assert!(back.add_classes.contains(&"hover:bg-primary-500".to_string()));
        assert!(back.remove_classes.contains(&"hover:bg-green-500".to_string()));
        assert_eq!(c.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn resubmit_while_running_is_ignored() {
        let cfg = SiteConfig::default();
        let mut c = SubmitCycle::new(&cfg);
        c.begin("Send").unwrap();
        assert!(c.begin("Sending...").is_none());
        c.sent().unwrap();
        assert!(c.begin("✓ Message Sent!").is_none());
        assert_eq!(c.restore().unwrap().label, "Send");
    }

    #[test]
    fn out_of_order_steps_do_nothing() {
        let cfg = SiteConfig::default();
        let mut c = SubmitCycle::new(&cfg);
        assert!(c.sent().is_none());
        assert!(c.restore().is_none());
        assert_eq!(c.phase(), SubmitPhase::Idle);
    }
}
