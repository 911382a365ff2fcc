use serde::{Deserialize, Serialize};

use crate::SiteError;

/// Element id of the optional `<script type="application/json">` block that
/// overrides [`SiteConfig`] fields.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Everything the page glue needs to know about the markup it is bound to.
///
/// `Default` matches the shipped page. A page can override any subset of the
/// fields through a JSON block; absent fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub log_level: String,

    pub service_worker_path: String,

    pub menu_button_id: String,
    pub menu_id: String,
    pub hidden_class: String,

    pub header_offset: f64,

    pub install_banner_id: String,
    pub install_button_id: String,
    pub dismiss_button_id: String,
    pub dismissed_storage_key: String,
    pub install_reveal_delay_ms: u32,

    pub animate_selector: String,
    pub animated_class: String,
    pub reveal_threshold: f64,
    pub reveal_bottom_margin_px: i32,

    pub sending_label: String,
    pub sent_label: String,
    pub sending_delay_ms: u32,
    pub restore_delay_ms: u32,
    pub idle_button_classes: Vec<String>,
    pub sent_button_classes: Vec<String>,

    pub navbar_threshold: f64,
    pub navbar_scrolled_class: String,

    pub haptic_pulse_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            service_worker_path: "/sw.js".to_string(),
            menu_button_id: "mobile-menu-btn".to_string(),
            menu_id: "mobile-menu".to_string(),
            hidden_class: "hidden".to_string(),
            header_offset: 80.0,
            install_banner_id: "install-prompt".to_string(),
            install_button_id: "install-btn".to_string(),
            dismiss_button_id: "dismiss-btn".to_string(),
            dismissed_storage_key: "pwa-dismissed".to_string(),
            install_reveal_delay_ms: 3000,
            animate_selector: "[data-animate]".to_string(),
            animated_class: "animate-in".to_string(),
            reveal_threshold: 0.1,
            reveal_bottom_margin_px: -50,
            sending_label: "Sending...".to_string(),
            sent_label: "✓ Message Sent!".to_string(),
            sending_delay_ms: 1500,
            restore_delay_ms: 3000,
            idle_button_classes: vec![
                "bg-primary-600".to_string(),
                "hover:bg-primary-500".to_string(),
            ],
            sent_button_classes: vec![
                "bg-green-600".to_string(),
                "hover:bg-green-500".to_string(),
            ],
            navbar_threshold: 50.0,
            navbar_scrolled_class: "bg-slate-900/80".to_string(),
            haptic_pulse_ms: 10,
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// CSS `rootMargin` for the entrance-animation observer.
    pub fn reveal_root_margin(&self) -> String {
        format!("0px 0px {}px 0px", self.reveal_bottom_margin_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_page() {
        let cfg = SiteConfig::default();
        assert_eq!(cfg.service_worker_path, "/sw.js");
        assert_eq!(cfg.dismissed_storage_key, "pwa-dismissed");
        assert_eq!(cfg.install_reveal_delay_ms, 3000);
        assert_eq!(cfg.header_offset, 80.0);
        assert_eq!(cfg.navbar_threshold, 50.0);
        assert_eq!(cfg.haptic_pulse_ms, 10);
        assert_eq!(cfg.reveal_root_margin(), "0px 0px -50px 0px");
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = SiteConfig::from_json(r#"{"header_offset": 64, "log_level": "debug"}"#).unwrap();
        assert_eq!(cfg.header_offset, 64.0);
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.menu_id, "mobile-menu");
        assert_eq!(cfg.sending_delay_ms, 1500);
    }

    #[test]
    fn blank_override_is_default() {
        assert_eq!(SiteConfig::from_json("  \n").unwrap(), SiteConfig::default());
    }

    #[test]
    fn malformed_override_is_an_error() {
        assert!(matches!(
            SiteConfig::from_json("{not json"),
            Err(SiteError::Config(_))
        ));
    }
}
