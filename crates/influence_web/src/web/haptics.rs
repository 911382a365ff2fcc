use influence_core::{SiteConfig, SiteError};
use tracing::debug;

use super::{dom, TOUCH_CONTROLS_SELECTOR};

pub(super) fn bind(cfg: &SiteConfig) -> Result<(), SiteError> {
    let window = dom::window()?;
    if !dom::has_property(window.navigator().as_ref(), "vibrate") {
        debug!("haptics: vibration unsupported");
        return Ok(());
    }

    let pulse_ms = cfg.haptic_pulse_ms;
    for control in dom::query_all(&dom::document()?, TOUCH_CONTROLS_SELECTOR)? {
        let navigator = window.navigator();
        dom::listen(&control, "touchstart", Some(true), move |_ev| {
            let _ = navigator.vibrate_with_duration(pulse_ms);
        })?;
    }
    Ok(())
}
