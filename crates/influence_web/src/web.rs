use influence_core::config::CONFIG_ELEMENT_ID;
use influence_core::{SiteConfig, SiteError};
use tracing::{debug, info, warn};
use web_time::Instant;

mod console;
mod contact;
mod dom;
mod haptics;
mod install;
mod menu;
mod navbar;
mod pull_refresh;
mod reveal;
mod service_worker;
mod smooth_scroll;
mod storage;
mod timers;

const IN_PAGE_ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
const CONTACT_FORM_SELECTOR: &str = "form";
const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"]";
const NAVBAR_SELECTOR: &str = "nav";
const TOUCH_CONTROLS_SELECTOR: &str = "button, a";

type Binder = fn(&SiteConfig) -> Result<(), SiteError>;

/// Bind every page component. Runs once per page view.
pub fn start() {
    console_error_panic_hook::set_once();

    let (cfg, cfg_err) = match load_config() {
        Ok(cfg) => (cfg, None),
        Err(e) => (SiteConfig::default(), Some(e)),
    };
    console::init_logging(&cfg.log_level);
    if let Some(e) = cfg_err {
        warn!("using default site config: {e}");
    }

    let started = Instant::now();
    bind_all(&cfg);
    info!(
        "🚀 Influencer Platform loaded ({} ms)",
        started.elapsed().as_millis()
    );
}

fn bind_all(cfg: &SiteConfig) {
    let binders: [(&str, Binder); 9] = [
        ("service worker", service_worker::bind),
        ("mobile menu", menu::bind),
        ("smooth scroll", smooth_scroll::bind),
        ("install prompt", install::bind),
        ("entrance animations", reveal::bind),
        ("contact form", contact::bind),
        ("navbar", navbar::bind),
        ("haptics", haptics::bind),
        ("pull-to-refresh", pull_refresh::bind),
    ];

    // One component failing to bind must not take the rest of the page down.
    for (name, bind) in binders {
        match bind(cfg) {
            Ok(()) => debug!("{name}: bound"),
            Err(e) => warn!("{name}: {e}"),
        }
    }
}

fn load_config() -> Result<SiteConfig, SiteError> {
    let doc = dom::document()?;
    match doc
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    {
        Some(raw) => SiteConfig::from_json(&raw),
        None => Ok(SiteConfig::default()),
    }
}
