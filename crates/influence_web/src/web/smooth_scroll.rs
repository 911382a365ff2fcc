use influence_core::scroll::{fragment_id, scroll_target};
use influence_core::{SiteConfig, SiteError};
use tracing::debug;

use super::{dom, IN_PAGE_ANCHOR_SELECTOR};

pub(super) fn bind(cfg: &SiteConfig) -> Result<(), SiteError> {
    let doc = dom::document()?;
    let header_offset = cfg.header_offset;

    for anchor in dom::query_all(&doc, IN_PAGE_ANCHOR_SELECTOR)? {
        let link = anchor.clone();
        dom::listen(&anchor, "click", None, move |ev| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(id) = fragment_id(&href) else {
                return;
            };
            if let Err(e) = scroll_to_fragment(id, header_offset, &ev) {
                debug!("smooth scroll to #{id}: {e}");
            }
        })?;
    }
    Ok(())
}

/// Unresolved targets leave the click to the browser.
fn scroll_to_fragment(
    id: &str,
    header_offset: f64,
    ev: &web_sys::Event,
) -> Result<(), SiteError> {
    let window = dom::window()?;
    let Some(target) = dom::document()?.get_element_by_id(id) else {
        return Ok(());
    };
    let page_y = window
        .page_y_offset()
        .map_err(|e| SiteError::js("pageYOffset", dom::js_message(&e)))?;
    let top = scroll_target(target.get_bounding_client_rect().top(), page_y, header_offset);

    ev.prevent_default();
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
    Ok(())
}
