use std::cell::RefCell;
use std::rc::Rc;

use influence_core::reveal::RevealLedger;
use influence_core::{SiteConfig, SiteError};
use js_sys::Array;
use tracing::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom;

const INDEX_ATTR: &str = "data-animate-index";

pub(super) fn bind(cfg: &SiteConfig) -> Result<(), SiteError> {
    let window = dom::window()?;
    let targets = dom::query_all(&dom::document()?, &cfg.animate_selector)?;
    if targets.is_empty() {
        return Ok(());
    }

    let animated_class = cfg.animated_class.clone();

    // Without an observer the content would stay invisible; show it all now.
    if !dom::has_property(window.as_ref(), "IntersectionObserver") {
        for el in &targets {
            dom::set_class(el, &animated_class, true);
        }
        debug!("entrance animations: no IntersectionObserver, revealed {} elements", targets.len());
        return Ok(());
    }

    let ledger = Rc::new(RefCell::new(RevealLedger::new()));
    let callback = {
        let ledger = ledger.clone();
        Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                let Some(index) = target
                    .get_attribute(INDEX_ATTR)
                    .and_then(|v| v.parse::<usize>().ok())
                else {
                    continue;
                };
                let first = ledger.borrow_mut().mark_revealed(index);
                if first {
                    dom::set_class(&target, &animated_class, true);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>)
    };

    let opts = IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(cfg.reveal_threshold));
    opts.set_root_margin(&cfg.reveal_root_margin());
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)
            .map_err(|e| SiteError::js("IntersectionObserver", dom::js_message(&e)))?;
    callback.forget();

    for el in &targets {
        let index = ledger.borrow_mut().register();
        let _ = el.set_attribute(INDEX_ATTR, &index.to_string());
        observer.observe(el);
    }
    debug!("entrance animations: watching {} elements", targets.len());
    Ok(())
}
