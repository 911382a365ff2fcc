use std::cell::Cell;
use std::rc::Rc;

use influence_core::gesture::PullToRefreshGuard;
use influence_core::{SiteConfig, SiteError};
use wasm_bindgen::JsCast;

use super::dom;

pub(super) fn bind(_cfg: &SiteConfig) -> Result<(), SiteError> {
    let window = dom::window()?;
    let doc = dom::document()?;
    let guard = Rc::new(Cell::new(PullToRefreshGuard::new()));

    {
        let guard = guard.clone();
        dom::listen(&doc, "touchstart", Some(true), move |ev| {
            if let Some(y) = first_touch_y(&ev) {
                let mut g = guard.get();
                g.touch_start(y);
                guard.set(g);
            }
        })?;
    }

    // Must not be passive, or preventDefault() is ignored.
    dom::listen(&doc, "touchmove", Some(false), move |ev| {
        let Some(y) = first_touch_y(&ev) else {
            return;
        };
        let Ok(scroll_y) = window.scroll_y() else {
            return;
        };
        if guard.get().should_suppress(y, scroll_y) {
            ev.prevent_default();
        }
    })
}

fn first_touch_y(ev: &web_sys::Event) -> Option<f64> {
    let touch = ev.dyn_ref::<web_sys::TouchEvent>()?.touches().item(0)?;
    Some(f64::from(touch.client_y()))
}
