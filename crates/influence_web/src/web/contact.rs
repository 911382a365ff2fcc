use std::cell::RefCell;
use std::rc::Rc;

use influence_core::contact::{ButtonChange, SubmitCycle};
use influence_core::{SiteConfig, SiteError};
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlButtonElement, HtmlFormElement};

use super::timers::sleep_ms;
use super::{dom, CONTACT_FORM_SELECTOR, SUBMIT_BUTTON_SELECTOR};

pub(super) fn bind(cfg: &SiteConfig) -> Result<(), SiteError> {
    let Some(form) = dom::query_one(&dom::document()?, CONTACT_FORM_SELECTOR)? else {
        debug!("contact form: no form on page");
        return Ok(());
    };
    let form = form
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| SiteError::js("contact form", "expected HtmlFormElement"))?;

    let cycle = Rc::new(RefCell::new(SubmitCycle::new(cfg)));
    let sending_delay_ms = cfg.sending_delay_ms;
    let restore_delay_ms = cfg.restore_delay_ms;

    let target = form.clone();
    dom::listen(&target, "submit", None, move |ev| {
        ev.prevent_default();

        let Some(button) = submit_button(&form) else {
            debug!("contact form: no submit button");
            return;
        };
        let label = button.text_content().unwrap_or_default();
        let Some(change) = cycle.borrow_mut().begin(&label) else {
            return;
        };
        apply(&form, &button, &change);

        let cycle = cycle.clone();
        let form = form.clone();
        spawn_local(async move {
            sleep_ms(sending_delay_ms).await;
            let sent = cycle.borrow_mut().sent();
            if let Some(change) = sent {
                apply(&form, &button, &change);
            }

            sleep_ms(restore_delay_ms).await;
            let restored = cycle.borrow_mut().restore();
            if let Some(change) = restored {
                apply(&form, &button, &change);
            }
        });
    })
}

fn submit_button(form: &HtmlFormElement) -> Option<HtmlButtonElement> {
    form.query_selector(SUBMIT_BUTTON_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
}

fn apply(form: &HtmlFormElement, button: &HtmlButtonElement, change: &ButtonChange) {
    button.set_disabled(change.disabled);
    button.set_text_content(Some(&change.label));
    for class in &change.remove_classes {
        dom::set_class(button, class, false);
    }
    for class in &change.add_classes {
        dom::set_class(button, class, true);
    }
    if change.reset_form {
        form.reset();
    }
}
