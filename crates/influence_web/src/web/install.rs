//! PWA install banner wiring.
//!
//! `beforeinstallprompt` is not modelled by `web-sys`, so the deferred event's
//! `prompt()` and `userChoice` are reached through `Reflect`.

use std::cell::RefCell;
use std::rc::Rc;

use influence_core::install::{InstallOutcome, InstallPrompt, SignalOutcome};
use influence_core::{SiteConfig, SiteError};
use js_sys::{Function, Promise, Reflect};
use tracing::{debug, info, warn};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};

use super::dom;
use super::storage::LocalDismissalStore;
use super::timers::sleep_ms;

struct InstallBanner {
    prompt: RefCell<InstallPrompt<web_sys::Event>>,
    store: RefCell<LocalDismissalStore>,
    banner: Option<web_sys::Element>,
    hidden_class: String,
    reveal_delay_ms: u32,
}

impl InstallBanner {
    fn set_hidden(&self, hidden: bool) {
        if let Some(banner) = &self.banner {
            dom::set_class(banner, &self.hidden_class, hidden);
        }
    }

    fn on_eligible(self: &Rc<Self>, ev: web_sys::Event) {
        ev.prevent_default();
        let outcome = self
            .prompt
            .borrow_mut()
            .on_eligible(ev, &*self.store.borrow());
        if outcome != SignalOutcome::ScheduleReveal {
            debug!("install prompt: {outcome:?}");
            return;
        }

        let this = Rc::clone(self);
        spawn_local(async move {
            sleep_ms(this.reveal_delay_ms).await;
            let reveal = this.prompt.borrow_mut().on_reveal_due();
            if reveal {
                this.set_hidden(false);
            }
        });
    }

    async fn install(&self) {
        let Some(token) = self.prompt.borrow_mut().take_token() else {
            return;
        };
        match run_native_prompt(&token).await {
            Ok(outcome) => info!("PWA install outcome: {}", outcome.as_str()),
            Err(e) => warn!("PWA install prompt failed: {e}"),
        }
        self.prompt.borrow_mut().finish_install();
        self.set_hidden(true);
    }

    fn dismiss(&self) {
        self.set_hidden(true);
        let wrote = self
            .prompt
            .borrow_mut()
            .dismiss(&mut *self.store.borrow_mut());
        if wrote {
            debug!("install banner dismissed");
        }
    }
}

pub(super) fn bind(cfg: &SiteConfig) -> Result<(), SiteError> {
    let window = dom::window()?;
    let doc = dom::document()?;

    let ctl = Rc::new(InstallBanner {
        prompt: RefCell::new(InstallPrompt::new()),
        store: RefCell::new(LocalDismissalStore::new(&cfg.dismissed_storage_key)),
        banner: doc.get_element_by_id(&cfg.install_banner_id),
        hidden_class: cfg.hidden_class.clone(),
        reveal_delay_ms: cfg.install_reveal_delay_ms,
    });

    {
        let ctl = ctl.clone();
        dom::listen(&window, "beforeinstallprompt", None, move |ev| {
            ctl.on_eligible(ev)
        })?;
    }

    if let Some(button) = doc.get_element_by_id(&cfg.install_button_id) {
        let ctl = ctl.clone();
        dom::listen(&button, "click", None, move |_ev| {
            let ctl = ctl.clone();
            spawn_local(async move { ctl.install().await });
        })?;
    }

    if let Some(button) = doc.get_element_by_id(&cfg.dismiss_button_id) {
        dom::listen(&button, "click", None, move |_ev| ctl.dismiss())?;
    }
    Ok(())
}

async fn run_native_prompt(deferred: &web_sys::Event) -> Result<InstallOutcome, SiteError> {
    let target: &JsValue = deferred.as_ref();

    let prompt = Reflect::get(target, &JsValue::from_str("prompt"))
        .map_err(|e| SiteError::js("install prompt", dom::js_message(&e)))?
        .dyn_into::<Function>()
        .map_err(|_| SiteError::js("install prompt", "prompt is not a function"))?;
    prompt
        .call0(target)
        .map_err(|e| SiteError::js("install prompt", dom::js_message(&e)))?;

    let choice = Reflect::get(target, &JsValue::from_str("userChoice"))
        .map_err(|e| SiteError::js("install prompt", dom::js_message(&e)))?
        .dyn_into::<Promise>()
        .map_err(|_| SiteError::js("install prompt", "userChoice is not a promise"))?;
    let choice = JsFuture::from(choice)
        .await
        .map_err(|e| SiteError::js("install prompt", dom::js_message(&e)))?;

    let outcome = Reflect::get(&choice, &JsValue::from_str("outcome"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default();
    Ok(InstallOutcome::parse(&outcome))
}
