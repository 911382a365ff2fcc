use influence_core::{SiteConfig, SiteError};
use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use super::dom;

pub(super) fn bind(cfg: &SiteConfig) -> Result<(), SiteError> {
    let window = dom::window()?;
    if !dom::has_property(window.navigator().as_ref(), "serviceWorker") {
        debug!("service worker: unsupported, running without offline support");
        return Ok(());
    }

    let path = cfg.service_worker_path.clone();

    // The module may finish loading after the page did.
    if dom::document()?.ready_state() == "complete" {
        spawn_register(path);
        return Ok(());
    }

    dom::listen(&window, "load", None, move |_ev| spawn_register(path.clone()))
}

fn spawn_register(path: String) {
    spawn_local(async move {
        match register(&path).await {
            Ok(scope) => info!("SW registered: {scope}"),
            Err(e) => warn!("SW registration failed: {e}"),
        }
    });
}

async fn register(path: &str) -> Result<String, SiteError> {
    let container = dom::window()?.navigator().service_worker();
    let reg = JsFuture::from(container.register(path))
        .await
        .map_err(|e| SiteError::js("service worker", dom::js_message(&e)))?;
    let reg = reg
        .dyn_into::<web_sys::ServiceWorkerRegistration>()
        .map_err(|_| SiteError::js("service worker", "expected ServiceWorkerRegistration"))?;
    Ok(reg.scope())
}
