use influence_core::SiteError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub(super) fn window() -> Result<web_sys::Window, SiteError> {
    web_sys::window().ok_or(SiteError::MissingWindow)
}

pub(super) fn document() -> Result<web_sys::Document, SiteError> {
    window()?.document().ok_or(SiteError::MissingDocument)
}

pub(super) fn js_message(v: &JsValue) -> String {
    v.as_string().unwrap_or_else(|| format!("{v:?}"))
}

/// Feature detection: `name in target`.
pub(super) fn has_property(target: &JsValue, name: &str) -> bool {
    js_sys::Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
}

pub(super) fn query_all(
    doc: &web_sys::Document,
    selector: &str,
) -> Result<Vec<web_sys::Element>, SiteError> {
    let list = doc
        .query_selector_all(selector)
        .map_err(|e| SiteError::js("querySelectorAll", js_message(&e)))?;
    Ok(to_elements(&list))
}

pub(super) fn query_all_in(
    root: &web_sys::Element,
    selector: &str,
) -> Result<Vec<web_sys::Element>, SiteError> {
    let list = root
        .query_selector_all(selector)
        .map_err(|e| SiteError::js("querySelectorAll", js_message(&e)))?;
    Ok(to_elements(&list))
}

pub(super) fn query_one(
    doc: &web_sys::Document,
    selector: &str,
) -> Result<Option<web_sys::Element>, SiteError> {
    doc.query_selector(selector)
        .map_err(|e| SiteError::js("querySelector", js_message(&e)))
}

fn to_elements(list: &web_sys::NodeList) -> Vec<web_sys::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web_sys::Element>().ok())
        .collect()
}

pub(super) fn set_class(el: &web_sys::Element, class: &str, on: bool) {
    let list = el.class_list();
    let _ = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}

/// Attach a listener for the lifetime of the page.
///
/// `passive` of `None` uses the browser default; `Some(false)` is required for
/// handlers that call `preventDefault()` on touch events.
pub(super) fn listen<F>(
    target: &web_sys::EventTarget,
    event: &str,
    passive: Option<bool>,
    handler: F,
) -> Result<(), SiteError>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    let res = match passive {
        Some(passive) => {
            let opts = web_sys::AddEventListenerOptions::new();
            opts.set_passive(passive);
            target.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                cb.as_ref().unchecked_ref(),
                &opts,
            )
        }
        None => target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()),
    };
    res.map_err(|e| SiteError::js("addEventListener", js_message(&e)))?;
    cb.forget();
    Ok(())
}
