use influence_core::scroll::NavbarStyle;
use influence_core::{SiteConfig, SiteError};
use tracing::debug;

use super::{dom, NAVBAR_SELECTOR};

pub(super) fn bind(cfg: &SiteConfig) -> Result<(), SiteError> {
    let window = dom::window()?;
    let Some(nav) = dom::query_one(&dom::document()?, NAVBAR_SELECTOR)? else {
        debug!("navbar: no nav element");
        return Ok(());
    };

    let style = NavbarStyle::new(cfg.navbar_threshold);
    let class = cfg.navbar_scrolled_class.clone();
    let apply = move |window: &web_sys::Window| {
        let Ok(y) = window.page_y_offset() else {
            return;
        };
        dom::set_class(&nav, &class, style.is_scrolled(y));
    };

    // A restored page can start mid-scroll.
    apply(&window);

    let w = window.clone();
    dom::listen(&window, "scroll", None, move |_ev| apply(&w))
}
