use std::cell::RefCell;
use std::rc::Rc;

use influence_core::menu::MenuToggle;
use influence_core::{SiteConfig, SiteError};
use tracing::debug;

use super::dom;

pub(super) fn bind(cfg: &SiteConfig) -> Result<(), SiteError> {
    let doc = dom::document()?;
    let (Some(button), Some(menu)) = (
        doc.get_element_by_id(&cfg.menu_button_id),
        doc.get_element_by_id(&cfg.menu_id),
    ) else {
        debug!("mobile menu: markup not present");
        return Ok(());
    };

    let hidden_class = cfg.hidden_class.clone();
    let toggle = Rc::new(RefCell::new(MenuToggle::new(
        menu.class_list().contains(&hidden_class),
    )));

    {
        let toggle = toggle.clone();
        let menu = menu.clone();
        let hidden_class = hidden_class.clone();
        dom::listen(&button, "click", None, move |_ev| {
            let hidden = toggle.borrow_mut().toggle();
            dom::set_class(&menu, &hidden_class, hidden);
        })?;
    }

    for link in dom::query_all_in(&menu, "a")? {
        let toggle = toggle.clone();
        let menu = menu.clone();
        let hidden_class = hidden_class.clone();
        dom::listen(&link, "click", None, move |_ev| {
            toggle.borrow_mut().close();
            dom::set_class(&menu, &hidden_class, true);
        })?;
    }
    Ok(())
}
