//! Side menu controller.
//!
//! The panel's `hidden` class is the menu state; `open` and the icon pair
//! follow it. Wired after the header fragment lands, since that is where the
//! toggle button and icons live.

use crate::dom;
use crate::events;
use cr_site::{ClickOrigin, MenuState};
use wasm_bindgen::JsCast;
use web_sys::{Element, Node};

pub const PANEL_ID: &str = "side-menu";
pub const TOGGLE_ID: &str = "menu-toggle";
pub const MENU_ICON_ID: &str = "menu-icon";
pub const CLOSE_ICON_ID: &str = "close-icon";

#[derive(Clone)]
pub struct MenuElements {
    pub panel: Element,
    pub toggle: Element,
    pub menu_icon: Element,
    pub close_icon: Element,
}

impl MenuElements {
    /// Resolve the menu elements; `None` if any of them is missing.
    pub fn bind() -> Option<Self> {
        Some(Self {
            panel: dom::by_id(PANEL_ID)?,
            toggle: dom::by_id(TOGGLE_ID)?,
            menu_icon: dom::by_id(MENU_ICON_ID)?,
            close_icon: dom::by_id(CLOSE_ICON_ID)?,
        })
    }

    pub fn state(&self) -> MenuState {
        MenuState::from_hidden(dom::has_class(&self.panel, "hidden"))
    }

    pub fn apply(&self, state: MenuState) {
        let open = state.is_open();
        dom::toggle_class(&self.panel, "hidden", !open);
        dom::toggle_class(&self.panel, "open", open);
        dom::toggle_class(&self.menu_icon, "hidden", open);
        dom::toggle_class(&self.close_icon, "hidden", !open);
    }

    fn origin(&self, target: Option<&Node>) -> ClickOrigin {
        if dom::contains(&self.toggle, target) {
            ClickOrigin::Toggle
        } else if dom::contains(&self.panel, target) {
            ClickOrigin::Panel
        } else {
            ClickOrigin::Outside
        }
    }
}

/// Wire the toggle button and the outside-click handler. Returns `false`
/// when the page has no menu.
pub fn bind_side_menu() -> bool {
    let Some(els) = MenuElements::bind() else {
        return false;
    };

    {
        let els2 = els.clone();
        events::on_click(&els.toggle, move |_| {
            els2.apply(els2.state().toggled());
        });
    }

    {
        let els2 = els.clone();
        events::on_click(&dom::document(), move |e| {
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            let current = els2.state();
            let next = current.after_document_click(els2.origin(target.as_ref()));
            if next != current {
                els2.apply(next);
            }
        });
    }

    true
}
