//! Rider / driver mode toggle.

use crate::dom;
use crate::events;
use crate::state;
use cr_site::Mode;
use web_sys::Element;

#[derive(Clone)]
pub struct ModeElements {
    pub rider_btn: Element,
    pub driver_btn: Element,
    pub rider_view: Element,
    pub driver_view: Element,
}

impl ModeElements {
    pub fn bind() -> Option<Self> {
        Some(Self {
            rider_btn: dom::by_id(Mode::Rider.button_id())?,
            driver_btn: dom::by_id(Mode::Driver.button_id())?,
            rider_view: dom::by_id(Mode::Rider.view_id())?,
            driver_view: dom::by_id(Mode::Driver.view_id())?,
        })
    }

    fn button(&self, mode: Mode) -> &Element {
        match mode {
            Mode::Rider => &self.rider_btn,
            Mode::Driver => &self.driver_btn,
        }
    }

    fn view(&self, mode: Mode) -> &Element {
        match mode {
            Mode::Rider => &self.rider_view,
            Mode::Driver => &self.driver_view,
        }
    }
}

/// Show the selected view, hide the other, move `active` to its button.
pub fn render(els: &ModeElements, selected: Mode) {
    for mode in Mode::ALL {
        let shown = selected.shows(mode);
        dom::toggle_class(els.view(mode), "hidden", !shown);
        dom::toggle_class(els.button(mode), "active", shown);
    }
}

pub fn select(els: &ModeElements, mode: Mode) {
    state::set_mode(mode);
    render(els, mode);
}

/// Wire both mode buttons and render the current mode. Returns `false` when
/// the page has no mode toggle.
pub fn bind_mode_toggle() -> bool {
    let Some(els) = ModeElements::bind() else {
        return false;
    };

    for mode in Mode::ALL {
        let els2 = els.clone();
        events::on_click(els.button(mode), move |_| select(&els2, mode));
    }

    render(&els, state::mode());
    true
}
