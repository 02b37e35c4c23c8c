//! Side-menu open/close rules.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Where a document-level click landed, relative to the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOrigin {
    Toggle,
    Panel,
    Outside,
}

impl MenuState {
    pub fn from_hidden(hidden: bool) -> Self {
        if hidden { MenuState::Closed } else { MenuState::Open }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// State after a document click. The toggle button handles its own
    /// clicks, so only an outside click can change anything here.
    pub fn after_document_click(self, origin: ClickOrigin) -> Self {
        match (self, origin) {
            (MenuState::Open, ClickOrigin::Outside) => MenuState::Closed,
            _ => self,
        }
    }
}
