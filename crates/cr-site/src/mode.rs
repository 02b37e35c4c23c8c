//! Rider / driver view switch.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Rider,
    Driver,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Rider, Mode::Driver];

    pub fn button_id(self) -> &'static str {
        match self {
            Mode::Rider => "rider-mode-btn",
            Mode::Driver => "driver-mode-btn",
        }
    }

    pub fn view_id(self) -> &'static str {
        match self {
            Mode::Rider => "rider-view",
            Mode::Driver => "driver-view",
        }
    }

    pub fn other(self) -> Mode {
        match self {
            Mode::Rider => Mode::Driver,
            Mode::Driver => Mode::Rider,
        }
    }

    /// Visibility of `view`'s container while `self` is selected.
    pub fn shows(self, view: Mode) -> bool {
        self == view
    }
}
