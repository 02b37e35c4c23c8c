//! Header/footer fragments and the bookkeeping that gates their
//! dependent initializers.

use crate::config::SiteConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fragment {
    Header,
    Footer,
}

/// Wiring that can only run once its fragment's markup is in the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Initializer {
    SideMenu,
    NavHighlight,
}

impl Fragment {
    pub const ALL: [Fragment; 2] = [Fragment::Header, Fragment::Footer];

    pub fn name(self) -> &'static str {
        match self {
            Fragment::Header => "header",
            Fragment::Footer => "footer",
        }
    }

    pub fn target_id(self) -> &'static str {
        match self {
            Fragment::Header => "header-placeholder",
            Fragment::Footer => "footer-placeholder",
        }
    }

    pub fn url(self, cfg: &SiteConfig) -> String {
        cfg.component_url(self.name())
    }

    pub fn initializer(self) -> Initializer {
        match self {
            Fragment::Header => Initializer::SideMenu,
            Fragment::Footer => Initializer::NavHighlight,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Pending,
    Loaded,
    Failed,
}

/// Per-page record of fragment outcomes. Only the first report for a
/// fragment counts.
#[derive(Clone, Debug, Default)]
pub struct FragmentTracker {
    header: LoadStatus,
    footer: LoadStatus,
}

impl FragmentTracker {
    fn slot(&mut self, fragment: Fragment) -> &mut LoadStatus {
        match fragment {
            Fragment::Header => &mut self.header,
            Fragment::Footer => &mut self.footer,
        }
    }

    /// Record a load outcome. Returns the initializer to run, which is
    /// `Some` only for the first report and only when it succeeded.
    pub fn record(&mut self, fragment: Fragment, loaded: bool) -> Option<Initializer> {
        let slot = self.slot(fragment);
        if *slot != LoadStatus::Pending {
            return None;
        }
        if loaded {
            *slot = LoadStatus::Loaded;
            Some(fragment.initializer())
        } else {
            *slot = LoadStatus::Failed;
            None
        }
    }

    pub fn status(&self, fragment: Fragment) -> LoadStatus {
        match fragment {
            Fragment::Header => self.header,
            Fragment::Footer => self.footer,
        }
    }

    /// Every fragment has reported, successfully or not.
    pub fn settled(&self) -> bool {
        Fragment::ALL
            .iter()
            .all(|f| self.status(*f) != LoadStatus::Pending)
    }
}
