//! Tab set and cyclic tab navigation.

use serde::{Deserialize, Serialize};

use super::viewport::PanelKind;

/// One named view of the full-screen viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Home,
    Resume,
    Work,
    Education,
    Skills,
    Projects,
    Contact,
}

impl Tab {
    /// Default tab order.
    pub const ALL: [Tab; 7] = [
        Tab::Home,
        Tab::Resume,
        Tab::Work,
        Tab::Education,
        Tab::Skills,
        Tab::Projects,
        Tab::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Resume => "Resume",
            Tab::Work => "Work",
            Tab::Education => "Education",
            Tab::Skills => "Skills",
            Tab::Projects => "Projects",
            Tab::Contact => "Contact",
        }
    }

    /// Row heuristic for scrollable tabs; `None` for fixed panels.
    pub fn panel_kind(self) -> Option<PanelKind> {
        match self {
            Tab::Home | Tab::Contact => None,
            Tab::Resume => Some(PanelKind::TextLine),
            Tab::Work | Tab::Education => Some(PanelKind::TimelineEntry),
            Tab::Skills => Some(PanelKind::SkillCategory),
            Tab::Projects => Some(PanelKind::ProjectCard),
        }
    }
}

/// Emitted on every tab move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabChange {
    pub from: Tab,
    pub to: Tab,
}

/// Active index over a fixed, non-empty, ordered tab list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabController {
    tabs: Vec<Tab>,
    index: usize,
}

impl Default for TabController {
    fn default() -> Self {
        TabController {
            tabs: Tab::ALL.to_vec(),
            index: 0,
        }
    }
}

impl TabController {
    /// `None` for an empty list.
    pub fn new(tabs: Vec<Tab>) -> Option<Self> {
        if tabs.is_empty() {
            None
        } else {
            Some(TabController { tabs, index: 0 })
        }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn active(&self) -> Tab {
        self.tabs[self.index]
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn next(&mut self) -> TabChange {
        let from = self.active();
        self.index = (self.index + 1) % self.tabs.len();
        TabChange { from, to: self.active() }
    }

    pub fn previous(&mut self) -> TabChange {
        let from = self.active();
        let n = self.tabs.len();
        self.index = (self.index + n - 1) % n;
        TabChange { from, to: self.active() }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_tab() {
        let tabs = TabController::default();
        assert_eq!(tabs.index(), 0);
        assert_eq!(tabs.active(), Tab::Home);
        assert_eq!(tabs.len(), 7);
    }

    #[test]
    fn next_wraps_around() {
        let mut tabs = TabController::default();
        for _ in 0..6 {
            tabs.next();
        }
        assert_eq!(tabs.active(), Tab::Contact);
        let change = tabs.next();
        assert_eq!(change, TabChange { from: Tab::Contact, to: Tab::Home });
    }

    #[test]
    fn previous_wraps_around() {
        let mut tabs = TabController::default();
        let change = tabs.previous();
        assert_eq!(change.to, Tab::Contact);
        assert_eq!(tabs.index(), 6);
    }

    #[test]
    fn next_tab_count_times_is_identity() {
        let mut tabs = TabController::default();
        tabs.next();
        tabs.next();
        let start = tabs.index();
        for _ in 0..tabs.len() {
            tabs.next();
        }
        assert_eq!(tabs.index(), start);
    }

    #[test]
    fn previous_inverts_next() {
        let mut tabs = TabController::default();
        for start in 0..tabs.len() {
            while tabs.index() != start {
                tabs.next();
            }
            tabs.next();
            tabs.previous();
            assert_eq!(tabs.index(), start);
            tabs.previous();
            tabs.next();
            assert_eq!(tabs.index(), start);
        }
    }

    #[test]
    fn single_tab_stays_put() {
        let mut tabs = TabController::new(vec![Tab::Resume]).unwrap();
        let change = tabs.next();
        assert_eq!(change, TabChange { from: Tab::Resume, to: Tab::Resume });
        tabs.previous();
        assert_eq!(tabs.active(), Tab::Resume);
    }

    #[test]
    fn empty_tab_list_is_rejected() {
        assert!(TabController::new(Vec::new()).is_none());
    }

    #[test]
    fn fixed_panels_have_no_kind() {
        assert!(Tab::Home.panel_kind().is_none());
        assert!(Tab::Contact.panel_kind().is_none());
        assert_eq!(Tab::Projects.panel_kind(), Some(PanelKind::ProjectCard));
    }

    #[test]
    fn tabs_deserialize_lowercase() {
        let tab: Tab = serde_json::from_str("\"education\"").unwrap();
        assert_eq!(tab, Tab::Education);
    }
}
