//! Viewer state: pure types, zero effects.
//!
//! [`App`] borrows the immutable portfolio and owns the mutable
//! [`NavigationState`]. Viewport sizes are not stored anywhere; they are
//! derived from the terminal size each time they are needed.

use std::collections::BTreeMap;

use crate::types::Portfolio;

use super::resume::{self, ResumeLine};
use super::scroll::ScrollState;
use super::tabs::{Tab, TabChange, TabController};
use super::theme::ThemeController;

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level viewer model.
#[derive(Debug)]
pub struct App<'a> {
    /// Read-only content shared by every panel.
    pub portfolio: &'a Portfolio,

    /// Resume tab lines, built once from the portfolio.
    pub resume: Vec<ResumeLine>,

    pub nav: NavigationState,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

/// Everything the input router mutates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub tabs: TabController,
    pub theme: ThemeController,
    scroll: BTreeMap<Tab, ScrollState>,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    PreviousTab,
    NextTab,
    ScrollUp,
    ScrollDown,
    ToggleTheme,
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// What the effects layer should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// State may have changed; draw again.
    Redraw,
    /// A different tab is active: home the cursor, then draw.
    TabSwitched(TabChange),
    /// Leave the viewer.
    Quit,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl<'a> App<'a> {
    /// Viewer over the default tab set.
    pub fn new(portfolio: &'a Portfolio) -> Self {
        Self::with_tabs(portfolio, TabController::default())
    }

    pub fn with_tabs(portfolio: &'a Portfolio, tabs: TabController) -> Self {
        App {
            portfolio,
            resume: resume::build(portfolio),
            nav: NavigationState::new(tabs),
            should_quit: false,
        }
    }

    /// Number of scrollable items on `tab`. Zero for fixed panels.
    pub fn item_count(&self, tab: Tab) -> usize {
        match tab {
            Tab::Home | Tab::Contact => 0,
            Tab::Resume => self.resume.len(),
            Tab::Work => self.portfolio.work.len(),
            Tab::Education => self.portfolio.education.len(),
            Tab::Skills => self.portfolio.skills.len(),
            Tab::Projects => self.portfolio.projects.len(),
        }
    }
}

impl NavigationState {
    pub fn new(tabs: TabController) -> Self {
        NavigationState {
            tabs,
            theme: ThemeController::default(),
            scroll: BTreeMap::new(),
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.tabs.active()
    }

    /// Scroll position of `tab`, zero if never scrolled.
    pub fn scroll(&self, tab: Tab) -> ScrollState {
        self.scroll.get(&tab).copied().unwrap_or_default()
    }

    pub fn scroll_mut(&mut self, tab: Tab) -> &mut ScrollState {
        self.scroll.entry(tab).or_default()
    }
}

// ============================================================================
// TESTS
// ============================================================================
