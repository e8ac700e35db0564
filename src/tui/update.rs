//! Input routing: (App, Action) → Transition.
//!
//! Fully testable without a terminal. Each action touches exactly one
//! controller. Scroll actions on fixed panels are no-ops.

use super::scroll;
use super::state::{Action, App, Transition};
use super::viewport::ViewportMetrics;

/// Apply one action to the viewer state.
///
/// `metrics` must describe the terminal as it is now; scroll bounds
/// depend on the current capacity of the active panel.
pub fn update(app: &mut App, action: &Action, metrics: &ViewportMetrics) -> Transition {
    match action {
        Action::PreviousTab => {
            let change = app.nav.tabs.previous();
            app.nav.scroll_mut(change.to).reset_to_top();
            tracing::debug!(from = ?change.from, to = ?change.to, "tab switched");
            Transition::TabSwitched(change)
        }
        Action::NextTab => {
            let change = app.nav.tabs.next();
            app.nav.scroll_mut(change.to).reset_to_top();
            tracing::debug!(from = ?change.from, to = ?change.to, "tab switched");
            Transition::TabSwitched(change)
        }
        Action::ScrollUp => {
            scroll_active(app, metrics, scroll::scroll_up);
            Transition::Redraw
        }
        Action::ScrollDown => {
            scroll_active(app, metrics, scroll::scroll_down);
            Transition::Redraw
        }
        Action::ToggleTheme => {
            app.nav.theme.toggle();
            tracing::debug!(theme = app.nav.theme.name().label(), "theme toggled");
            Transition::Redraw
        }
        Action::Quit => {
            app.should_quit = true;
            Transition::Quit
        }
    }
}

/// Run a length-only scroll operation on the active panel, if it scrolls.
fn scroll_active(
    app: &mut App,
    metrics: &ViewportMetrics,
    op: fn(&mut scroll::ScrollState, usize, usize),
) {
    let tab = app.nav.active_tab();
    let Some(kind) = tab.panel_kind() else {
        return;
    };
    let len = app.item_count(tab);
    let capacity = metrics.capacity(kind);
    op(app.nav.scroll_mut(tab), len, capacity);
}

// ============================================================================
// TESTS
// ============================================================================
