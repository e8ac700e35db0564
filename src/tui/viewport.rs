//! Screen real-estate: fixed header, variable content, fixed footer.
//!
//! Pure functions of the current terminal size. Nothing is cached;
//! callers recompute before each render and before each key dispatch.

/// Rows taken by the banner (3) and the tab bar (3).
pub const HEADER_HEIGHT: u16 = 6;

/// Rows taken by the bordered footer: key legend plus status line.
pub const FOOTER_HEIGHT: u16 = 4;

/// How a panel's items occupy rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    /// Work or education entry: name, title, period, a few bullets.
    TimelineEntry,
    /// Category title, skills line, spacing.
    SkillCategory,
    /// Bordered card with padding.
    ProjectCard,
    /// One line of the long-form resume.
    TextLine,
}

impl PanelKind {
    /// Approximate rows per item.
    pub const fn item_height(self) -> u16 {
        match self {
            PanelKind::TimelineEntry => 8,
            PanelKind::SkillCategory => 4,
            PanelKind::ProjectCard => 8,
            PanelKind::TextLine => 1,
        }
    }

    /// Capacity floor, applied however small the terminal gets.
    pub const fn min_visible(self) -> usize {
        match self {
            PanelKind::TimelineEntry => 2,
            PanelKind::SkillCategory => 3,
            PanelKind::ProjectCard => 1,
            PanelKind::TextLine => 10,
        }
    }
}

/// `max(0, terminal - header - footer)`.
pub fn content_height(terminal_height: u16, header_height: u16, footer_height: u16) -> u16 {
    terminal_height
        .saturating_sub(header_height)
        .saturating_sub(footer_height)
}

/// `max(minimum, floor(content / per_item))`, never below 1.
pub fn visible_count(content_height: u16, per_item_height: u16, minimum: usize) -> usize {
    let fit = if per_item_height == 0 {
        content_height as usize
    } else {
        (content_height / per_item_height) as usize
    };
    fit.max(minimum).max(1)
}

/// Derived layout numbers for one terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportMetrics {
    pub width: u16,
    pub height: u16,
    pub header_height: u16,
    pub footer_height: u16,
    pub content_height: u16,
}

impl ViewportMetrics {
    /// Metrics for a terminal of `width` x `height` with the standard chrome.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_chrome(width, height, HEADER_HEIGHT, FOOTER_HEIGHT)
    }

    pub fn with_chrome(width: u16, height: u16, header_height: u16, footer_height: u16) -> Self {
        ViewportMetrics {
            width,
            height,
            header_height,
            footer_height,
            content_height: content_height(height, header_height, footer_height),
        }
    }

    /// Items of `kind` that fit the content region.
    pub fn capacity(&self, kind: PanelKind) -> usize {
        visible_count(self.content_height, kind.item_height(), kind.min_visible())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_height_subtracts_chrome() {
        assert_eq!(content_height(24, 6, 4), 14);
    }

    #[test]
    fn content_height_saturates_at_zero() {
        assert_eq!(content_height(5, 6, 4), 0);
        assert_eq!(content_height(0, 6, 4), 0);
    }

    #[test]
    fn card_panel_on_24_rows() {
        let content = content_height(24, 6, 4);
        assert_eq!(visible_count(content, 8, 1), 1);
        assert_eq!(visible_count(content, 8, 2), 2);
    }

    #[test]
    fn visible_count_floors_division() {
        assert_eq!(visible_count(15, 4, 1), 3);
        assert_eq!(visible_count(16, 4, 1), 4);
    }

    #[test]
    fn visible_count_never_below_one() {
        assert_eq!(visible_count(0, 8, 0), 1);
        assert_eq!(visible_count(0, 0, 0), 1);
    }

    #[test]
    fn degenerate_terminal_uses_panel_minimums() {
        let m = ViewportMetrics::new(10, 2);
        assert_eq!(m.content_height, 0);
        assert_eq!(m.capacity(PanelKind::TimelineEntry), 2);
        assert_eq!(m.capacity(PanelKind::SkillCategory), 3);
        assert_eq!(m.capacity(PanelKind::ProjectCard), 1);
        assert_eq!(m.capacity(PanelKind::TextLine), 10);
    }

    #[test]
    fn tall_terminal_fits_more() {
        let m = ViewportMetrics::new(120, 50);
        assert_eq!(m.content_height, 40);
        assert_eq!(m.capacity(PanelKind::TimelineEntry), 5);
        assert_eq!(m.capacity(PanelKind::SkillCategory), 10);
        assert_eq!(m.capacity(PanelKind::ProjectCard), 5);
        assert_eq!(m.capacity(PanelKind::TextLine), 40);
    }

    #[test]
    fn standard_chrome_constants() {
        let m = ViewportMetrics::new(80, 24);
        assert_eq!(m.header_height, HEADER_HEIGHT);
        assert_eq!(m.footer_height, FOOTER_HEIGHT);
        assert_eq!(m.content_height, 14);
    }
}
