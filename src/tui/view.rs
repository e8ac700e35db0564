//! Pure rendering: map App state to ratatui widget trees.
//!
//! Layout is recomputed from the frame size on every draw: header
//! (banner + tab bar), scrollable content, footer (keys + status). Each
//! tab has a dedicated render function; the only effect is
//! `Frame::render_widget()` writing into the terminal buffer.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Tabs, Wrap};

use crate::types::{EducationEntry, Portfolio, Project, SkillCategory, WorkEntry};

use super::resume::{LineKind, ResumeLine};
use super::scroll::{ScrollableList, Window};
use super::state::App;
use super::tabs::Tab;
use super::theme::{self, Palette};
use super::viewport::{PanelKind, ViewportMetrics};

/// Key legend shown in the footer.
pub const KEY_LEGEND: &str = "← → Navigate Tabs  •  ↑ ↓ Scroll Content  •  T Theme Toggle  •  Q Quit";

/// Rows inside one project card's border.
const CARD_BODY_HEIGHT: u16 = 5;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the whole viewer to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let metrics = ViewportMetrics::new(area.width, area.height);
    let palette = app.nav.theme.palette();

    frame.render_widget(Block::new().style(palette.base()), area);

    let chunks = Layout::vertical([
        Constraint::Length(metrics.header_height),
        Constraint::Min(0),
        Constraint::Length(metrics.footer_height),
    ])
    .split(area);

    render_header(app, palette, frame, chunks[0]);
    render_footer(app, palette, frame, chunks[2]);

    let content = Block::new()
        .padding(Padding::horizontal(1))
        .inner(chunks[1]);

    let tab = app.nav.active_tab();
    let capacity = tab.panel_kind().map(|kind| metrics.capacity(kind)).unwrap_or(0);
    let scroll = app.nav.scroll(tab);

    match tab {
        Tab::Home => render_home(app.portfolio, palette, frame, content),
        Tab::Contact => render_contact(app.portfolio, palette, frame, content),
        Tab::Resume => {
            let window = ScrollableList::new(&app.resume, capacity).window(&scroll);
            render_resume(&window, palette, frame, content);
        }
        Tab::Work => {
            let window = ScrollableList::new(&app.portfolio.work, capacity).window(&scroll);
            let lines = window.visible.iter().flat_map(|e| work_lines(e, palette)).collect();
            render_list(lines, timeline_hint(&window), palette, frame, content);
        }
        Tab::Education => {
            let window = ScrollableList::new(&app.portfolio.education, capacity).window(&scroll);
            let lines = window
                .visible
                .iter()
                .flat_map(|e| education_lines(e, palette))
                .collect();
            render_list(lines, timeline_hint(&window), palette, frame, content);
        }
        Tab::Skills => {
            let window = ScrollableList::new(&app.portfolio.skills, capacity).window(&scroll);
            let lines = window.visible.iter().flat_map(|c| skill_lines(c, palette)).collect();
            let hint = scroll_hint(&window, "Showing ", " categories");
            render_list(lines, hint, palette, frame, content);
        }
        Tab::Projects => {
            let window = ScrollableList::new(&app.portfolio.projects, capacity).window(&scroll);
            render_projects(&window, palette, frame, content);
        }
    }
}

// ============================================================================
// HEADER / FOOTER
// ============================================================================

fn render_header(app: &App, palette: &Palette, frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Length(3)]).split(area);
    let p = app.portfolio;

    let banner = Paragraph::new(vec![
        Line::from(Span::styled(spaced_upper(&p.name), palette.heading())),
        Line::from(vec![
            Span::styled(p.title.clone(), palette.accent()),
            Span::styled(" @ ", palette.dim()),
            Span::styled(p.company.clone(), palette.accent_bold()),
        ]),
        Line::from(Span::styled(p.location.clone(), palette.dim())),
    ])
    .block(Block::new().padding(Padding::horizontal(1)));
    frame.render_widget(banner, chunks[0]);

    let titles: Vec<Line> = app.nav.tabs.tabs().iter().map(|t| Line::from(t.title())).collect();
    let tabs = Tabs::new(titles)
        .select(app.nav.tabs.index())
        .style(palette.dim())
        .highlight_style(palette.heading())
        .divider(Span::styled("│", palette.dim()))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(palette.accent()),
        );
    frame.render_widget(tabs, chunks[1]);
}

fn render_footer(app: &App, palette: &Palette, frame: &mut Frame, area: Rect) {
    let status = format!(
        "{}  •  {} theme",
        app.nav.active_tab().title(),
        app.nav.theme.name().label()
    );
    let footer = Paragraph::new(vec![
        Line::from(Span::styled(KEY_LEGEND, palette.accent_bold())),
        Line::from(Span::styled(status, palette.dim())),
    ])
    .alignment(Alignment::Center)
    .block(Block::bordered().border_style(palette.accent()));
    frame.render_widget(footer, area);
}

/// "Ada Lovelace" → "A D A   L O V E L A C E"
fn spaced_upper(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            word.to_uppercase()
                .chars()
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("   ")
}

// ============================================================================
// FIXED PANELS
// ============================================================================

fn render_home(p: &Portfolio, palette: &Palette, frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([Constraint::Length(5), Constraint::Min(0)]).split(area);

    let intro = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "👋 Welcome to my interactive CLI Resume",
            palette.heading(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} @ {}", p.title, p.company),
            palette.accent_bold(),
        )),
        Line::from(Span::styled(p.location.clone(), palette.dim())),
    ]);
    frame.render_widget(intro, chunks[0]);

    let summary = Paragraph::new(Span::styled(p.summary.clone(), palette.text()))
        .wrap(Wrap { trim: true })
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(palette.accent())
                .padding(Padding::uniform(1)),
        );
    frame.render_widget(summary, chunks[1]);
}

fn render_contact(p: &Portfolio, palette: &Palette, frame: &mut Frame, area: Rect) {
    let c = &p.contact;
    let mut rows = vec![
        ("✉  Email:   ", c.email.as_str()),
        ("🌐 Website: ", c.website.as_str()),
        ("🐙 GitHub:  ", c.github.as_str()),
        ("💼 LinkedIn:", c.linkedin.as_str()),
        ("📝 Blog:    ", c.blog.as_str()),
    ];
    if let Some(twitter) = &c.twitter {
        rows.push(("🐦 Twitter: ", twitter.as_str()));
    }

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("📬 CONTACT INFORMATION", palette.heading())),
        Line::from(""),
    ];
    for (label, value) in rows {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", label), palette.text()),
            Span::styled(value.to_string(), palette.accent()),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

// ============================================================================
// SCROLLABLE PANELS
// ============================================================================

/// Items on top, hint line at the bottom.
fn render_list(
    lines: Vec<Line<'static>>,
    hint: Option<String>,
    palette: &Palette,
    frame: &mut Frame,
    area: Rect,
) {
    let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(area);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[0]);
    if let Some(hint) = hint {
        let hint = Paragraph::new(Span::styled(hint, palette.dim())).alignment(Alignment::Center);
        frame.render_widget(hint, chunks[1]);
    }
}

fn render_resume(window: &Window<ResumeLine>, palette: &Palette, frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = window
        .visible
        .iter()
        .map(|l| Line::from(Span::styled(l.text.clone(), resume_style(l.kind, palette))))
        .collect();
    let hint = format!("↑ ↓ Scroll • Line {}/{}", window.offset + 1, window.total);
    render_list(lines, Some(hint), palette, frame, area);
}

fn resume_style(kind: LineKind, palette: &Palette) -> ratatui::style::Style {
    match kind {
        LineKind::Rule | LineKind::Heading => palette.heading(),
        LineKind::EntryTitle => palette.accent_bold(),
        LineKind::Body | LineKind::Blank => palette.text(),
        LineKind::Dim => palette.dim(),
        LineKind::Award => theme::STYLE_AWARD,
        LineKind::Role => theme::STYLE_ROLE,
    }
}

fn work_lines(job: &WorkEntry, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(format!("● {}", job.company), palette.heading())),
        Line::from(Span::styled(format!("  {}", job.title), palette.accent())),
        Line::from(Span::styled(
            format!("  {} • {}", job.period, job.location),
            palette.dim(),
        )),
    ];
    for h in &job.highlights {
        lines.push(Line::from(Span::styled(format!("  • {}", h), palette.text())));
    }
    lines.push(Line::from(""));
    lines
}

fn education_lines(edu: &EducationEntry, palette: &Palette) -> Vec<Line<'static>> {
    let mut title = vec![Span::styled(format!("  {}", edu.degree), palette.accent())];
    if let Some(field) = &edu.field {
        title.push(Span::styled(format!(" — {}", field), palette.text()));
    }

    let mut lines = vec![
        Line::from(Span::styled(format!("● {}", edu.school), palette.heading())),
        Line::from(title),
        Line::from(Span::styled(format!("  {}", edu.period), palette.dim())),
    ];
    if let Some(award) = &edu.award {
        lines.push(Line::from(Span::styled(format!("  🏆 {}", award), theme::STYLE_AWARD)));
    }
    if let Some(role) = edu.role_text() {
        lines.push(Line::from(Span::styled(format!("  📚 {}", role), theme::STYLE_ROLE)));
    }
    lines.push(Line::from(""));
    lines
}

fn skill_lines(category: &SkillCategory, palette: &Palette) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(category.name.to_uppercase(), palette.accent_bold())),
        Line::from(Span::styled(category.skills.join(" • "), palette.text())),
        Line::from(""),
    ]
}

fn render_projects(window: &Window<Project>, palette: &Palette, frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(area);

    let card_height = CARD_BODY_HEIGHT + 2;
    let gap = PanelKind::ProjectCard.item_height() - card_height;
    let mut constraints = Vec::new();
    for _ in window.visible {
        constraints.push(Constraint::Length(card_height));
        constraints.push(Constraint::Length(gap));
    }
    constraints.push(Constraint::Min(0));
    let slots = Layout::vertical(constraints).split(chunks[0]);

    for (i, project) in window.visible.iter().enumerate() {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(project.name.to_uppercase(), palette.heading())),
            Line::from(""),
            Line::from(Span::styled(project.description.clone(), palette.text())),
            Line::from(""),
            Line::from(Span::styled(
                format!("Tech: {}", project.tech.join(", ")),
                palette.dim(),
            )),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(palette.accent())
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(card, slots[i * 2]);
    }

    if let Some(hint) = scroll_hint(window, "Project ", "") {
        let hint = Paragraph::new(Span::styled(hint, palette.dim())).alignment(Alignment::Center);
        frame.render_widget(hint, chunks[1]);
    }
}

// ============================================================================
// HINTS
// ============================================================================

fn timeline_hint<T>(window: &Window<T>) -> Option<String> {
    scroll_hint(window, "", "")
}

/// "↑ Scroll ↓  •  3-4 of 7", or `None` when everything is visible.
fn scroll_hint<T>(window: &Window<T>, prefix: &str, suffix: &str) -> Option<String> {
    if !window.has_previous && !window.has_more {
        return None;
    }
    let (first, last) = window.range()?;
    let mut arrows = Vec::with_capacity(3);
    if window.has_previous {
        arrows.push("↑");
    }
    arrows.push("Scroll");
    if window.has_more {
        arrows.push("↓");
    }
    Some(format!(
        "{}  •  {}{}-{} of {}{}",
        arrows.join(" "),
        prefix,
        first,
        last,
        window.total,
        suffix
    ))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio;
    use crate::tui::scroll::ScrollState;
    use crate::tui::state::Action;
    use crate::tui::update::update;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn make_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(width, height)).unwrap()
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    fn show(app: &mut App, tab: Tab) {
        let m = ViewportMetrics::new(100, 30);
        while app.nav.active_tab() != tab {
            update(app, &Action::NextTab, &m);
        }
    }

    #[test]
    fn every_tab_renders_without_panic() {
        let p = portfolio::bundled().unwrap();
        let mut app = App::new(&p);
        let mut terminal = make_terminal(100, 30);
        for _ in 0..app.nav.tabs.len() {
            terminal
                .draw(|frame| render(&app, frame))
                .expect("render should not panic");
            update(&mut app, &Action::NextTab, &ViewportMetrics::new(100, 30));
        }
    }

    #[test]
    fn tiny_terminal_renders_without_panic() {
        let p = portfolio::bundled().unwrap();
        let mut app = App::new(&p);
        for (w, h) in [(1, 1), (10, 3), (20, 10)] {
            let mut terminal = make_terminal(w, h);
            for _ in 0..app.nav.tabs.len() {
                terminal.draw(|frame| render(&app, frame)).unwrap();
                update(&mut app, &Action::NextTab, &ViewportMetrics::new(w, h));
            }
        }
    }

    #[test]
    fn header_shows_tab_titles_and_footer_shows_keys() {
        let p = portfolio::bundled().unwrap();
        let app = App::new(&p);
        let mut terminal = make_terminal(100, 30);
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_text(&terminal);
        for tab in Tab::ALL {
            assert!(content.contains(tab.title()), "missing tab {}", tab.title());
        }
        assert!(content.contains("Theme Toggle"));
        assert!(content.contains("dark theme"));
    }

    #[test]
    fn theme_toggle_changes_status_line() {
        let p = portfolio::bundled().unwrap();
        let mut app = App::new(&p);
        update(&mut app, &Action::ToggleTheme, &ViewportMetrics::new(100, 30));
        let mut terminal = make_terminal(100, 30);
        terminal.draw(|frame| render(&app, frame)).unwrap();
        assert!(buffer_text(&terminal).contains("light theme"));
    }

    #[test]
    fn home_shows_welcome() {
        let p = portfolio::bundled().unwrap();
        let app = App::new(&p);
        let mut terminal = make_terminal(100, 30);
        terminal.draw(|frame| render(&app, frame)).unwrap();
        assert!(buffer_text(&terminal).contains("Welcome"));
    }

    #[test]
    fn work_tab_shows_first_company_and_hint() {
        let p = portfolio::bundled().unwrap();
        let mut app = App::new(&p);
        show(&mut app, Tab::Work);
        let mut terminal = make_terminal(100, 24);
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_text(&terminal);
        assert!(content.contains(&p.work[0].company));
        // Three entries, capacity two on 24 rows.
        assert!(content.contains("1-2 of 3"));
    }

    #[test]
    fn scrolled_projects_show_later_card() {
        let mut p = portfolio::bundled().unwrap();
        p.projects = (0..7)
            .map(|i| Project {
                name: format!("proj{}", i),
                description: "d".into(),
                tech: vec![],
            })
            .collect();
        let mut app = App::new(&p);
        show(&mut app, Tab::Projects);
        *app.nav.scroll_mut(Tab::Projects) = ScrollState::at(3);

        let mut terminal = make_terminal(80, 24);
        terminal.draw(|frame| render(&app, frame)).unwrap();
        let content = buffer_text(&terminal);
        assert!(content.contains("PROJ3"));
        assert!(!content.contains("PROJ0"));
        assert!(content.contains("Project 4-4 of 7"));
    }

    #[test]
    fn resume_shows_line_counter() {
        let p = portfolio::bundled().unwrap();
        let mut app = App::new(&p);
        show(&mut app, Tab::Resume);
        let mut terminal = make_terminal(100, 30);
        terminal.draw(|frame| render(&app, frame)).unwrap();
        let content = buffer_text(&terminal);
        assert!(content.contains("PROFESSIONAL SUMMARY"));
        assert!(content.contains(&format!("Line 1/{}", app.resume.len())));
    }

    #[test]
    fn contact_lists_email() {
        let p = portfolio::bundled().unwrap();
        let mut app = App::new(&p);
        show(&mut app, Tab::Contact);
        let mut terminal = make_terminal(100, 30);
        terminal.draw(|frame| render(&app, frame)).unwrap();
        assert!(buffer_text(&terminal).contains(&p.contact.email));
    }

    #[test]
    fn hint_absent_when_everything_fits() {
        let items = [1, 2];
        let w = ScrollableList::new(&items, 5).window(&ScrollState::default());
        assert!(scroll_hint(&w, "", "").is_none());
    }

    #[test]
    fn hint_shows_arrows_for_each_direction() {
        let items: Vec<usize> = (0..7).collect();
        let list = ScrollableList::new(&items, 2);

        let top = scroll_hint(&list.window(&ScrollState::default()), "", "").unwrap();
        assert_eq!(top, "Scroll ↓  •  1-2 of 7");

        let middle = scroll_hint(&list.window(&ScrollState::at(3)), "", "").unwrap();
        assert_eq!(middle, "↑ Scroll ↓  •  4-5 of 7");

        let bottom =
            scroll_hint(&list.window(&ScrollState::at(5)), "Showing ", " categories").unwrap();
        assert_eq!(bottom, "↑ Scroll  •  Showing 6-7 of 7 categories");
    }

    #[test]
    fn hint_separator_spacing_is_even() {
        let items: Vec<usize> = (0..7).collect();
        let list = ScrollableList::new(&items, 2);
        for offset in [0, 3, 5] {
            let hint = scroll_hint(&list.window(&ScrollState::at(offset)), "", "").unwrap();
            assert_eq!(hint.matches("  •  ").count(), 1, "{:?}", hint);
            assert!(!hint.contains("   "), "{:?}", hint);
        }
    }

    #[test]
    fn spaced_upper_spreads_letters() {
        assert_eq!(spaced_upper("Ada Lo"), "A D A   L O");
    }
}
