//! Panel formatting for one-shot output.
//!
//! Pure functions: (Portfolio, Section, OutputFormat, columns) → String.
//! No I/O, no side effects. Used by `termfolio show` and by the
//! prompt session's static panels.

use std::fmt;
use std::str::FromStr;

use serde_json::json;
use unicode_width::UnicodeWidthStr;

use crate::tui::resume::wrap;
use crate::types::{OutputFormat, Portfolio};

/// Terminal width assumed when the real one is unknown.
pub const DEFAULT_COLUMNS: u16 = 80;

/// Border plus padding around card text.
const CARD_CHROME: usize = 6;

/// Outer width of the welcome card: `columns - 10`, kept within 60..=90.
pub fn card_width(columns: u16) -> usize {
    usize::from(columns).saturating_sub(10).clamp(60, 90)
}

/// A printable portfolio section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Section {
    Welcome,
    Work,
    Education,
    Skills,
    Projects,
    Awards,
    Publications,
    Interests,
    Contact,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Section::Welcome,
        Section::Work,
        Section::Education,
        Section::Skills,
        Section::Projects,
        Section::Awards,
        Section::Publications,
        Section::Interests,
        Section::Contact,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Section::Welcome => "welcome",
            Section::Work => "work",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Awards => "awards",
            Section::Publications => "publications",
            Section::Interests => "interests",
            Section::Contact => "contact",
        }
    }

    /// Boxed heading for human output.
    pub fn heading(self) -> &'static str {
        match self {
            Section::Welcome => "WELCOME",
            Section::Work => "WORK EXPERIENCE",
            Section::Education => "EDUCATION",
            Section::Skills => "SKILLS & EXPERTISE",
            Section::Projects => "FEATURED PROJECTS",
            Section::Awards => "AWARDS & RECOGNITION",
            Section::Publications => "PUBLICATIONS & RESEARCH",
            Section::Interests => "RESEARCH INTERESTS",
            Section::Contact => "CONTACT INFORMATION",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Section::ALL
            .into_iter()
            .find(|section| section.name() == s)
            .ok_or_else(|| format!("unknown section: {}", s))
    }
}

/// Format one section for output. `columns` is the terminal width, used
/// to size the welcome card.
pub fn format_section(
    portfolio: &Portfolio,
    section: Section,
    format: OutputFormat,
    columns: u16,
) -> String {
    match format {
        OutputFormat::Human => format_human(portfolio, section, columns),
        OutputFormat::Json => format_json(portfolio, section),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(p: &Portfolio, section: Section, columns: u16) -> String {
    if section == Section::Welcome {
        return welcome_card(p, card_width(columns));
    }

    let mut out = boxed(&[section.heading()]);
    out.push('\n');

    match section {
        Section::Welcome => {}
        Section::Work => {
            for (i, job) in p.work.iter().enumerate() {
                out.push_str(&format!("{}. {}\n", i + 1, job.company));
                out.push_str(&format!("   {}\n", job.title));
                out.push_str(&format!("   {} • {}\n\n", job.period, job.location));
                for h in &job.highlights {
                    out.push_str(&format!("   • {}\n", h));
                }
                out.push('\n');
            }
        }
        Section::Education => {
            for (i, edu) in p.education.iter().enumerate() {
                out.push_str(&format!("{}. {}\n", i + 1, edu.school));
                out.push_str(&format!("   {}\n", edu.degree));
                if let Some(field) = &edu.field {
                    out.push_str(&format!("   {}\n", field));
                }
                out.push_str(&format!("   {}\n", edu.period));
                if let Some(award) = &edu.award {
                    out.push_str(&format!("   🏆 {}\n", award));
                }
                if let Some(role) = edu.role_text() {
                    out.push_str(&format!("   📚 {}\n", role));
                }
                out.push('\n');
            }
        }
        Section::Skills => {
            for category in &p.skills {
                out.push_str(&format!("{}:\n", category.name));
                out.push_str(&format!("   {}\n\n", category.skills.join(" • ")));
            }
        }
        Section::Projects => {
            for (i, project) in p.projects.iter().enumerate() {
                out.push_str(&format!("{}. {}\n", i + 1, project.name));
                out.push_str(&format!("   {}\n", project.description));
                out.push_str(&format!("   Tech: {}\n\n", project.tech.join(", ")));
            }
        }
        Section::Awards => push_numbered(&mut out, &p.awards),
        Section::Publications => push_numbered(&mut out, &p.publications),
        Section::Interests => push_numbered(&mut out, &p.interests),
        Section::Contact => {
            let c = &p.contact;
            out.push_str(&format!("Email:    {}\n", c.email));
            out.push_str(&format!("Website:  {}\n", c.website));
            out.push_str(&format!("Blog:     {}\n", c.blog));
            out.push_str(&format!("GitHub:   {}\n", c.github));
            out.push_str(&format!("LinkedIn: {}\n", c.linkedin));
            if let Some(twitter) = &c.twitter {
                out.push_str(&format!("Twitter:  {}\n", twitter));
            }
        }
    }

    out
}

fn push_numbered(out: &mut String, items: &[String]) {
    for (i, item) in items.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, item));
    }
    out.push('\n');
}

/// Welcome card no wider than `width` columns; prose wraps inside it.
fn welcome_card(p: &Portfolio, width: usize) -> String {
    let text_width = width.saturating_sub(CARD_CHROME).max(1);
    let mut lines = Vec::new();
    let title = format!("{} @ {}", p.title, p.company);
    for field in [p.name.as_str(), title.as_str(), p.location.as_str()] {
        lines.extend(wrap(field, text_width));
    }
    lines.push(String::new());
    lines.extend(wrap(&p.bio, text_width));
    if let Some(tagline) = &p.tagline {
        lines.push(String::new());
        lines.extend(wrap(&format!("\"{}\"", tagline), text_width));
    }
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    boxed(&refs)
}

/// Farewell card printed when prompt mode exits.
pub fn farewell_card(p: &Portfolio) -> String {
    boxed(&[
        "Thanks for exploring my portfolio!",
        "",
        "Feel free to reach out:",
        p.contact.email.as_str(),
    ])
}

/// Draw a rounded box around centered lines, sized by display columns.
pub fn boxed(lines: &[&str]) -> String {
    let inner = lines.iter().map(|l| l.width()).max().unwrap_or(0) + 4;
    let mut out = format!("╭{}╮\n", "─".repeat(inner));
    for line in lines {
        let len = line.width();
        let left = (inner - len) / 2;
        let right = inner - len - left;
        out.push_str(&format!("│{}{}{}│\n", " ".repeat(left), line, " ".repeat(right)));
    }
    out.push_str(&format!("╰{}╯\n", "─".repeat(inner)));
    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(p: &Portfolio, section: Section) -> String {
    let value = match section {
        Section::Welcome => json!({
            "name": p.name,
            "title": p.title,
            "company": p.company,
            "location": p.location,
            "bio": p.bio,
            "tagline": p.tagline,
        }),
        Section::Work => json!(p.work),
        Section::Education => json!(p.education),
        Section::Skills => json!(p.skills),
        Section::Projects => json!(p.projects),
        Section::Awards => json!(p.awards),
        Section::Publications => json!(p.publications),
        Section::Interests => json!(p.interests),
        Section::Contact => json!(p.contact),
    };
    // Value → String cannot fail
    serde_json::to_string_pretty(&value).unwrap_or_default()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio;

    #[test]
    fn section_parses_case_insensitively() {
        assert_eq!("Work".parse::<Section>().unwrap(), Section::Work);
        assert_eq!("  skills ".parse::<Section>().unwrap(), Section::Skills);
        assert!("resume".parse::<Section>().is_err());
    }

    #[test]
    fn section_display_round_trips_name() {
        for section in Section::ALL {
            assert_eq!(section.to_string().parse::<Section>().unwrap(), section);
        }
    }

    #[test]
    fn work_lists_companies_numbered() {
        let p = portfolio::bundled().unwrap();
        let out = format_section(&p, Section::Work, OutputFormat::Human, DEFAULT_COLUMNS);
        assert!(out.contains("WORK EXPERIENCE"));
        assert!(out.contains(&format!("1. {}", p.work[0].company)));
        assert!(out.contains(&format!("   • {}", p.work[0].highlights[0])));
    }

    #[test]
    fn education_shows_awards_and_roles() {
        let p = portfolio::bundled().unwrap();
        let out = format_section(&p, Section::Education, OutputFormat::Human, DEFAULT_COLUMNS);
        assert!(out.contains("🏆"));
        assert!(out.contains("📚"));
    }

    #[test]
    fn skills_join_with_bullets() {
        let p = portfolio::bundled().unwrap();
        let out = format_section(&p, Section::Skills, OutputFormat::Human, DEFAULT_COLUMNS);
        assert!(out.contains(&p.skills[0].skills.join(" • ")));
    }

    #[test]
    fn contact_lists_email_and_links() {
        let p = portfolio::bundled().unwrap();
        let out = format_section(&p, Section::Contact, OutputFormat::Human, DEFAULT_COLUMNS);
        assert!(out.contains(&p.contact.email));
        assert!(out.contains(&p.contact.github));
    }

    #[test]
    fn welcome_card_is_boxed() {
        let p = portfolio::bundled().unwrap();
        let out = format_section(&p, Section::Welcome, OutputFormat::Human, DEFAULT_COLUMNS);
        assert!(out.starts_with('╭'));
        assert!(out.contains(&p.name));
        assert!(out.contains(&p.bio));
    }

    #[test]
    fn boxed_lines_have_equal_width() {
        let out = boxed(&["a", "longer line", ""]);
        let widths: Vec<usize> = out.lines().map(|l| l.width()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{:?}", widths);
    }

    #[test]
    fn boxed_aligns_wide_characters() {
        let out = boxed(&["Café 東京 🏆 award", "plain ascii line here"]);
        let widths: Vec<usize> = out.lines().map(|l| l.width()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{:?}", widths);
        // "Café 東京 🏆 award" spans 18 columns, plus padding and borders.
        assert_eq!(widths[0], 18 + 4 + 2);
    }

    #[test]
    fn card_width_follows_terminal_within_bounds() {
        assert_eq!(card_width(40), 60);
        assert_eq!(card_width(80), 70);
        assert_eq!(card_width(200), 90);
    }

    #[test]
    fn long_bio_wraps_inside_card() {
        let mut p = portfolio::bundled().unwrap();
        p.bio = "reliable systems ".repeat(30);
        for columns in [40u16, 80, 120, 300] {
            let out = format_section(&p, Section::Welcome, OutputFormat::Human, columns);
            let max = out.lines().map(|l| l.width()).max().unwrap();
            assert!(max <= card_width(columns), "{} > {}", max, card_width(columns));
            assert!(out.lines().count() > 8);
        }
    }

    #[test]
    fn json_projects_is_valid_array() {
        let p = portfolio::bundled().unwrap();
        let out = format_section(&p, Section::Projects, OutputFormat::Json, DEFAULT_COLUMNS);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), p.projects.len());
    }

    #[test]
    fn json_welcome_has_name() {
        let p = portfolio::bundled().unwrap();
        let out = format_section(&p, Section::Welcome, OutputFormat::Json, DEFAULT_COLUMNS);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["name"], p.name.as_str());
    }

    #[test]
    fn every_section_formats_in_both_formats() {
        let p = portfolio::bundled().unwrap();
        for section in Section::ALL {
            assert!(!format_section(&p, section, OutputFormat::Human, DEFAULT_COLUMNS).is_empty());
            assert!(!format_section(&p, section, OutputFormat::Json, DEFAULT_COLUMNS).is_empty());
        }
    }
}
