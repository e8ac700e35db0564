//! Long-form resume text for the Resume tab.
//!
//! Built once per run. Lines carry a kind instead of a style so that a
//! theme toggle restyles them without rebuilding. Prose is wrapped here
//! at a fixed width, which keeps the line count (and so the scroll
//! bounds) independent of terminal width.

use unicode_width::UnicodeWidthStr;

use crate::types::Portfolio;

/// Width of section rules and wrapped prose.
pub const RESUME_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Rule,
    Heading,
    EntryTitle,
    Body,
    Dim,
    Award,
    Role,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeLine {
    pub kind: LineKind,
    pub text: String,
}

impl ResumeLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        ResumeLine { kind, text: text.into() }
    }

    fn blank() -> Self {
        ResumeLine::new(LineKind::Blank, "")
    }
}

/// Flatten the portfolio into resume lines.
pub fn build(portfolio: &Portfolio) -> Vec<ResumeLine> {
    let mut out = Vec::new();

    section(&mut out, "PROFESSIONAL SUMMARY");
    push_wrapped(&mut out, LineKind::Body, "", &portfolio.summary);
    out.push(ResumeLine::blank());

    section(&mut out, "PROFESSIONAL EXPERIENCE");
    for job in &portfolio.work {
        out.push(ResumeLine::new(
            LineKind::EntryTitle,
            format!("● {}", job.company.to_uppercase()),
        ));
        out.push(ResumeLine::new(LineKind::Body, format!("  {}", job.title)));
        out.push(ResumeLine::new(
            LineKind::Dim,
            format!("  {} • {}", job.period, job.location),
        ));
        for h in &job.highlights {
            push_wrapped(&mut out, LineKind::Body, "  • ", h);
        }
        out.push(ResumeLine::blank());
    }

    section(&mut out, "EDUCATION");
    for edu in &portfolio.education {
        out.push(ResumeLine::new(
            LineKind::EntryTitle,
            format!("● {}", edu.school.to_uppercase()),
        ));
        let degree = match &edu.field {
            Some(field) => format!("{} — {}", edu.degree, field),
            None => edu.degree.clone(),
        };
        push_wrapped(&mut out, LineKind::Body, "  ", &degree);
        out.push(ResumeLine::new(LineKind::Dim, format!("  {}", edu.period)));
        if let Some(award) = &edu.award {
            push_wrapped(&mut out, LineKind::Award, "  🏆 ", award);
        }
        if let Some(role) = edu.role_text() {
            push_wrapped(&mut out, LineKind::Role, "  📚 ", &role);
        }
        out.push(ResumeLine::blank());
    }

    section(&mut out, "SKILLS & EXPERTISE");
    for category in &portfolio.skills {
        out.push(ResumeLine::new(LineKind::EntryTitle, category.name.to_uppercase()));
        push_wrapped(&mut out, LineKind::Body, "", &category.skills.join(" • "));
        out.push(ResumeLine::blank());
    }

    section(&mut out, "KEY PROJECTS");
    for project in &portfolio.projects {
        out.push(ResumeLine::new(
            LineKind::EntryTitle,
            format!("● {}", project.name.to_uppercase()),
        ));
        push_wrapped(&mut out, LineKind::Body, "  ", &project.description);
        push_wrapped(
            &mut out,
            LineKind::Dim,
            "  ",
            &format!("Tech: {}", project.tech.join(", ")),
        );
        out.push(ResumeLine::blank());
    }

    out.push(ResumeLine::new(LineKind::Dim, "─".repeat(RESUME_WIDTH)));
    out.push(ResumeLine::new(LineKind::Dim, portfolio.name.clone()));

    out
}

fn section(out: &mut Vec<ResumeLine>, title: &str) {
    out.push(ResumeLine::new(LineKind::Rule, "━".repeat(RESUME_WIDTH)));
    out.push(ResumeLine::new(LineKind::Heading, title));
    out.push(ResumeLine::new(LineKind::Rule, "━".repeat(RESUME_WIDTH)));
}

/// Wrap `text` with `prefix` on the first line and matching indent after.
fn push_wrapped(out: &mut Vec<ResumeLine>, kind: LineKind, prefix: &str, text: &str) {
    let indent = " ".repeat(prefix.width());
    let width = RESUME_WIDTH.saturating_sub(indent.len()).max(1);
    for (i, line) in wrap(text, width).into_iter().enumerate() {
        let lead = if i == 0 { prefix } else { indent.as_str() };
        out.push(ResumeLine::new(kind, format!("{}{}", lead, line)));
    }
}

/// Greedy word wrap by display columns. Words wider than `width` get a
/// line of their own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

// ============================================================================
// TESTS
// ============================================================================
