//! Domain types for termfolio.
//!
//! The portfolio is plain read-only data: built once at startup by
//! [`crate::portfolio`], then borrowed by every view. Nothing here is
//! ever mutated after loading.

use serde::{Deserialize, Serialize};

// ============================================================================
// PORTFOLIO
// ============================================================================

/// The whole portfolio document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub name: String,
    pub title: String,
    pub company: String,
    pub location: String,
    /// One-line bio shown on the welcome card.
    pub bio: String,
    /// Long-form professional summary (Home and Resume tabs).
    pub summary: String,
    /// Closing quote on the welcome card.
    #[serde(default)]
    pub tagline: Option<String>,
    pub contact: Contact,
    #[serde(default)]
    pub work: Vec<WorkEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    /// Ordered categories; order in the document is display order.
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub awards: Vec<String>,
    #[serde(default)]
    pub publications: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

/// Ways to reach the portfolio owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub website: String,
    pub blog: String,
    pub github: String,
    pub linkedin: String,
    #[serde(default)]
    pub twitter: Option<String>,
}

/// One position in the work history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkEntry {
    pub company: String,
    pub title: String,
    pub period: String,
    pub location: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// One degree or course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    #[serde(default)]
    pub field: Option<String>,
    pub period: String,
    #[serde(default)]
    pub award: Option<String>,
    /// e.g. "Graduate Teaching Assistant to"
    #[serde(default)]
    pub role: Option<String>,
    /// Completes `role`, e.g. "Prof. Jane Doe".
    #[serde(default)]
    pub advisor: Option<String>,
}

impl EducationEntry {
    /// Role line with the advisor appended when present.
    pub fn role_text(&self) -> Option<String> {
        self.role.as_ref().map(|role| match &self.advisor {
            Some(advisor) => format!("{} {}", role, advisor),
            None => role.clone(),
        })
    }
}

/// A named group of skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

/// A featured project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
}

// ============================================================================
// OUTPUT
// ============================================================================

/// Output format for printed panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// TESTS
// ============================================================================
