//! Portfolio loading.
//!
//! The portfolio is a JSON document. A default copy is compiled into the
//! binary; `--data` (or `data_path` in the config file) points at a
//! replacement. Loading happens once at startup. The result is handed to
//! the views by reference and never touched again.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::Portfolio;

/// The document shipped with the binary.
const BUNDLED: &str = include_str!("../data/portfolio.json");

/// Error while loading a portfolio document.
#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("could not read portfolio {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid portfolio JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("portfolio is missing a required field: {0}")]
    MissingField(&'static str),
}

/// The bundled portfolio.
pub fn bundled() -> Result<Portfolio, PortfolioError> {
    from_json(BUNDLED)
}

/// Load from a file, or fall back to the bundled document.
pub fn load(path: Option<&Path>) -> Result<Portfolio, PortfolioError> {
    match path {
        Some(p) => load_file(p),
        None => bundled(),
    }
}

/// Load and validate a portfolio file.
pub fn load_file(path: &Path) -> Result<Portfolio, PortfolioError> {
    let text = std::fs::read_to_string(path).map_err(|source| PortfolioError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let portfolio = from_json(&text)?;
    tracing::info!(path = %path.display(), "loaded portfolio");
    Ok(portfolio)
}

/// Parse and validate a portfolio from JSON text.
pub fn from_json(text: &str) -> Result<Portfolio, PortfolioError> {
    let portfolio: Portfolio = serde_json::from_str(text)?;
    validate(&portfolio)?;
    Ok(portfolio)
}

/// Reject documents the views cannot present sensibly.
fn validate(portfolio: &Portfolio) -> Result<(), PortfolioError> {
    if portfolio.name.trim().is_empty() {
        return Err(PortfolioError::MissingField("name"));
    }
    if portfolio.contact.email.trim().is_empty() {
        return Err(PortfolioError::MissingField("contact.email"));
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
