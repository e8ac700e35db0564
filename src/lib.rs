//! termfolio: a personal portfolio for the terminal.
//!
//! Two front ends share one read-only [`types::Portfolio`]: a line-based
//! prompt (`prompt`, `report`, `links`) and a full-screen tabbed viewer
//! (`tui`).

pub mod config;
pub mod links;
pub mod logging;
pub mod portfolio;
pub mod prompt;
pub mod report;
pub mod tui;
pub mod types;
