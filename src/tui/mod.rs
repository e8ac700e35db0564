//! Full-screen tabbed viewer.
//!
//! Organized along FP/Unix boundaries:
//! - `scroll`, `viewport`, `tabs`, `theme`: small pure controllers
//! - `state`: viewer model (App, NavigationState, Action, Transition)
//! - `update`: pure input routing
//! - `view`: pure rendering
//! - `run`: effects (terminal lifecycle, event loop)

pub mod resume;
pub mod run;
pub mod scroll;
pub mod state;
pub mod tabs;
pub mod theme;
pub mod update;
pub mod view;
pub mod viewport;

pub use run::run;
pub use tabs::{Tab, TabController};
