//! Shared pieces of the `budget` and `loan-schedule` command-line tools.

pub mod config;
pub mod logging;
pub mod render;

pub use config::{ConfigError, default_budget, load_budget, parse_budget};
pub use render::{HoverArg, render_outcome, render_view};
