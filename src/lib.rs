//! # stylog
//!
//! Category-colored console messages for developers.
//!
//! ```no_run
//! stylog::log_styled("Text Message", "info");
//! ```

pub mod cli;
pub mod style;
pub mod ui;

pub use style::Category;
pub use ui::display::{log_styled, render, write_styled, OutputFormat};
