//! Output formatting for views.
//!
//! - [`terminal`] - colored text and the display labels
//! - [`json`] - JSON for scripting

pub mod json;
pub mod terminal;

use crate::models::AddrError;
use crate::processing::ViewModel;

pub use json::render_json;
pub use terminal::{category_label, render_result, status_led};

/// How a view is written to stdout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl OutputFormat {
    pub fn render(self, result: &Result<ViewModel, AddrError>) -> Result<String, serde_json::Error> {
        match self {
            OutputFormat::Terminal => Ok(render_result(result)),
            OutputFormat::Json => render_json(result),
        }
    }
}
