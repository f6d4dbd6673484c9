//! Output renderers: terminal listing and JSON.

pub mod json;
pub mod terminal;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::User;

/// Trait for rendering the user list to an output format.
pub trait OutputRenderer {
    /// Render the list to a string.
    fn render(&self, users: &[User]) -> String;
}

/// Selectable output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored listing for humans.
    #[default]
    Terminal,
    /// Pretty-printed JSON for piping.
    Json,
}

impl OutputFormat {
    /// Render the list with the renderer matching this format.
    pub fn render(&self, users: &[User]) -> String {
        match self {
            OutputFormat::Terminal => terminal::TerminalRenderer.render(users),
            OutputFormat::Json => json::JsonRenderer.render(users),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Terminal => write!(f, "terminal"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unsupported format: '{other}'. Supported: terminal, json"
            )),
        }
    }
}
