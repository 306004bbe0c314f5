//! Non-interactive renderings of the map: plain text, Markdown and JSON.

pub mod export;
pub mod markdown;
pub mod text;

use std::fmt;
use std::str::FromStr;

use crate::error::DepMapError;
use crate::expansion::ExpansionState;

pub use export::MapExport;
pub use markdown::MarkdownReportGenerator;
pub use text::TextReportGenerator;

/// Output format of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Markdown,
    Json,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Text => "text",
            Format::Markdown => "markdown",
            Format::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = DepMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Format::Text),
            "markdown" | "md" => Ok(Format::Markdown),
            "json" => Ok(Format::Json),
            _ => Err(DepMapError::UnknownFormat(s.to_string())),
        }
    }
}

/// Render the whole page in `format`.
///
/// JSON always carries every item; the expansion state only shapes the
/// text and Markdown outputs.
pub fn render(format: Format, expansion: &ExpansionState) -> Result<String, DepMapError> {
    match format {
        Format::Text => Ok(TextReportGenerator.generate(expansion)),
        Format::Markdown => Ok(MarkdownReportGenerator.generate(expansion)),
        Format::Json => MapExport::current().to_json(),
    }
}
