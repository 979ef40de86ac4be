//! Output options.

use std::str::FromStr;

/// How a triangle is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line per row (default)
    #[default]
    Text,
    /// A single JSON document describing every row
    Json,
}

impl OutputFormat {
    /// Whether this format produces structured (machine-readable) output
    pub fn is_structured(&self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
