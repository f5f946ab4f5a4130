pub mod json;
pub mod md;

use crate::error::AssessError;
use crate::types::report::AssessmentReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "json" => Some(Self::Json),
            "md" => Some(Self::Md),
            _ => None,
        }
    }
}

pub fn render(report: &AssessmentReport, format: OutputFormat) -> Result<String, AssessError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(AssessError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
