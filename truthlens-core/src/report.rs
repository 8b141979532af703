use serde::Serialize;

use crate::config::Variant;
use crate::types::{AnalysisInput, AnalysisOutcome, InputMode};

pub const REPORT_FILENAME: &str = "truthlens-report.json";

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub variant: Variant,
    pub generated_at: String,
    pub input: InputSummary,
    pub outcome: &'a AnalysisOutcome,
}

/// What was analyzed, without the content itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputSummary {
    pub mode: InputMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
}

impl From<&AnalysisInput> for InputSummary {
    fn from(input: &AnalysisInput) -> Self {
        match input {
            AnalysisInput::Text { text } => Self {
                mode: InputMode::Text,
                text_length: Some(text.chars().count()),
                file_name: None,
                file_size: None,
                media_type: None,
            },
            AnalysisInput::Media { mode, name, size, media_type } => Self {
                mode: *mode,
                text_length: None,
                file_name: Some(name.clone()),
                file_size: Some(*size),
                media_type: Some(media_type.clone()),
            },
        }
    }
}

pub fn report_json(
    variant: Variant,
    generated_at: impl Into<String>,
    input: &AnalysisInput,
    outcome: &AnalysisOutcome,
) -> Result<String, serde_json::Error> {
    let report = Report {
        variant,
        generated_at: generated_at.into(),
        input: InputSummary::from(input),
        outcome,
    };
    serde_json::to_string_pretty(&report)
}
