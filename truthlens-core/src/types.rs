use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Text,
    Image,
    Audio,
    Video,
}

impl InputMode {
    pub const ALL: [InputMode; 4] = [Self::Text, Self::Image, Self::Audio, Self::Video];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Video => "video",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Image => "Image",
            Self::Audio => "Audio",
            Self::Video => "Video",
        }
    }

    pub fn accepts_files(self) -> bool {
        !matches!(self, Self::Text)
    }

    /// Declared media-type prefix a staged file must carry in this mode.
    pub fn media_prefix(self) -> Option<&'static str> {
        match self {
            Self::Text => None,
            Self::Image => Some("image/"),
            Self::Audio => Some("audio/"),
            Self::Video => Some("video/"),
        }
    }

    /// Value for the file picker's `accept` attribute.
    pub fn accept_attr(self) -> &'static str {
        match self {
            Self::Text => "",
            Self::Image => "image/*",
            Self::Audio => "audio/*",
            Self::Video => "video/*",
        }
    }

    /// File mode matching a declared media type, if any.
    pub fn for_media_type(media_type: &str) -> Option<Self> {
        let media_type = media_type.to_ascii_lowercase();
        [Self::Image, Self::Audio, Self::Video]
            .into_iter()
            .find(|m| m.media_prefix().is_some_and(|p| media_type.starts_with(p)))
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown input mode '{s}'"))
    }
}

/// A user-selected file. `B` is the blob handle: `web_sys::File` in the
/// browser, `()` in tests. Only the declared type and size are ever read.
#[derive(Clone, Debug, PartialEq)]
pub struct StagedFile<B> {
    pub blob: B,
    pub name: String,
    pub size: u64,
    pub media_type: String,
}

impl<B> StagedFile<B> {
    pub fn new(blob: B, name: impl Into<String>, size: u64, media_type: impl Into<String>) -> Self {
        Self {
            blob,
            name: name.into(),
            size,
            media_type: media_type.into(),
        }
    }

    pub fn display_size(&self) -> String {
        crate::format::format_file_size(self.size)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polarity: Option<Polarity>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub verdict: String,
    /// Integer percentage, 0..=100.
    pub confidence: u8,
    pub evidence: Vec<EvidenceItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub limitations: Vec<String>,
}

/// One result per axis: authenticity (real / AI / edited) and
/// credibility (true / false / mixed).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub authenticity: AssessmentResult,
    pub credibility: AssessmentResult,
}

/// Snapshot of what was submitted, taken when a run starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AnalysisInput {
    Text { text: String },
    Media {
        mode: InputMode,
        name: String,
        size: u64,
        media_type: String,
    },
}

impl AnalysisInput {
    pub fn mode(&self) -> InputMode {
        match self {
            Self::Text { .. } => InputMode::Text,
            Self::Media { mode, .. } => *mode,
        }
    }

    pub fn media_type(&self) -> Option<&str> {
        match self {
            Self::Text { .. } => None,
            Self::Media { media_type, .. } => Some(media_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trips_through_str() {
        for mode in InputMode::ALL {
            assert_eq!(mode.as_str().parse::<InputMode>(), Ok(mode));
        }
        assert_eq!(" Video ".parse::<InputMode>(), Ok(InputMode::Video));
        assert!("document".parse::<InputMode>().is_err());
    }

    #[test]
    fn test_only_text_mode_rejects_files() {
        assert!(!InputMode::Text.accepts_files());
        assert_eq!(InputMode::Text.media_prefix(), None);
        for mode in [InputMode::Image, InputMode::Audio, InputMode::Video] {
            assert!(mode.accepts_files());
            assert!(mode.accept_attr().ends_with("/*"));
        }
    }

    #[test]
    fn test_mode_for_media_type() {
        assert_eq!(InputMode::for_media_type("image/jpeg"), Some(InputMode::Image));
        assert_eq!(InputMode::for_media_type("AUDIO/WAV"), Some(InputMode::Audio));
        assert_eq!(InputMode::for_media_type("video/mp4"), Some(InputMode::Video));
        assert_eq!(InputMode::for_media_type("application/pdf"), None);
        assert_eq!(InputMode::for_media_type(""), None);
    }

    #[test]
    fn test_untagged_evidence_omits_polarity_in_json() {
        let item = EvidenceItem { text: "x".into(), polarity: None };
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"text":"x"}"#);
    }
}
