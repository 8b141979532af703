use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::runner::ProgressStyle;

/// Which catalog and presentation the analyzer uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Random bundle per axis, limitations listed, theme toggle.
    #[default]
    Classic,
    /// Fixed outcome per media type, random text scenarios, polarity-tagged evidence.
    Typed,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Typed => "typed",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Self::Classic),
            "typed" => Ok(Self::Typed),
            other => Err(format!("unknown analyzer variant '{other}'")),
        }
    }
}

pub const STEP_CAPTIONS: [&str; 8] = [
    "Uploading content...",
    "Extracting metadata...",
    "Scanning for generation artifacts...",
    "Checking compression history...",
    "Cross-referencing sources...",
    "Evaluating claim consistency...",
    "Scoring confidence...",
    "Compiling report...",
];

#[derive(Clone, Debug, PartialEq)]
pub struct AnalyzerConfig {
    pub variant: Variant,
    pub progress: ProgressStyle,
    /// Delay before confidence bars take their final width, so the CSS
    /// transition runs instead of jumping.
    pub reveal_delay_ms: u32,
    /// Per-row animation delay for evidence lists (0 = no stagger).
    pub stagger_ms: u32,
    pub theme_toggle: bool,
    pub credibility_title: &'static str,
}

impl AnalyzerConfig {
    pub fn classic() -> Self {
        Self {
            variant: Variant::Classic,
            progress: ProgressStyle::Spinner { min_ms: 2000, max_ms: 3500 },
            reveal_delay_ms: 100,
            stagger_ms: 0,
            theme_toggle: true,
            credibility_title: "Credibility",
        }
    }

    pub fn typed() -> Self {
        Self {
            variant: Variant::Typed,
            progress: ProgressStyle::Stepped {
                captions: STEP_CAPTIONS.iter().map(|s| s.to_string()).collect(),
                step_ms: 600,
            },
            reveal_delay_ms: 100,
            stagger_ms: 100,
            theme_toggle: false,
            credibility_title: "Truthfulness",
        }
    }

    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Classic => Self::classic(),
            Variant::Typed => Self::typed(),
        }
    }

    /// Picks the variant from a URL query string such as `?variant=typed`.
    /// Missing or unknown values fall back to classic.
    pub fn from_query(query: &str) -> Self {
        let variant = query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "variant")
            .and_then(|(_, value)| match value.parse::<Variant>() {
                Ok(v) => Some(v),
                Err(e) => {
                    log::warn!("{e}, using classic");
                    None
                }
            })
            .unwrap_or_default();
        Self::for_variant(variant)
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_parse() {
        assert_eq!("typed".parse::<Variant>(), Ok(Variant::Typed));
        assert_eq!(" Classic ".parse::<Variant>(), Ok(Variant::Classic));
        assert!("fancy".parse::<Variant>().is_err());
    }

    #[test]
    fn test_from_query() {
        assert_eq!(AnalyzerConfig::from_query("").variant, Variant::Classic);
        assert_eq!(AnalyzerConfig::from_query("?variant=typed").variant, Variant::Typed);
        assert_eq!(AnalyzerConfig::from_query("?lang=en&variant=typed").variant, Variant::Typed);
        assert_eq!(AnalyzerConfig::from_query("?variant=bogus").variant, Variant::Classic);
    }

    #[test]
    fn test_presets() {
        let classic = AnalyzerConfig::classic();
        assert!(classic.theme_toggle);
        assert_eq!(classic.progress, ProgressStyle::Spinner { min_ms: 2000, max_ms: 3500 });

        let typed = AnalyzerConfig::typed();
        assert!(!typed.theme_toggle);
        match typed.progress {
            ProgressStyle::Stepped { captions, step_ms } => {
                assert_eq!(captions.len(), 8);
                assert_eq!(step_ms * captions.len() as u32, 4800);
            }
            other => panic!("unexpected progress style {other:?}"),
        }
    }
}
