use serde::Serialize;

/// Styling category derived from a verdict string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictClass {
    Real,
    Ai,
    Edited,
    True,
    False,
    Mixed,
    Uncertain,
}

/// Checked in order; the first keyword found wins.
const KEYWORDS: [(&str, VerdictClass); 6] = [
    ("real", VerdictClass::Real),
    ("ai", VerdictClass::Ai),
    ("edited", VerdictClass::Edited),
    ("true", VerdictClass::True),
    ("false", VerdictClass::False),
    ("mixed", VerdictClass::Mixed),
];

impl VerdictClass {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Real => "real",
            Self::Ai => "ai",
            Self::Edited => "edited",
            Self::True => "true",
            Self::False => "false",
            Self::Mixed => "mixed",
            Self::Uncertain => "uncertain",
        }
    }
}

/// Classify a verdict by substring match on its lower-cased form. Note
/// that "Uncertain" contains "ai" and so lands in `Ai`.
pub fn verdict_class(verdict: &str) -> VerdictClass {
    let lower = verdict.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|&(_, class)| class)
        .unwrap_or(VerdictClass::Uncertain)
}
