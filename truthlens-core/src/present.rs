//! Turns an outcome into exactly what the results view paints.

use crate::config::AnalyzerConfig;
use crate::types::{AnalysisOutcome, AssessmentResult};
use crate::verdict::{verdict_class, VerdictClass};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListRow {
    pub text: String,
    /// `positive` / `negative` / `neutral`, or empty for untagged rows.
    pub polarity_class: &'static str,
    pub delay_ms: u32,
}

impl ListRow {
    pub fn style(&self) -> String {
        if self.delay_ms == 0 {
            String::new()
        } else {
            format!("animation-delay: {}ms", self.delay_ms)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssessmentView {
    pub title: &'static str,
    pub verdict: String,
    pub class: VerdictClass,
    pub confidence: u8,
    pub evidence: Vec<ListRow>,
    pub limitations: Vec<ListRow>,
}

impl AssessmentView {
    pub fn confidence_label(&self) -> String {
        format!("{}%", self.confidence)
    }

    /// Final bar width; applied after the reveal delay.
    pub fn bar_width(&self) -> String {
        format!("{}%", self.confidence.min(100))
    }

    pub fn verdict_css(&self) -> String {
        format!("verdict-value {}", self.class.css_class())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutcomeView {
    pub authenticity: AssessmentView,
    pub credibility: AssessmentView,
}

pub fn present(outcome: &AnalysisOutcome, config: &AnalyzerConfig) -> OutcomeView {
    OutcomeView {
        authenticity: present_axis("Authenticity", &outcome.authenticity, config.stagger_ms),
        credibility: present_axis(config.credibility_title, &outcome.credibility, config.stagger_ms),
    }
}

fn present_axis(title: &'static str, result: &AssessmentResult, stagger_ms: u32) -> AssessmentView {
    let evidence = result
        .evidence
        .iter()
        .enumerate()
        .map(|(i, item)| ListRow {
            text: item.text.clone(),
            polarity_class: item.polarity.map(|p| p.css_class()).unwrap_or(""),
            delay_ms: i as u32 * stagger_ms,
        })
        .collect();
    let limitations = result
        .limitations
        .iter()
        .enumerate()
        .map(|(i, text)| ListRow {
            text: text.clone(),
            polarity_class: "",
            delay_ms: i as u32 * stagger_ms,
        })
        .collect();
    AssessmentView {
        title,
        verdict: result.verdict.clone(),
        class: verdict_class(&result.verdict),
        confidence: result.confidence,
        evidence,
        limitations,
    }
}
