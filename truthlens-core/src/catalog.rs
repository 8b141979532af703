//! Pre-authored result bundles.
//!
//! Two catalogs ship with the app and are embedded at compile time:
//! `classic` (four bundles per axis, randomized confidence, limitations)
//! and `typed` (one fixed outcome per media kind plus four text scenarios,
//! polarity-tagged evidence).

use rand::Rng;
use serde::Deserialize;

use crate::error::CatalogError;
use crate::types::{AnalysisOutcome, AssessmentResult, EvidenceItem, Polarity};

const CLASSIC_JSON: &str = include_str!("../catalogs/classic.json");
const TYPED_JSON: &str = include_str!("../catalogs/typed.json");

/// `base + uniform[0, spread)`; a zero spread is a fixed value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct ConfidenceRange {
    pub base: u8,
    #[serde(default)]
    pub spread: u8,
}

impl ConfidenceRange {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        if self.spread == 0 {
            self.base
        } else {
            self.base.saturating_add(rng.gen_range(0..self.spread))
        }
    }

    /// Largest value `sample` can return.
    pub fn max(&self) -> u8 {
        self.base.saturating_add(self.spread.saturating_sub(1))
    }

    pub fn contains(&self, value: u8) -> bool {
        value >= self.base && value <= self.max()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
enum EvidenceEntry {
    Plain(String),
    Tagged { text: String, polarity: Polarity },
}

impl EvidenceEntry {
    fn to_item(&self) -> EvidenceItem {
        match self {
            Self::Plain(text) => EvidenceItem { text: text.clone(), polarity: None },
            Self::Tagged { text, polarity } => EvidenceItem {
                text: text.clone(),
                polarity: Some(*polarity),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Bundle {
    pub verdict: String,
    pub confidence: ConfidenceRange,
    evidence: Vec<EvidenceEntry>,
    #[serde(default)]
    pub limitations: Vec<String>,
}

impl Bundle {
    pub fn realize<R: Rng + ?Sized>(&self, rng: &mut R) -> AssessmentResult {
        AssessmentResult {
            verdict: self.verdict.clone(),
            confidence: self.confidence.sample(rng),
            evidence: self.evidence.iter().map(EvidenceEntry::to_item).collect(),
            limitations: self.limitations.clone(),
        }
    }

    fn check(&self) -> Result<(), CatalogError> {
        let ConfidenceRange { base, spread } = self.confidence;
        if base as u16 + spread.saturating_sub(1) as u16 > 100 {
            return Err(CatalogError::ConfidenceOutOfRange {
                verdict: self.verdict.clone(),
                base,
                spread,
            });
        }
        Ok(())
    }
}

/// A matched pair of bundles, one per axis.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Scenario {
    pub authenticity: Bundle,
    pub credibility: Bundle,
}

impl Scenario {
    pub fn realize<R: Rng + ?Sized>(&self, rng: &mut R) -> AnalysisOutcome {
        AnalysisOutcome {
            authenticity: self.authenticity.realize(rng),
            credibility: self.credibility.realize(rng),
        }
    }

    fn check(&self) -> Result<(), CatalogError> {
        self.authenticity.check()?;
        self.credibility.check()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ClassicCatalog {
    authenticity: Vec<Bundle>,
    credibility: Vec<Bundle>,
}

impl ClassicCatalog {
    pub fn authenticity(&self) -> &[Bundle] {
        &self.authenticity
    }

    pub fn credibility(&self) -> &[Bundle] {
        &self.credibility
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(CLASSIC_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        if catalog.authenticity.is_empty() {
            return Err(CatalogError::Empty("authenticity"));
        }
        if catalog.credibility.is_empty() {
            return Err(CatalogError::Empty("credibility"));
        }
        for bundle in catalog.authenticity.iter().chain(&catalog.credibility) {
            bundle.check()?;
        }
        Ok(catalog)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TypedCatalog {
    pub image: Scenario,
    pub audio: Scenario,
    pub video: Scenario,
    text: Vec<Scenario>,
}

impl TypedCatalog {
    /// Scenarios for text input and unrecognized media types.
    pub fn text(&self) -> &[Scenario] {
        &self.text
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(TYPED_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        if catalog.text.is_empty() {
            return Err(CatalogError::Empty("text"));
        }
        for scenario in [&catalog.image, &catalog.audio, &catalog.video]
            .into_iter()
            .chain(&catalog.text)
        {
            scenario.check()?;
        }
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_builtin_classic_catalog_loads() {
        let catalog = ClassicCatalog::builtin().unwrap();
        assert_eq!(catalog.authenticity.len(), 4);
        assert_eq!(catalog.credibility.len(), 4);
        for bundle in catalog.authenticity.iter().chain(&catalog.credibility) {
            assert_eq!(bundle.evidence.len(), 4, "{}", bundle.verdict);
            assert_eq!(bundle.limitations.len(), 3, "{}", bundle.verdict);
        }
        let real = &catalog.authenticity[0];
        assert_eq!(real.verdict, "Likely Real");
        assert_eq!(real.confidence, ConfidenceRange { base: 72, spread: 18 });
    }

    #[test]
    fn test_builtin_typed_catalog_loads() {
        let catalog = TypedCatalog::builtin().unwrap();
        assert_eq!(catalog.text.len(), 4);
        assert_eq!(catalog.image.authenticity.verdict, "Likely Real");
        assert_eq!(catalog.image.authenticity.confidence.base, 84);
        assert_eq!(catalog.image.credibility.verdict, "Likely True");
        assert_eq!(catalog.image.credibility.confidence.base, 76);
    }

    #[test]
    fn test_typed_evidence_carries_polarity() {
        let catalog = TypedCatalog::builtin().unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        let outcome = catalog.video.realize(&mut rng);
        assert!(outcome.authenticity.evidence.iter().all(|e| e.polarity.is_some()));
        assert!(outcome.authenticity.limitations.is_empty());
    }

    #[test]
    fn test_classic_evidence_is_untagged() {
        let catalog = ClassicCatalog::builtin().unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        let result = catalog.credibility[2].realize(&mut rng);
        assert_eq!(result.verdict, "Mixed");
        assert!(result.evidence.iter().all(|e| e.polarity.is_none()));
    }

    #[test]
    fn test_confidence_range_sampling() {
        let range = ConfidenceRange { base: 45, spread: 25 };
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..500 {
            let v = range.sample(&mut rng);
            assert!((45..70).contains(&v), "{v} out of range");
        }
        assert_eq!(range.max(), 69);

        let fixed = ConfidenceRange { base: 84, spread: 0 };
        assert_eq!(fixed.sample(&mut rng), 84);
        assert!(fixed.contains(84));
        assert!(!fixed.contains(85));
    }

    #[test]
    fn test_hand_built_range_saturates() {
        let range = ConfidenceRange { base: 250, spread: 10 };
        assert_eq!(range.max(), 255);
        assert!(range.contains(255));
        let mut rng = SmallRng::seed_from_u64(3);
        assert!(range.sample(&mut rng) >= 250);
    }

    #[test]
    fn test_rejects_confidence_over_100() {
        let json = r#"{
            "authenticity": [{ "verdict": "Likely Real", "confidence": { "base": 95, "spread": 10 }, "evidence": [] }],
            "credibility": [{ "verdict": "Mixed", "confidence": { "base": 50 }, "evidence": [] }]
        }"#;
        let err = ClassicCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::ConfidenceOutOfRange { base: 95, spread: 10, .. }));
    }

    #[test]
    fn test_rejects_empty_sections() {
        let json = r#"{ "authenticity": [], "credibility": [] }"#;
        assert!(matches!(
            ClassicCatalog::from_json(json),
            Err(CatalogError::Empty("authenticity"))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(ClassicCatalog::from_json("{"), Err(CatalogError::Parse(_))));
    }
}
