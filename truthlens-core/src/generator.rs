use rand::Rng;

use crate::catalog::{ClassicCatalog, Scenario, TypedCatalog};
use crate::config::Variant;
use crate::error::CatalogError;
use crate::types::{AnalysisInput, AnalysisOutcome, InputMode};

/// Picks a pre-authored outcome. The submitted content is never inspected;
/// the typed catalog only looks at the declared media type.
#[derive(Clone, Debug)]
pub enum MockGenerator {
    Classic(ClassicCatalog),
    Typed(TypedCatalog),
}

impl MockGenerator {
    pub fn builtin(variant: Variant) -> Result<Self, CatalogError> {
        let generator = match variant {
            Variant::Classic => Self::Classic(ClassicCatalog::builtin()?),
            Variant::Typed => Self::Typed(TypedCatalog::builtin()?),
        };
        Ok(generator)
    }

    pub fn variant(&self) -> Variant {
        match self {
            Self::Classic(_) => Variant::Classic,
            Self::Typed(_) => Variant::Typed,
        }
    }

    pub fn generate<R: Rng + ?Sized>(&self, input: &AnalysisInput, rng: &mut R) -> AnalysisOutcome {
        match self {
            Self::Classic(catalog) => {
                let authenticity = pick(catalog.authenticity(), rng).realize(rng);
                let credibility = pick(catalog.credibility(), rng).realize(rng);
                AnalysisOutcome { authenticity, credibility }
            }
            Self::Typed(catalog) => typed_scenario(catalog, input, rng).realize(rng),
        }
    }
}

// Catalog loading rejects empty sections, so `items` is never empty.
fn pick<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

fn typed_scenario<'a, R: Rng + ?Sized>(catalog: &'a TypedCatalog, input: &AnalysisInput, rng: &mut R) -> &'a Scenario {
    match input.media_type().and_then(InputMode::for_media_type) {
        Some(InputMode::Image) => &catalog.image,
        Some(InputMode::Audio) => &catalog.audio,
        Some(InputMode::Video) => &catalog.video,
        _ => pick(catalog.text(), rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn text(s: &str) -> AnalysisInput {
        AnalysisInput::Text { text: s.to_string() }
    }

    fn media(mode: InputMode, media_type: &str) -> AnalysisInput {
        AnalysisInput::Media {
            mode,
            name: "upload".into(),
            size: 2048,
            media_type: media_type.into(),
        }
    }

    #[test]
    fn test_classic_confidence_stays_in_bundle_range() {
        let generator = MockGenerator::builtin(Variant::Classic).unwrap();
        let MockGenerator::Classic(catalog) = &generator else { unreachable!() };
        let mut rng = SmallRng::seed_from_u64(42);

        for _ in 0..1000 {
            let outcome = generator.generate(&text("The sky is blue."), &mut rng);
            let a = catalog
                .authenticity()
                .iter()
                .find(|b| b.verdict == outcome.authenticity.verdict)
                .unwrap();
            let c = catalog
                .credibility()
                .iter()
                .find(|b| b.verdict == outcome.credibility.verdict)
                .unwrap();
            assert!(a.confidence.contains(outcome.authenticity.confidence));
            assert!(c.confidence.contains(outcome.credibility.confidence));
            if outcome.authenticity.verdict == "Likely Real" {
                assert!((72..90).contains(&outcome.authenticity.confidence));
            }
        }
    }

    #[test]
    fn test_classic_draws_every_bundle() {
        let generator = MockGenerator::builtin(Variant::Classic).unwrap();
        let mut rng = SmallRng::seed_from_u64(9);
        let mut authenticity = HashSet::new();
        let mut credibility = HashSet::new();
        for _ in 0..400 {
            let outcome = generator.generate(&text("anything"), &mut rng);
            authenticity.insert(outcome.authenticity.verdict);
            credibility.insert(outcome.credibility.verdict);
        }
        assert_eq!(authenticity.len(), 4);
        assert_eq!(credibility.len(), 4);
    }

    #[test]
    fn test_classic_ignores_media_type() {
        let generator = MockGenerator::builtin(Variant::Classic).unwrap();
        let mut rng = SmallRng::seed_from_u64(5);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            seen.insert(generator.generate(&media(InputMode::Image, "image/png"), &mut rng).authenticity.verdict);
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_typed_image_is_fixed() {
        let generator = MockGenerator::builtin(Variant::Typed).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..20 {
            let outcome = generator.generate(&media(InputMode::Image, "image/jpeg"), &mut rng);
            assert_eq!(outcome.authenticity.verdict, "Likely Real");
            assert_eq!(outcome.authenticity.confidence, 84);
            assert_eq!(outcome.credibility.verdict, "Likely True");
            assert_eq!(outcome.credibility.confidence, 76);
        }
    }

    #[test]
    fn test_typed_audio_and_video_are_fixed_and_distinct() {
        let generator = MockGenerator::builtin(Variant::Typed).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        let audio = generator.generate(&media(InputMode::Audio, "audio/mpeg"), &mut rng);
        let video = generator.generate(&media(InputMode::Video, "video/mp4"), &mut rng);
        assert_eq!(audio, generator.generate(&media(InputMode::Audio, "audio/wav"), &mut rng));
        assert_eq!(video, generator.generate(&media(InputMode::Video, "video/webm"), &mut rng));
        assert_ne!(audio, video);
    }

    #[test]
    fn test_typed_text_picks_among_scenarios() {
        let generator = MockGenerator::builtin(Variant::Typed).unwrap();
        let MockGenerator::Typed(catalog) = &generator else { unreachable!() };
        let mut rng = SmallRng::seed_from_u64(11);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let outcome = generator.generate(&text("The sky is blue."), &mut rng);
            let index = catalog
                .text()
                .iter()
                .position(|s| s.authenticity.verdict == outcome.authenticity.verdict
                    && s.authenticity.confidence.base == outcome.authenticity.confidence)
                .expect("outcome comes from a text scenario");
            seen.insert(index);
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_typed_unknown_media_type_falls_back_to_text() {
        let generator = MockGenerator::builtin(Variant::Typed).unwrap();
        let MockGenerator::Typed(catalog) = &generator else { unreachable!() };
        let mut rng = SmallRng::seed_from_u64(2);
        let outcome = generator.generate(&media(InputMode::Image, "application/octet-stream"), &mut rng);
        assert!(catalog
            .text()
            .iter()
            .any(|s| s.authenticity.verdict == outcome.authenticity.verdict));
    }
}
