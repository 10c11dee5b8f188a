use std::sync::Arc;

use rand::Rng;

use crate::domain::{recognition::value_objects::ConfidenceRange, taxonomy::entities::Taxonomy};

pub const CONFIDENCE_CEILING: f64 = 0.99;
pub const DISTINCTIVE_BOOST: f64 = 0.15;
pub const STANDARD_BOOST: f64 = 0.05;

/// Turns a base confidence range into a final, clamped confidence.
#[derive(Debug, Clone)]
pub struct ConfidenceScorer {
    taxonomy: Arc<Taxonomy>,
}

impl ConfidenceScorer {
    pub fn new(taxonomy: Arc<Taxonomy>) -> Self {
        Self { taxonomy }
    }

    /// Every label gets a boost; visually distinctive foods get the larger one.
    pub fn boost_for(&self, label: &str) -> f64 {
        if self.taxonomy.is_visually_distinctive(label) {
            DISTINCTIVE_BOOST
        } else {
            STANDARD_BOOST
        }
    }

    pub fn score<R: Rng + ?Sized>(&self, label: &str, range: ConfidenceRange, rng: &mut R) -> f64 {
        let base = range.sample(rng);
        (base + self.boost_for(label)).min(CONFIDENCE_CEILING)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::domain::taxonomy::entities::TaxonomyDefinition;

    fn scorer() -> ConfidenceScorer {
        ConfidenceScorer::new(Arc::new(Taxonomy::new(TaxonomyDefinition {
            visually_distinctive: vec!["Pani Puri".to_string()],
            ..Default::default()
        })))
    }

    #[test]
    fn test_boost_for() {
        let scorer = scorer();
        assert_eq!(scorer.boost_for("Pani Puri"), DISTINCTIVE_BOOST);
        assert_eq!(scorer.boost_for("Rasam"), STANDARD_BOOST);
    }

    #[test]
    fn test_score_is_clamped() {
        let scorer = scorer();
        let mut rng = ChaCha8Rng::seed_from_u64(17);

        for _ in 0..500 {
            let score = scorer.score("Pani Puri", ConfidenceRange::new(0.85, 1.00), &mut rng);
            assert!(score > 0.0 && score <= CONFIDENCE_CEILING);
            assert_eq!(score, CONFIDENCE_CEILING);
        }
    }

    #[test]
    fn test_score_adds_standard_boost() {
        let scorer = scorer();
        let mut rng = ChaCha8Rng::seed_from_u64(17);

        for _ in 0..500 {
            let score = scorer.score("Rasam", ConfidenceRange::new(0.65, 0.85), &mut rng);
            assert!((0.70..=0.90).contains(&score), "score {score}");
        }
    }

    #[test]
    fn test_degenerate_range_uses_min() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let score = scorer().score("Rasam", ConfidenceRange::new(0.5, 0.5), &mut rng);
        assert!((score - 0.55).abs() < 1e-12);
    }
}
