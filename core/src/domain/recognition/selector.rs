use std::sync::Arc;

use rand::{Rng, seq::SliceRandom};

use crate::domain::{
    common::entities::app_errors::CoreError,
    recognition::{
        entities::MatchSource,
        value_objects::{ConfidenceRange, Selection, TierDescriptor},
    },
    taxonomy::entities::{FoodTier, Taxonomy},
};

pub const PRIORITY_VISUAL_CONFIDENCE: ConfidenceRange = ConfidenceRange::new(0.90, 0.99);
pub const VISUAL_CONFIDENCE: ConfidenceRange = ConfidenceRange::new(0.88, 0.99);

/// Weighted tiers used when no rule produced a candidate.
pub fn default_tiers() -> Vec<TierDescriptor> {
    vec![
        TierDescriptor {
            tier: FoodTier::Priority,
            probability_mass: 0.70,
            confidence: ConfidenceRange::new(0.85, 1.00),
        },
        TierDescriptor {
            tier: FoodTier::Regional,
            probability_mass: 0.20,
            confidence: ConfidenceRange::new(0.75, 0.90),
        },
        TierDescriptor {
            tier: FoodTier::General,
            probability_mass: 0.10,
            confidence: ConfidenceRange::new(0.65, 0.85),
        },
    ]
}

fn snap_boundary(cumulative: f64) -> f64 {
    (cumulative * 1e9).round() / 1e9
}

/// Picks one label from the visual candidates, or from the tiered prior when
/// there are none.
#[derive(Debug, Clone)]
pub struct CandidateSelector {
    taxonomy: Arc<Taxonomy>,
    tiers: Vec<TierDescriptor>,
}

impl CandidateSelector {
    pub fn new(taxonomy: Arc<Taxonomy>, tiers: Vec<TierDescriptor>) -> Self {
        Self { taxonomy, tiers }
    }

    pub fn with_default_tiers(taxonomy: Arc<Taxonomy>) -> Self {
        Self::new(taxonomy, default_tiers())
    }

    pub fn select<R: Rng + ?Sized>(
        &self,
        candidates: &[String],
        all_labels: &[String],
        rng: &mut R,
    ) -> Result<Selection, CoreError> {
        if let Some(label) = candidates.iter().find(|c| self.taxonomy.is_priority(c)) {
            return Ok(Selection {
                label: label.clone(),
                confidence_range: PRIORITY_VISUAL_CONFIDENCE,
                source: MatchSource::PriorityVisual,
            });
        }

        if let Some(label) = candidates.first() {
            return Ok(Selection {
                label: label.clone(),
                confidence_range: VISUAL_CONFIDENCE,
                source: MatchSource::Visual,
            });
        }

        let descriptor = self.descriptor_for(rng.gen_range(0.0..1.0))?;

        let label = self
            .pools(descriptor.tier, all_labels)
            .into_iter()
            .find(|pool| !pool.is_empty())
            .and_then(|pool| pool.choose(rng).map(|label| label.to_string()))
            .ok_or(CoreError::EmptyCatalog)?;

        Ok(Selection {
            label,
            confidence_range: descriptor.confidence,
            source: MatchSource::Fallback,
        })
    }

    /// Tier whose cumulative probability mass first exceeds `draw`.
    ///
    /// Draws past the total mass land in the last tier. Boundaries are
    /// snapped to a 1e-9 grid so `0.7 + 0.2` compares as `0.9`.
    pub fn descriptor_for(&self, draw: f64) -> Result<&TierDescriptor, CoreError> {
        let mut cumulative = 0.0;
        for descriptor in &self.tiers {
            cumulative += descriptor.probability_mass;
            if draw < snap_boundary(cumulative) {
                return Ok(descriptor);
            }
        }

        self.tiers.last().ok_or(CoreError::InternalServerError)
    }

    /// Candidate pools for `tier`, narrowest first. An empty pool falls
    /// through to the next, broader one.
    pub fn pools<'a>(&'a self, tier: FoodTier, all_labels: &'a [String]) -> Vec<Vec<&'a str>> {
        let priority: Vec<&str> = self.taxonomy.priority().iter().map(String::as_str).collect();
        let regional: Vec<&str> = self.taxonomy.regional().iter().map(String::as_str).collect();
        let all: Vec<&str> = all_labels.iter().map(String::as_str).collect();

        match tier {
            FoodTier::Priority => vec![priority, regional, all],
            FoodTier::Regional => {
                let regional_only = regional
                    .iter()
                    .copied()
                    .filter(|label| !self.taxonomy.is_priority(label))
                    .collect();
                vec![regional_only, regional, all]
            }
            FoodTier::General => {
                let general = all
                    .iter()
                    .copied()
                    .filter(|label| !self.taxonomy.is_regional(label))
                    .collect();
                vec![general, all]
            }
        }
    }
}
