use rand::Rng;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{recognition::entities::MatchSource, taxonomy::entities::FoodTier};

#[derive(Debug, Clone)]
pub struct RecognizeFoodInput {
    pub image_data: String,
}

/// Closed interval a base confidence is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConfidenceRange {
    pub min: f64,
    pub max: f64,
}

impl ConfidenceRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.max <= self.min {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }
}

/// Entry of the tiered fallback table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierDescriptor {
    pub tier: FoodTier,
    pub probability_mass: f64,
    pub confidence: ConfidenceRange,
}

/// Outcome of candidate selection, before confidence scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub label: String,
    pub confidence_range: ConfidenceRange,
    pub source: MatchSource,
}
