use std::sync::Arc;

use rand::Rng;

use crate::domain::{
    nutrition::{entities::FoodRecord, table::NutritionTable},
    taxonomy::entities::{FoodTier, Taxonomy},
};

/// Produces a noisy nutrition estimate for a recognized label.
#[derive(Debug, Clone)]
pub struct NutritionEstimator {
    table: Arc<NutritionTable>,
    taxonomy: Arc<Taxonomy>,
}

impl NutritionEstimator {
    pub fn new(table: Arc<NutritionTable>, taxonomy: Arc<Taxonomy>) -> Self {
        Self { table, taxonomy }
    }

    /// One factor is drawn per call and applied to every nutrient, so macro
    /// proportions are preserved. Unknown labels use the default record.
    pub fn estimate<R: Rng + ?Sized>(&self, label: &str, rng: &mut R) -> FoodRecord {
        let base = self.table.get_or_default(label);
        let tier = self.taxonomy.tier_of(label);
        let factor = variation_factor(tier, rng.gen_range(0.0..1.0));

        tracing::debug!(label, tier = tier.as_str(), factor, "estimated nutrition");

        base.scaled(factor)
    }
}

/// Maps a unit draw `u` in `[0, 1)` onto `[1 - range, 1 + range)` for the tier.
pub fn variation_factor(tier: FoodTier, u: f64) -> f64 {
    let range = tier.variation_range();
    (1.0 - range) + u * (2.0 * range)
}
