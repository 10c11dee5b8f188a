use std::sync::Arc;

use crate::domain::{
    catalog::FoodCatalog,
    common::entities::app_errors::CoreError,
    nutrition::estimator::NutritionEstimator,
    recognition::{
        confidence::ConfidenceScorer, patterns::PatternMatcher, ports::ModelLatency,
        selector::CandidateSelector,
    },
};

/// Recognition facade: owns the pipeline components and the shared catalog.
#[derive(Clone)]
pub struct Service<L>
where
    L: ModelLatency,
{
    pub(crate) catalog: FoodCatalog,
    pub(crate) pattern_matcher: Arc<PatternMatcher>,
    pub(crate) candidate_selector: CandidateSelector,
    pub(crate) confidence_scorer: ConfidenceScorer,
    pub(crate) nutrition_estimator: NutritionEstimator,
    pub(crate) model_latency: L,
}

impl<L> Service<L>
where
    L: ModelLatency,
{
    pub fn new(
        catalog: FoodCatalog,
        pattern_matcher: PatternMatcher,
        candidate_selector: CandidateSelector,
        model_latency: L,
    ) -> Result<Self, CoreError> {
        catalog.ensure_known(pattern_matcher.labels())?;

        let taxonomy = catalog.taxonomy().clone();
        let nutrition = catalog.nutrition().clone();

        Ok(Self {
            confidence_scorer: ConfidenceScorer::new(taxonomy.clone()),
            nutrition_estimator: NutritionEstimator::new(nutrition, taxonomy),
            catalog,
            pattern_matcher: Arc::new(pattern_matcher),
            candidate_selector,
            model_latency,
        })
    }
}
