use rand::Rng;
use tracing::{debug, info};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    recognition::{
        entities::{FeatureVector, RecognitionResult},
        ports::{FoodRecognitionService, ModelLatency},
        value_objects::RecognizeFoodInput,
    },
};

impl<L> FoodRecognitionService for Service<L>
where
    L: ModelLatency,
{
    async fn recognize_food(
        &self,
        input: RecognizeFoodInput,
    ) -> Result<RecognitionResult, CoreError> {
        // 1. Wait for the simulated model
        self.model_latency.wait().await;

        // 2. Run the pipeline with fresh randomness
        let result = self.recognize_now(input.image_data, &mut rand::thread_rng())?;

        info!(
            label = result.label.as_str(),
            confidence = result.confidence,
            tier = result.tier.as_str(),
            source = result.source.as_str(),
            is_regional = self.catalog.taxonomy().is_regional(&result.label),
            "food recognized"
        );

        Ok(result)
    }
}

impl<L> Service<L>
where
    L: ModelLatency,
{
    /// Synchronous part of recognition, with the random source supplied by the caller.
    pub fn recognize_now<R: Rng + ?Sized>(
        &self,
        image_data: String,
        rng: &mut R,
    ) -> Result<RecognitionResult, CoreError> {
        let features = FeatureVector::extract(&image_data);
        let candidates = self.pattern_matcher.match_features(&features);

        debug!(
            color = features.color,
            shape = features.shape,
            texture = features.texture,
            candidates = ?candidates,
            "extracted visual features"
        );

        let selection =
            self.candidate_selector
                .select(&candidates, self.catalog.all_labels(), rng)?;

        let confidence =
            self.confidence_scorer
                .score(&selection.label, selection.confidence_range, rng);
        let nutrition = self.nutrition_estimator.estimate(&selection.label, rng);
        let tier = self.catalog.taxonomy().tier_of(&selection.label);

        Ok(RecognitionResult::new(
            selection.label,
            confidence,
            nutrition,
            image_data,
            tier,
            selection.source,
            features,
        ))
    }
}
