use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp, nutrition::entities::FoodRecord,
    recognition::entities::FeatureVector, taxonomy::entities::FoodTier,
};

/// Which step of candidate selection produced the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchSource {
    PriorityVisual,
    Visual,
    Fallback,
}

impl MatchSource {
    pub fn as_str(&self) -> &str {
        match self {
            MatchSource::PriorityVisual => "priority_visual",
            MatchSource::Visual => "visual",
            MatchSource::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecognitionResult {
    pub id: Uuid,
    pub label: String,
    /// In `(0, 0.99]`.
    pub confidence: f64,
    pub nutrition: FoodRecord,
    /// The submitted encoding, returned unchanged for display.
    pub image_data: String,
    pub tier: FoodTier,
    pub source: MatchSource,
    pub features: FeatureVector,
    pub created_at: DateTime<Utc>,
}

impl RecognitionResult {
    pub fn new(
        label: String,
        confidence: f64,
        nutrition: FoodRecord,
        image_data: String,
        tier: FoodTier,
        source: MatchSource,
        features: FeatureVector,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            label,
            confidence,
            nutrition,
            image_data,
            tier,
            source,
            features,
            created_at: now,
        }
    }
}
