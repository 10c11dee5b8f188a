use axum::extract::{Path, State};
use platelens_core::domain::taxonomy::{ports::FoodInsightService, value_objects::FoodInsights};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetFoodInsightsResponse {
    pub data: FoodInsights,
}

#[utoipa::path(
    get,
    path = "/{label}/insights",
    tag = "food",
    summary = "Get display insights for a food",
    description = "Tier, cuisine, nutritional category, related and similar foods",
    responses(
        (status = 200, body = GetFoodInsightsResponse)
    ),
    params(
        ("label" = String, Path, description = "Food label"),
    ),
)]
pub async fn get_food_insights(
    Path(label): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetFoodInsightsResponse>, ApiError> {
    let insights = state.service.get_food_insights(&label);

    Ok(Response::OK(GetFoodInsightsResponse { data: insights }))
}
