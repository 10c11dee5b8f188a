use axum::extract::{Path, State};
use platelens_core::domain::{
    nutrition::entities::FoodRecord, taxonomy::ports::FoodInsightService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetFoodNutritionResponse {
    pub data: FoodRecord,
}

#[utoipa::path(
    get,
    path = "/{label}/nutrition",
    tag = "food",
    summary = "Get base nutrition for a food",
    description = "Unscaled nutrition record. Unknown labels return the default record",
    responses(
        (status = 200, body = GetFoodNutritionResponse)
    ),
    params(
        ("label" = String, Path, description = "Food label"),
    ),
)]
pub async fn get_food_nutrition(
    Path(label): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetFoodNutritionResponse>, ApiError> {
    let record = state.service.get_base_nutrition(&label);

    Ok(Response::OK(GetFoodNutritionResponse { data: record }))
}
