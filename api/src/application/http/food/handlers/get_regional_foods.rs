use axum::extract::State;
use platelens_core::domain::taxonomy::{ports::FoodInsightService, value_objects::CuisineGroup};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetRegionalFoodsResponse {
    pub data: Vec<CuisineGroup>,
}

#[utoipa::path(
    get,
    path = "/regional",
    tag = "food",
    summary = "List regional foods grouped by cuisine",
    responses(
        (status = 200, body = GetRegionalFoodsResponse)
    ),
)]
pub async fn get_regional_foods(
    State(state): State<AppState>,
) -> Result<Response<GetRegionalFoodsResponse>, ApiError> {
    let groups = state.service.regional_foods();

    Ok(Response::OK(GetRegionalFoodsResponse { data: groups }))
}
