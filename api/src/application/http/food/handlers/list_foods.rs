use axum::extract::State;
use platelens_core::domain::taxonomy::{ports::FoodInsightService, value_objects::FoodSummary};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ListFoodsResponse {
    pub data: Vec<FoodSummary>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "food",
    summary = "List recognizable foods",
    description = "Every label in the nutrition table with its tier and cuisine",
    responses(
        (status = 200, body = ListFoodsResponse)
    ),
)]
pub async fn list_foods(
    State(state): State<AppState>,
) -> Result<Response<ListFoodsResponse>, ApiError> {
    let foods = state.service.list_foods();

    Ok(Response::OK(ListFoodsResponse { data: foods }))
}
