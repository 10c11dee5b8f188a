use axum::extract::State;
use platelens_core::domain::recognition::{
    entities::RecognitionResult, ports::FoodRecognitionService, value_objects::RecognizeFoodInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recognition::validators::RecognizeFoodRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecognizeFoodResponse {
    pub data: RecognitionResult,
}

#[utoipa::path(
    post,
    path = "",
    tag = "recognition",
    summary = "Recognize food from an encoded image",
    description = "Estimates the food label, confidence and nutrition for a text-encoded image",
    responses(
        (status = 200, body = RecognizeFoodResponse)
    ),
    request_body = RecognizeFoodRequest
)]
pub async fn recognize_food(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecognizeFoodRequest>,
) -> Result<Response<RecognizeFoodResponse>, ApiError> {
    let result = state
        .service
        .recognize_food(RecognizeFoodInput {
            image_data: payload.image_data,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecognizeFoodResponse { data: result }))
}
