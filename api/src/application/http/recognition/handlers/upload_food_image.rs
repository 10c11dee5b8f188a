use axum::{
    extract::{Multipart, State, multipart::MultipartError},
    http::StatusCode,
};
use base64::{Engine as _, engine::general_purpose};
use platelens_core::domain::recognition::{
    ports::FoodRecognitionService, value_objects::RecognizeFoodInput,
};

use crate::application::http::{
    recognition::handlers::recognize_food::RecognizeFoodResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/upload",
    tag = "recognition",
    summary = "Recognize food from an uploaded image",
    description = "Accepts a multipart `image` field, encodes it as a base64 data URL and runs recognition on it",
    responses(
        (status = 200, body = RecognizeFoodResponse)
    ),
)]
pub async fn upload_food_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<RecognizeFoodResponse>, ApiError> {
    let max_image_bytes = state.args.server.max_image_bytes;
    let mut image_data: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some("image") {
            continue;
        }

        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let data = field
            .bytes()
            .await
            .map_err(multipart_error)?;

        if data.len() > max_image_bytes {
            return Err(ApiError::PayloadTooLarge(format!(
                "Image too large. Max size is {} bytes",
                max_image_bytes
            )));
        }

        image_data = Some(format!(
            "data:{};base64,{}",
            content_type,
            general_purpose::STANDARD.encode(&data)
        ));
    }

    let image_data =
        image_data.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let result = state
        .service
        .recognize_food(RecognizeFoodInput { image_data })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecognizeFoodResponse { data: result }))
}

fn multipart_error(error: MultipartError) -> ApiError {
    match error.status() {
        StatusCode::PAYLOAD_TOO_LARGE => ApiError::PayloadTooLarge(error.body_text()),
        _ => ApiError::BadRequest(format!("Failed to read multipart body: {}", error.body_text())),
    }
}
