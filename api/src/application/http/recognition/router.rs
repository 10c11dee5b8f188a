use super::handlers::{
    recognize_food::{__path_recognize_food, recognize_food},
    upload_food_image::{__path_upload_food_image, upload_food_image},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(recognize_food, upload_food_image))]
pub struct RecognitionApiDoc;

pub fn recognition_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recognitions", state.args.server.root_path),
            post(recognize_food),
        )
        .route(
            &format!("{}/recognitions/upload", state.args.server.root_path),
            post(upload_food_image),
        )
}
