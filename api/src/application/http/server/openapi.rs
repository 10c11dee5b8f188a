use crate::application::http::{food::router::FoodApiDoc, recognition::router::RecognitionApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "PlateLens API"
    ),
    nest(
        (path = "/recognitions", api = RecognitionApiDoc),
        (path = "/foods", api = FoodApiDoc),
    )
)]
pub struct ApiDoc;
