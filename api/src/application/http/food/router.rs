use super::handlers::{
    get_food_insights::{__path_get_food_insights, get_food_insights},
    get_food_nutrition::{__path_get_food_nutrition, get_food_nutrition},
    get_regional_foods::{__path_get_regional_foods, get_regional_foods},
    list_foods::{__path_list_foods, list_foods},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(list_foods, get_regional_foods, get_food_nutrition, get_food_insights))]
pub struct FoodApiDoc;

pub fn food_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/foods", state.args.server.root_path),
            get(list_foods),
        )
        .route(
            &format!("{}/foods/regional", state.args.server.root_path),
            get(get_regional_foods),
        )
        .route(
            &format!("{}/foods/{{label}}/nutrition", state.args.server.root_path),
            get(get_food_nutrition),
        )
        .route(
            &format!("{}/foods/{{label}}/insights", state.args.server.root_path),
            get(get_food_insights),
        )
}
