pub mod recognize_food;
pub mod upload_food_image;
