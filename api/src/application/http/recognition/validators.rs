use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct RecognizeFoodRequest {
    /// Text encoding of the image, usually a base64 data URL. May be empty.
    #[validate(length(
        max = 14_000_000,
        message = "image_data must be at most 14000000 characters"
    ))]
    pub image_data: String,
}
