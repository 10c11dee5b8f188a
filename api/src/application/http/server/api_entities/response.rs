use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use serde::Serialize;

#[derive(Debug, PartialEq)]
pub enum Response<T: Serialize + PartialEq> {
    OK(T),
}

impl<T> IntoResponse for Response<T>
where
    T: Serialize + PartialEq,
{
    fn into_response(self) -> AxumResponse {
        match self {
            Response::OK(data) => (StatusCode::OK, Json(data)).into_response(),
        }
    }
}
