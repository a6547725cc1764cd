//! Mapping from failures to HTTP responses.
//!
//! Every error is returned as `{"error": "<reason>"}`.

use api_shared::ErrorRes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use recipes_core::RecipeNotFound;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body could not be decoded into a recipe.
    #[error("{0}")]
    BadRequest(String),
    #[error("Recipe not found")]
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<RecipeNotFound> for ApiError {
    fn from(_: RecipeNotFound) -> Self {
        Self::NotFound
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::debug!("Rejected recipe payload: {}", err);
        Self::BadRequest(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorRes::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::from(RecipeNotFound { id: "abc".into() });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Recipe not found");
    }

    #[test]
    fn test_decode_errors_map_to_400() {
        let decode_err = serde_json::from_str::<Vec<String>>("{").expect_err("should fail");
        let err = ApiError::from(decode_err);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(!err.to_string().is_empty());
    }
}
