use crate::catalog_actor::CatalogError;
use crate::order_actor::OrderError;
use crate::placement::PlaceOrderError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

/// Errors a handler can answer with.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Placement(#[from] PlaceOrderError),
    #[error("order not found")]
    OrderNotFound,
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(_) => ApiError::OrderNotFound,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Placement(PlaceOrderError::MissingParameters) => StatusCode::BAD_REQUEST,
            ApiError::Placement(PlaceOrderError::CouldNotPlaceOrder) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::OrderNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(detail) => {
                error!(error = %detail, "Request failed");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal error" })),
                )
                    .into_response();
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
