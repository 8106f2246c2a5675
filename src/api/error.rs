use crate::core::error::{CatalogError, FxError};
use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

const UNAVAILABLE_MESSAGE: &str = "Currency conversion service is temporarily unavailable";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Fx(#[from] FxError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Catalog(CatalogError::Invalid(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Catalog(CatalogError::Invalid(rejection.body_text()))
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Fx(FxError::SourceUnavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Fx(_) => StatusCode::BAD_REQUEST,
            ApiError::Catalog(CatalogError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Catalog(CatalogError::Invalid(_)) => StatusCode::BAD_REQUEST,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Fx(FxError::SourceUnavailable(_)) => UNAVAILABLE_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }
        let body = json!({
            "statusCode": status.as_u16(),
            "message": self.message(),
        });
        (status, Json(body)).into_response()
    }
}
