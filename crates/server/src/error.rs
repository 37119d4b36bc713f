use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Error taxonomy of the HTTP surface. Store-layer failures never reach
/// the caller directly; handlers fold them into `Internal` with a generic
/// per-operation message and log the driver detail server-side.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Faltan campos obligatorios")]
    MissingFields,
    #[error("Estado no válido")]
    InvalidStatus,
    #[error("El número de serie ya existe")]
    DuplicateSerial,
    #[error("Cámara no encontrada")]
    NotFound,
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingFields | ApiError::InvalidStatus | ApiError::DuplicateSerial => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_map_to_expected_http_statuses() {
        assert_eq!(
            ApiError::MissingFields.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidStatus.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::DuplicateSerial.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("Error al obtener cámaras".to_string())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
