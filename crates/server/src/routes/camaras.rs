use std::str::FromStr;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json as ResponseJson,
    routing::{get, put},
};
use db::{
    models::camera::{Camera, CameraData, CameraError},
    types::CameraStatus,
};
use serde::{Deserialize, Serialize};

use crate::{AppState, error::ApiError};

/// Raw request body for create and update. Fields are optional so that
/// the required-field policy produces the documented 400 instead of a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CameraPayload {
    pub nombre: Option<String>,
    pub modelo: Option<String>,
    pub serie: Option<String>,
    pub ubicacion: Option<String>,
    pub estado: Option<String>,
}

impl CameraPayload {
    /// `nombre`, `serie`, `ubicacion` and `estado` must be present and
    /// non-empty; `modelo` is optional. Which field is missing is not
    /// reported back.
    fn validate(self) -> Result<CameraData, ApiError> {
        let nombre = non_empty(self.nombre).ok_or(ApiError::MissingFields)?;
        let serie = non_empty(self.serie).ok_or(ApiError::MissingFields)?;
        let ubicacion = non_empty(self.ubicacion).ok_or(ApiError::MissingFields)?;
        let estado = non_empty(self.estado).ok_or(ApiError::MissingFields)?;
        let estado = CameraStatus::from_str(&estado).map_err(|_| ApiError::InvalidStatus)?;

        Ok(CameraData {
            nombre,
            modelo: self.modelo,
            serie,
            ubicacion,
            estado,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

pub async fn list_camaras(
    State(state): State<AppState>,
) -> Result<ResponseJson<Vec<Camera>>, ApiError> {
    match Camera::find_all(&state.db().conn).await {
        Ok(camaras) => Ok(ResponseJson(camaras)),
        Err(err) => {
            tracing::error!("failed to list cameras: {err}");
            Err(ApiError::Internal("Error al obtener cámaras".to_string()))
        }
    }
}

pub async fn create_camara(
    State(state): State<AppState>,
    Json(payload): Json<CameraPayload>,
) -> Result<(StatusCode, ResponseJson<Camera>), ApiError> {
    let data = payload.validate()?;

    match Camera::create(&state.db().conn, &data).await {
        Ok(camara) => Ok((StatusCode::CREATED, ResponseJson(camara))),
        Err(CameraError::DuplicateSerial) => Err(ApiError::DuplicateSerial),
        Err(err) => {
            tracing::error!("failed to create camera: {err}");
            Err(ApiError::Internal("Error al agregar cámara".to_string()))
        }
    }
}

pub async fn update_camara(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CameraPayload>,
) -> Result<ResponseJson<Camera>, ApiError> {
    let data = payload.validate()?;

    match Camera::update(&state.db().conn, id, &data).await {
        Ok(camara) => Ok(ResponseJson(camara)),
        Err(CameraError::NotFound) => Err(ApiError::NotFound),
        Err(CameraError::DuplicateSerial) => Err(ApiError::DuplicateSerial),
        Err(err) => {
            tracing::error!("failed to update camera {id}: {err}");
            Err(ApiError::Internal("Error al actualizar cámara".to_string()))
        }
    }
}

pub async fn delete_camara(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<ResponseJson<DeleteResponse>, ApiError> {
    match Camera::delete(&state.db().conn, id).await {
        Ok(0) => Err(ApiError::NotFound),
        Ok(_) => Ok(ResponseJson(DeleteResponse {
            message: "Cámara eliminada correctamente".to_string(),
        })),
        Err(err) => {
            tracing::error!("failed to delete camera {id}: {err}");
            Err(ApiError::Internal("Error al eliminar cámara".to_string()))
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/camaras", get(list_camaras).post(create_camara))
        .route("/camaras/{id}", put(update_camara).delete(delete_camara))
}
