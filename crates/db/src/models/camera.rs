use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, Set, SqlErr};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{entities::camera, types::CameraStatus};

#[derive(Debug, Error)]
pub enum CameraError {
    #[error(transparent)]
    Database(#[from] DbErr),
    #[error("Cámara no encontrada")]
    NotFound,
    #[error("El número de serie ya existe")]
    DuplicateSerial,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    pub id: i32,
    pub nombre: String,
    pub modelo: Option<String>,
    pub serie: String,
    pub ubicacion: String,
    pub estado: CameraStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated payload shared by the create and update paths. Both
/// operations replace the full set of mutable fields.
#[derive(Debug, Clone)]
pub struct CameraData {
    pub nombre: String,
    pub modelo: Option<String>,
    pub serie: String,
    pub ubicacion: String,
    pub estado: CameraStatus,
}

impl Camera {
    fn from_model(model: camera::Model) -> Self {
        Self {
            id: model.id,
            nombre: model.nombre,
            modelo: model.modelo,
            serie: model.serie,
            ubicacion: model.ubicacion,
            estado: model.estado,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }

    pub async fn find_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Self>, DbErr> {
        let records = camera::Entity::find().all(db).await?;
        Ok(records.into_iter().map(Self::from_model).collect())
    }

    pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Self>, DbErr> {
        let record = camera::Entity::find_by_id(id).one(db).await?;
        Ok(record.map(Self::from_model))
    }

    /// Persists a new camera. The unique-serial invariant is enforced by
    /// the store, not pre-checked here, so concurrent creates with the
    /// same serial are arbitrated by the unique constraint.
    pub async fn create<C: ConnectionTrait>(db: &C, data: &CameraData) -> Result<Self, CameraError> {
        let now = Utc::now();
        let active = camera::ActiveModel {
            nombre: Set(data.nombre.clone()),
            modelo: Set(data.modelo.clone()),
            serie: Set(data.serie.clone()),
            ubicacion: Set(data.ubicacion.clone()),
            estado: Set(data.estado),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        active.insert(db).await.map(Self::from_model).map_err(classify)
    }

    /// Full replacement of the mutable fields; `updated_at` is refreshed,
    /// `id` and `created_at` are never touched.
    pub async fn update<C: ConnectionTrait>(
        db: &C,
        id: i32,
        data: &CameraData,
    ) -> Result<Self, CameraError> {
        let record = camera::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(CameraError::NotFound)?;

        let mut active: camera::ActiveModel = record.into();
        active.nombre = Set(data.nombre.clone());
        active.modelo = Set(data.modelo.clone());
        active.serie = Set(data.serie.clone());
        active.ubicacion = Set(data.ubicacion.clone());
        active.estado = Set(data.estado);
        active.updated_at = Set(Utc::now());

        active.update(db).await.map(Self::from_model).map_err(classify)
    }

    /// Hard delete. Returns the number of rows affected; zero means the
    /// id did not exist.
    pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<u64, DbErr> {
        let result = camera::Entity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected)
    }
}

fn classify(err: DbErr) -> CameraError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => CameraError::DuplicateSerial,
        _ => CameraError::Database(err),
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{ConnectOptions, Database, DatabaseConnection};
    use sea_orm_migration::MigratorTrait;

    use super::*;

    async fn setup_db() -> DatabaseConnection {
        // Single connection so every query sees the same in-memory database.
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1);
        let db = Database::connect(options).await.unwrap();
        db_migration::Migrator::up(&db, None).await.unwrap();
        db
    }

    fn sample(serie: &str) -> CameraData {
        CameraData {
            nombre: "Cámara entrada".to_string(),
            modelo: Some("DS-2CD2043".to_string()),
            serie: serie.to_string(),
            ubicacion: "Pasillo A".to_string(),
            estado: CameraStatus::Available,
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_timestamps() {
        let db = setup_db().await;

        let camera = Camera::create(&db, &sample("SN-001")).await.unwrap();

        assert!(camera.id >= 1);
        assert_eq!(camera.serie, "SN-001");
        assert_eq!(camera.estado, CameraStatus::Available);
        assert_eq!(camera.created_at, camera.updated_at);
    }

    #[tokio::test]
    async fn duplicate_serial_is_rejected_by_the_store() {
        let db = setup_db().await;

        Camera::create(&db, &sample("SN-001")).await.unwrap();
        let mut other = sample("SN-001");
        other.nombre = "Cámara trasera".to_string();
        other.estado = CameraStatus::InUse;

        let err = Camera::create(&db, &other).await.unwrap_err();
        assert!(matches!(err, CameraError::DuplicateSerial));

        let all = Camera::find_all(&db).await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn update_replaces_fields_and_refreshes_updated_at() {
        let db = setup_db().await;

        let created = Camera::create(&db, &sample("SN-001")).await.unwrap();

        let mut replacement = sample("SN-002");
        replacement.nombre = "Cámara azotea".to_string();
        replacement.modelo = None;
        replacement.estado = CameraStatus::Maintenance;
        let updated = Camera::update(&db, created.id, &replacement).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.nombre, "Cámara azotea");
        assert_eq!(updated.modelo, None);
        assert_eq!(updated.serie, "SN-002");
        assert_eq!(updated.estado, CameraStatus::Maintenance);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn update_missing_id_returns_not_found() {
        let db = setup_db().await;

        let err = Camera::update(&db, 999_999, &sample("SN-001"))
            .await
            .unwrap_err();
        assert!(matches!(err, CameraError::NotFound));

        assert!(Camera::find_all(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_to_taken_serial_is_a_conflict() {
        let db = setup_db().await;

        Camera::create(&db, &sample("SN-001")).await.unwrap();
        let second = Camera::create(&db, &sample("SN-002")).await.unwrap();

        let err = Camera::update(&db, second.id, &sample("SN-001"))
            .await
            .unwrap_err();
        assert!(matches!(err, CameraError::DuplicateSerial));
    }

    #[tokio::test]
    async fn delete_reports_rows_affected() {
        let db = setup_db().await;

        let created = Camera::create(&db, &sample("SN-001")).await.unwrap();

        assert_eq!(Camera::delete(&db, created.id).await.unwrap(), 1);
        assert_eq!(Camera::delete(&db, created.id).await.unwrap(), 0);
        assert!(Camera::find_by_id(&db, created.id).await.unwrap().is_none());
    }
}
