use sea_orm_migration::{prelude::*, sea_orm::sea_query::ExprTrait};

#[derive(DeriveMigrationName)]
pub struct Migration;

// Must stay in sync with db::types::CameraStatus.
const ESTADOS: [&str; 4] = ["Disponible", "En uso", "Mantenimiento", "Dañada"];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .if_not_exists()
                    .table(Camaras::Table)
                    .col(
                        ColumnDef::new(Camaras::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Camaras::Nombre).string_len(100).not_null())
                    .col(ColumnDef::new(Camaras::Modelo).string_len(100))
                    .col(
                        ColumnDef::new(Camaras::Serie)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Camaras::Ubicacion)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Camaras::Estado)
                            .string_len(20)
                            .not_null()
                            .check(Expr::col(Camaras::Estado).is_in(ESTADOS)),
                    )
                    .col(timestamp_col(Camaras::CreatedAt))
                    .col(timestamp_col(Camaras::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Camaras::Table).to_owned())
            .await
    }
}

fn timestamp_col<T: Iden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

#[derive(Iden)]
enum Camaras {
    Table,
    Id,
    Nombre,
    Modelo,
    Serie,
    Ubicacion,
    Estado,
    CreatedAt,
    UpdatedAt,
}
