use std::time::Duration;

use sea_orm::sea_query::Index;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::entity::registration;

pub async fn init_db(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.url.clone());

    // Set connection pool options
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .sqlx_logging(config.sqlx_logging);

    let db = Database::connect(opt).await?;
    db.get_schema_registry("registration_server::entity::*")
        .sync(&db)
        .await?;
    ensure_indexes(&db).await?;

    Ok(db)
}

/// Ensure the composite unique index backing the one-registration-per-student rule.
///
/// SeaORM's schema-sync doesn't create composite indexes, so it is created
/// manually on startup.
pub async fn ensure_indexes(db: &DatabaseConnection) -> Result<(), DbErr> {
    let stmt = Index::create()
        .if_not_exists()
        .unique()
        .name("idx_registration_student_unique")
        .table(registration::Entity)
        .col(registration::Column::StudentNameKey)
        .col(registration::Column::Grade)
        .col(registration::Column::Division)
        .to_owned();

    let backend = db.get_database_backend();
    db.execute_raw(backend.build(&stmt)).await?;
    info!("Ensured index idx_registration_student_unique exists");

    Ok(())
}
