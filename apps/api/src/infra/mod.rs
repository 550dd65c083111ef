use crate::{
    adapters::persistence::PostgresPersistence,
    infra::{
        config::AppConfig,
        db::{init_db, run_migrations},
    },
};

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod setup;

pub use error::InfraError;

pub async fn postgres_persistence(config: &AppConfig) -> Result<PostgresPersistence, InfraError> {
    let pool = init_db(&config.database_url, config.db_max_connections).await?;
    if config.run_migrations {
        run_migrations(&pool).await?;
    }
    Ok(PostgresPersistence::new(pool))
}
