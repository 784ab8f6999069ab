use sqlx::{migrate::Migrator, postgres::PgConnectOptions, ConnectOptions};
use std::str::FromStr;
use tracing::{info, instrument, log::LevelFilter};

mod error;
mod event;
mod ngo;
mod types;

pub use error::{Error, Result};
pub use event::Event;
pub use ngo::Ngo;
pub use sqlx::PgPool;
pub use types::Info;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Connect to the database
#[instrument(skip_all)]
pub async fn connect(url: &str) -> Result<PgPool> {
    let options = PgConnectOptions::from_str(url)?.log_statements(LevelFilter::Debug);
    let db = PgPool::connect_with(options).await?;

    info!("connected to the database");

    Ok(db)
}

/// Apply any pending migrations
#[instrument(skip_all)]
pub async fn migrate(db: &PgPool) -> Result<()> {
    MIGRATOR.run(db).await?;

    info!("migrations applied");

    Ok(())
}
