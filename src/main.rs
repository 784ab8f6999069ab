use axum::{
    http::{header, HeaderValue, Method},
    Server,
};
use clap::Parser;
use eyre::WrapErr;
use listings::{Controller, EventService, NgoService};
use std::{future, net::SocketAddr};
use tokio::signal;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{error, info, Level};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let env_file = common::dotenv()?;

    let config = Config::parse();
    common::logging::init(config.log_level)?;

    if let Some(path) = env_file {
        info!(path = %path.display(), "loaded environment from file");
    }

    let db = database::connect(&config.database_url)
        .await
        .wrap_err("failed to connect to the database")?;
    database::migrate(&db)
        .await
        .wrap_err("failed to apply migrations")?;

    let events = Controller::events(EventService::new(db.clone()))?;
    let ngos = Controller::ngos(NgoService::new(db))?;
    let router = listings::router(events, ngos).layer(cors(&config.allowed_origins)?);

    info!(address = %config.address, "listening and ready to handle requests");
    Server::bind(&config.address)
        .serve(router.into_make_service())
        .with_graceful_shutdown(shutdown())
        .await
        .wrap_err("failed to start server")?;

    Ok(())
}

/// Allow the frontend to call the API from the browser
fn cors(origins: &[String]) -> eyre::Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.is_empty() {
        return Ok(layer.allow_origin(Any));
    }

    let origins = origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<_>, _>>()
        .wrap_err("invalid allowed origin")?;

    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}

/// Setup hyper graceful shutdown for SIGINT (ctrl+c) and SIGTERM
async fn shutdown() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            error!(%error, "failed to listen for ctrl+c");
            future::pending::<()>().await;
        }
    };
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                error!(%error, "failed to install sigterm handler");
                future::pending::<()>().await;
            }
        }
    };

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("server successfully shutdown");
    info!("goodbye! o/");
}

/// The NGO and event listing service
#[derive(Parser)]
#[command(author, version, about)]
struct Config {
    /// The address for the server to listen on
    #[arg(long, default_value = "127.0.0.1:4243", env = "ADDRESS")]
    address: SocketAddr,

    /// The database to store listings in
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// The default level to log at
    ///
    /// More specific log targets can be set using the `RUST_LOG` environment variable. They must be
    /// formatted as tracing directives: https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html#directives
    #[arg(long, default_value_t = Level::INFO, env = "LOG_LEVEL")]
    log_level: Level,

    /// Origins allowed to make cross-origin requests, separated by commas
    ///
    /// Any origin is allowed if none are given.
    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',')]
    allowed_origins: Vec<String>,
}
