//! Entry point: read settings, set up logging, and serve the keeper endpoint.

use actix_web::{middleware, web, App, HttpServer};
use clap::Parser;
use sleeper_keepers::{
    cli::ServerArgs,
    core::build_client,
    server::{configure_routes, AppState},
    sleeper::{PlayerDirectoryCache, SleeperClient},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

/// Run the server.
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = ServerArgs::parse();
    init_logging();

    let ttl = args.players_cache_ttl();
    match ttl {
        Some(ttl) => info!("Player directory cache enabled (TTL: {}s)", ttl.as_secs()),
        None => info!("Player directory cache disabled, fetching per request"),
    }

    let state = AppState::new(
        SleeperClient::new(build_client()?)?,
        PlayerDirectoryCache::new(ttl),
    );

    info!("Starting HTTP server on {}:{}", args.host, args.port);

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    });
    if let Some(workers) = args.workers {
        server = server.workers(workers);
    }

    server.bind((args.host.as_str(), args.port))?.run().await?;

    Ok(())
}
