use dotenvy::dotenv;
use std::net::SocketAddr;
use tracing::{error, info, warn};

use mergington_activities::config::ServerConfig;
use mergington_activities::database::{seed, ActivityStore};
use mergington_activities::logging::init_logging;
use mergington_activities::web::{self, AppState};

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_logging();

    let config = ServerConfig::from_env();
    info!(version = env!("CARGO_PKG_VERSION"), "starting activities server");

    let catalog = match &config.activities_file {
        Some(path) => match seed::load_catalog(path) {
            Ok(catalog) => {
                info!(path = %path.display(), activities = catalog.len(), "loaded activity catalog");
                catalog
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "could not load activity catalog");
                std::process::exit(1);
            }
        },
        None => seed::default_catalog(),
    };

    let state = AppState::new(ActivityStore::new(catalog));
    let app = web::build_router(state, &config.static_dir);

    let addr: SocketAddr = match config.bind_addr().parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!(addr = %config.bind_addr(), error = %e, "invalid HOST/PORT");
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = SocketAddr::new(addr.ip(), addr.port().wrapping_add(1));
            warn!(%addr, %fallback, error = %e, "bind failed, trying fallback port");
            match tokio::net::TcpListener::bind(fallback).await {
                Ok(l) => l,
                Err(e) => {
                    error!(%fallback, error = %e, "could not bind fallback port");
                    std::process::exit(1);
                }
            }
        }
    };

    match listener.local_addr() {
        Ok(bound) => info!("serving activities on http://{}", bound),
        Err(e) => warn!(error = %e, "could not read bound address"),
    }

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server stopped");
        std::process::exit(1);
    }
}
