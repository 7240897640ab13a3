use std::fmt::Display;
use std::process;

use dotenvy::dotenv;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use activities::config::AppConfig;
use activities::database::{catalog_repo, ActivityDirectory};
use activities::web::{self, AppState};

fn fail(context: &str, err: impl Display) -> ! {
    error!("{}: {}", context, err);
    process::exit(1);
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env().unwrap_or_else(|e| fail("invalid configuration", e));

    let catalog = catalog_repo::load_catalog(config.seed_file.as_deref())
        .unwrap_or_else(|e| fail("cannot load activity catalog", e));
    let directory = ActivityDirectory::from_seed(catalog)
        .unwrap_or_else(|e| fail("invalid activity catalog", e));
    info!(
        activities = directory.len(),
        capacity = ?config.capacity,
        seed = ?config.seed_file,
        "activity directory seeded"
    );

    let app = web::build_router(AppState::new(directory, config.capacity), &config.static_dir);

    let addr = config
        .socket_addr()
        .unwrap_or_else(|e| fail("invalid listen address", e));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config
                .socket_addr_with_port(config.port.saturating_add(1))
                .unwrap_or_else(|e| fail("invalid fallback address", e));
            warn!(%addr, %fallback, error = %e, "bind failed, trying fallback port");
            tokio::net::TcpListener::bind(fallback)
                .await
                .unwrap_or_else(|e| fail("cannot bind fallback port", e))
        }
    };

    match listener.local_addr() {
        Ok(bound) => info!("serving activities on http://{}", bound),
        Err(e) => warn!(error = %e, "listening on unknown address"),
    }

    if let Err(e) = axum::serve(listener, app).await {
        fail("server error", e);
    }
}
