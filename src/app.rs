/*
 * Responsibility
 * - Config読み込み → 依存生成 (SessionDirectory / AccessGuard) → Router 組み立て
 * - Middleware の適用 (HTTP / CORS / admin guard)
 * - axum::serve() で起動
 */
use std::{panic, process, sync::Arc};

use anyhow::Result;
use axum::{Router, routing::get};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api;
use crate::api::v1::handlers::health::health;
use crate::config::Config;
use crate::guard::AccessGuard;
use crate::middleware;
use crate::repos::recipe_repo::RecipeCatalog;
use crate::sessions::{InMemorySessionDirectory, SessionDirectory};
use crate::state::AppState;

fn init_tracing() {
    // RUST_LOG=info,admin_guard=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        // development: crash the whole process; production: default hook only.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;
    init_panic_hook(!config.app_env.is_production());

    let sessions = Arc::new(InMemorySessionDirectory::from_seed(
        config
            .seed_sessions
            .iter()
            .cloned()
            .map(|seed| seed.into_entry()),
    ));

    tracing::info!(
        "starting API in {:?} mode on {} (protected methods: {}, seeded sessions: {})",
        config.app_env,
        config.addr,
        config.protected_methods,
        sessions.len()
    );

    let state = build_state(&config, sessions);
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_state(config: &Config, sessions: Arc<dyn SessionDirectory>) -> AppState {
    let guard = AccessGuard::with_methods(sessions, config.protected_methods.clone());
    AppState::new(Arc::new(guard), Arc::new(RecipeCatalog::new()))
}

pub fn build_router(state: AppState, config: &Config) -> Router {
    let v1 = middleware::auth::admin::apply(api::v1::routes(), state.clone());

    let router = Router::new()
        .route("/health", get(health))
        .nest("/api/v1", v1)
        .with_state(state);

    let router = middleware::cors::apply(router, config);
    middleware::http::apply(router, config)
}
