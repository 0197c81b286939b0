use anyhow::Context;
use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use service::auth::TokenService;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::ServerState;

/// Any origin may call the API.
fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn build_tokens(cfg: &AppConfig) -> anyhow::Result<TokenService> {
    let secs = i64::try_from(cfg.auth.token_ttl_secs).context("auth.token_ttl_secs out of range")?;
    let ttl = chrono::Duration::try_seconds(secs).context("auth.token_ttl_secs out of range")?;
    Ok(TokenService::new(&cfg.auth.jwt_secret, ttl))
}

/// Public entry: connect the store, build the app and serve until a shutdown
/// signal arrives.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    db.ping().await.context("database ping failed")?;
    info!("database ping ok");

    if cfg.database.run_migrations {
        migration::Migrator::up(&db, None).await.context("migrations failed")?;
        info!("migrations applied");
    }

    let state = ServerState::from_db(db, build_tokens(&cfg)?);
    let app: Router = routes::build_router(state, build_cors());

    let listener = TcpListener::bind((cfg.server.host.as_str(), cfg.server.port)).await?;
    info!(addr = %listener.local_addr()?, "car doctor server listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
