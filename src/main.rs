use anyhow::Result;
use axum::Router;
use greenflux_sizing::{api, config::Config, telemetry};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    telemetry::init_tracing();

    let cfg = Config::load()?;

    let state = api::AppState::new(cfg.clone());
    let app: Router = api::router(state, &cfg);

    let addr = cfg.server.socket_addr()?;

    if cfg.server.host == "0.0.0.0" {
        warn!(
            "WARNING: Server binding to 0.0.0.0 - service will be accessible from network! \
            For production, bind to 127.0.0.1 unless behind a firewall/reverse proxy."
        );
    }

    info!(%addr, "starting GreenFlux sizing service");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await?;

    warn!("shutdown complete");
    Ok(())
}
