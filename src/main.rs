use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};
use workout_tracker::{navigation, resolve_addr, router, AppState, Tracker};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let today = navigation::today();
    let state = AppState::new(Tracker::new(today));
    let app = router(state);

    let addr = resolve_addr();
    info!(%today, "listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for ctrl-c: {err}");
    }
    info!("shutting down");
}
