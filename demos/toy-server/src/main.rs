use restful::prelude::*;
use tokio::signal;

mod notes;
mod toys;

use notes::NotesController;
use toys::ToysController;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .init();

    let config = ConfigService::new();
    let mut router = RestRouter::with_config(RestConfig::from_service(&config)?);

    router
        .add_controller("/api/toys", Arc::new(ToysController::default()))?
        .add_resource(
            "/api/notes",
            ResourceBuilder::new(Arc::new(NotesController::default()))
                .list()
                .get()
                .add()
                .delete(),
        )?;

    for registration in router.registrations() {
        for route in registration.routes() {
            tracing::info!(%route, "route ready");
        }
    }

    let host = config.get_or("HOST", "0.0.0.0");
    let port = config.get_or("PORT", "3000");
    let addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, router.into_router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    tracing::info!("Shutdown signal received");
}
