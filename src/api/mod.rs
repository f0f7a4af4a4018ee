//! HTTP server: routes, shared state and graceful shutdown

mod error;
pub mod flash;
pub mod handlers;
pub mod views;

use crate::config::ServerSettings;
use crate::error::Result;
use crate::storage::TicketRepository;
use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use views::Views;

/// State shared by every request
pub struct AppState {
    pub repository: Arc<dyn TicketRepository>,
    pub views: Views,
}

impl AppState {
    #[must_use]
    pub fn new(repository: Arc<dyn TicketRepository>, views: Views) -> Self {
        Self { repository, views }
    }
}

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/tickets", get(handlers::index).post(handlers::store))
        .route("/tickets/create", get(handlers::create))
        .route(
            "/tickets/:id",
            get(handlers::show)
                .put(handlers::update)
                .delete(handlers::destroy)
                .post(handlers::method_override),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the application until Ctrl+C or SIGTERM
pub async fn serve(settings: &ServerSettings, state: Arc<AppState>) -> Result<()> {
    let app = router(state);

    let address = settings.address();
    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            },
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
