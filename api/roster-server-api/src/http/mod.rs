use std::{any::Any, sync::Arc};

use axum::{
    Router,
    http::Uri,
    response::{IntoResponse, Response},
    routing::get,
};
use log::info;
use roster_app::Application;
use tower_http::catch_panic::CatchPanicLayer;

use crate::app::ServiceError;

mod players;

pub use players::{JsonPlayer, JsonPlayerPatch};

#[derive(Clone)]
pub struct AppState {
    pub app: Arc<Application>,
}

pub fn router(app: Arc<Application>) -> Router {
    Router::new()
        .route(
            "/players",
            get(players::get_all_players)
                .post(players::create_player)
                .delete(players::delete_all_players),
        )
        .route(
            "/players/{riotid}",
            get(players::get_player)
                .put(players::update_player)
                .delete(players::delete_player),
        )
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(AppState { app })
}

async fn route_not_found(uri: Uri) -> ServiceError {
    ServiceError::NotFound(format!("No route for {}", uri.path()))
}

async fn method_not_allowed(uri: Uri) -> ServiceError {
    ServiceError::MethodNotAllowed(format!("Method not allowed for {}", uri.path()))
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    log::error!("Request handler panicked: {}", detail);
    ServiceError::Internal("Internal server error".to_string()).into_response()
}

pub async fn run(
    app: Arc<Application>,
    shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
) {
    let host = std::env::var("ROSTER_HTTP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("ROSTER_HTTP_PORT")
        .expect("ROSTER_HTTP_PORT must be set")
        .parse::<u16>()
        .expect("ROSTER_HTTP_PORT must be a valid u16");

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port))
        .await
        .expect("Failed to bind HTTP listener");

    info!("API server listening on {}:{}", host, port);
    if let Err(e) = axum::serve(listener, router(app))
        .with_graceful_shutdown(shutdown_signal)
        .await
    {
        log::error!("HTTP API server error: {}", e);
        return;
    }

    info!("HTTP API shut down gracefully");
}
