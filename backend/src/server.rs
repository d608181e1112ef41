//! # Server Setup
//!
//! Server initialization, route registration, and HTTP server startup.
//!
//! This module provides the main server setup function that creates the Axum
//! router, registers both routes, applies middleware, and starts the HTTP
//! server.

// region: --- Imports
use crate::config::Config;
use crate::handlers;
use crate::middleware::{stamp_req, time_requests};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tracing::info;
// endregion: --- Imports

// region: --- Router
/// Build the application router with routes and middleware.
pub fn app(config: &Config) -> Router {
    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/criar_tarefa", post(handlers::create_task))
        .route("/tarefas", get(handlers::list_tasks))
        .layer(cors)
        // stamp_req is outermost so the timing log can carry the request ID
        .layer(axum::middleware::from_fn(time_requests))
        .layer(axum::middleware::from_fn(stamp_req))
}
// endregion: --- Router

// region: --- Server Setup
/// Initialize and start the HTTP server.
///
/// # Errors
///
/// This function will return an error if server binding fails.
pub async fn start_server(config: Config) -> anyhow::Result<()> {
    // Configure tracing subscriber
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let filter = match log_level.as_str() {
        "trace" => tracing_subscriber::EnvFilter::new("trace"),
        "debug" => tracing_subscriber::EnvFilter::new("debug"),
        "info" => tracing_subscriber::EnvFilter::new("info"),
        "warn" => tracing_subscriber::EnvFilter::new("warn"),
        "error" => tracing_subscriber::EnvFilter::new("error"),
        _ => tracing_subscriber::EnvFilter::new("info"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global tracing subscriber");

    info!(" TAREFAS BACKEND STARTING");
    info!(" Log level: {}", log_level);
    info!(" Allowed origins: {:?}", config.allowed_origins);

    let router = app(&config);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!(" Listening on http://{}", config.bind_address);

    axum::serve(listener, router).await?;

    Ok(())
}
// endregion: --- Server Setup

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_responses_carry_request_id() {
        let router = app(&Config::default());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/tarefas")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("X-Request-ID"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let router = app(&Config::default());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
