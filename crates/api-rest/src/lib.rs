//! # API REST
//!
//! REST API implementation for the recipes service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON decoding errors, status codes, CORS)
//!
//! Uses `recipes-core` for data operations and `api-shared` for response types.

#![warn(rust_2018_idioms)]

pub mod docs;
pub mod error;
pub mod handlers;

pub use docs::ApiDoc;
pub use error::ApiError;

use axum::{
    routing::{get, post, put},
    Router,
};
use recipes_core::RecipeStore;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Path the OpenAPI document is served from.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Path of the Swagger UI.
pub const SWAGGER_UI_PATH: &str = "/swagger";

/// Application state shared across REST API handlers
///
/// Holds a handle to the recipe store; cloning the state shares the same collection.
#[derive(Clone, Debug)]
pub struct AppState {
    pub store: RecipeStore,
}

impl AppState {
    pub fn new(store: RecipeStore) -> Self {
        Self { store }
    }
}

/// Builds the REST application: recipe routes, health check and Swagger UI.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/recipe", post(handlers::create_recipe))
        .route("/recipes", get(handlers::list_recipes))
        .route(
            "/recipe/:id",
            put(handlers::update_recipe).delete(handlers::delete_recipe),
        )
        .route("/recipes/search", get(handlers::search_recipes))
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the REST API on `addr` until Ctrl+C is received.
///
/// # Errors
/// Returns an error if the address cannot be bound or the HTTP server fails while running.
pub async fn serve(addr: &str, state: AppState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("-- Recipes REST API listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- Recipes REST API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", err);
        return;
    }
    tracing::info!("Ctrl+C received, shutting down");
}
