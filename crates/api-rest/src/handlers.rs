//! Request handlers.
//!
//! Each handler is a thin wrapper: decode the request, call one store operation, encode the
//! result. Store failures become [`ApiError`] responses.

use crate::error::ApiError;
use crate::AppState;
use api_shared::{ErrorRes, HealthRes, HealthService, MessageRes};
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::response::Json;
use recipes_core::{Recipe, RecipePayload};
use serde::Deserialize;
use utoipa::IntoParams;

/// Query string of `GET /recipes/search`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Tag to match, ignoring case. A missing tag matches like an empty one.
    #[serde(default)]
    pub tag: String,
}

// The body is decoded whatever its declared content type; only undecodable JSON is rejected.
fn decode_payload(body: &[u8]) -> Result<RecipePayload, ApiError> {
    Ok(serde_json::from_slice(body)?)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint, used for monitoring and load balancer checks.
#[axum::debug_handler]
pub async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/recipe",
    tag = "Recipes",
    request_body = RecipePayload,
    responses(
        (status = 200, description = "Recipe created", body = Recipe),
        (status = 400, description = "Malformed recipe payload", body = ErrorRes)
    )
)]
/// Create a recipe
///
/// The store assigns the `id` and stamps `publishedAt`; values for either in the body are
/// ignored.
///
/// # Errors
/// Returns `400 Bad Request` if the body is not a JSON recipe. The `Content-Type` header is
/// not checked.
#[axum::debug_handler]
pub async fn create_recipe(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Recipe>, ApiError> {
    let payload = decode_payload(&body)?;
    Ok(Json(state.store.create(payload)))
}

#[utoipa::path(
    get,
    path = "/recipes",
    tag = "Recipes",
    responses(
        (status = 200, description = "All recipes", body = [Recipe])
    )
)]
/// List recipes
#[axum::debug_handler]
pub async fn list_recipes(State(state): State<AppState>) -> Json<Vec<Recipe>> {
    Json(state.store.list())
}

#[utoipa::path(
    put,
    path = "/recipe/{id}",
    tag = "Recipes",
    request_body = RecipePayload,
    params(
        ("id" = String, Path, description = "Recipe id")
    ),
    responses(
        (status = 200, description = "Recipe updated", body = Recipe),
        (status = 400, description = "Malformed recipe payload", body = ErrorRes),
        (status = 404, description = "Recipe not found", body = ErrorRes)
    )
)]
/// Update a recipe
///
/// Replaces the stored recipe with the body. Whether `id` and `publishedAt` come from the body
/// or are kept depends on the configured update policy.
///
/// # Errors
/// Returns `400 Bad Request` for a malformed body and `404 Not Found` for an unknown id.
#[axum::debug_handler]
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Recipe>, ApiError> {
    let payload = decode_payload(&body)?;
    let recipe = state.store.update(&id, payload)?;
    Ok(Json(recipe))
}

#[utoipa::path(
    delete,
    path = "/recipe/{id}",
    tag = "Recipes",
    params(
        ("id" = String, Path, description = "Recipe id")
    ),
    responses(
        (status = 200, description = "Recipe deleted", body = MessageRes),
        (status = 404, description = "Recipe not found", body = ErrorRes)
    )
)]
/// Delete a recipe by id
#[axum::debug_handler]
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageRes>, ApiError> {
    state.store.delete(&id)?;
    Ok(Json(MessageRes::new("Recipe has been deleted")))
}

#[utoipa::path(
    get,
    path = "/recipes/search",
    tag = "Recipes",
    params(SearchParams),
    responses(
        (status = 200, description = "Recipes carrying the tag", body = [Recipe])
    )
)]
/// Search recipes by tag
#[axum::debug_handler]
pub async fn search_recipes(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Recipe>> {
    Json(state.store.search_by_tag(&params.tag))
}
