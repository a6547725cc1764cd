use recipes_core::constants::{SEED_FILE_ENV, UPDATE_POLICY_ENV};
use recipes_core::{CoreConfig, RecipeStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;

/// Main entry point for the recipes service
///
/// Seeds the in-memory recipe store and serves the REST API with OpenAPI/Swagger
/// documentation until Ctrl+C is received.
///
/// # Environment Variables
/// - `RECIPES_REST_ADDR`: REST server address (default: "0.0.0.0:7778")
/// - `RECIPES_SEED_FILE`: JSON file holding the initial recipes (default: "recipes.json")
/// - `RECIPES_UPDATE_POLICY`: `replace` (default) or `preserve`
///
/// A `.env` file in the working directory is honoured. A missing or malformed seed file is
/// logged and the service starts with no recipes.
///
/// # Returns
/// * `Ok(())` - If the server starts and shuts down cleanly
/// * `Err(anyhow::Error)` - If configuration is invalid or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("recipes=info".parse()?)
                .add_directive("recipes_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("RECIPES_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:7778".into());

    let cfg = CoreConfig::from_env_values(
        std::env::var(SEED_FILE_ENV).ok(),
        std::env::var(UPDATE_POLICY_ENV).ok(),
    )?;
    tracing::info!(
        "++ Seeding recipes from {} (update policy: {})",
        cfg.seed_file().display(),
        cfg.update_policy()
    );

    let store = RecipeStore::from_config(&cfg);

    tracing::info!("++ Starting recipes REST on {}", rest_addr);
    api_rest::serve(&rest_addr, AppState::new(store)).await
}
