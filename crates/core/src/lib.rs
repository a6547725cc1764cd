//! # Recipes Core
//!
//! Core business logic for the recipes service.
//!
//! This crate owns the in-memory recipe collection and the operations applied to it:
//! - Create, list, update-by-id and delete-by-id
//! - Case-insensitive search by tag
//! - Seeding the collection from a JSON file at startup
//!
//! **No API concerns**: HTTP routing, status codes and OpenAPI documentation belong in
//! `api-rest` and `api-shared`.

pub mod config;
pub mod constants;
pub mod error;
pub mod id;
pub mod model;
pub mod seed;
pub mod store;

pub use config::{CoreConfig, UpdatePolicy};
pub use constants::DEFAULT_SEED_FILE;
pub use error::{RecipeError, RecipeNotFound, RecipeResult};
pub use id::RecipeId;
pub use model::{Recipe, RecipePayload};
pub use seed::{load_seed, load_seed_or_empty};
pub use store::RecipeStore;
