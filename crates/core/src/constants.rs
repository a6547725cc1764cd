//! Constants used throughout the recipes core crate.

/// Default seed file read at startup when no explicit path is configured.
pub const DEFAULT_SEED_FILE: &str = "recipes.json";

/// Environment variable naming the seed file.
pub const SEED_FILE_ENV: &str = "RECIPES_SEED_FILE";

/// Environment variable selecting the update policy (`replace` or `preserve`).
pub const UPDATE_POLICY_ENV: &str = "RECIPES_UPDATE_POLICY";
