//! Initial recipe data.
//!
//! The seed is a single JSON file holding an array of recipes. It is read once at startup and
//! never written back.

use crate::model::Recipe;
use crate::{RecipeError, RecipeResult};
use std::fs;
use std::path::Path;

/// Reads the recipes stored in the seed file at `path`.
///
/// # Errors
///
/// Returns [`RecipeError::SeedRead`] if the file cannot be read and
/// [`RecipeError::SeedDeserialization`] if it is not a JSON array of recipes.
pub fn load_seed(path: &Path) -> RecipeResult<Vec<Recipe>> {
    let contents = fs::read_to_string(path).map_err(RecipeError::SeedRead)?;
    serde_json::from_str(&contents).map_err(RecipeError::SeedDeserialization)
}

/// Like [`load_seed`], but any failure yields an empty collection.
///
/// Failures are logged and never surface to the caller.
pub fn load_seed_or_empty(path: &Path) -> Vec<Recipe> {
    match load_seed(path) {
        Ok(recipes) => {
            tracing::info!("loaded {} recipes from {}", recipes.len(), path.display());
            recipes
        }
        Err(e) => {
            tracing::warn!("starting with no recipes ({}): {}", path.display(), e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn seed_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write seed file");
        file
    }

    #[test]
    fn test_load_seed_reads_recipes_in_order() {
        let file = seed_file(
            r#"[
                {"id": "a", "name": "Pizza", "tags": ["italian"], "ingredients": [], "instructions": [], "publishedAt": "2021-01-17T19:28:52.803062+01:00"},
                {"id": "b", "name": "Tacos", "tags": ["mexican"], "ingredients": [], "instructions": [], "publishedAt": "2021-01-17T19:28:52Z"}
            ]"#,
        );

        let recipes = load_seed(file.path()).expect("seed should load");
        let ids: Vec<&str> = recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(recipes[1].name, "Tacos");
    }

    #[test]
    fn test_load_seed_accepts_null_fields() {
        let file = seed_file(
            r#"[
                {"id": "a", "name": "Pizza", "tags": ["italian"], "ingredients": [], "instructions": [], "publishedAt": "2021-01-17T19:28:52Z"},
                {"id": "b", "name": "Plain", "tags": null, "ingredients": null, "instructions": null, "publishedAt": "2021-01-17T19:28:52Z"}
            ]"#,
        );

        let recipes = load_seed_or_empty(file.path());
        assert_eq!(recipes.len(), 2);
        assert!(recipes[1].tags.is_empty());
        assert!(recipes[1].ingredients.is_empty());
    }

    #[test]
    fn test_load_seed_reports_missing_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let err = load_seed(&dir.path().join("recipes.json")).expect_err("should fail");
        assert!(matches!(err, RecipeError::SeedRead(_)));
    }

    #[test]
    fn test_load_seed_reports_malformed_file() {
        let file = seed_file("{ not json");
        let err = load_seed(file.path()).expect_err("should fail");
        assert!(matches!(err, RecipeError::SeedDeserialization(_)));
    }

    #[test]
    fn test_load_seed_or_empty_swallows_errors() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        assert!(load_seed_or_empty(&dir.path().join("missing.json")).is_empty());

        let file = seed_file(r#"{"id": "not-an-array"}"#);
        assert!(load_seed_or_empty(file.path()).is_empty());
    }
}
