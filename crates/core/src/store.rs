//! In-memory recipe store.
//!
//! The store owns an ordered collection of [`Recipe`] records behind a single lock. Cloning a
//! [`RecipeStore`] clones the handle, not the data, so every request handler sees the same
//! collection. Each operation takes the lock exactly once and therefore runs atomically with
//! respect to every other operation.
//!
//! ## Duplicate identifiers
//!
//! Generated ids never collide, but seed data and replace-mode updates can introduce
//! duplicates. Lookups by id scan from the end of the collection, so the *last* record with a
//! matching id is the one updated or deleted.
//!
//! ## Pure data operations
//!
//! Nothing here knows about HTTP. Status codes and response bodies belong in `api-rest`.

use crate::config::{CoreConfig, UpdatePolicy};
use crate::id::RecipeId;
use crate::model::{unset_published_at, Recipe, RecipePayload};
use crate::seed::load_seed_or_empty;
use crate::RecipeNotFound;
use chrono::Utc;
use std::path::Path;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared handle to the recipe collection.
#[derive(Clone, Debug, Default)]
pub struct RecipeStore {
    recipes: Arc<RwLock<Vec<Recipe>>>,
    update_policy: UpdatePolicy,
}

impl RecipeStore {
    /// Creates an empty store.
    pub fn new(update_policy: UpdatePolicy) -> Self {
        Self::with_recipes(Vec::new(), update_policy)
    }

    /// Creates a store holding `recipes`, in the given order.
    pub fn with_recipes(recipes: Vec<Recipe>, update_policy: UpdatePolicy) -> Self {
        Self {
            recipes: Arc::new(RwLock::new(recipes)),
            update_policy,
        }
    }

    /// Creates a store seeded from the JSON file at `path`.
    ///
    /// Never fails: a missing or malformed seed file yields an empty store; see
    /// [`load_seed_or_empty`].
    pub fn from_seed_file(path: &Path, update_policy: UpdatePolicy) -> Self {
        Self::with_recipes(load_seed_or_empty(path), update_policy)
    }

    /// Creates a store seeded from the configured seed file.
    pub fn from_config(cfg: &CoreConfig) -> Self {
        Self::from_seed_file(cfg.seed_file(), cfg.update_policy())
    }

    pub fn update_policy(&self) -> UpdatePolicy {
        self.update_policy
    }

    /// Stores a new recipe built from `payload` and returns it.
    ///
    /// The store assigns a fresh id and stamps `publishedAt` with the current time; any `id`
    /// or `publishedAt` in the payload is ignored. Field contents are not validated.
    pub fn create(&self, payload: RecipePayload) -> Recipe {
        let recipe = payload.into_recipe(RecipeId::new().into(), Utc::now());
        self.write().push(recipe.clone());
        tracing::debug!("created recipe {}", recipe.id);
        recipe
    }

    /// Returns every recipe in collection order.
    pub fn list(&self) -> Vec<Recipe> {
        self.read().clone()
    }

    /// Replaces the recipe whose id is `id` and returns the stored result.
    ///
    /// Under [`UpdatePolicy::Replace`] the payload overwrites the record wholesale, including
    /// `id` and `publishedAt`. Under [`UpdatePolicy::PreserveIdentity`] those two fields keep
    /// their stored values.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeNotFound`] if no recipe has the id. The collection is unchanged.
    pub fn update(&self, id: &str, payload: RecipePayload) -> Result<Recipe, RecipeNotFound> {
        let mut recipes = self.write();
        let index = position_of(&recipes, id)?;

        let updated = match self.update_policy {
            UpdatePolicy::Replace => {
                let new_id = payload.id.clone().unwrap_or_default();
                let published_at = payload.published_at.unwrap_or_else(unset_published_at);
                payload.into_recipe(new_id, published_at)
            }
            UpdatePolicy::PreserveIdentity => {
                let current = &recipes[index];
                let (kept_id, kept_published_at) = (current.id.clone(), current.published_at);
                payload.into_recipe(kept_id, kept_published_at)
            }
        };

        recipes[index] = updated.clone();
        tracing::debug!("updated recipe {} (now {})", id, updated.id);
        Ok(updated)
    }

    /// Removes the recipe whose id is `id`, keeping the order of the rest.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeNotFound`] if no recipe has the id. The collection is unchanged.
    pub fn delete(&self, id: &str) -> Result<(), RecipeNotFound> {
        let mut recipes = self.write();
        let index = position_of(&recipes, id)?;
        recipes.remove(index);
        tracing::debug!("deleted recipe {}", id);
        Ok(())
    }

    /// Returns, in collection order, every recipe with a tag equal to `tag` ignoring case.
    ///
    /// An empty `tag` is not special: it matches only recipes carrying an empty tag.
    pub fn search_by_tag(&self, tag: &str) -> Vec<Recipe> {
        self.read()
            .iter()
            .filter(|r| r.has_tag(tag))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Writers never panic mid-mutation, so a poisoned lock still guards a consistent Vec.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Recipe>> {
        self.recipes.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Recipe>> {
        self.recipes.write().unwrap_or_else(|e| e.into_inner())
    }
}

fn position_of(recipes: &[Recipe], id: &str) -> Result<usize, RecipeNotFound> {
    recipes.iter().rposition(|r| r.id == id).ok_or_else(|| {
        tracing::warn!("recipe not found: {}", id);
        RecipeNotFound { id: id.to_string() }
    })
}
