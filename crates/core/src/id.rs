//! Recipe identifier generation.
//!
//! New recipes get a time-ordered UUID (version 7) rendered in simple form: 32 lowercase
//! hexadecimal characters, no hyphens. Identifiers generated later in a process sort after
//! earlier ones.
//!
//! The store itself treats ids as opaque strings. Seed data and replace-mode updates can
//! carry identifiers in any format, so [`RecipeId`] is only used at creation time.

use std::fmt;
use uuid::Uuid;

/// A freshly generated recipe identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecipeId(Uuid);

impl Default for RecipeId {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeId {
    /// Generates a new identifier.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

impl From<RecipeId> for String {
    fn from(id: RecipeId) -> Self {
        id.to_string()
    }
}
