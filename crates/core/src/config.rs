//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the store. Request
//! handling never reads process-wide environment variables.

use crate::constants::DEFAULT_SEED_FILE;
use crate::{RecipeError, RecipeResult};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// How an update treats the identity fields (`id`, `publishedAt`) of the stored record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpdatePolicy {
    /// The payload replaces the whole record, identity included.
    ///
    /// An omitted `id` becomes the empty string and an omitted `publishedAt` becomes
    /// `0001-01-01T00:00:00Z`.
    #[default]
    Replace,
    /// The stored `id` and `publishedAt` survive the update; the payload's are ignored.
    PreserveIdentity,
}

impl FromStr for UpdatePolicy {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "replace" => Ok(Self::Replace),
            "preserve" | "preserve-identity" => Ok(Self::PreserveIdentity),
            other => Err(RecipeError::InvalidInput(format!(
                "unknown update policy '{other}' (expected 'replace' or 'preserve')"
            ))),
        }
    }
}

impl fmt::Display for UpdatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Replace => write!(f, "replace"),
            Self::PreserveIdentity => write!(f, "preserve"),
        }
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    seed_file: PathBuf,
    update_policy: UpdatePolicy,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_SEED_FILE), UpdatePolicy::default())
    }
}

impl CoreConfig {
    pub fn new(seed_file: PathBuf, update_policy: UpdatePolicy) -> Self {
        Self {
            seed_file,
            update_policy,
        }
    }

    /// Builds a configuration from optional raw values, typically environment variables.
    ///
    /// Missing or blank values fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::InvalidInput`] if `update_policy` is set but not recognised.
    pub fn from_env_values(
        seed_file: Option<String>,
        update_policy: Option<String>,
    ) -> RecipeResult<Self> {
        let seed_file = non_blank(seed_file)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SEED_FILE));
        let update_policy = non_blank(update_policy)
            .map(|v| v.parse::<UpdatePolicy>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self::new(seed_file, update_policy))
    }

    pub fn seed_file(&self) -> &Path {
        &self.seed_file
    }

    pub fn update_policy(&self) -> UpdatePolicy {
        self.update_policy
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
