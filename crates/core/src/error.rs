#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read seed file: {0}")]
    SeedRead(std::io::Error),
    #[error("failed to deserialize seed file: {0}")]
    SeedDeserialization(serde_json::Error),
}

pub type RecipeResult<T> = std::result::Result<T, RecipeError>;

/// The only failure of the store's update and delete operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("recipe not found: {id}")]
pub struct RecipeNotFound {
    pub id: String,
}
