//! Recipe records and the caller-supplied payload used to create or replace them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// A stored recipe.
///
/// Serialized as `{id, name, tags, ingredients, instructions, publishedAt}`, with
/// `publishedAt` as an RFC 3339 timestamp.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instructions: Vec<String>,
    #[serde(
        default = "unset_published_at",
        deserialize_with = "null_as_unset_published_at"
    )]
    pub published_at: DateTime<Utc>,
}

impl Recipe {
    /// True if any tag equals `tag`, ignoring case.
    ///
    /// Characters are compared one to one under simple case folding, so `"Σ"` matches both
    /// `"σ"` and `"ς"`, while `"ß"` does not match `"SS"`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| eq_ignore_case(t, tag))
    }
}

/// Recipe fields as supplied by a caller on create or update.
///
/// Every field may be omitted or `null` on the wire. Missing strings and lists take their
/// empty value. `id` and `publishedAt` are ignored on create; on update their handling depends
/// on the configured [`UpdatePolicy`](crate::UpdatePolicy).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

impl RecipePayload {
    /// Builds a stored record from this payload with the given identity.
    pub(crate) fn into_recipe(self, id: String, published_at: DateTime<Utc>) -> Recipe {
        Recipe {
            id,
            name: self.name,
            tags: self.tags,
            ingredients: self.ingredients,
            instructions: self.instructions,
            published_at,
        }
    }
}

impl From<Recipe> for RecipePayload {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: Some(recipe.id),
            name: recipe.name,
            tags: recipe.tags,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            published_at: Some(recipe.published_at),
        }
    }
}

/// Timestamp used when a record carries no `publishedAt`: `0001-01-01T00:00:00Z`.
pub fn unset_published_at() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Deserializes `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_unset_published_at<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<DateTime<Utc>>::deserialize(deserializer)?.unwrap_or_else(unset_published_at))
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().map(simple_fold).eq(b.chars().map(simple_fold))
}

// Maps a char to one representative of its case orbit. Mappings that expand to several
// chars (e.g. `ß` -> `SS`) leave the char as it is.
fn simple_fold(c: char) -> char {
    let upper = single(c.to_uppercase()).unwrap_or(c);
    single(upper.to_lowercase()).unwrap_or(upper)
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe_with_tags(tags: &[&str]) -> Recipe {
        Recipe {
            id: "r1".into(),
            name: "Test".into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ingredients: vec![],
            instructions: vec![],
            published_at: Utc::now(),
        }
    }

    #[test]
    fn test_has_tag_ignores_case() {
        let recipe = recipe_with_tags(&["Italian", "Quick"]);
        assert!(recipe.has_tag("italian"));
        assert!(recipe.has_tag("QUICK"));
        assert!(!recipe.has_tag("dessert"));
    }

    #[test]
    fn test_has_tag_handles_non_ascii() {
        let recipe = recipe_with_tags(&["CRÈME"]);
        assert!(recipe.has_tag("crème"));
    }

    #[test]
    fn test_has_tag_uses_simple_case_folding() {
        let recipe = recipe_with_tags(&["Σ", "straße", "\u{212A}elvin"]);
        assert!(recipe.has_tag("ς"));
        assert!(recipe.has_tag("σ"));
        assert!(!recipe.has_tag("STRASSE"));
        assert!(recipe.has_tag("STRAßE"));
        assert!(recipe.has_tag("kelvin"));
    }

    #[test]
    fn test_has_tag_does_not_match_prefix() {
        let recipe = recipe_with_tags(&["italian"]);
        assert!(!recipe.has_tag("ital"));
        assert!(!recipe.has_tag(""));
    }

    #[test]
    fn test_recipe_serializes_published_at_in_camel_case() {
        let recipe = recipe_with_tags(&["quick"]);
        let json = serde_json::to_value(&recipe).expect("should serialize");

        assert!(json.get("publishedAt").is_some());
        assert!(json.get("published_at").is_none());
        assert_eq!(json["tags"], serde_json::json!(["quick"]));
    }

    #[test]
    fn test_recipe_accepts_offset_timestamps() {
        let json = r#"{
            "id": "c0ffee",
            "name": "Pizza",
            "tags": ["italian"],
            "ingredients": ["flour"],
            "instructions": ["bake"],
            "publishedAt": "2021-01-17T19:28:52.803062+01:00"
        }"#;
        let recipe: Recipe = serde_json::from_str(json).expect("should deserialize");

        assert_eq!(recipe.id, "c0ffee");
        assert_eq!(
            recipe.published_at.to_rfc3339(),
            "2021-01-17T18:28:52.803062+00:00"
        );
    }

    #[test]
    fn test_payload_defaults_missing_fields() {
        let payload: RecipePayload =
            serde_json::from_str(r#"{"name": "Soup"}"#).expect("should deserialize");

        assert_eq!(payload.name, "Soup");
        assert!(payload.id.is_none());
        assert!(payload.tags.is_empty());
        assert!(payload.published_at.is_none());
    }

    #[test]
    fn test_payload_treats_null_as_empty() {
        let payload: RecipePayload = serde_json::from_str(
            r#"{"id": null, "name": null, "tags": null, "ingredients": null, "instructions": null, "publishedAt": null}"#,
        )
        .expect("should deserialize");

        assert_eq!(payload, RecipePayload::default());
    }

    #[test]
    fn test_recipe_treats_null_as_empty() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"id": "c0ffee", "name": "Soup", "tags": null, "ingredients": null, "instructions": ["boil"], "publishedAt": null}"#,
        )
        .expect("should deserialize");

        assert_eq!(recipe.id, "c0ffee");
        assert!(recipe.tags.is_empty());
        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.instructions, vec!["boil".to_string()]);
        assert_eq!(recipe.published_at, unset_published_at());
    }

    #[test]
    fn test_payload_rejects_wrong_types() {
        let result = serde_json::from_str::<RecipePayload>(r#"{"tags": "not-a-list"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unset_published_at_is_year_one() {
        assert_eq!(unset_published_at().to_rfc3339(), "0001-01-01T00:00:00+00:00");
    }
}
