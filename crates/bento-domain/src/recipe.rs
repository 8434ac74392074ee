//! Recipe domain types.

use serde::{Deserialize, Serialize};

use crate::id::RecipeId;

/// A recipe as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub ingredients: String,
    pub time_minutes: i32,
}

/// A field value that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {field}")]
pub struct InvalidField {
    pub field: &'static str,
}

fn check_time_minutes(value: i32) -> Result<i32, InvalidField> {
    if value < 0 {
        return Err(InvalidField {
            field: "time_minutes",
        });
    }
    Ok(value)
}

/// Field values for a recipe that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDraft {
    pub title: String,
    pub ingredients: String,
    pub time_minutes: i32,
}

impl RecipeDraft {
    pub fn new(title: String, ingredients: String, time_minutes: i32) -> Result<Self, InvalidField> {
        Ok(Self {
            title,
            ingredients,
            time_minutes: check_time_minutes(time_minutes)?,
        })
    }
}

/// Validated set of fields to overwrite on an existing recipe.
///
/// `None` keeps the stored value. Construction validates every present
/// field, so a value of this type can be applied without further checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeChanges {
    pub title: Option<String>,
    pub ingredients: Option<String>,
    pub time_minutes: Option<i32>,
}

impl RecipeChanges {
    pub fn new(
        title: Option<String>,
        ingredients: Option<String>,
        time_minutes: Option<i32>,
    ) -> Result<Self, InvalidField> {
        Ok(Self {
            title,
            ingredients,
            time_minutes: time_minutes.map(check_time_minutes).transpose()?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.ingredients.is_none() && self.time_minutes.is_none()
    }

    /// Overwrite the present fields on `recipe`.
    pub fn apply_to(&self, recipe: &mut Recipe) {
        if let Some(title) = &self.title {
            recipe.title.clone_from(title);
        }
        if let Some(ingredients) = &self.ingredients {
            recipe.ingredients.clone_from(ingredients);
        }
        if let Some(time_minutes) = self.time_minutes {
            recipe.time_minutes = time_minutes;
        }
    }
}

/// Escape character for [`RecipeFilter::ingredients_like_pattern`].
pub const LIKE_ESCAPE: char = '|';

/// Filters for the recipe listing. Absent filters impose no constraint;
/// present ones are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    /// Substring that must occur in `ingredients`.
    pub ingredients: Option<String>,
    /// Upper bound (inclusive) on `time_minutes`.
    pub max_time: Option<i32>,
}

impl RecipeFilter {
    /// Build a filter, treating an empty ingredients string as "no filter".
    pub fn new(ingredients: Option<String>, max_time: Option<i32>) -> Self {
        Self {
            ingredients: ingredients.filter(|s| !s.is_empty()),
            max_time,
        }
    }

    /// In-memory form of the filter. The ingredients test is a literal,
    /// ASCII case-insensitive substring match.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        let ingredients_ok = self.ingredients.as_deref().is_none_or(|needle| {
            recipe
                .ingredients
                .to_ascii_lowercase()
                .contains(&needle.to_ascii_lowercase())
        });
        let time_ok = self.max_time.is_none_or(|max| recipe.time_minutes <= max);
        ingredients_ok && time_ok
    }

    /// SQL `LIKE` pattern for the ingredients filter, to be compared against
    /// the lower-cased column with [`LIKE_ESCAPE`] as the escape character.
    ///
    /// The needle is lower-cased (ASCII) and its LIKE metacharacters are
    /// escaped, so the store agrees with [`RecipeFilter::matches`].
    pub fn ingredients_like_pattern(&self) -> Option<String> {
        let needle = self.ingredients.as_deref()?;
        let mut pattern = String::with_capacity(needle.len() + 2);
        pattern.push('%');
        for c in needle.chars() {
            if matches!(c, LIKE_ESCAPE | '%' | '_') {
                pattern.push(LIKE_ESCAPE);
            }
            pattern.push(c.to_ascii_lowercase());
        }
        pattern.push('%');
        Some(pattern)
    }
}
