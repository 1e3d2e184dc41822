use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::normalize::normalize;

pub const RECIPES_FILE: &str = "recipes.json";
pub const SUBSTITUTIONS_FILE: &str = "substitutions.json";
pub const INGREDIENT_TAGS_FILE: &str = "ingredient_tags.json";

/// A recipe as loaded from the catalog. Immutable after load; ingredient
/// order and duplicates are preserved as stored, instruction steps are
/// opaque strings passed through unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Recipe {
    /// Distinct normalized ingredient names required by this recipe.
    pub fn normalized_ingredients(&self) -> BTreeSet<String> {
        self.ingredients.iter().map(|i| normalize(i)).collect()
    }
}

/// The loaded recipe catalog: recipes in load order, the substitution table,
/// ingredient tags, and the derived ingredient -> recipe-ids index.
///
/// Read-only after construction, so concurrent readers share it without
/// locking. Reloading means building a fresh `Catalog` and swapping the
/// whole value; the index is rebuilt with it and never mutated on its own.
#[derive(Debug, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    by_id: HashMap<String, usize>,
    substitutions: HashMap<String, Vec<String>>,
    ingredient_tags: HashMap<String, Vec<String>>,
    ingredient_index: BTreeMap<String, BTreeSet<String>>,
}

impl Catalog {
    /// Build a catalog from already-parsed collections.
    ///
    /// Substitution and tag keys (and substitution alternatives) are
    /// normalized here so lookups always operate on identity keys. A
    /// duplicate recipe id keeps the later definition at the first
    /// occurrence's position.
    pub fn from_parts(
        recipes: Vec<Recipe>,
        substitutions: HashMap<String, Vec<String>>,
        ingredient_tags: HashMap<String, Vec<String>>,
    ) -> Self {
        let mut stored: Vec<Recipe> = Vec::with_capacity(recipes.len());
        let mut by_id: HashMap<String, usize> = HashMap::with_capacity(recipes.len());

        for recipe in recipes {
            let existing = by_id.get(&recipe.id).copied();
            match existing {
                Some(idx) => {
                    tracing::warn!(id = %recipe.id, "duplicate recipe id, keeping later definition");
                    stored[idx] = recipe;
                }
                None => {
                    by_id.insert(recipe.id.clone(), stored.len());
                    stored.push(recipe);
                }
            }
        }

        let substitutions = substitutions
            .into_iter()
            .map(|(key, alternatives)| {
                let alternatives = alternatives.iter().map(|a| normalize(a)).collect();
                (normalize(&key), alternatives)
            })
            .collect();

        let ingredient_tags = ingredient_tags
            .into_iter()
            .map(|(key, tags)| (normalize(&key), tags))
            .collect();

        let mut ingredient_index: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for recipe in &stored {
            for ingredient in &recipe.ingredients {
                ingredient_index
                    .entry(normalize(ingredient))
                    .or_default()
                    .insert(recipe.id.clone());
            }
        }

        Catalog {
            recipes: stored,
            by_id,
            substitutions,
            ingredient_tags,
            ingredient_index,
        }
    }

    /// Load the catalog from a data directory holding `recipes.json`,
    /// `substitutions.json` and `ingredient_tags.json`. A missing file
    /// yields an empty collection rather than an error.
    pub fn load(dir: &Path) -> Result<Self, CatalogError> {
        let recipes: Vec<Recipe> = read_json(&dir.join(RECIPES_FILE))?.unwrap_or_default();
        let substitutions: HashMap<String, Vec<String>> =
            read_json(&dir.join(SUBSTITUTIONS_FILE))?.unwrap_or_default();
        let ingredient_tags: HashMap<String, Vec<String>> =
            read_json(&dir.join(INGREDIENT_TAGS_FILE))?.unwrap_or_default();

        Ok(Self::from_parts(recipes, substitutions, ingredient_tags))
    }

    /// All recipes, in load order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.by_id.get(id).map(|&idx| &self.recipes[idx])
    }

    /// Every normalized ingredient required by at least one recipe,
    /// deduplicated and alphabetically ordered.
    pub fn ingredients(&self) -> Vec<String> {
        self.ingredient_index.keys().cloned().collect()
    }

    /// Ordered substitution alternatives for an ingredient (identity key).
    /// Order matters: callers take the first available alternative.
    pub fn substitutes_for(&self, ingredient: &str) -> &[String] {
        self.substitutions
            .get(ingredient)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Descriptive tags for an ingredient. Passthrough metadata; no engine
    /// algorithm consumes these.
    pub fn tags_for(&self, ingredient: &str) -> &[String] {
        self.ingredient_tags
            .get(ingredient)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Ids of the recipes requiring an ingredient, from the inverted index.
    pub fn recipes_using(&self, ingredient: &str) -> Option<&BTreeSet<String>> {
        self.ingredient_index.get(ingredient)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, CatalogError> {
    if !path.exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value = serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Some(value))
}
