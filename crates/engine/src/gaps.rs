use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::normalize::normalize;

/// Gap detail for one recipe: sorted missing and covered ingredients, and
/// the full ordered substitution-candidate list for every missing one. The
/// candidates are informational ("what could work if you had it") and are
/// not filtered by availability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeGap {
    pub title: String,
    pub missing: Vec<String>,
    pub covered: Vec<String>,
    pub substitution_candidates: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapReport {
    pub gaps: BTreeMap<String, RecipeGap>,
}

/// Report per-recipe ingredient gaps for the requested ids.
///
/// Unknown ids are silently skipped. Substitutions are always allowed here;
/// a missing ingredient with no substitution entry gets an empty candidate
/// list, not an error.
pub fn analyze_gaps(catalog: &Catalog, recipe_ids: &[String], available: &[String]) -> GapReport {
    let available: BTreeSet<String> = available.iter().map(|i| normalize(i)).collect();

    let mut gaps = BTreeMap::new();
    for id in recipe_ids {
        let Some(recipe) = catalog.recipe(id) else {
            continue;
        };

        let coverage = catalog.resolve_coverage(recipe, &available, true);
        let substitution_candidates = coverage
            .missing
            .iter()
            .map(|missing| (missing.clone(), catalog.substitutes_for(missing).to_vec()))
            .collect();

        gaps.insert(
            id.clone(),
            RecipeGap {
                title: recipe.title.clone(),
                missing: coverage.missing.iter().cloned().collect(),
                covered: coverage.covered.iter().cloned().collect(),
                substitution_candidates,
            },
        );
    }

    GapReport { gaps }
}
