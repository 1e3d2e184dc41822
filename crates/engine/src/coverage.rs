use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Recipe};

/// Per-recipe coverage of required ingredients against what is available.
///
/// Invariant: `missing` and `covered` partition the recipe's distinct
/// normalized ingredient set, and `substitutions` keys (ingredient ->
/// alternative that satisfied it) are a subset of `covered`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coverage {
    pub missing: BTreeSet<String>,
    pub covered: BTreeSet<String>,
    pub substitutions: BTreeMap<String, String>,
}

impl Coverage {
    /// Union another coverage result into this one. Plan aggregation keeps
    /// the raw unions: an ingredient missing in one recipe but covered in
    /// another appears in both sets, and the plan score counts both.
    pub fn merge(&mut self, other: &Coverage) {
        self.missing.extend(other.missing.iter().cloned());
        self.covered.extend(other.covered.iter().cloned());
        self.substitutions
            .extend(other.substitutions.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
}

impl Catalog {
    /// Resolve which of `recipe`'s distinct normalized ingredients are
    /// available directly, available through a substitution, or missing.
    ///
    /// A direct hit never records a substitution, even when an alternative
    /// is also available. Otherwise the substitution table's alternatives
    /// are scanned in order and the first available one wins. Pure function
    /// of its inputs.
    pub fn resolve_coverage(
        &self,
        recipe: &Recipe,
        available: &BTreeSet<String>,
        allow_substitutions: bool,
    ) -> Coverage {
        let mut coverage = Coverage::default();

        for ingredient in recipe.normalized_ingredients() {
            if available.contains(&ingredient) {
                coverage.covered.insert(ingredient);
                continue;
            }

            if allow_substitutions {
                let substitute = self
                    .substitutes_for(&ingredient)
                    .iter()
                    .find(|alt| available.contains(*alt));
                if let Some(alt) = substitute {
                    coverage.substitutions.insert(ingredient.clone(), alt.clone());
                    coverage.covered.insert(ingredient);
                    continue;
                }
            }

            coverage.missing.insert(ingredient);
        }

        coverage
    }
}
