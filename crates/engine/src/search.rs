use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Recipe};
use crate::coverage::Coverage;
use crate::normalize::normalize;
use crate::scoring::{score_plan, score_recipe};

/// Minimum shortlist width fed into the backtracking stage, regardless of
/// `max_suggestions`. Widening trades search cost for completeness.
pub const SHORTLIST_MIN: usize = 25;

/// Shortlist width granted per requested suggestion.
pub const SHORTLIST_PER_SUGGESTION: usize = 3;

/// Width of the pre-ranked candidate shortlist for a request. Caps the
/// subset space explored in stage 2 regardless of catalog size.
pub fn shortlist_width(max_suggestions: usize) -> usize {
    SHORTLIST_MIN.max(max_suggestions * SHORTLIST_PER_SUGGESTION)
}

/// A recipe-suggestion request.
///
/// Numeric constraints (`plan_size` and `max_suggestions` at least 1) are
/// the caller's responsibility; the engine does not re-validate. The search
/// is exponential in `plan_size`, so callers should keep it single-digit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionRequest {
    #[serde(default)]
    pub available_ingredients: Vec<String>,
    #[serde(default = "default_max_missing")]
    pub max_missing: usize,
    #[serde(default = "default_allow_substitutions")]
    pub allow_substitutions: bool,
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
    #[serde(default = "default_plan_size")]
    pub plan_size: usize,
    #[serde(default = "default_prioritize_min_missing")]
    pub prioritize_min_missing: bool,
}

impl Default for SuggestionRequest {
    fn default() -> Self {
        SuggestionRequest {
            available_ingredients: Vec::new(),
            max_missing: default_max_missing(),
            allow_substitutions: default_allow_substitutions(),
            max_suggestions: default_max_suggestions(),
            plan_size: default_plan_size(),
            prioritize_min_missing: default_prioritize_min_missing(),
        }
    }
}

fn default_max_missing() -> usize {
    3
}

fn default_allow_substitutions() -> bool {
    true
}

fn default_max_suggestions() -> usize {
    8
}

fn default_plan_size() -> usize {
    1
}

fn default_prioritize_min_missing() -> bool {
    true
}

/// One suggested recipe, carrying its own coverage detail (not the
/// plan-aggregated one) alongside the recipe data verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub tags: Vec<String>,
    pub missing: Vec<String>,
    pub covered: Vec<String>,
    pub substitutions: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionResponse {
    pub suggestions: Vec<Suggestion>,
    pub plan_size: usize,
    pub max_missing: usize,
}

/// A shortlisted recipe with its greedy score and coverage result.
struct Candidate<'a> {
    recipe: &'a Recipe,
    score: f64,
    coverage: Coverage,
}

/// Best plan found so far: shortlist indices plus the score bar. Replacement
/// is strict-greater, so ties keep the earlier-found plan.
struct SearchState {
    best: Vec<usize>,
    best_score: f64,
}

/// Select and rank a plan of recipes for the request.
///
/// Stage 1 filters every catalog recipe on the missing budget and pre-ranks
/// the survivors into a fixed-width shortlist. Stage 2 runs a depth-first
/// subset search over the shortlist, bounded by `plan_size`, keeping the
/// best-scoring in-budget plan. Stage 3 falls back to the top shortlist
/// singles when no plan qualified. Stage 4 assembles per-recipe suggestion
/// records. Deterministic for identical catalog and request.
pub fn suggest(catalog: &Catalog, request: &SuggestionRequest) -> SuggestionResponse {
    let available: BTreeSet<String> = request
        .available_ingredients
        .iter()
        .map(|i| normalize(i))
        .collect();

    let mut candidates: Vec<Candidate> = catalog
        .recipes()
        .iter()
        .filter_map(|recipe| {
            let coverage = catalog.resolve_coverage(recipe, &available, request.allow_substitutions);
            (coverage.missing.len() <= request.max_missing).then(|| Candidate {
                score: score_recipe(&coverage),
                recipe,
                coverage,
            })
        })
        .collect();

    if request.prioritize_min_missing {
        // Fewer total ingredients first (a proxy favoring simpler recipes),
        // then higher score. Stable, so catalog order breaks remaining ties.
        candidates.sort_by(|a, b| {
            a.recipe
                .ingredients
                .len()
                .cmp(&b.recipe.ingredients.len())
                .then_with(|| b.score.total_cmp(&a.score))
        });
    } else {
        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    }
    candidates.truncate(shortlist_width(request.max_suggestions));

    let mut state = SearchState {
        best: Vec::new(),
        best_score: f64::NEG_INFINITY,
    };
    let mut chosen = Vec::new();
    backtrack(
        &candidates,
        request,
        0,
        &mut chosen,
        &BTreeSet::new(),
        &mut state,
    );

    // No qualifying plan at all: fall back to the top shortlist singles,
    // with no missing-budget guarantee beyond the stage-1 filter.
    let plan: Vec<usize> = if state.best.is_empty() {
        (0..candidates.len().min(request.max_suggestions)).collect()
    } else {
        state.best
    };

    let suggestions = plan
        .into_iter()
        .take(request.max_suggestions)
        .map(|idx| {
            let candidate = &candidates[idx];
            Suggestion {
                id: candidate.recipe.id.clone(),
                title: candidate.recipe.title.clone(),
                ingredients: candidate.recipe.ingredients.clone(),
                instructions: candidate.recipe.instructions.clone(),
                tags: candidate.recipe.tags.clone(),
                missing: candidate.coverage.missing.iter().cloned().collect(),
                covered: candidate.coverage.covered.iter().cloned().collect(),
                substitutions: candidate.coverage.substitutions.clone(),
            }
        })
        .collect();

    SuggestionResponse {
        suggestions,
        plan_size: request.plan_size,
        max_missing: request.max_missing,
    }
}

/// Depth-first subset enumeration over the shortlist, in index order, each
/// index used at most once per branch.
fn backtrack(
    candidates: &[Candidate],
    request: &SuggestionRequest,
    start: usize,
    chosen: &mut Vec<usize>,
    used: &BTreeSet<String>,
    state: &mut SearchState,
) {
    // Evaluate the subset built so far whenever it fits the missing budget.
    let mut aggregated = Coverage::default();
    for &idx in chosen.iter() {
        aggregated.merge(&candidates[idx].coverage);
    }
    if aggregated.missing.len() <= request.max_missing {
        let score = score_plan(&aggregated);
        if score > state.best_score {
            state.best = chosen.clone();
            state.best_score = score;
        }
    }

    if chosen.len() == request.plan_size {
        return;
    }

    for idx in start..candidates.len() {
        let candidate = &candidates[idx];

        // Lower-bound prune: if the candidate's own missing set, minus what
        // the branch already covers, blows the budget on its own, no plan
        // extending this branch with it can qualify. The full aggregated
        // count is still re-checked at evaluation time.
        let new_missing = candidate.coverage.missing.difference(used).count();
        if new_missing > request.max_missing {
            continue;
        }

        let mut branch_used = used.clone();
        branch_used.extend(candidate.coverage.covered.iter().cloned());
        chosen.push(idx);
        backtrack(candidates, request, idx + 1, chosen, &branch_used, state);
        chosen.pop();
    }
}
