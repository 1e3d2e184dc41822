use crate::coverage::Coverage;

/// Penalty per substitution used, shared by both scoring formulas.
pub const SUBSTITUTION_PENALTY: f64 = 0.2;

/// Penalty per missing ingredient when scoring a whole plan. A plan commits
/// the user to several dishes at once, so it is held to a stricter
/// completeness standard than a single recipe (1.5 vs 1.0).
pub const PLAN_MISSING_PENALTY: f64 = 1.5;

/// Score a single recipe's coverage. All counts are distinct normalized
/// ingredient names, never raw occurrence counts.
pub fn score_recipe(coverage: &Coverage) -> f64 {
    let covered = coverage.covered.len() as f64;
    let missing = coverage.missing.len() as f64;
    let substitutions = coverage.substitutions.len() as f64;

    covered - (missing + SUBSTITUTION_PENALTY * substitutions)
}

/// Score a plan's aggregated coverage.
pub fn score_plan(coverage: &Coverage) -> f64 {
    let covered = coverage.covered.len() as f64;
    let missing = coverage.missing.len() as f64;
    let substitutions = coverage.substitutions.len() as f64;

    covered - PLAN_MISSING_PENALTY * missing - SUBSTITUTION_PENALTY * substitutions
}
