use std::collections::HashMap;

use flavorgraph_engine::search::{shortlist_width, SHORTLIST_MIN};
use flavorgraph_engine::{suggest, Catalog, Recipe, SuggestionRequest};

fn recipe(id: &str, title: &str, ingredients: &[&str]) -> Recipe {
    Recipe {
        id: id.to_string(),
        title: title.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        instructions: vec!["Prep".to_string(), "Cook".to_string()],
        tags: vec!["dinner".to_string()],
    }
}

fn substitutions(entries: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
    entries
        .iter()
        .map(|(key, alts)| {
            (
                key.to_string(),
                alts.iter().map(|a| a.to_string()).collect(),
            )
        })
        .collect()
}

fn request(available: &[&str]) -> SuggestionRequest {
    SuggestionRequest {
        available_ingredients: available.iter().map(|s| s.to_string()).collect(),
        ..SuggestionRequest::default()
    }
}

/// Pancakes-and-scramble catalog used across the end-to-end cases.
fn sample_catalog() -> Catalog {
    Catalog::from_parts(
        vec![
            recipe("r1", "Pancakes", &["eggs", "flour", "milk"]),
            recipe("r2", "Meringue", &["eggs", "sugar"]),
        ],
        substitutions(&[("milk", &["water"])]),
        HashMap::new(),
    )
}

#[test]
fn fully_coverable_recipe_wins_over_partial_one() {
    let catalog = sample_catalog();
    let req = SuggestionRequest {
        max_missing: 1,
        ..request(&["eggs", "flour", "water"])
    };

    let response = suggest(&catalog, &req);

    assert_eq!(response.suggestions.len(), 1, "plan of size 1 keeps the single best");
    let top = &response.suggestions[0];
    assert_eq!(top.id, "r1");
    assert!(top.missing.is_empty());
    assert_eq!(top.covered, vec!["eggs", "flour", "milk"]);
    assert_eq!(top.substitutions.get("milk"), Some(&"water".to_string()));
    assert_eq!(response.plan_size, 1);
    assert_eq!(response.max_missing, 1);
}

#[test]
fn empty_pantry_with_zero_budget_yields_no_suggestions() {
    let catalog = sample_catalog();
    let req = SuggestionRequest {
        max_missing: 0,
        ..request(&[])
    };

    let response = suggest(&catalog, &req);
    assert!(response.suggestions.is_empty());
}

#[test]
fn disallowing_substitutions_is_honored_end_to_end() {
    let catalog = sample_catalog();
    let req = SuggestionRequest {
        max_missing: 1,
        allow_substitutions: false,
        ..request(&["eggs", "flour", "water"])
    };

    let response = suggest(&catalog, &req);
    let pancakes = response
        .suggestions
        .iter()
        .find(|s| s.id == "r1")
        .expect("pancakes survive with one missing ingredient");
    assert_eq!(pancakes.missing, vec!["milk"]);
    assert!(pancakes.substitutions.is_empty());
}

#[test]
fn plan_of_two_complementary_recipes_beats_singles() {
    let catalog = Catalog::from_parts(
        vec![
            recipe("soup", "Soup", &["carrot", "onion"]),
            recipe("bread", "Bread", &["flour", "yeast"]),
            recipe("stew", "Stew", &["carrot", "beef", "wine"]),
        ],
        HashMap::new(),
        HashMap::new(),
    );
    let req = SuggestionRequest {
        plan_size: 2,
        max_missing: 0,
        ..request(&["carrot", "onion", "flour", "yeast"])
    };

    let response = suggest(&catalog, &req);

    let ids: Vec<&str> = response.suggestions.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["soup", "bread"]);
    for suggestion in &response.suggestions {
        assert!(
            suggestion.missing.is_empty(),
            "plan member {} violates the zero-missing budget",
            suggestion.id
        );
    }
}

#[test]
fn plan_respects_the_aggregated_missing_budget() {
    // Each recipe misses one distinct ingredient, so a pair misses two.
    let catalog = Catalog::from_parts(
        vec![
            recipe("a", "A", &["a1", "a2", "a3", "m1"]),
            recipe("b", "B", &["b1", "b2", "b3", "m2"]),
        ],
        HashMap::new(),
        HashMap::new(),
    );
    let available = &["a1", "a2", "a3", "b1", "b2", "b3"];

    let roomy = SuggestionRequest {
        plan_size: 2,
        max_missing: 2,
        ..request(available)
    };
    let response = suggest(&catalog, &roomy);
    let ids: Vec<&str> = response.suggestions.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"], "the pair fits a budget of two");

    let tight = SuggestionRequest {
        plan_size: 2,
        max_missing: 1,
        ..request(available)
    };
    let response = suggest(&catalog, &tight);
    let ids: Vec<&str> = response.suggestions.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["a"],
        "the pair's aggregated missing count blows a budget of one"
    );
}

#[test]
fn equal_score_plans_keep_the_earlier_found_one() {
    let catalog = Catalog::from_parts(
        vec![
            recipe("first", "First", &["eggs"]),
            recipe("second", "Second", &["eggs"]),
        ],
        HashMap::new(),
        HashMap::new(),
    );
    let response = suggest(&catalog, &request(&["eggs"]));

    assert_eq!(response.suggestions[0].id, "first");
}

#[test]
fn fallback_returns_shortlist_order_when_no_plan_qualifies() {
    // Nothing is available, so every single-recipe plan scores below the
    // empty plan and the search finds no qualifying plan. The fallback is
    // the stage-1 shortlist, here ranked purely by descending score.
    let catalog = Catalog::from_parts(
        vec![
            recipe("big", "Big", &["a", "b", "c"]),
            recipe("small", "Small", &["a"]),
        ],
        HashMap::new(),
        HashMap::new(),
    );
    let req = SuggestionRequest {
        prioritize_min_missing: false,
        ..request(&[])
    };

    let response = suggest(&catalog, &req);

    // score(small) = -1, score(big) = -3
    let ids: Vec<&str> = response.suggestions.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["small", "big"]);
}

#[test]
fn max_suggestions_truncates_the_fallback_list() {
    let recipes = (0..6)
        .map(|i| recipe(&format!("r{}", i), "R", &["nothing-available"]))
        .collect();
    let catalog = Catalog::from_parts(recipes, HashMap::new(), HashMap::new());
    let req = SuggestionRequest {
        max_suggestions: 2,
        ..request(&[])
    };

    let response = suggest(&catalog, &req);
    assert_eq!(response.suggestions.len(), 2);
}

#[test]
fn identical_requests_produce_identical_output() {
    let catalog = sample_catalog();
    let req = SuggestionRequest {
        max_missing: 2,
        plan_size: 2,
        ..request(&["eggs", "water"])
    };

    let first = serde_json::to_string(&suggest(&catalog, &req)).unwrap();
    let second = serde_json::to_string(&suggest(&catalog, &req)).unwrap();
    assert_eq!(first, second, "plan search must be deterministic");
}

#[test]
fn shortlist_width_has_a_floor() {
    assert_eq!(shortlist_width(1), SHORTLIST_MIN);
    assert_eq!(shortlist_width(8), SHORTLIST_MIN);
    assert_eq!(shortlist_width(10), 30);
}

#[test]
fn request_defaults_match_the_documented_values() {
    let req = SuggestionRequest::default();
    assert_eq!(req.max_missing, 3);
    assert!(req.allow_substitutions);
    assert_eq!(req.max_suggestions, 8);
    assert_eq!(req.plan_size, 1);
    assert!(req.prioritize_min_missing);
}
