use std::collections::BTreeSet;

/// Normalize an ingredient name into its identity key: surrounding
/// whitespace trimmed, letters lowercased. All matching and indexing in the
/// engine compares these keys, never the raw strings.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Normalize a list of raw ingredient names into a deduplicated set.
pub fn normalize_set<I, S>(raw: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter().map(|s| normalize(s.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_lowercases() {
        assert_eq!(normalize("  Olive Oil "), "olive oil");
        assert_eq!(normalize("EGGS"), "eggs");
    }

    #[test]
    fn set_deduplicates_by_normalized_identity() {
        let set = normalize_set(["Eggs", " eggs", "Flour"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("eggs"));
        assert!(set.contains("flour"));
    }
}
