//! Name normalization for generated identifiers.

/// Split a raw setting name into word fragments.
///
/// Fragments are split on `_`, then spaces, then `.`, then on case
/// boundaries. A case boundary sits before an uppercase letter that follows
/// a non-uppercase character, so runs of capitals stay in one fragment.
/// Empty fragments are dropped.
pub fn split_words(raw: &str) -> Vec<String> {
    raw.split('_')
        .flat_map(|word| word.split(' '))
        .flat_map(|word| word.split('.'))
        .flat_map(case_fragments)
        .collect()
}

/// Normalize a raw setting name into an upper snake case identifier
/// (e.g., "testSetting" -> "TEST_SETTING").
///
/// The result is empty when the name contains no word characters at all;
/// callers must reject such names.
pub fn normalize(raw: &str) -> String {
    split_words(raw)
        .iter()
        .map(|word| word.to_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}

fn case_fragments(word: &str) -> Vec<String> {
    let mut fragments = Vec::new();
    let mut current = String::new();
    let mut previous_upper = false;

    for c in word.chars() {
        let upper = c.is_uppercase();
        if upper && !previous_upper && !current.is_empty() {
            fragments.push(std::mem::take(&mut current));
        }
        current.push(c);
        previous_upper = upper;
    }

    if !current.is_empty() {
        fragments.push(current);
    }
    fragments
}
