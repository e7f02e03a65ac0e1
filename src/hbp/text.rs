use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Folds a string for comparisons: diacritics stripped, lowercased.
/// Every text match in the crate goes through here so "José" and "jose" compare equal everywhere.
pub fn fold(input: &str) -> String {
    return input
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();
}

/// Substring match on folded text. An empty needle matches everything.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    let needle = fold(needle.trim());

    if needle.is_empty() {
        return true;
    }

    return fold(haystack).contains(&needle);
}
