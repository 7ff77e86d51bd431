//! Name normalization.
//!
//! Timecard and break-sheet names are formatted inconsistently — "Last,
//! First" vs "First Last" vs comma-less. Normalization reduces every
//! variant to a canonical token form so word order and comma placement
//! become irrelevant to matching.

/// Reduces a display name to its canonical token form.
///
/// Strips quotes and surrounding whitespace, splits comma-separated parts on
/// internal whitespace, lowercases each token, strips non-alphanumeric
/// characters, drops empty tokens, sorts the tokens lexicographically, and
/// rejoins them with single spaces. The result is idempotent and invariant
/// to word order.
///
/// # Example
///
/// ```
/// use break_audit::matching::normalize_name;
///
/// assert_eq!(
///     normalize_name("Acosta, Geovanny"),
///     normalize_name("Geovanny Acosta")
/// );
/// assert_eq!(normalize_name("\"O'Brien, Pat\""), "obrien pat");
/// ```
pub fn normalize_name(name: &str) -> String {
    let stripped = name.trim().trim_matches(|c| c == '"' || c == '\'');

    let mut tokens: Vec<String> = stripped
        .split(',')
        .flat_map(|part| part.split_whitespace())
        .map(|token| {
            token
                .chars()
                .filter(|c| c.is_alphanumeric())
                .flat_map(|c| c.to_lowercase())
                .collect::<String>()
        })
        .filter(|token| !token.is_empty())
        .collect();

    tokens.sort();
    tokens.join(" ")
}
