//! URL-safe slug derivation for IDs, bucket keys, and generated constant
//! names.

/// Lowercase, strip non-word characters, collapse whitespace runs to single
/// hyphens. `"Grants Pass"` becomes `"grants-pass"`.
#[must_use]
pub fn slugify(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else if c.is_whitespace() {
                ' '
            } else {
                '\0'
            }
        })
        .filter(|&c| c != '\0')
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// [`slugify`] applied to at most the first `max` characters of the input.
/// Used for ID prefixes so pathological names stay bounded.
#[must_use]
pub fn slugify_truncated(input: &str, max: usize) -> String {
    let truncated: String = input.chars().take(max).collect();
    slugify(&truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Rose City Electric"), "rose-city-electric");
    }

    #[test]
    fn slugify_strips_punctuation() {
        assert_eq!(slugify("O'Brien & Sons, LLC"), "obrien-sons-llc");
    }

    #[test]
    fn slugify_collapses_whitespace_runs() {
        assert_eq!(slugify("  Grants   Pass  "), "grants-pass");
    }

    #[test]
    fn slugify_keeps_existing_hyphens() {
        assert_eq!(slugify("A-1 Plumbing"), "a-1-plumbing");
    }

    #[test]
    fn slugify_truncated_bounds_length() {
        let long = "Exceptionally Long Business Name That Keeps Going";
        let slug = slugify_truncated(long, 30);
        assert_eq!(slug, slugify("Exceptionally Long Business Na"));
        assert!(slug.chars().count() <= 30);
    }

    #[test]
    fn slugify_empty_is_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
