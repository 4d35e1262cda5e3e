//! Single-segment glob matching
//!
//! `*` matches any run of characters (including none) and `?` matches exactly
//! one. Patterns apply to one name segment; there is no separator or escape
//! handling.

/// Returns true if `candidate` matches `pattern` in full
///
/// Matching is case-sensitive and byte-wise; patterns and names are expected
/// to be ASCII.
///
/// # Examples
///
/// ```
/// use asset_view::glob;
///
/// assert!(glob::matches("*.png", "Logo.png"));
/// assert!(glob::matches("Logo.???", "Logo.png"));
/// assert!(!glob::matches("*.png", "Readme.txt"));
/// ```
pub fn matches(pattern: &str, candidate: &str) -> bool {
    let pattern = pattern.as_bytes();
    let candidate = candidate.as_bytes();

    let mut p = 0;
    let mut c = 0;
    // Most recent '*' and the candidate position it was tried at.
    let mut star: Option<(usize, usize)> = None;

    while c < candidate.len() {
        if p < pattern.len() && (pattern[p] == b'?' || pattern[p] == candidate[c]) {
            p += 1;
            c += 1;
        } else if p < pattern.len() && pattern[p] == b'*' {
            star = Some((p, c));
            p += 1;
        } else if let Some((star_p, star_c)) = star {
            // Backtrack: let the last '*' swallow one more byte.
            p = star_p + 1;
            c = star_c + 1;
            star = Some((star_p, star_c + 1));
        } else {
            return false;
        }
    }

    while p < pattern.len() && pattern[p] == b'*' {
        p += 1;
    }
    p == pattern.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_match() {
        assert!(matches("Logo.png", "Logo.png"));
        assert!(!matches("Logo.png", "Logo.jpg"));
        assert!(!matches("Logo", "Logo.png"));
        assert!(!matches("Logo.png", "Logo"));
    }

    #[test]
    fn test_star_suffix_selection() {
        assert!(matches("*.png", "Logo.png"));
        assert!(matches("*.png", ".png"));
        assert!(!matches("*.png", "Readme.txt"));
    }

    #[test]
    fn test_star_matches_empty_run() {
        assert!(matches("Logo*", "Logo"));
        assert!(matches("*", ""));
        assert!(matches("**", "anything"));
    }

    #[test]
    fn test_question_mark_matches_exactly_one() {
        assert!(matches("Logo.???", "Logo.png"));
        assert!(matches("?ogo.png", "Logo.png"));
        assert!(!matches("?Logo.png", "Logo.png"));
        assert!(!matches("Logo.?", "Logo."));
    }

    #[test]
    fn test_multiple_stars() {
        assert!(matches("a*b*c", "abc"));
        assert!(matches("a*b*c", "aXXbYYc"));
        assert!(!matches("a*b*c", "aXXbYY"));
        assert!(matches("*o*o*", "Logo.png"));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!matches("logo.png", "Logo.png"));
        assert!(!matches("*.PNG", "Logo.png"));
    }

    #[test]
    fn test_empty_pattern() {
        assert!(matches("", ""));
        assert!(!matches("", "Logo.png"));
    }
}
