//! # Wildcard matching
//!
//! Permission strings held in state act as patterns; the permission being
//! queried is the candidate. Patterns are split into segments on `.` and `:`.
//!
//! ```text
//! Pattern          Candidate          Result
//! "posts.create"   "posts.create"     match (exact)
//! "posts.*"        "posts.delete"     match
//! "posts.*"        "posts.draft.edit" match (trailing wildcard takes the rest)
//! "posts.*.edit"   "posts.draft.edit" match (interior wildcard takes one segment)
//! "posts.*"        "posts"            no match
//! "posts.*"        "posts:delete"     no match (delimiters differ)
//! ```

/// The token that marks a wildcard segment.
pub const WILDCARD: &str = "*";

/// Characters that separate permission segments.
pub const DELIMITERS: [char; 2] = ['.', ':'];

/// Check whether `candidate` is granted by `pattern`.
///
/// Rules:
/// - A pattern without a wildcard segment only matches an equal string
/// - A segment that is exactly `*` is a wildcard; `*` inside a longer
///   segment is a literal character
/// - An interior wildcard matches exactly one non-empty segment
/// - A trailing wildcard matches one or more non-empty remaining segments
/// - Non-wildcard segments and the delimiters between them must be equal
///
/// # Example
///
/// ```
/// use gates_rbac::wildcard::matches;
///
/// assert!(matches("users.create", "users.*"));
/// assert!(matches("users.create", "users.create"));
/// assert!(!matches("posts.create", "users.*"));
/// assert!(!matches("users.create", "users.delete"));
/// ```
pub fn matches(candidate: &str, pattern: &str) -> bool {
    let pattern_parts = segments(pattern);
    if !pattern_parts.iter().any(|(segment, _)| *segment == WILDCARD) {
        return candidate == pattern;
    }

    let candidate_parts = segments(candidate);
    let last = pattern_parts.len() - 1;

    for (idx, (segment, delimiter)) in pattern_parts.iter().enumerate() {
        let Some((value, value_delimiter)) = candidate_parts.get(idx) else {
            return false;
        };

        if *segment == WILDCARD {
            if value.is_empty() {
                return false;
            }
            if idx == last {
                return candidate_parts[idx..].iter().all(|(rest, _)| !rest.is_empty());
            }
        } else if segment != value {
            return false;
        }

        if delimiter != value_delimiter {
            return false;
        }
    }

    pattern_parts.len() == candidate_parts.len()
}

/// Check whether a permission string contains a wildcard segment.
///
/// # Example
///
/// ```
/// use gates_rbac::wildcard::is_pattern;
///
/// assert!(is_pattern("posts.*"));
/// assert!(!is_pattern("posts*"));
/// ```
pub fn is_pattern(permission: &str) -> bool {
    segments(permission)
        .iter()
        .any(|(segment, _)| *segment == WILDCARD)
}

/// Split into `(segment, delimiter that follows it)` pairs.
fn segments(s: &str) -> Vec<(&str, Option<char>)> {
    let mut parts = Vec::new();
    let mut start = 0;

    for (idx, ch) in s.char_indices() {
        if DELIMITERS.contains(&ch) {
            parts.push((&s[start..idx], Some(ch)));
            start = idx + ch.len_utf8();
        }
    }
    parts.push((&s[start..], None));

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(matches("users.create", "users.create"));
        assert!(!matches("users.create", "users.delete"));
        assert!(!matches("users.create", "users.create.own"));
        assert!(matches("", ""));
    }

    #[test]
    fn test_trailing_wildcard_single_segment() {
        assert!(matches("users.create", "users.*"));
        assert!(matches("users.delete", "users.*"));
        assert!(!matches("posts.create", "users.*"));
    }

    #[test]
    fn test_trailing_wildcard_multi_segment() {
        assert!(matches("users.profile.edit", "users.*"));
        assert!(matches("users.a.b.c", "users.*"));
        assert!(!matches("users", "users.*"));
        assert!(!matches("users.", "users.*"));
        assert!(!matches("users..edit", "users.*"));
    }

    #[test]
    fn test_interior_wildcard() {
        assert!(matches("posts.draft.edit", "posts.*.edit"));
        assert!(matches("posts.published.edit", "posts.*.edit"));
        assert!(!matches("posts.draft.delete", "posts.*.edit"));
        assert!(!matches("posts.a.b.edit", "posts.*.edit"));
        assert!(!matches("posts..edit", "posts.*.edit"));
    }

    #[test]
    fn test_bare_wildcard() {
        assert!(matches("anything", "*"));
        assert!(matches("users.create", "*"));
        assert!(matches("document:read:doc-1", "*"));
        assert!(!matches("", "*"));
    }

    #[test]
    fn test_colon_delimiter() {
        assert!(matches("document:read", "document:*"));
        assert!(matches("document:read:doc-123", "document:read:*"));
        assert!(!matches("document.read", "document:*"));
        assert!(!matches("document:read", "document.*"));
    }

    #[test]
    fn test_mixed_delimiters() {
        assert!(matches("billing.invoice:read", "billing.*:read"));
        assert!(!matches("billing:invoice:read", "billing.*:read"));
    }

    #[test]
    fn test_embedded_star_is_literal() {
        assert!(!matches("users.create", "users.cre*"));
        assert!(matches("users.cre*", "users.cre*"));
        assert!(!is_pattern("users.cre*"));
    }

    #[test]
    fn test_is_pattern() {
        assert!(is_pattern("*"));
        assert!(is_pattern("users.*"));
        assert!(is_pattern("a.*.c"));
        assert!(!is_pattern("users.create"));
        assert!(!is_pattern(""));
    }
}
