//! Glob-style wildcard matching for table names and labels.
//!
//! Only `*` is special: it matches zero or more characters. Every other
//! character is literal and matching is case-sensitive over the whole string.

use crate::schema::types::SchemaError;
use regex::Regex;

/// A compiled wildcard pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    raw: String,
    regex: Regex,
}

impl Pattern {
    pub fn new(raw: &str) -> Result<Self, SchemaError> {
        let translated = raw
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");
        let regex = Regex::new(&format!("(?s)^{}$", translated)).map_err(|e| {
            SchemaError::InvalidPattern(format!("'{}': {}", raw, e))
        })?;
        Ok(Self {
            raw: raw.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// Number of literal (non-`*`) characters in the pattern.
    pub fn specificity(&self) -> usize {
        self.raw.chars().filter(|c| *c != '*').count()
    }
}

/// An ordered list of compiled patterns.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    pub fn new<S: AsRef<str>>(raw: &[S]) -> Result<Self, SchemaError> {
        let patterns = raw
            .iter()
            .map(|p| Pattern::new(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// The first pattern, in list order, that matches `name`.
    pub fn first_match(&self, name: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.is_match(name))
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.first_match(name).is_some()
    }
}

/// One-off match of `name` against `pattern`.
pub fn match_simple(pattern: &str, name: &str) -> Result<bool, SchemaError> {
    Ok(Pattern::new(pattern)?.is_match(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_matches_any_run() {
        assert!(match_simple("user_*", "user_").unwrap());
        assert!(match_simple("user_*", "user_secret").unwrap());
        assert!(match_simple("*_log", "audit_log").unwrap());
        assert!(match_simple("a*b*c", "a-x-b-y-c").unwrap());
        assert!(match_simple("*", "").unwrap());
        assert!(!match_simple("user_*", "users").unwrap());
    }

    #[test]
    fn test_match_is_whole_string_and_case_sensitive() {
        assert!(match_simple("users", "users").unwrap());
        assert!(!match_simple("users", "users_archive").unwrap());
        assert!(!match_simple("users", "my_users").unwrap());
        assert!(!match_simple("Users", "users").unwrap());
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        assert!(match_simple("public.users", "public.users").unwrap());
        assert!(!match_simple("public.users", "publicXusers").unwrap());
        assert!(match_simple("t(1)+?", "t(1)+?").unwrap());
        assert!(!match_simple("a?", "ab").unwrap());
    }

    #[test]
    fn test_specificity_counts_literal_characters() {
        assert_eq!(Pattern::new("user_*").unwrap().specificity(), 5);
        assert_eq!(Pattern::new("user_secret").unwrap().specificity(), 11);
        assert_eq!(Pattern::new("**").unwrap().specificity(), 0);
    }

    #[test]
    fn test_first_match_respects_list_order() {
        let set = PatternSet::new(&["*", "user_secret"]).unwrap();
        let first = set.first_match("user_secret").unwrap();
        assert_eq!(first.as_str(), "*");
        assert!(set.first_match("anything").is_some());

        let empty = PatternSet::new::<&str>(&[]).unwrap();
        assert!(empty.is_empty());
        assert!(!empty.is_match("users"));
    }
}
