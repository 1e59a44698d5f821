use std::fmt;
use std::str::FromStr;

use crate::ast::PatternNode;
use crate::error::PatternError;
use crate::matcher::match_node;
use crate::parser::Parser;

/// A compiled pattern.
///
/// Compilation happens once in [`Pattern::new`]; after that the value is
/// immutable, so matching is re-entrant and a single instance can be shared
/// across threads.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    ast: PatternNode,
}

impl Pattern {
    /// Compile a pattern, rejecting malformed syntax.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let ast = Parser::new(pattern).parse()?;
        tracing::debug!("compiled pattern {:?}", pattern);
        Ok(Self {
            source: pattern.to_owned(),
            ast,
        })
    }

    /// Returns true when the pattern matches a substring of `input`.
    ///
    /// Every start offset is tried in order, so an unanchored pattern found
    /// anywhere in the input counts as a match.
    pub fn is_match(&self, input: &str) -> bool {
        let chars: Vec<char> = input.chars().collect();
        for start in 0..=chars.len() {
            if !match_node(&self.ast, &chars, start).is_empty() {
                return true;
            }
        }
        false
    }

    /// The pattern text this was compiled from.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unanchored_pattern_matches_anywhere() {
        let pattern = Pattern::new("b.d").unwrap();
        assert!(pattern.is_match("abcde"));
        assert!(!pattern.is_match("abc"));
    }

    #[test]
    fn anchored_pattern_only_matches_at_the_edges() {
        let pattern = Pattern::new("^ab$").unwrap();
        assert!(pattern.is_match("ab"));
        assert!(!pattern.is_match("xab"));
        assert!(!pattern.is_match("abx"));
    }

    #[test]
    fn empty_pattern_matches_everything_including_empty_input() {
        let pattern = Pattern::new("").unwrap();
        assert!(pattern.is_match(""));
        assert!(pattern.is_match("anything"));
    }

    #[test]
    fn display_and_as_str_round_trip_the_source_text() {
        let pattern: Pattern = "([0-9]).".parse().unwrap();
        assert_eq!(pattern.as_str(), "([0-9]).");
        assert_eq!(pattern.to_string(), "([0-9]).");
    }

    #[test]
    fn parsing_a_malformed_pattern_fails() {
        let err = "([0-9]".parse::<Pattern>().unwrap_err();
        assert_eq!(err, PatternError::UnclosedGroup(0));
    }
}
