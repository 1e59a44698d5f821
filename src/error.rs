use thiserror::Error;

/// Error produced when a pattern fails to compile.
///
/// Matching itself is infallible, so this is the crate's only error type.
/// Byte offsets point into the pattern text, not the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("unclosed group starting at byte {0}")]
    UnclosedGroup(usize),

    #[error("unmatched ')' at byte {0}")]
    UnmatchedCloseParen(usize),

    #[error("unclosed character class starting at byte {0}")]
    UnclosedClass(usize),

    #[error("dangling escape at end of pattern")]
    DanglingEscape,

    #[error("inverted range '{0}-{1}' in character class")]
    InvalidClassRange(char, char),
}
