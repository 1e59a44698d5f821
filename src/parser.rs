use crate::ast::{ClassItem, PatternNode, RepeatKind};
use crate::error::PatternError;

/// Parser for patterns.
///
/// The `Parser` struct holds the pattern text and the current byte position.
/// Every production returns a [`PatternError`] on malformed input, so a bad
/// pattern is rejected at compile time rather than misbehaving during a match.
pub struct Parser<'a> {
    pattern: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given pattern.
    pub fn new(pattern: &'a str) -> Self {
        Self { pattern, pos: 0 }
    }

    /// Peek at the next character in the pattern without advancing.
    fn peek(&self) -> Option<char> {
        self.pattern[self.pos..].chars().next()
    }

    /// Peek at the character after the next one.
    fn peek_second(&self) -> Option<char> {
        self.pattern[self.pos..].chars().nth(1)
    }

    /// Advance the parser by one character and return it.
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Expect a specific character and advance if it matches.
    fn expect(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Entry point for parsing a pattern.
    ///
    /// A `)` left over after the top-level sequence has no opening `(`.
    ///
    /// Example:
    /// - Pattern: `([0-9]).` → Seq([Group(CharClass), Dot])
    /// - Pattern: `a)b` → Err(UnmatchedCloseParen)
    pub fn parse(&mut self) -> Result<PatternNode, PatternError> {
        let node = self.parse_seq()?;
        if self.peek() == Some(')') {
            return Err(PatternError::UnmatchedCloseParen(self.pos));
        }
        Ok(node)
    }

    /// Parse a sequence of atoms (concatenation).
    ///
    /// Example:
    /// - Pattern: `abc` → Seq([Literal('a'), Literal('b'), Literal('c')])
    /// - Pattern: `a(bc)d` → Seq([Literal('a'), Group, Literal('d')])
    fn parse_seq(&mut self) -> Result<PatternNode, PatternError> {
        let mut nodes = Vec::new();
        while let Some(ch) = self.peek() {
            if ch == ')' {
                break;
            }
            nodes.push(self.parse_repeat()?);
        }
        Ok(PatternNode::Seq(nodes))
    }

    /// Parse repetition operators (`?`, `+`) after an atom.
    ///
    /// Example:
    /// - Pattern: `a?` → Repeat { node: Literal('a'), kind: ZeroOrOne }
    /// - Pattern: `b+` → Repeat { node: Literal('b'), kind: OneOrMore }
    /// - Pattern: `c`  → Literal('c')
    fn parse_repeat(&mut self) -> Result<PatternNode, PatternError> {
        let atom = self.parse_atom()?;
        match self.peek() {
            Some('?') => {
                self.advance();
                Ok(PatternNode::Repeat {
                    node: Box::new(atom),
                    kind: RepeatKind::ZeroOrOne,
                })
            }
            Some('+') => {
                self.advance();
                Ok(PatternNode::Repeat {
                    node: Box::new(atom),
                    kind: RepeatKind::OneOrMore,
                })
            }
            _ => Ok(atom),
        }
    }

    /// Parse a single atom: group, char class, escape, literal, or anchor.
    ///
    /// Examples:
    /// - Pattern: `(ab)`  → Group(Seq([Literal('a'), Literal('b')]))
    /// - Pattern: `[0-9]` → CharClass { items: [Range('0','9')], negated: false }
    /// - Pattern: `\d`    → Digit
    /// - Pattern: `\w`    → Word
    /// - Pattern: `\.`    → Literal('.')
    /// - Pattern: `.`     → Dot
    /// - Pattern: `^`     → StartAnchor
    /// - Pattern: `$`     → EndAnchor
    /// - Pattern: `a`     → Literal('a')
    fn parse_atom(&mut self) -> Result<PatternNode, PatternError> {
        match self.peek() {
            Some('(') => {
                let start = self.pos;
                self.advance();
                let node = self.parse_seq()?;
                if !self.expect(')') {
                    return Err(PatternError::UnclosedGroup(start));
                }
                Ok(PatternNode::Group(Box::new(node)))
            }
            Some('[') => self.parse_char_class(),
            Some('\\') => {
                self.advance();
                match self.advance() {
                    Some('d') => Ok(PatternNode::Digit), // \d matches an ASCII digit
                    Some('w') => Ok(PatternNode::Word),  // \w matches a word character
                    Some(c) => Ok(PatternNode::Literal(c)), // Any other escaped char is literal
                    None => Err(PatternError::DanglingEscape),
                }
            }
            Some('.') => {
                self.advance();
                Ok(PatternNode::Dot) // . matches any character
            }
            Some('^') => {
                self.advance();
                Ok(PatternNode::StartAnchor)
            }
            Some('$') => {
                self.advance();
                Ok(PatternNode::EndAnchor)
            }
            Some(c) => {
                self.advance();
                Ok(PatternNode::Literal(c))
            }
            None => Ok(PatternNode::Seq(vec![])), // End of pattern
        }
    }

    /// Parse a character class, e.g. `[0-9]` or `[^abc]`.
    ///
    /// POSIX rules: `]` directly after `[` or `[^` is a literal member, and
    /// `-` at either end of the class is a literal. `lo-hi` with `lo > hi`
    /// is rejected.
    ///
    /// Examples:
    /// - Pattern: `[0-9]`  → CharClass { items: [Range('0','9')], negated: false }
    /// - Pattern: `[^xyz]` → CharClass { items: [Single('x'), Single('y'), Single('z')], negated: true }
    /// - Pattern: `[]a]`   → CharClass { items: [Single(']'), Single('a')], negated: false }
    fn parse_char_class(&mut self) -> Result<PatternNode, PatternError> {
        let start = self.pos;
        let _ = self.advance(); // consume '['
        let negated = if self.peek() == Some('^') {
            self.advance();
            true
        } else {
            false
        };
        let mut items = Vec::new();
        if self.peek() == Some(']') {
            self.advance();
            items.push(ClassItem::Single(']'));
        }
        loop {
            let ch = match self.peek() {
                None => return Err(PatternError::UnclosedClass(start)),
                Some(']') => break,
                Some(ch) => {
                    self.advance();
                    ch
                }
            };
            match (self.peek(), self.peek_second()) {
                (Some('-'), Some(hi)) if hi != ']' => {
                    self.advance(); // consume '-'
                    self.advance(); // consume the upper bound
                    if ch > hi {
                        return Err(PatternError::InvalidClassRange(ch, hi));
                    }
                    items.push(ClassItem::Range(ch, hi));
                }
                _ => items.push(ClassItem::Single(ch)),
            }
        }
        let _ = self.advance(); // consume ']'
        Ok(PatternNode::CharClass { items, negated })
    }
}
