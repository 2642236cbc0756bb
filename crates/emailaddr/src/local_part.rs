//! Local-part scanning and representation.
//!
//! The local part of an email address carries three layers of syntax on top
//! of the ordinary text: double-quoted regions, backslash escapes, at most
//! one parenthesized comment, and `+`-delimited tags. A single forward pass
//! over the characters recovers all of them.

use std::fmt;

use crate::error::LocalPartError;

/// Punctuation allowed as a complete one-character local part, per RFC 3696,
/// excluding characters that are structural in this grammar.
const SINGLE_CHAR_PUNCTUATION: &str = "!#$%&'*+-/=?^_`{|}~";

/// Returns true if the character is valid as a complete local part on its own.
fn is_single_char_valid(c: char) -> bool {
    c.is_ascii_alphanumeric() || SINGLE_CHAR_PUNCTUATION.contains(c)
}

/// Returns true if the character must be quoted or escaped inside a local part.
const fn is_restricted(c: char) -> bool {
    matches!(c, ',' | ':' | ';' | '<' | '>' | '@' | '[' | ']' | ' ')
}

/// The parsed local part of an email address.
///
/// Holds the canonical text (comment and tag markers stripped), the optional
/// comment with its position, and the ordered tag list. The [`fmt::Display`]
/// implementation reassembles the original surface form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalPart {
    canonical_text: String,
    comment: Option<String>,
    comment_at_start: bool,
    tags: Vec<String>,
}

impl LocalPart {
    /// Scans a non-empty local-part substring.
    ///
    /// The caller is responsible for the emptiness and maximum-length checks.
    pub(crate) fn parse(local: &str) -> Result<Self, LocalPartError> {
        debug_assert!(!local.is_empty(), "caller checks for an empty local part");

        let mut chars = local.chars();
        if let Some(c) = chars.next() {
            if chars.next().is_none() {
                if is_single_char_valid(c) {
                    return Ok(Self {
                        canonical_text: local.to_string(),
                        comment: None,
                        comment_at_start: false,
                        tags: Vec::new(),
                    });
                }
                return Err(LocalPartError::InvalidCharacter(c));
            }
        }

        let last = local.chars().count() - 1;
        let mut scanner = Scanner::default();
        for (ord, (idx, c)) in local.char_indices().enumerate() {
            scanner.step(idx, c, ord == last)?;
        }
        scanner.finish(local)
    }

    /// The local part with comment and tag markers removed.
    ///
    /// This is the identity used by [`equals`](crate::equals).
    #[must_use]
    pub fn canonical_text(&self) -> &str {
        &self.canonical_text
    }

    /// The comment text between the parentheses, if any.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Whether the comment occurred before the canonical text.
    #[must_use]
    pub const fn comment_at_start(&self) -> bool {
        self.comment_at_start
    }

    /// The `+`-delimited tags, in order of appearance.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl fmt::Display for LocalPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.comment_at_start {
            if let Some(comment) = &self.comment {
                write!(f, "({comment})")?;
            }
        }
        f.write_str(&self.canonical_text)?;
        for tag in &self.tags {
            write!(f, "+{tag}")?;
        }
        if !self.comment_at_start {
            if let Some(comment) = &self.comment {
                write!(f, "({comment})")?;
            }
        }
        Ok(())
    }
}

/// Single-pass scanner state.
///
/// One [`step`](Self::step) call per character, then [`finish`](Self::finish)
/// for the end-of-input checks and the assembly of the result. Escape parity
/// is a run counter rather than a flag so that `\\` reads as a literal
/// backslash that does not escape the character after it.
#[derive(Debug, Default)]
struct Scanner {
    /// Canonical text accumulated so far.
    canonical: String,
    /// Inside an unescaped double-quote region.
    in_quotes: bool,
    /// Consecutive backslashes immediately before the current character.
    backslash_run: u32,
    /// Previous character; `None` once consumed as half of an escape pair.
    prev: Option<char>,
    /// Byte offset of the first unescaped `(`.
    comment_start: Option<usize>,
    /// Byte offset of the first unescaped `)`.
    comment_end: Option<usize>,
    /// Completed tag segments.
    tags: Vec<String>,
    /// Tag text being accumulated, present once the tag region starts.
    current_tag: Option<String>,
}

impl Scanner {
    /// Classifies one character and routes it to the canonical text, the
    /// current tag, or the comment region.
    fn step(&mut self, idx: usize, c: char, is_last: bool) -> Result<(), LocalPartError> {
        let escaped = self.backslash_run % 2 == 1;
        let mut tag_delimiter = false;

        match c {
            '"' => {
                if !escaped {
                    self.in_quotes = !self.in_quotes;
                }
            }
            '+' => {
                if !self.in_quotes && !escaped && !self.in_comment(idx) {
                    tag_delimiter = true;
                }
            }
            '.' => {
                if idx == 0 || is_last {
                    return Err(LocalPartError::DotAtBoundary);
                }
                if self.prev == Some('.') && !self.in_quotes {
                    return Err(LocalPartError::ConsecutiveDot);
                }
            }
            '\\' => {}
            '(' => {
                if !self.in_quotes && !escaped && self.comment_start.is_none() {
                    self.comment_start = Some(idx);
                }
            }
            ')' => {
                if !self.in_quotes && !escaped && self.comment_end.is_none() {
                    self.comment_end = Some(idx);
                }
            }
            c if is_restricted(c) => {
                if !self.in_quotes && !escaped {
                    return Err(LocalPartError::RestrictedCharacterUnquoted(c));
                }
            }
            _ => {
                if escaped && !self.in_quotes {
                    return Err(LocalPartError::DanglingEscape);
                }
            }
        }

        self.backslash_run = if c == '\\' { self.backslash_run + 1 } else { 0 };
        self.prev = if c == '\\' && self.backslash_run % 2 == 0 {
            None
        } else {
            Some(c)
        };

        if tag_delimiter {
            self.start_tag();
        } else if !self.in_comment(idx) {
            if let Some(tag) = self.current_tag.as_mut() {
                tag.push(c);
            } else {
                self.canonical.push(c);
            }
        }
        Ok(())
    }

    /// Runs the end-of-input checks and assembles the [`LocalPart`].
    fn finish(self, local: &str) -> Result<LocalPart, LocalPartError> {
        if self.in_quotes {
            return Err(LocalPartError::UnterminatedQuote);
        }

        let comment = match (self.comment_start, self.comment_end) {
            (Some(_), None) => return Err(LocalPartError::UnterminatedComment),
            (None, Some(_)) => return Err(LocalPartError::UnmatchedCommentClose),
            (Some(start), Some(end)) if start > end => {
                return Err(LocalPartError::InvalidCommentOrder);
            }
            (Some(start), Some(end)) => Some(local[start + 1..end].to_string()),
            (None, None) => None,
        };

        let mut tags = self.tags;
        if let Some(tail) = self.current_tag {
            if !tail.is_empty() {
                tags.push(tail);
            }
        }

        Ok(LocalPart {
            canonical_text: self.canonical,
            comment,
            comment_at_start: self.comment_start == Some(0),
            tags,
        })
    }

    /// Closes the tag being accumulated, dropping empty segments, and opens
    /// the next one.
    fn start_tag(&mut self) {
        if let Some(tag) = self.current_tag.take() {
            if !tag.is_empty() {
                self.tags.push(tag);
            }
        }
        self.current_tag = Some(String::new());
    }

    /// Returns true if the byte offset falls inside the recognized comment
    /// region, including the parentheses themselves.
    const fn in_comment(&self, idx: usize) -> bool {
        match (self.comment_start, self.comment_end) {
            (Some(start), None) => idx >= start,
            (Some(start), Some(end)) => idx >= start && idx <= end,
            (None, Some(end)) => idx == end,
            (None, None) => false,
        }
    }
}
