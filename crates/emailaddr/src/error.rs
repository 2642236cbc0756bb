//! Error types for email address parsing.

use thiserror::Error;

use crate::{MAX_DOMAIN_LENGTH, MAX_LOCAL_PART};

/// Result type alias using our [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing an email address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The input string was empty.
    #[error("empty string is not a valid email address")]
    EmptyInput,

    /// No unescaped, unquoted `@` was found.
    #[error(
        "{input} is not a valid email address, the format of email addresses is local-part@domain"
    )]
    MissingAtSign {
        /// The rejected input.
        input: String,
    },

    /// More than one unescaped, unquoted `@` was found.
    #[error("an email address can't have multiple '@' characters")]
    MultipleAtSigns,

    /// Nothing before the `@`.
    #[error("an email address can't start with '@'")]
    LocalPartEmpty,

    /// The local part exceeds [`MAX_LOCAL_PART`] characters.
    #[error("the local part can't be longer than {max} characters", max = MAX_LOCAL_PART)]
    LocalPartTooLong,

    /// Nothing after the `@`.
    #[error("the domain part can't be empty")]
    DomainEmpty,

    /// The domain exceeds [`MAX_DOMAIN_LENGTH`] characters.
    #[error("{domain} is longer than {max} characters", max = MAX_DOMAIN_LENGTH)]
    DomainTooLong {
        /// The rejected domain.
        domain: String,
    },

    /// The domain is not a syntactically valid DNS name.
    #[error("{domain} is not a valid domain")]
    DomainInvalid {
        /// The rejected domain.
        domain: String,
    },

    /// The local part failed to scan.
    #[error("failed to parse the local part of the email address: {0}")]
    LocalPartInvalid(#[from] LocalPartError),
}

/// Errors reported by the local-part scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LocalPartError {
    /// A one-character local part outside the allowed character set.
    #[error("'{0}' is invalid in the local part of an email address")]
    InvalidCharacter(char),

    /// A dot at the first or last position of the local part.
    #[error("'.' can't be the start or end of the local part")]
    DotAtBoundary,

    /// Two consecutive dots outside a quoted region.
    #[error("consecutive dots are only valid inside a quoted string")]
    ConsecutiveDot,

    /// A structural character outside quotes and not escaped.
    #[error("'{0}' is only valid inside a quoted string or escaped")]
    RestrictedCharacterUnquoted(char),

    /// A backslash escaping an ordinary character outside quotes.
    #[error("'\\' is only valid inside a quoted string or escaped")]
    DanglingEscape,

    /// A double-quote region left open at end of input.
    #[error("'\"' must be closed or escaped with a backslash")]
    UnterminatedQuote,

    /// A `(` comment opener with no matching `)`.
    #[error("'(' is only valid inside a quoted string, escaped, or closed by ')'")]
    UnterminatedComment,

    /// A `)` comment closer with no matching `(`.
    #[error("')' is only valid inside a quoted string, escaped, or opened by '('")]
    UnmatchedCommentClose,

    /// A `)` comment closer appearing before its `(` opener.
    #[error("the comment ')' appears before its '('")]
    InvalidCommentOrder,
}
