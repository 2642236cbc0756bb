//! Email address parsing, validation, and comparison.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::domain::is_domain_name;
use crate::error::{Error, Result};
use crate::local_part::LocalPart;
use crate::{MAX_DOMAIN_LENGTH, MAX_LOCAL_PART};

/// A parsed email address: a scanned local part and a validated domain.
///
/// # Examples
///
/// ```
/// use emailaddr::EmailAddress;
///
/// let address: EmailAddress = "john.smith(comment)@example.com".parse()?;
/// assert_eq!(address.local_part().canonical_text(), "john.smith");
/// assert_eq!(address.domain(), "example.com");
/// # Ok::<(), emailaddr::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmailAddress {
    local_part: LocalPart,
    domain: String,
}

impl EmailAddress {
    /// Parses an email address.
    ///
    /// Splits on the first unescaped, unquoted `@`, scans the left side as a
    /// local part, and validates the right side as a DNS-style domain name.
    ///
    /// # Errors
    ///
    /// Returns the specific [`Error`] describing the first violation found.
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(Error::EmptyInput);
        }

        let (local, domain) = split_at_sign(input)?;
        if local.is_empty() {
            return Err(Error::LocalPartEmpty);
        }
        if local.chars().count() > MAX_LOCAL_PART {
            return Err(Error::LocalPartTooLong);
        }
        if domain.is_empty() {
            return Err(Error::DomainEmpty);
        }
        if domain.chars().count() > MAX_DOMAIN_LENGTH {
            return Err(Error::DomainTooLong {
                domain: domain.to_string(),
            });
        }

        let local_part = LocalPart::parse(local)?;
        if !is_domain_name(domain) {
            return Err(Error::DomainInvalid {
                domain: domain.to_string(),
            });
        }

        Ok(Self {
            local_part,
            domain: domain.to_string(),
        })
    }

    /// The parsed local part.
    #[must_use]
    pub const fn local_part(&self) -> &LocalPart {
        &self.local_part
    }

    /// The domain, original casing preserved.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Compares two addresses by identity: canonical local part and domain,
    /// both case-insensitively. Comments and tags are ignored.
    #[must_use]
    pub fn same_mailbox(&self, other: &Self) -> bool {
        self.local_part
            .canonical_text()
            .eq_ignore_ascii_case(other.local_part.canonical_text())
            && self.domain.eq_ignore_ascii_case(&other.domain)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.local_part, self.domain)
    }
}

impl FromStr for EmailAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Finds the first unescaped, unquoted `@` and splits the input around it.
///
/// A second structural `@` anywhere in the input is an error; an `@` inside
/// quotes or preceded by an odd run of backslashes is literal.
fn split_at_sign(input: &str) -> Result<(&str, &str)> {
    let mut in_quotes = false;
    let mut backslash_run = 0u32;
    let mut split = None;

    for (idx, c) in input.char_indices() {
        let escaped = backslash_run % 2 == 1;
        match c {
            '"' if !escaped => in_quotes = !in_quotes,
            '@' if !in_quotes && !escaped => {
                if split.is_some() {
                    return Err(Error::MultipleAtSigns);
                }
                split = Some(idx);
            }
            _ => {}
        }
        backslash_run = if c == '\\' { backslash_run + 1 } else { 0 };
    }

    split.map_or_else(
        || {
            Err(Error::MissingAtSign {
                input: input.to_string(),
            })
        },
        |idx| Ok((&input[..idx], &input[idx + 1..])),
    )
}

/// Validates an email address.
///
/// # Examples
///
/// ```
/// use emailaddr::validate;
///
/// assert!(validate("test@test.net").is_ok());
/// assert!(validate("we..johnny@test.net").is_err());
/// ```
///
/// # Errors
///
/// Returns the specific [`Error`] describing why the address was rejected.
pub fn validate(address: &str) -> Result<()> {
    match EmailAddress::parse(address) {
        Ok(_) => Ok(()),
        Err(err) => {
            debug!(input = address, error = %err, "rejected email address");
            Err(err)
        }
    }
}

/// Returns true if the address validates.
#[must_use]
pub fn is_valid(address: &str) -> bool {
    EmailAddress::parse(address).is_ok()
}

/// Compares two addresses for semantic equivalence.
///
/// Comments and tags are ignored; the canonical local part and the domain
/// are compared case-insensitively. If either side fails to parse, the
/// result is `false`.
///
/// # Examples
///
/// ```
/// use emailaddr::equals;
///
/// assert!(equals("test(explain)@test.net", "test@test.net"));
/// assert!(equals("test@test.net", "test+promo@test.net"));
/// assert!(!equals("test@test.net", "test@gmail.com"));
/// ```
#[must_use]
pub fn equals(first: &str, second: &str) -> bool {
    match (EmailAddress::parse(first), EmailAddress::parse(second)) {
        (Ok(a), Ok(b)) => a.same_mailbox(&b),
        _ => false,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::error::LocalPartError;

    #[test]
    fn test_empty_input() {
        assert_eq!(EmailAddress::parse(""), Err(Error::EmptyInput));
    }

    #[test]
    fn test_missing_at_sign() {
        assert!(matches!(
            EmailAddress::parse("Abc.example.com"),
            Err(Error::MissingAtSign { .. })
        ));
        // The quote swallows the @, so no structural @ remains.
        assert!(matches!(
            EmailAddress::parse("\"@test.net"),
            Err(Error::MissingAtSign { .. })
        ));
    }

    #[test]
    fn test_multiple_at_signs() {
        assert_eq!(
            EmailAddress::parse("A@b@c@example.com"),
            Err(Error::MultipleAtSigns)
        );
        assert_eq!(
            EmailAddress::parse("invalid*@test@test.net"),
            Err(Error::MultipleAtSigns)
        );
    }

    #[test]
    fn test_escaped_at_sign_is_literal() {
        let address = EmailAddress::parse(r"Abc\@def@example.com").unwrap();
        assert_eq!(address.local_part().canonical_text(), r"Abc\@def");
        assert_eq!(address.domain(), "example.com");
    }

    #[test]
    fn test_quoted_at_sign_is_literal() {
        let address = EmailAddress::parse("\"abc@def\"@example.com").unwrap();
        assert_eq!(address.local_part().canonical_text(), "\"abc@def\"");
    }

    #[test]
    fn test_empty_sides() {
        assert_eq!(
            EmailAddress::parse("@example.com"),
            Err(Error::LocalPartEmpty)
        );
        assert_eq!(EmailAddress::parse("test@"), Err(Error::DomainEmpty));
    }

    #[test]
    fn test_local_part_too_long() {
        let local = "a".repeat(65);
        assert_eq!(
            EmailAddress::parse(&format!("{local}@example.com")),
            Err(Error::LocalPartTooLong)
        );
        let local = "a".repeat(64);
        assert!(EmailAddress::parse(&format!("{local}@example.com")).is_ok());
    }

    #[test]
    fn test_domain_too_long() {
        let domain = "a".repeat(256);
        assert_eq!(
            EmailAddress::parse(&format!("test@{domain}")),
            Err(Error::DomainTooLong { domain })
        );
    }

    #[test]
    fn test_domain_invalid() {
        assert_eq!(
            EmailAddress::parse("test@ex\"ample.com"),
            Err(Error::DomainInvalid {
                domain: "ex\"ample.com".to_string()
            })
        );
        assert_eq!(
            EmailAddress::parse("test@test.-net"),
            Err(Error::DomainInvalid {
                domain: "test.-net".to_string()
            })
        );
    }

    #[test]
    fn test_local_part_errors_are_wrapped() {
        assert_eq!(
            EmailAddress::parse("we..johnny@test.net"),
            Err(Error::LocalPartInvalid(LocalPartError::ConsecutiveDot))
        );
        assert_eq!(
            EmailAddress::parse(r"te\st@test.net"),
            Err(Error::LocalPartInvalid(LocalPartError::DanglingEscape))
        );
    }

    #[test]
    fn test_valid_addresses() {
        for input in [
            "simple@example.com",
            "x@example.com",
            r#""we\"d"@test.net"#,
            "\"we..johnny\"@test.net",
            "john.smith(comment)@example.com",
            "(comment)john.smith@example.com",
            "\" \"@example.org",
            "customer/department=shipping@example.com",
            "$A12345@example.com",
            "!def!xyz%abc@example.com",
            "_somename@example.com",
            "disposable.style.email.with+symbol@example.com",
            "other.email-with-hyphen@example.com",
            "fully-qualified-domain@example.com",
            "user.name+tag+sorting@example.com",
            "example-indeed@strange-example.com",
        ] {
            assert!(validate(input).is_ok(), "expected {input} to validate");
        }
    }

    #[test]
    fn test_parsed_fields() {
        let address = EmailAddress::parse("john.smith(comment)@example.com").unwrap();
        assert_eq!(address.local_part().canonical_text(), "john.smith");
        assert_eq!(address.local_part().comment(), Some("comment"));
        assert!(!address.local_part().comment_at_start());
        assert_eq!(address.domain(), "example.com");
    }

    #[test]
    fn test_display_round_trip() {
        for input in [
            "simple@example.com",
            "john.smith(comment)@example.com",
            "(comment)john.smith@example.com",
            "user.name+tag+sorting@example.com",
        ] {
            let address = EmailAddress::parse(input).unwrap();
            assert_eq!(address.to_string(), input);
        }
    }

    #[test]
    fn test_from_str() {
        let address: EmailAddress = "test@test.net".parse().unwrap();
        assert_eq!(address.domain(), "test.net");
        assert!("not-an-address".parse::<EmailAddress>().is_err());
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid("test@test.net"));
        assert!(!is_valid("we..johnny@test.net"));
        assert!(!is_valid(""));
    }

    #[test]
    fn test_equals_ignores_decoration() {
        assert!(equals("test(explaintest)@test.net", "test@test.net"));
        assert!(equals("test(explaintest)@test.net", "(blalala)test@test.net"));
        assert!(equals("test@test.net", "test+hello@test.net"));
        assert!(equals("test(explaintest)@test.net", "test+hello@test.net"));
        assert!(equals("test+hello+hello1@test.net", "test+hello@test.net"));
    }

    #[test]
    fn test_equals_case_insensitive() {
        assert!(equals("tesT@test.net", "TesT+hello@test.net"));
        assert!(equals("Test@Test.NET", "test@test.net"));
    }

    #[test]
    fn test_equals_rejects() {
        assert!(!equals("", ""));
        assert!(!equals("", "test@test.net"));
        assert!(!equals("invalid*@test@test.net", "test@test.net"));
        assert!(!equals("test@test.net", "invalid*@test@test.net"));
        assert!(!equals("test@test.net", "test@gmail.com"));
        assert!(!equals("test@test.net", "test111@test.net"));
    }

    proptest! {
        #[test]
        fn prop_no_at_sign_is_missing_at(input in "[a-z0-9.]{1,20}") {
            let result = EmailAddress::parse(&input);
            let missing_at = matches!(result, Err(Error::MissingAtSign { .. }));
            prop_assert!(missing_at, "got {result:?}");
        }

        #[test]
        fn prop_two_at_signs_are_rejected(
            a in "[a-z0-9]{1,8}",
            b in "[a-z0-9]{1,8}",
            c in "[a-z0-9]{1,8}",
        ) {
            let input = format!("{a}@{b}@{c}");
            prop_assert_eq!(EmailAddress::parse(&input), Err(Error::MultipleAtSigns));
        }

        #[test]
        fn prop_equals_is_reflexive_and_tag_blind(
            local in "[a-z][a-z0-9]{0,8}",
            domain in "[a-z]{1,8}\\.[a-z]{2,4}",
            tag in "[a-z0-9]{1,5}",
        ) {
            let plain = format!("{local}@{domain}");
            let tagged = format!("{local}+{tag}@{domain}");
            let upper = format!("{}@{}", local.to_uppercase(), domain.to_uppercase());

            prop_assert!(equals(&plain, &plain));
            prop_assert!(equals(&plain, &tagged));
            prop_assert!(equals(&tagged, &plain));
            prop_assert!(equals(&plain, &upper));
        }
    }
}
