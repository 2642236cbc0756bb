//! # emailaddr
//!
//! Email address validation and parsing against a relaxed RFC 5322 grammar.
//!
//! ## Features
//!
//! - **Validation**: a specific, classified error for every way an address
//!   can be malformed
//! - **Local-part scanning**: quoting, backslash escapes, parenthesized
//!   comments, and `+`-delimited tags in one pass
//! - **Equivalence**: compare two addresses ignoring comments, tags, and case
//! - **Domain checking**: standalone DNS-style name validation
//!
//! ## Quick Start
//!
//! ### Validating Addresses
//!
//! ```
//! use emailaddr::validate;
//!
//! assert!(validate("john.smith(comment)@example.com").is_ok());
//! assert!(validate("we..johnny@test.net").is_err());
//! ```
//!
//! ### Parsing Addresses
//!
//! ```
//! use emailaddr::EmailAddress;
//!
//! let address: EmailAddress = "user+promo(newsletter)@example.com".parse()?;
//! assert_eq!(address.local_part().canonical_text(), "user");
//! assert_eq!(address.local_part().tags(), ["promo"]);
//! assert_eq!(address.local_part().comment(), Some("newsletter"));
//! assert_eq!(address.domain(), "example.com");
//! # Ok::<(), emailaddr::Error>(())
//! ```
//!
//! ### Comparing Addresses
//!
//! ```
//! use emailaddr::equals;
//!
//! assert!(equals("Test@Test.NET", "test+tag@test.net"));
//! assert!(!equals("test@test.net", "test@gmail.com"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod address;
mod domain;
mod error;
mod local_part;

pub use address::{EmailAddress, equals, is_valid, validate};
pub use domain::is_domain_name;
pub use error::{Error, LocalPartError, Result};
pub use local_part::LocalPart;

/// Maximum number of characters allowed in the local part.
pub const MAX_LOCAL_PART: usize = 64;

/// Maximum number of characters allowed in the domain.
pub const MAX_DOMAIN_LENGTH: usize = 255;
