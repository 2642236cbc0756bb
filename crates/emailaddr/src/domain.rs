//! DNS-style domain name validation.

use crate::MAX_DOMAIN_LENGTH;

/// Maximum length of a single DNS label.
const MAX_LABEL_LENGTH: usize = 63;

/// Checks whether `candidate` is a syntactically valid DNS-style domain name.
///
/// Labels are separated by dots; each label must be 1 to 63 characters of
/// letters, digits, and interior hyphens. Leading or trailing dots, empty
/// labels, and names longer than 255 characters are rejected. Digits-only
/// labels are allowed.
///
/// # Examples
///
/// ```
/// use emailaddr::is_domain_name;
///
/// assert!(is_domain_name("test.net"));
/// assert!(is_domain_name("t1est.net"));
/// assert!(!is_domain_name("test.-net"));
/// assert!(!is_domain_name(""));
/// ```
#[must_use]
pub fn is_domain_name(candidate: &str) -> bool {
    if candidate.is_empty() || candidate.chars().count() > MAX_DOMAIN_LENGTH {
        return false;
    }
    candidate.split('.').all(is_label)
}

/// Checks a single label between dots.
fn is_label(label: &str) -> bool {
    let length = label.chars().count();
    if length == 0 || length > MAX_LABEL_LENGTH {
        return false;
    }
    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }
    label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_domains() {
        assert!(is_domain_name("test.net"));
        assert!(is_domain_name("t1est.net"));
        assert!(is_domain_name("strange-example.com"));
        assert!(is_domain_name("example"));
        assert!(is_domain_name("1.1.1.1"));
    }

    #[test]
    fn test_empty_domain() {
        assert!(!is_domain_name(""));
    }

    #[test]
    fn test_hyphen_at_label_boundary() {
        assert!(!is_domain_name("test.-net"));
        assert!(!is_domain_name("test-.net"));
        assert!(!is_domain_name("-test.net"));
    }

    #[test]
    fn test_invalid_characters() {
        assert!(!is_domain_name("\"test\".net"));
        assert!(!is_domain_name("ex ample.com"));
        assert!(!is_domain_name("test_net"));
    }

    #[test]
    fn test_empty_labels() {
        assert!(!is_domain_name(".test.net"));
        assert!(!is_domain_name("test.net."));
        assert!(!is_domain_name("test..net"));
    }

    #[test]
    fn test_label_too_long() {
        let label = "a".repeat(64);
        assert!(!is_domain_name(&format!("{label}.net")));
        assert!(is_domain_name(&format!("{}.net", "a".repeat(63))));
    }

    #[test]
    fn test_total_length() {
        // 64 labels of 3 chars plus separators: 255 characters exactly.
        let ok = ["abc"; 64].join(".");
        assert_eq!(ok.len(), 255);
        assert!(is_domain_name(&ok));
        assert!(!is_domain_name(&format!("{ok}.a")));
    }
}
