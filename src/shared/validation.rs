use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Loose shape check: something@something.something, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Empty input counts as digits-only.
pub fn is_digits_only(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit())
}

/// Emails compare after trimming and full Unicode lower-casing, so
/// `ÉLODIE@example.com` and `élodie@example.com` are the same address.
pub fn same_email(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Text before the first `@`.
pub fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple_addresses() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("jane.doe+news@mail.example.co"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("jane"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane doe@example.com"));
        assert!(!is_valid_email("jane@@example.com"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn blank_checks_trim() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn digits_only() {
        assert!(is_digits_only(""));
        assert!(is_digits_only("0612345678"));
        assert!(!is_digits_only("+212 600"));
        assert!(!is_digits_only("06-12"));
    }

    #[test]
    fn email_comparison_folds_non_ascii_case() {
        assert!(same_email("ÉLODIE@example.com", "élodie@example.com"));
        assert!(same_email(" Jane@Example.com", "jane@example.com "));
        assert!(!same_email("elodie@example.com", "élodie@example.com"));
    }

    #[test]
    fn local_part() {
        assert_eq!(email_local_part("jane.doe@example.com"), "jane.doe");
        assert_eq!(email_local_part("nobody"), "nobody");
    }
}
