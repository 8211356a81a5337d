pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordRuleError {
    #[error("Passwords do not match")]
    Mismatch,

    #[error("Password must be at least 6 characters")]
    TooShort,
}

/// Checks a new password against its confirmation, then its length.
pub fn check_new_password(password: &str, confirmation: &str) -> Result<(), PasswordRuleError> {
    if password != confirmation {
        return Err(PasswordRuleError::Mismatch);
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(PasswordRuleError::TooShort);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_is_reported_before_length() {
        assert_eq!(
            check_new_password("abc", "abd"),
            Err(PasswordRuleError::Mismatch)
        );
    }

    #[test]
    fn five_characters_is_too_short() {
        assert_eq!(
            check_new_password("12345", "12345"),
            Err(PasswordRuleError::TooShort)
        );
    }

    #[test]
    fn six_characters_is_enough() {
        assert_eq!(check_new_password("123456", "123456"), Ok(()));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert_eq!(
            check_new_password("ééééé", "ééééé"),
            Err(PasswordRuleError::TooShort)
        );
    }
}
