//! Validation helpers for user-entered ideas.
//!
//! The store only refuses blank descriptions. Descriptions typed at the
//! command line are also checked against what the text format can carry,
//! so that a saved idea reads back unchanged.

use ideas_lib::ValidationError;
use ideas_lib::codec::DELIMITER;

/// Longest description accepted from the command line, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// Validates idea descriptions before they reach the store.
pub struct IdeaValidator;

impl IdeaValidator {
    /// Validate a description and return all validation errors found.
    ///
    /// # Errors
    ///
    /// Returns a `Vec<ValidationError>` if any validation rules are violated.
    pub fn validate_description(description: &str) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if description.trim().is_empty() {
            errors.push(ValidationError::new("description", "cannot be empty"));
        }
        if description.chars().count() > MAX_DESCRIPTION_CHARS {
            errors.push(ValidationError::new(
                "description",
                format!("exceeds {MAX_DESCRIPTION_CHARS} characters"),
            ));
        }
        if description.contains('\n') || description.contains('\r') {
            errors.push(ValidationError::new(
                "description",
                "cannot contain line breaks",
            ));
        }
        if description.contains(DELIMITER) {
            errors.push(ValidationError::new(
                "description",
                format!("cannot contain '{DELIMITER}'"),
            ));
        }
        // "a:" + ":::0:::0" would re-split as "a" / ":0" / "0".
        if description.ends_with(':') {
            errors.push(ValidationError::new("description", "cannot end with ':'"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_description() {
        assert!(IdeaValidator::validate_description("Learn to juggle").is_ok());
        assert!(IdeaValidator::validate_description("Note: inner colons are fine").is_ok());
    }

    #[test]
    fn rejects_blank() {
        let errors = IdeaValidator::validate_description("   ").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "cannot be empty");
    }

    #[test]
    fn rejects_what_the_file_cannot_hold() {
        for bad in ["a:::b", "two\nlines", "trailing:"] {
            assert!(
                IdeaValidator::validate_description(bad).is_err(),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn collects_multiple_errors() {
        let long = format!("{}:::", "x".repeat(MAX_DESCRIPTION_CHARS));
        let errors = IdeaValidator::validate_description(&long).unwrap_err();
        let messages: Vec<_> = errors.iter().map(|e| e.message.as_str()).collect();
        assert!(messages.iter().any(|m| m.starts_with("exceeds")));
        assert!(messages.iter().any(|m| m.contains(":::")));
        assert!(messages.contains(&"cannot end with ':'"));
    }
}
