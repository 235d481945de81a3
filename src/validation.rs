use crate::constants::MAX_TARGET_LEN;
use crate::error::AppError;

/// Validate a target process signature.
/// Returns the trimmed signature if valid.
pub fn validate_target(target: &str) -> Result<&str, AppError> {
    let trimmed = target.trim();

    if trimmed.is_empty() {
        return Err(AppError::InvalidInput {
            field: "target",
            reason: "cannot be empty".into(),
        });
    }
    if trimmed.chars().count() > MAX_TARGET_LEN {
        return Err(AppError::InvalidInput {
            field: "target",
            reason: format!("cannot exceed {MAX_TARGET_LEN} characters"),
        });
    }

    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_target_valid() {
        assert_eq!(validate_target("Code.exe").unwrap(), "Code.exe");
        assert_eq!(validate_target("  code  ").unwrap(), "code");
    }

    #[test]
    fn test_validate_target_empty() {
        assert!(validate_target("").is_err());
        assert!(validate_target("   ").is_err());
    }

    #[test]
    fn test_validate_target_too_long() {
        let long = "a".repeat(MAX_TARGET_LEN + 1);
        assert!(validate_target(&long).is_err());

        let max = "a".repeat(MAX_TARGET_LEN);
        assert!(validate_target(&max).is_ok());
    }

    #[test]
    fn test_validate_target_error_names_field() {
        match validate_target("") {
            Err(AppError::InvalidInput { field, .. }) => assert_eq!(field, "target"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }
}
