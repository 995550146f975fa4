//! # Validation Module
//!
//! Field validation for entity creation.
//!
//! Deliberately small: the invoice draft itself is permissive (lines are
//! added empty and edited freely, bad numeric input coerces to zero), so
//! validation only guards the seams where an entity actually enters the
//! system — vendor registration and invoice posting.

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > 200 {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a vendor name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
pub fn validate_vendor_name(name: &str) -> ValidationResult<()> {
    validate_name("name", name)
}

/// Validates a catalog product name. Same rules as vendor names.
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    validate_name("name", name)
}

/// Validates a line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_vendor_name() {
        assert!(validate_vendor_name("Nile Supplies Co.").is_ok());
        assert!(validate_vendor_name("").is_err());
        assert!(validate_vendor_name("   ").is_err());
        assert!(validate_vendor_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Premium rice 1kg").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name(&"B".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(250).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
    }
}
