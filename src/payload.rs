//! Validation of request bodies at the serialization boundary.
//!
//! Simple resource forms can be built with any field values. They are checked
//! only when turned into a request body, so an invalid value never reaches the
//! transport.

use crate::error::{Result, ValidationError};
use serde::Serialize;

/// A request body for a create or update call
pub trait Payload: Serialize {
    /// Check the preconditions the API enforces on this body
    fn validate(&self) -> std::result::Result<(), ValidationError>;

    /// Validate, then encode as JSON
    fn to_payload(&self) -> Result<Vec<u8>> {
        self.validate()?;
        Ok(serde_json::to_vec(self)?)
    }
}

/// Reject blank text
pub fn require_text(field: &'static str, value: &str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Missing { field });
    }
    Ok(())
}

/// Reject an unset (zero) or negative reference
pub fn require_id(field: &'static str, value: i64) -> std::result::Result<(), ValidationError> {
    if value <= 0 {
        return Err(ValidationError::Missing { field });
    }
    Ok(())
}

pub fn check_range(
    field: &'static str,
    value: i64,
    min: i64,
    max: i64,
) -> std::result::Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Limit text length, counted in characters
pub fn check_len(
    field: &'static str,
    value: &str,
    max: usize,
) -> std::result::Result<(), ValidationError> {
    let len = value.chars().count();
    if len > max {
        return Err(ValidationError::TooLong { field, len, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KankaError;

    #[derive(Serialize)]
    struct Named {
        name: String,
    }

    impl Payload for Named {
        fn validate(&self) -> std::result::Result<(), ValidationError> {
            require_text("name", &self.name)
        }
    }

    #[test]
    fn test_to_payload_valid() {
        let named = Named {
            name: "Thorin".into(),
        };
        let body = named.to_payload().unwrap();
        assert_eq!(body, br#"{"name":"Thorin"}"#);
    }

    #[test]
    fn test_to_payload_blank() {
        for name in ["", "   "] {
            let err = Named { name: name.into() }.to_payload().unwrap_err();
            assert!(matches!(
                err,
                KankaError::Validation(ValidationError::Missing { field: "name" })
            ));
        }
    }

    #[test]
    fn test_require_id() {
        assert!(require_id("item_id", 4).is_ok());
        assert!(require_id("item_id", 0).is_err());
        assert!(require_id("item_id", -4).is_err());
    }

    #[test]
    fn test_check_range() {
        assert!(check_range("attitude", -100, -100, 100).is_ok());
        assert!(check_range("attitude", 100, -100, 100).is_ok());
        assert_eq!(
            check_range("attitude", 101, -100, 100),
            Err(ValidationError::OutOfRange {
                field: "attitude",
                value: 101,
                min: -100,
                max: 100,
            })
        );
    }

    #[test]
    fn test_check_len_counts_chars() {
        let text = "é".repeat(255);
        assert!(check_len("relation", &text, 255).is_ok());
        assert!(check_len("relation", &format!("{}x", text), 255).is_err());
    }
}
