//! Request validation: presence and non-empty checks.

use crate::error::ApiError;
use crate::model::{CupcakePatch, NewCupcake};

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a create body. Field presence is enforced by
    /// deserialization; this checks that the required text fields are not
    /// blank.
    pub fn validate_create(body: &NewCupcake) -> Result<(), ApiError> {
        require_non_empty("flavor", &body.flavor)?;
        require_non_empty("size", &body.size)?;
        Ok(())
    }

    /// Validate a patch body. An all-absent body is the fixed
    /// "Empty inputs" validation error; present text fields must not be
    /// blank. Absent fields are not checked.
    pub fn validate_patch(body: &CupcakePatch) -> Result<(), ApiError> {
        if body.is_empty() {
            return Err(ApiError::Validation("Empty inputs".into()));
        }
        if let Some(flavor) = &body.flavor {
            require_non_empty("flavor", flavor)?;
        }
        if let Some(size) = &body.size {
            require_non_empty("size", size)?;
        }
        Ok(())
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_patch_is_fixed_message() {
        let err = RequestValidator::validate_patch(&CupcakePatch::default()).unwrap_err();
        assert_eq!(err.to_string(), "Empty inputs");
    }

    #[test]
    fn blank_flavor_rejected_on_create() {
        let body = NewCupcake {
            flavor: "  ".into(),
            size: "small".into(),
            rating: 1.0,
            image: "http://x".into(),
        };
        assert!(RequestValidator::validate_create(&body).is_err());
    }

    #[test]
    fn present_fields_checked_on_patch() {
        let patch = CupcakePatch {
            size: Some(String::new()),
            ..Default::default()
        };
        assert!(RequestValidator::validate_patch(&patch).is_err());

        let patch = CupcakePatch {
            rating: Some(3.0),
            ..Default::default()
        };
        assert!(RequestValidator::validate_patch(&patch).is_ok());
    }
}
