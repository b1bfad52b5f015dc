//! Required-field validation for form input.
//!
//! Validation is fail-fast: the first required field left empty, in declared
//! order, is the only one reported. The message is the one shown to the user.

use std::fmt;

use crate::schema::{DataRecord, Field};
use crate::templates::Template;

/// A required field was left empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation; the form focuses it.
    pub field: String,
    /// Label shown to the user
    pub label: String,
    /// Human-readable error message in Vietnamese
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            label: label.into(),
            message: message.into(),
        }
    }

    /// Create error for empty required field
    pub fn empty_field(field: &Field) -> Self {
        Self::new(&field.id, &field.label, format!("Vui lòng nhập: {}", field.label))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validate that a field's value is not empty after trimming.
pub fn validate_required(field: &Field, record: &DataRecord) -> Result<(), ValidationError> {
    if field.required && record.is_blank(&field.id) {
        return Err(ValidationError::empty_field(field));
    }
    Ok(())
}

/// Check the template's required fields in declared order and stop at the
/// first one that is empty.
pub fn validate(template: &Template, record: &DataRecord) -> Result<(), ValidationError> {
    for field in &template.fields {
        if let Err(error) = validate_required(field, record) {
            log::info!(
                "validation failed for template '{}': {}",
                template.id,
                error
            );
            return Err(error);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::registry;

    #[test]
    fn test_validate_required_empty() {
        let field = Field::text("nama", "Họ và tên").required();
        let error = validate_required(&field, &DataRecord::new()).unwrap_err();
        assert_eq!(error.field, "nama");
        assert_eq!(error.message, "Vui lòng nhập: Họ và tên");
    }

    #[test]
    fn test_validate_required_whitespace_only() {
        let field = Field::text("nama", "Họ và tên").required();
        let record = DataRecord::new().with("nama", "   \t");
        assert!(validate_required(&field, &record).is_err());
    }

    #[test]
    fn test_optional_field_may_be_empty() {
        let field = Field::text("email", "Email");
        assert!(validate_required(&field, &DataRecord::new()).is_ok());
    }

    #[test]
    fn test_validate_stops_at_first_failure() {
        let receipt = registry().unwrap().find("receipt").unwrap();
        // receiver_name and receiver_id are both required and both empty
        let error = validate(receipt, &DataRecord::new()).unwrap_err();
        assert_eq!(error.field, "receiver_name");

        let record = DataRecord::new().with("receiver_name", "Nguyễn Văn A");
        let error = validate(receipt, &record).unwrap_err();
        assert_eq!(error.field, "receiver_id");
    }

    #[test]
    fn test_display_includes_field() {
        let field = Field::text("amount", "Số tiền (VNĐ)").required();
        let error = ValidationError::empty_field(&field);
        assert_eq!(error.to_string(), "[amount] Vui lòng nhập: Số tiền (VNĐ)");
    }
}
