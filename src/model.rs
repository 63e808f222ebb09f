use serde::{Deserialize, Serialize};

/// Field name used for problems that are not attributable to one input.
pub const GENERAL_FIELD: &str = "general";

/// A single problem found in a submitted bot configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn general(message: impl Into<String>) -> Self {
        Self::new(GENERAL_FIELD, message)
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Vec<ValidationError> {
        vec![
            ValidationError::new("smallGrid", "Small Grid cannot be greater than Big Grid"),
            ValidationError::new("bigGrid", "Big Grid must be a positive integer"),
            ValidationError::new("bigGrid", "Small Grid cannot be greater than Big Grid"),
        ]
    }

    #[test]
    fn test_display() {
        let err = ValidationError::general("Invalid input values provided");
        assert_eq!(err.to_string(), "general: Invalid input values provided");
    }

    #[test]
    fn test_report_matches_schema() {
        let schema = json!({
            "type": "array",
            "items": {
                "type": "object",
                "properties": {
                    "field": { "type": "string" },
                    "message": { "type": "string" }
                },
                "required": ["field", "message"],
                "additionalProperties": false
            }
        });
        let report = serde_json::to_value(sample()).unwrap();
        assert!(jsonschema::is_valid(&schema, &report));
    }
}
