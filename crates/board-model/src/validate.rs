use crate::error::ValidationError;

/// Client-side required-field check run before a form is submitted.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Fails with every named field whose value is blank.
pub(crate) fn require(fields: &[(&'static str, &str)]) -> Result<(), ValidationError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}
