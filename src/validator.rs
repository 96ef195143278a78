use linarqa_core::{CoreError, CoreResult};
use validator::{Validate, ValidationErrors};

/// Joins field errors into one human-readable line.
pub fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().filter_map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .or_else(|| Some(format!("{} is invalid", field)))
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}

/// Validates filter parameters before they reach a query service.
pub fn validate_params<T>(params: &T) -> CoreResult<()>
where
    T: Validate,
{
    params.validate().map_err(CoreError::InvalidCriteria)
}
