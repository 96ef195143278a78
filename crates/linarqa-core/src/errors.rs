use thiserror::Error;

/// Errors raised by the library crates.
///
/// Most query operations are total and never return an error. These variants
/// cover input that falls outside the documented domain: list elements that
/// are not entity objects, malformed month keys and invalid filter criteria.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("element {index} of the collection could not be decoded: {source}")]
    Decode {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid month key '{0}', expected YYYY-MM")]
    InvalidMonthKey(String),

    #[error("invalid filter criteria: {0}")]
    InvalidCriteria(#[from] validator::ValidationErrors),
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_month_key_message() {
        let err = CoreError::InvalidMonthKey("2024-13".into());
        assert_eq!(err.to_string(), "invalid month key '2024-13', expected YYYY-MM");
    }

    #[test]
    fn test_decode_error_reports_index() {
        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err = CoreError::Decode { index: 3, source };
        assert!(err.to_string().starts_with("element 3 of the collection"));
    }
}
