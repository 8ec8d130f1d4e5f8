//! Currency conversion error types.

use thiserror::Error;

/// Errors raised while converting a USD amount.
///
/// Only [`ConvertError::ConversionFailed`] ever crosses the tool boundary;
/// the other variants name the original cause and render the message that
/// ends up inside the wrapper.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A negative amount was supplied.
    #[error("Amount must be a positive number")]
    InvalidInput,

    /// The rate provider responded with a non-success status.
    #[error("Failed to fetch exchange rates")]
    UpstreamUnavailable,

    /// Normalized wrapper for any failure during a conversion.
    #[error("Currency conversion failed: {0}")]
    ConversionFailed(String),
}

impl ConvertError {
    /// Collapses an arbitrary failure into the single shape callers observe.
    pub fn normalize(err: anyhow::Error) -> Self {
        let cause = err.to_string();
        if cause.is_empty() {
            ConvertError::ConversionFailed("Unknown error".to_string())
        } else {
            ConvertError::ConversionFailed(cause)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConvertError::InvalidInput.to_string(),
            "Amount must be a positive number"
        );
        assert_eq!(
            ConvertError::UpstreamUnavailable.to_string(),
            "Failed to fetch exchange rates"
        );
        assert_eq!(
            ConvertError::ConversionFailed("boom".to_string()).to_string(),
            "Currency conversion failed: boom"
        );
    }

    #[test]
    fn test_normalize_keeps_cause_message() {
        let err = ConvertError::normalize(anyhow!("connection refused"));
        assert_eq!(
            err.to_string(),
            "Currency conversion failed: connection refused"
        );
    }

    #[test]
    fn test_normalize_wraps_tagged_variants() {
        let err = ConvertError::normalize(ConvertError::InvalidInput.into());
        assert_eq!(
            err.to_string(),
            "Currency conversion failed: Amount must be a positive number"
        );
    }

    #[test]
    fn test_normalize_substitutes_unknown_error_for_empty_cause() {
        let err = ConvertError::normalize(anyhow!(""));
        assert_eq!(err.to_string(), "Currency conversion failed: Unknown error");
    }
}
