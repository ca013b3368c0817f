// Copyright 2025 Cowboy AI, LLC.

//! Error types for fuzzy-number operations

use thiserror::Error;

use crate::alpha_cut::BoundSide;

/// Errors that can occur while building, aligning, or combining alpha-cut sets
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FuzzyError {
    /// A host row field could not be parsed as a number
    #[error("Non-numeric input in row {row}, field {field}")]
    NonNumericInput {
        /// Zero-based index of the row as supplied by the host
        row: usize,
        /// Name of the offending field (`alpha`, `lower` or `upper`)
        field: &'static str,
    },

    /// Alpha level outside of `[0, 1]`
    #[error("Alpha level {alpha} is outside of [0, 1]")]
    AlphaOutOfRange {
        /// The rejected alpha level
        alpha: f64,
    },

    /// NaN or infinite value in a cut
    #[error("Non-finite value in alpha-cut")]
    NonFiniteValue,

    /// Lower bound greater than upper bound
    #[error("Inverted bounds at alpha {alpha}: lower {lower} > upper {upper}")]
    InvertedBounds {
        /// Alpha level of the cut
        alpha: f64,
        /// Lower bound
        lower: f64,
        /// Upper bound
        upper: f64,
    },

    /// The same alpha level appears twice in one set
    #[error("Duplicate alpha level {alpha}")]
    DuplicateAlpha {
        /// The repeated alpha level
        alpha: f64,
    },

    /// Bounds are not monotonic across alpha levels
    #[error("Not a convex fuzzy number: {side} bound breaks monotonicity at alpha {alpha}")]
    ConvexityViolation {
        /// Which bound sequence failed
        side: BoundSide,
        /// First alpha level at which the sequence reverses
        alpha: f64,
    },

    /// Operation invoked on a set with no cuts
    #[error("Alpha-cut set is empty")]
    EmptySet,

    /// Subtraction produced a negative bound
    #[error("Negative result at alpha {alpha}: values must be non-negative")]
    NegativeResult {
        /// First alpha level with a negative bound
        alpha: f64,
    },

    /// Division by a zero bound
    #[error("Division by zero at alpha {alpha}")]
    DivisionByZero {
        /// First alpha level with a zero denominator bound
        alpha: f64,
    },

    /// Arithmetic or interpolation left the range of finite values
    #[error("Result at alpha {alpha} is not finite")]
    NonFiniteResult {
        /// First alpha level with an infinite or NaN bound
        alpha: f64,
    },

    /// Alpha level outside of the resampled set's range
    #[error("Alpha level {alpha} lies outside the reference set's range")]
    UnalignableAlpha {
        /// The alpha level that could not be interpolated
        alpha: f64,
    },

    /// Alignment did not produce identical alpha sequences
    #[error("Aligned sets do not share a grid: {left:?} vs {right:?}")]
    MisalignedGrid {
        /// Alpha levels of the left operand after alignment
        left: Vec<f64>,
        /// Alpha levels of the right operand after alignment
        right: Vec<f64>,
    },

    /// Operator symbol that maps to no known operation or relation
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for fuzzy-number operations
pub type FuzzyResult<T> = Result<T, FuzzyError>;

impl From<serde_json::Error> for FuzzyError {
    fn from(err: serde_json::Error) -> Self {
        FuzzyError::Serialization(err.to_string())
    }
}

impl FuzzyError {
    /// Check if this error describes malformed host input
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            FuzzyError::NonNumericInput { .. }
                | FuzzyError::AlphaOutOfRange { .. }
                | FuzzyError::NonFiniteValue
                | FuzzyError::InvertedBounds { .. }
                | FuzzyError::DuplicateAlpha { .. }
                | FuzzyError::EmptySet
        )
    }

    /// Check if this error is one of the arithmetic domain guards
    pub fn is_domain_guard(&self) -> bool {
        matches!(
            self,
            FuzzyError::NegativeResult { .. }
                | FuzzyError::DivisionByZero { .. }
                | FuzzyError::NonFiniteResult { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = FuzzyError::NonNumericInput {
            row: 2,
            field: "lower",
        };
        assert_eq!(err.to_string(), "Non-numeric input in row 2, field lower");

        let err = FuzzyError::ConvexityViolation {
            side: BoundSide::Upper,
            alpha: 0.5,
        };
        assert_eq!(
            err.to_string(),
            "Not a convex fuzzy number: upper bound breaks monotonicity at alpha 0.5"
        );

        let err = FuzzyError::DivisionByZero { alpha: 1.0 };
        assert_eq!(err.to_string(), "Division by zero at alpha 1");

        let err = FuzzyError::UnknownOperator("%".to_string());
        assert_eq!(err.to_string(), "Unknown operator: %");
    }

    #[test]
    fn test_is_input_error() {
        assert!(FuzzyError::EmptySet.is_input_error());
        assert!(FuzzyError::DuplicateAlpha { alpha: 0.5 }.is_input_error());
        assert!(!FuzzyError::NegativeResult { alpha: 0.0 }.is_input_error());
        assert!(!FuzzyError::UnalignableAlpha { alpha: 0.1 }.is_input_error());
    }

    #[test]
    fn test_is_domain_guard() {
        assert!(FuzzyError::NegativeResult { alpha: 0.2 }.is_domain_guard());
        assert!(FuzzyError::DivisionByZero { alpha: 1.0 }.is_domain_guard());
        assert!(FuzzyError::NonFiniteResult { alpha: 0.0 }.is_domain_guard());
        assert!(!FuzzyError::EmptySet.is_domain_guard());
    }

    #[test]
    fn test_serde_json_conversion() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{ invalid json }").unwrap_err();
        let err: FuzzyError = serde_err.into();

        match err {
            FuzzyError::Serialization(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected Serialization"),
        }
    }
}
