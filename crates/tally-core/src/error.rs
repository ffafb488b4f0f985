//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Flow                                      │
//! │                                                                         │
//! │  Constructor input ──► validation ──► LedgerError ──► shell             │
//! │                                           │                             │
//! │                                           ▼                             │
//! │                          category(): Argument vs Range                  │
//! │                                           │                             │
//! │                                           ▼                             │
//! │                    shell reports each category distinctly               │
//! │                                                                         │
//! │  All validation is eager: an invalid Customer, OrderItem or Order      │
//! │  can never exist. There is no partially-constructed state to observe.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (which field failed)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Ledger Error
// =============================================================================

/// Construction-time validation errors.
///
/// These are unrecoverable precondition violations surfaced immediately to
/// the caller. The core never suppresses or retries them; the presentation
/// layer reports them, split by [`ErrorCategory`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// A required text field is empty or all-whitespace.
    ///
    /// ## When This Occurs
    /// - Customer name is blank
    /// - Product name is blank
    #[error("{field} is required")]
    Required { field: &'static str },

    /// A numeric field that must be strictly positive is zero or negative.
    ///
    /// ## When This Occurs
    /// - Customer or order id <= 0
    /// - Item quantity <= 0
    #[error("{field} must be positive, got {value}")]
    MustBePositive { field: &'static str, value: i64 },

    /// A monetary amount that must be non-negative is below zero.
    #[error("{field} must not be negative, got {cents} cents")]
    NegativeAmount { field: &'static str, cents: i64 },
}

impl LedgerError {
    /// Returns the coarse category of the error.
    ///
    /// The shell branches on this to report range violations and argument
    /// violations distinctly.
    pub fn category(&self) -> ErrorCategory {
        match self {
            LedgerError::Required { .. } => ErrorCategory::Argument,
            LedgerError::MustBePositive { .. } | LedgerError::NegativeAmount { .. } => {
                ErrorCategory::Range
            }
        }
    }
}

// =============================================================================
// Error Category
// =============================================================================

/// Coarse error taxonomy.
///
/// - `Argument`: a required value is missing or blank
/// - `Range`: a numeric value is outside its allowed domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Argument,
    Range,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with LedgerError.
pub type LedgerResult<T> = Result<T, LedgerError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LedgerError::Required {
            field: "customer name",
        };
        assert_eq!(err.to_string(), "customer name is required");

        let err = LedgerError::MustBePositive {
            field: "quantity",
            value: -5,
        };
        assert_eq!(err.to_string(), "quantity must be positive, got -5");

        let err = LedgerError::NegativeAmount {
            field: "unit price",
            cents: -100,
        };
        assert_eq!(
            err.to_string(),
            "unit price must not be negative, got -100 cents"
        );
    }

    #[test]
    fn test_error_categories() {
        let blank = LedgerError::Required { field: "name" };
        assert_eq!(blank.category(), ErrorCategory::Argument);

        let non_positive = LedgerError::MustBePositive {
            field: "order id",
            value: 0,
        };
        assert_eq!(non_positive.category(), ErrorCategory::Range);

        let negative = LedgerError::NegativeAmount {
            field: "unit price",
            cents: -1,
        };
        assert_eq!(negative.category(), ErrorCategory::Range);
    }
}
