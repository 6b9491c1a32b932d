//! # Error Types
//!
//! Domain-specific error types for dunn-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  dunn-core errors (this file)                                          │
//! │  ├── CoreError        - Lookup failures, lifecycle violations          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  dunn-cli errors (separate crate)                                      │
//! │  └── CliError         - What the terminal user sees                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr + exit code     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending name in the message
//! 3. Errors are enum variants, never String
//! 4. No partial results: an error aborts the whole computation

use thiserror::Error;

use crate::order::OrderStatus;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// None of these are transient. A caller may retry with corrected input, the
/// engine itself never retries.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Item name is not in the catalog's price table.
    ///
    /// ## User Workflow
    /// ```text
    /// Order: ["Cold Press", "Espresso"]
    ///      │
    ///      ▼
    /// subtotal() looks up "Espresso"
    ///      │
    ///      ▼
    /// UnknownItem("Espresso")  (no partial subtotal is returned)
    ///      │
    ///      ▼
    /// CLI shows: "Unknown item: Espresso"
    /// ```
    #[error("Unknown item: {0}")]
    UnknownItem(String),

    /// Category name is not in the catalog.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Delivery location is not in the location table.
    #[error("Unknown delivery location: {0}")]
    UnknownLocation(String),

    /// Order result is not in a state that allows the requested transition.
    ///
    /// ## When This Occurs
    /// - Finalizing a result that was already finalized
    #[error("Order is {current:?}, cannot finalize")]
    InvalidOrderStatus { current: OrderStatus },

    /// A custom catalog document could not be read.
    #[error("Invalid catalog: {reason}")]
    InvalidCatalog { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when data doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., "3.999" as a price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., the same item listed in two categories).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownItem("Espresso".to_string());
        assert_eq!(err.to_string(), "Unknown item: Espresso");

        let err = CoreError::UnknownLocation("Gym".to_string());
        assert_eq!(err.to_string(), "Unknown delivery location: Gym");

        let err = CoreError::InvalidOrderStatus {
            current: OrderStatus::FinalizedPriority,
        };
        assert_eq!(err.to_string(), "Order is FinalizedPriority, cannot finalize");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "items".to_string(),
        };
        assert_eq!(err.to_string(), "items is required");

        let err = ValidationError::Duplicate {
            field: "item".to_string(),
            value: "Latte".to_string(),
        };
        assert_eq!(err.to_string(), "item 'Latte' already exists");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "items".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
