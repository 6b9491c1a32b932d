//! # Validation Module
//!
//! Input validation utilities for Dunn Delivery.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI (dunn-cli)                                               │
//! │  ├── Parses typed text (hour, budget)                                  │
//! │  └── validate_hour, Money::from_str                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Construction (this module)                                   │
//! │  ├── Catalog / location table / pricing policy                         │
//! │  └── Order::new (non-empty items)                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Lookups                                                       │
//! │  └── UnknownItem / UnknownCategory / UnknownLocation                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine deliberately does NOT validate the hour: an out-of-range hour
//! simply never falls in a peak window. Range checking is the caller's job.

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted item or category name.
pub const MAX_NAME_LENGTH: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a menu item name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most 100 characters
///
/// ## Example
/// ```rust
/// use dunn_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Hummus & Pita").is_ok());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    validate_name("item", name)
}

/// Validates a category name. Same rules as item names.
pub fn validate_category_name(name: &str) -> ValidationResult<()> {
    validate_name("category", name)
}

/// Validates a delivery location name. Same rules as item names.
pub fn validate_location_name(name: &str) -> ValidationResult<()> {
    validate_name("location", name)
}

fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a menu price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use dunn_core::money::Money;
/// use dunn_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(299)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    validate_non_negative_money("price", price)
}

/// Validates a money amount that may be zero but never negative.
pub fn validate_non_negative_money(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a discount in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_discount_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

/// Validates a base delivery time in whole minutes.
pub fn validate_base_minutes(minutes: i64) -> ValidationResult<()> {
    if minutes < 0 {
        return Err(ValidationError::OutOfRange {
            field: "base minutes".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates an hour of day on the 24-hour clock.
///
/// Used at the input boundary only. The estimator itself accepts any integer.
///
/// ## Example
/// ```rust
/// use dunn_core::validation::validate_hour;
///
/// assert!(validate_hour(0).is_ok());
/// assert!(validate_hour(23).is_ok());
/// assert!(validate_hour(24).is_err());
/// ```
pub fn validate_hour(hour: i32) -> ValidationResult<()> {
    if !(0..=23).contains(&hour) {
        return Err(ValidationError::OutOfRange {
            field: "hour".to_string(),
            min: 0,
            max: 23,
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates that an order lists at least one item.
pub fn validate_order_items<S: AsRef<str>>(items: &[S]) -> ValidationResult<()> {
    if items.is_empty() {
        return Err(ValidationError::Required {
            field: "items".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
