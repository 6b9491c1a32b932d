//! # Delivery Estimator
//!
//! Estimates how long a delivery takes from the destination and the hour.
//!
//! ## Congestion Model
//! ```text
//!  hour:  0 ... 8 │ 9  10 │ 11  12  13 │ 14 ... 23
//!                 │ morning│   midday   │
//!  delay:    +0   │  +5    │    +5      │   +0
//! ```
//!
//! The hour is whatever the caller says it is. Nothing here reads a clock,
//! and an hour outside 0-23 is not rejected; it just never hits a peak window.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::validation::{validate_base_minutes, validate_location_name};

/// Extra minutes added during a peak window.
pub const PEAK_DELAY_MINUTES: i64 = 5;

/// Minutes saved by priority delivery.
pub const PRIORITY_TIME_SAVINGS_MINUTES: i64 = 3;

/// Congested hours, both ends inclusive.
pub const PEAK_WINDOWS: [PeakWindow; 2] = [
    PeakWindow { start: 9, end: 10 },
    PeakWindow { start: 11, end: 13 },
];

const STANDARD_LOCATIONS: &[(&str, i64)] = &[
    ("Library", 10),
    ("Academic Success Center", 8),
    ("ITEC Computer Lab", 5),
];

static STANDARD: Lazy<DeliveryEstimator> = Lazy::new(|| DeliveryEstimator {
    locations: STANDARD_LOCATIONS
        .iter()
        .map(|(name, minutes)| DeliveryLocation::new(*name, *minutes))
        .collect(),
});

// =============================================================================
// Types
// =============================================================================

/// A delivery destination and its uncongested travel time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DeliveryLocation {
    pub name: String,
    pub base_minutes: i64,
}

impl DeliveryLocation {
    pub fn new(name: impl Into<String>, base_minutes: i64) -> Self {
        DeliveryLocation {
            name: name.into(),
            base_minutes,
        }
    }
}

/// An inclusive range of hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeakWindow {
    pub start: i32,
    pub end: i32,
}

impl PeakWindow {
    pub const fn contains(&self, hour: i32) -> bool {
        self.start <= hour && hour <= self.end
    }
}

/// Returns true if `hour` falls in any peak window.
///
/// ## Example
/// ```rust
/// use dunn_core::delivery::is_peak_hour;
///
/// assert!(is_peak_hour(9));
/// assert!(is_peak_hour(13));
/// assert!(!is_peak_hour(14));
/// assert!(!is_peak_hour(33));
/// ```
pub fn is_peak_hour(hour: i32) -> bool {
    PEAK_WINDOWS.iter().any(|window| window.contains(hour))
}

// =============================================================================
// Estimator
// =============================================================================

/// Location table plus the congestion and priority rules.
#[derive(Debug, Clone)]
pub struct DeliveryEstimator {
    locations: Vec<DeliveryLocation>,
}

impl DeliveryEstimator {
    /// The fixed campus location table.
    pub fn standard() -> &'static DeliveryEstimator {
        &STANDARD
    }

    /// Builds an estimator over a custom table.
    ///
    /// Names must be non-empty and unique; base minutes must be >= 0.
    pub fn new(locations: Vec<DeliveryLocation>) -> CoreResult<Self> {
        for (i, location) in locations.iter().enumerate() {
            validate_location_name(&location.name)?;
            validate_base_minutes(location.base_minutes)?;
            if locations[..i].iter().any(|l| l.name == location.name) {
                return Err(ValidationError::Duplicate {
                    field: "location".to_string(),
                    value: location.name.clone(),
                }
                .into());
            }
        }

        Ok(DeliveryEstimator { locations })
    }

    pub fn locations(&self) -> &[DeliveryLocation] {
        &self.locations
    }

    /// Uncongested minutes to `location`.
    pub fn base_minutes(&self, location: &str) -> CoreResult<i64> {
        self.locations
            .iter()
            .find(|l| l.name == location)
            .map(|l| l.base_minutes)
            .ok_or_else(|| CoreError::UnknownLocation(location.to_string()))
    }

    /// Base minutes, plus the peak delay when `hour` is congested.
    ///
    /// ## Example
    /// ```rust
    /// use dunn_core::delivery::DeliveryEstimator;
    ///
    /// let estimator = DeliveryEstimator::standard();
    /// assert_eq!(estimator.estimate("ITEC Computer Lab", 9).unwrap(), 10);
    /// assert_eq!(estimator.estimate("ITEC Computer Lab", 15).unwrap(), 5);
    /// ```
    pub fn estimate(&self, location: &str, hour: i32) -> CoreResult<i64> {
        let base = self.base_minutes(location)?;
        if is_peak_hour(hour) {
            Ok(base + PEAK_DELAY_MINUTES)
        } else {
            Ok(base)
        }
    }

    /// Subtracts the priority savings. Not clamped: the result can be zero or
    /// negative for very short routes.
    pub fn apply_priority_time_delta(&self, minutes: i64) -> i64 {
        minutes - PRIORITY_TIME_SAVINGS_MINUTES
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
