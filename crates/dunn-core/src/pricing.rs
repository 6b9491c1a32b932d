//! # Pricing Engine
//!
//! Turns a list of item names into money.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ["Cold Press", "Colombiano"]                                           │
//! │        │                                                                │
//! │        ▼  subtotal()              $2.49 + $8.95 = $11.44                │
//! │        │                                                                │
//! │        ▼  apply_student_discount() student AND $11.44 > $10.00          │
//! │        │                          → 90% of $11.44 = $10.30              │
//! │        │                                                                │
//! │        ▼  apply_priority_price_delta() (only if requested)              │
//! │                                   → $10.30 + $2.00 = $12.30             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The priority fee always lands on the already-discounted total.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{Catalog, MenuItem};
use crate::error::CoreResult;
use crate::money::Money;
use crate::validation::{validate_discount_bps, validate_non_negative_money};

// =============================================================================
// Pricing Policy
// =============================================================================

/// The numbers behind the discount and priority rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PricingPolicy {
    /// Student discount in basis points (1000 = 10%).
    pub student_discount_bps: u32,

    /// The subtotal must be strictly greater than this to earn the discount.
    pub student_discount_threshold: Money,

    /// Flat fee added for priority delivery.
    pub priority_fee: Money,
}

impl Default for PricingPolicy {
    /// 10% student discount above $10.00, $2.00 priority fee.
    fn default() -> Self {
        PricingPolicy {
            student_discount_bps: 1000,
            student_discount_threshold: Money::from_cents(1000),
            priority_fee: Money::from_cents(200),
        }
    }
}

impl PricingPolicy {
    pub fn validate(&self) -> CoreResult<()> {
        validate_discount_bps(self.student_discount_bps)?;
        validate_non_negative_money("discount threshold", self.student_discount_threshold)?;
        validate_non_negative_money("priority fee", self.priority_fee)?;
        Ok(())
    }
}

/// Subtotal and discounted total for one list of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceBreakdown {
    /// Each requested item with its unit price, in request order.
    pub lines: Vec<MenuItem>,
    pub subtotal: Money,
    pub total: Money,
    pub discount_applied: bool,
}

// =============================================================================
// Pricing Engine
// =============================================================================

/// Prices orders against a catalog.
#[derive(Debug, Clone, Copy)]
pub struct PricingEngine<'a> {
    catalog: &'a Catalog,
    policy: PricingPolicy,
}

impl<'a> PricingEngine<'a> {
    /// Creates an engine with the default policy.
    pub fn new(catalog: &'a Catalog) -> Self {
        PricingEngine {
            catalog,
            policy: PricingPolicy::default(),
        }
    }

    /// Creates an engine with a custom, validated policy.
    pub fn with_policy(catalog: &'a Catalog, policy: PricingPolicy) -> CoreResult<Self> {
        policy.validate()?;
        Ok(PricingEngine { catalog, policy })
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Sums the price of every listed item. Duplicates count once each.
    ///
    /// An empty list is $0.00. One unknown name fails the whole sum.
    ///
    /// ## Example
    /// ```rust
    /// use dunn_core::catalog::Catalog;
    /// use dunn_core::pricing::PricingEngine;
    ///
    /// let engine = PricingEngine::new(Catalog::standard());
    /// let subtotal = engine.subtotal(&["Cold Press", "Colombiano"]).unwrap();
    /// assert_eq!(subtotal.cents(), 1144);
    ///
    /// assert!(engine.subtotal(&["Cold Press", "Espresso"]).is_err());
    /// ```
    pub fn subtotal<S: AsRef<str>>(&self, items: &[S]) -> CoreResult<Money> {
        items
            .iter()
            .map(|name| self.catalog.price_of(name.as_ref()))
            .sum()
    }

    /// Applies the student discount when the customer is a student AND the
    /// total is strictly above the threshold. $10.00 exactly does not qualify.
    pub fn apply_student_discount(&self, total: Money, is_student: bool) -> Money {
        if self.qualifies_for_student_discount(total, is_student) {
            total.apply_percentage_discount(self.policy.student_discount_bps)
        } else {
            total
        }
    }

    pub fn qualifies_for_student_discount(&self, total: Money, is_student: bool) -> bool {
        is_student && total > self.policy.student_discount_threshold
    }

    /// Adds the flat priority fee. Applying it twice adds it twice.
    pub fn apply_priority_price_delta(&self, total: Money) -> Money {
        total + self.policy.priority_fee
    }

    /// Runs `subtotal → apply_student_discount` and keeps the priced lines.
    pub fn price<S: AsRef<str>>(
        &self,
        items: &[S],
        is_student: bool,
    ) -> CoreResult<PriceBreakdown> {
        let lines = items
            .iter()
            .map(|name| self.catalog.item(name.as_ref()).cloned())
            .collect::<CoreResult<Vec<_>>>()?;

        let subtotal: Money = lines.iter().map(|line| line.price).sum();
        let total = self.apply_student_discount(subtotal, is_student);

        Ok(PriceBreakdown {
            lines,
            subtotal,
            total,
            discount_applied: self.qualifies_for_student_discount(subtotal, is_student),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use quickcheck_macros::quickcheck;

    fn engine() -> PricingEngine<'static> {
        PricingEngine::new(Catalog::standard())
    }

    #[test]
    fn test_subtotal_counts_duplicates() {
        let subtotal = engine().subtotal(&["Latte", "Latte", "Bagel"]).unwrap();
        assert_eq!(subtotal.cents(), 499 + 499 + 299);
    }

    #[test]
    fn test_subtotal_of_nothing_is_zero() {
        let subtotal = engine().subtotal::<&str>(&[]).unwrap();
        assert!(subtotal.is_zero());
    }

    #[test]
    fn test_subtotal_unknown_item_aborts() {
        let err = engine().subtotal(&["Latte", "Mufin", "Bagel"]).unwrap_err();
        assert!(matches!(err, CoreError::UnknownItem(name) if name == "Mufin"));
    }

    #[test]
    fn test_student_discount_threshold_is_strict() {
        let engine = engine();

        let exactly_ten = Money::from_cents(1000);
        assert_eq!(engine.apply_student_discount(exactly_ten, true), exactly_ten);

        let just_over = Money::from_cents(1001);
        assert_eq!(engine.apply_student_discount(just_over, true).cents(), 901);

        let below = Money::from_cents(999);
        assert_eq!(engine.apply_student_discount(below, true), below);
    }

    #[test]
    fn test_student_discount_requires_student() {
        let total = Money::from_cents(5000);
        assert_eq!(engine().apply_student_discount(total, false), total);
        assert_eq!(engine().apply_student_discount(total, true).cents(), 4500);
    }

    #[test]
    fn test_priority_delta_is_flat_and_repeatable() {
        let engine = engine();
        let total = Money::from_cents(1030);
        assert_eq!(engine.apply_priority_price_delta(total).cents(), 1230);
        assert_eq!(
            engine
                .apply_priority_price_delta(engine.apply_priority_price_delta(total))
                .cents(),
            1430
        );
    }

    #[test]
    fn test_price_breakdown() {
        let breakdown = engine().price(&["Cold Press", "Colombiano"], true).unwrap();
        assert_eq!(breakdown.subtotal.cents(), 1144);
        assert_eq!(breakdown.total.cents(), 1030);
        assert!(breakdown.discount_applied);
        assert_eq!(breakdown.lines.len(), 2);
        assert_eq!(breakdown.lines[1].name, "Colombiano");

        let no_student = engine().price(&["Cold Press", "Colombiano"], false).unwrap();
        assert_eq!(no_student.total.cents(), 1144);
        assert!(!no_student.discount_applied);
    }

    #[test]
    fn test_custom_policy() {
        let policy = PricingPolicy {
            student_discount_bps: 2000,
            student_discount_threshold: Money::zero(),
            priority_fee: Money::from_cents(350),
        };
        let engine = PricingEngine::with_policy(Catalog::standard(), policy).unwrap();

        assert_eq!(engine.apply_student_discount(Money::from_cents(1000), true).cents(), 800);
        assert_eq!(engine.apply_priority_price_delta(Money::zero()).cents(), 350);
    }

    #[test]
    fn test_discount_flag_follows_policy_not_amount() {
        let policy = PricingPolicy {
            student_discount_bps: 0,
            ..PricingPolicy::default()
        };
        let engine = PricingEngine::with_policy(Catalog::standard(), policy).unwrap();

        let breakdown = engine.price(&["Cold Press", "Colombiano"], true).unwrap();
        assert_eq!(breakdown.total, breakdown.subtotal);
        assert!(breakdown.discount_applied);

        let policy = PricingPolicy {
            student_discount_threshold: Money::zero(),
            ..PricingPolicy::default()
        };
        let catalog = Catalog::new(vec![crate::catalog::Category {
            name: "Sweets".to_string(),
            items: vec![MenuItem::new("Mint", Money::from_cents(4))],
        }])
        .unwrap();
        let engine = PricingEngine::with_policy(&catalog, policy).unwrap();

        // 90% of 4 cents rounds back up to 4 cents
        let breakdown = engine.price(&["Mint"], true).unwrap();
        assert_eq!(breakdown.total.cents(), 4);
        assert!(breakdown.discount_applied);
    }

    #[test]
    fn test_student_discount_rounds_total_half_up() {
        let breakdown = engine().price(&["Americano"; 3], true).unwrap();
        assert_eq!(breakdown.subtotal.cents(), 2025);
        assert_eq!(breakdown.total.cents(), 1823);
    }

    #[test]
    fn test_invalid_policy_is_rejected() {
        let policy = PricingPolicy {
            student_discount_bps: 10001,
            ..PricingPolicy::default()
        };
        assert!(PricingEngine::with_policy(Catalog::standard(), policy).is_err());

        let policy = PricingPolicy {
            priority_fee: Money::from_cents(-200),
            ..PricingPolicy::default()
        };
        assert!(PricingEngine::with_policy(Catalog::standard(), policy).is_err());
    }

    #[quickcheck]
    fn prop_non_students_never_discounted(cents: u32) -> bool {
        let total = Money::from_cents(cents as i64);
        engine().apply_student_discount(total, false) == total
    }

    #[quickcheck]
    fn prop_students_at_or_below_threshold_unchanged(cents: u16) -> bool {
        let total = Money::from_cents((cents % 1001) as i64);
        engine().apply_student_discount(total, true) == total
    }

    #[quickcheck]
    fn prop_students_above_threshold_pay_less(cents: u32) -> bool {
        let total = Money::from_cents(1001 + cents as i64);
        engine().apply_student_discount(total, true) < total
    }

    #[quickcheck]
    fn prop_double_priority_adds_four_dollars(cents: i32) -> bool {
        let engine = engine();
        let total = Money::from_cents(cents as i64);
        engine.apply_priority_price_delta(engine.apply_priority_price_delta(total))
            == total + Money::from_cents(400)
    }
}
