//! # Orders
//!
//! Composes pricing and delivery estimation into one result per order.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Order::new ──► Created                                                 │
//! │                    │                                                    │
//! │                    ▼  price_order()                                     │
//! │                 Priced ── totals and estimate shown to the customer     │
//! │                    │                                                    │
//! │          ┌─────────┴──────────┐   finalize(priority?)                   │
//! │          ▼                    ▼                                         │
//! │  FinalizedStandard    FinalizedPriority  (+$2.00, -3 minutes)           │
//! │                                                                         │
//! │  No transition goes backward.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `apply_priority` is the raw adjustment and carries no guard: applying it
//! twice adjusts twice. `finalize` is the one-shot decision point and refuses
//! anything that is not `Priced`.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::catalog::{Catalog, Category, MenuItem};
use crate::delivery::{is_peak_hour, DeliveryEstimator};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::PricingEngine;
use crate::validation::validate_order_items;

// =============================================================================
// Order Status
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order captured, nothing computed yet.
    #[default]
    Created,
    /// Totals and delivery estimate computed; priority not yet decided.
    Priced,
    /// Customer declined priority delivery.
    FinalizedStandard,
    /// Customer chose priority delivery.
    FinalizedPriority,
}

impl OrderStatus {
    pub fn is_finalized(&self) -> bool {
        matches!(
            self,
            OrderStatus::FinalizedStandard | OrderStatus::FinalizedPriority
        )
    }
}

// =============================================================================
// Order
// =============================================================================

/// One customer's request. Lives for a single computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    pub location: String,
    /// Item names; a name listed twice is two of that item.
    pub items: Vec<String>,
    /// Hour of day, 24-hour clock, as reported by the caller.
    pub hour: i32,
    pub is_student: bool,
}

impl Order {
    /// Creates an order. At least one item is required.
    pub fn new<L, I, S>(location: L, items: I, hour: i32, is_student: bool) -> CoreResult<Self>
    where
        L: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        validate_order_items(&items)?;

        Ok(Order {
            location: location.into(),
            items,
            hour,
            is_student,
        })
    }
}

// =============================================================================
// Order Result
// =============================================================================

/// Figures after priority delivery was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriorityAdjustment {
    pub total: Money,
    pub delivery_minutes: i64,
}

/// Everything the receipt needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderResult {
    pub location: String,
    pub hour: i32,
    /// Requested items with unit prices, in request order.
    pub lines: Vec<MenuItem>,
    /// Sum of line prices before any discount.
    pub subtotal: Money,
    /// Subtotal after the student discount.
    pub total: Money,
    pub discount_applied: bool,
    /// Standard delivery estimate.
    pub delivery_minutes: i64,
    pub peak_hour: bool,
    /// Present once priority delivery has been applied.
    pub priority: Option<PriorityAdjustment>,
    pub status: OrderStatus,
}

impl OrderResult {
    /// Total the customer pays, with priority if it was chosen.
    pub fn final_total(&self) -> Money {
        self.priority.map_or(self.total, |p| p.total)
    }

    /// Delivery estimate the customer is given, with priority if chosen.
    pub fn final_delivery_minutes(&self) -> i64 {
        self.priority
            .map_or(self.delivery_minutes, |p| p.delivery_minutes)
    }

    /// Amount taken off the subtotal by the student discount.
    pub fn discount(&self) -> Money {
        self.subtotal - self.total
    }
}

// =============================================================================
// Order Service
// =============================================================================

/// The entry point the front end calls.
///
/// Holds only shared references to read-only data, so one service can price
/// any number of orders from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct OrderService<'a> {
    pricing: PricingEngine<'a>,
    delivery: &'a DeliveryEstimator,
}

impl OrderService<'static> {
    /// Standard menu, standard locations, default policy.
    pub fn standard() -> Self {
        OrderService::new(
            PricingEngine::new(Catalog::standard()),
            DeliveryEstimator::standard(),
        )
    }
}

impl<'a> OrderService<'a> {
    pub fn new(pricing: PricingEngine<'a>, delivery: &'a DeliveryEstimator) -> Self {
        OrderService { pricing, delivery }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.pricing.catalog()
    }

    /// Items of one category for menu display.
    pub fn list_category(&self, name: &str) -> CoreResult<&'a [MenuItem]> {
        self.catalog().items_in_category(name)
    }

    /// The whole menu.
    pub fn list_all(&self) -> &'a [Category] {
        self.catalog().categories()
    }

    /// Items the customer can afford, in catalog order.
    pub fn items_under_budget(&self, max_price: Money) -> Vec<&'a MenuItem> {
        self.catalog().items_under_budget(max_price)
    }

    /// Prices an order before the priority decision.
    ///
    /// Fails atomically: an unknown item or location yields no result at all.
    ///
    /// ## Example
    /// ```rust
    /// use dunn_core::order::{Order, OrderService, OrderStatus};
    ///
    /// let service = OrderService::standard();
    /// let order = Order::new("ITEC Computer Lab", ["Cold Press", "Colombiano"], 9, true).unwrap();
    ///
    /// let result = service.price_order(&order).unwrap();
    /// assert_eq!(result.subtotal.to_string(), "$11.44");
    /// assert_eq!(result.total.to_string(), "$10.30");
    /// assert_eq!(result.delivery_minutes, 10);
    /// assert_eq!(result.status, OrderStatus::Priced);
    /// ```
    pub fn price_order(&self, order: &Order) -> CoreResult<OrderResult> {
        let breakdown = self.pricing.price(&order.items, order.is_student)?;
        let delivery_minutes = self.delivery.estimate(&order.location, order.hour)?;

        debug!(
            location = %order.location,
            items = order.items.len(),
            subtotal = %breakdown.subtotal,
            total = %breakdown.total,
            discount_applied = breakdown.discount_applied,
            delivery_minutes,
            "Order priced"
        );

        Ok(OrderResult {
            location: order.location.clone(),
            hour: order.hour,
            lines: breakdown.lines,
            subtotal: breakdown.subtotal,
            total: breakdown.total,
            discount_applied: breakdown.discount_applied,
            delivery_minutes,
            peak_hour: is_peak_hour(order.hour),
            priority: None,
            status: OrderStatus::Priced,
        })
    }

    /// Adds the priority fee and subtracts the priority time savings from the
    /// result's current final figures.
    ///
    /// Unguarded: a second call stacks a second adjustment.
    pub fn apply_priority(&self, result: &OrderResult) -> OrderResult {
        let adjustment = PriorityAdjustment {
            total: self.pricing.apply_priority_price_delta(result.final_total()),
            delivery_minutes: self
                .delivery
                .apply_priority_time_delta(result.final_delivery_minutes()),
        };

        debug!(
            location = %result.location,
            total = %adjustment.total,
            delivery_minutes = adjustment.delivery_minutes,
            previous_status = ?result.status,
            "Priority delivery applied"
        );

        OrderResult {
            priority: Some(adjustment),
            status: OrderStatus::FinalizedPriority,
            ..result.clone()
        }
    }

    /// Records the customer's single yes/no priority decision.
    ///
    /// Only a `Priced` result can be finalized.
    pub fn finalize(&self, result: OrderResult, priority: bool) -> CoreResult<OrderResult> {
        if result.status != OrderStatus::Priced {
            return Err(CoreError::InvalidOrderStatus {
                current: result.status,
            });
        }

        if priority {
            return Ok(self.apply_priority(&result));
        }

        debug!(location = %result.location, "Standard delivery kept");
        Ok(OrderResult {
            status: OrderStatus::FinalizedStandard,
            ..result
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
