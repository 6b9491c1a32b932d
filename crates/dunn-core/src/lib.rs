//! # dunn-core: Pure Business Logic for Dunn Delivery
//!
//! This crate is the **heart** of Dunn Delivery, a campus food and drink
//! delivery counter. It prices orders and estimates delivery times as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Dunn Delivery Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    dunn-cli (Terminal)                          │   │
//! │  │   menu ──► budget ──► order summary ──► priority? ──► rating    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain values (hour, flags, names)      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ dunn-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │  pricing  │  │ delivery  │  │   order   │  │   │
//! │  │   │  Catalog  │  │  Pricing  │  │ Delivery  │  │   Order   │  │   │
//! │  │   │  MenuItem │  │  Engine   │  │ Estimator │  │  Service  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO PROMPTS • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Categories, items and prices
//! - [`pricing`] - Subtotal, student discount, priority fee
//! - [`delivery`] - Base and peak-hour delivery estimates
//! - [`order`] - Order lifecycle and the [`OrderService`] facade
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Boundary validation
//!
//! ## Example Usage
//!
//! ```rust
//! use dunn_core::{Order, OrderService};
//!
//! let service = OrderService::standard();
//! let order = Order::new("ITEC Computer Lab", ["Cold Press", "Colombiano"], 9, true)?;
//!
//! // Shown to the customer before they decide on priority delivery
//! let quote = service.price_order(&order)?;
//! assert_eq!(quote.total.to_string(), "$10.30");
//! assert_eq!(quote.delivery_minutes, 10);
//!
//! // Customer said yes
//! let final_result = service.finalize(quote, true)?;
//! assert_eq!(final_result.final_total().to_string(), "$12.30");
//! assert_eq!(final_result.final_delivery_minutes(), 7);
//! # Ok::<(), dunn_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod delivery;
pub mod error;
pub mod money;
pub mod order;
pub mod pricing;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, Category, MenuItem};
pub use delivery::{DeliveryEstimator, DeliveryLocation};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{Order, OrderResult, OrderService, OrderStatus, PriorityAdjustment};
pub use pricing::{PricingEngine, PricingPolicy};
