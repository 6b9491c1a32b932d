//! # Catalog
//!
//! The menu: categories of orderable items and the price of each item.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  categories (display order)          index (name → position)           │
//! │  ─────────────────────────           ──────────────────────            │
//! │  Energy Drinks                       "Monster"    → (0, 0)             │
//! │    Monster    $3.99                  "Rockstar"   → (0, 1)             │
//! │    Rockstar   $3.99                  "Latte"      → (1, 0)             │
//! │  Coffee Drinks                       ...                               │
//! │    Latte      $4.99                                                    │
//! │    ...                                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each item lives in exactly one category and its price is stored next to
//! it, so the category listing and the price table can never disagree on a
//! spelling. The standard menu is built once, lazily, and never mutated.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{validate_category_name, validate_item_name, validate_price};

/// The standard campus menu, prices in cents.
const STANDARD_MENU: &[(&str, &[(&str, i64)])] = &[
    ("Energy Drinks", &[("Monster", 399), ("Rockstar", 399)]),
    (
        "Coffee Drinks",
        &[
            ("Latte", 499),
            ("Cappuchino", 499),
            ("Cold Press", 249),
            ("Americano", 675),
            ("Colombiano", 895),
        ],
    ),
    ("Breakfast", &[("Bagel", 299), ("Muffin", 299), ("Scone", 299)]),
    (
        "Lunch",
        &[
            ("Falafel Wrap", 899),
            ("Hummus & Pita", 799),
            ("Chicken Wrap", 899),
        ],
    ),
];

static STANDARD: Lazy<Catalog> = Lazy::new(|| {
    let categories = STANDARD_MENU
        .iter()
        .map(|(name, items)| Category {
            name: (*name).to_string(),
            items: items
                .iter()
                .map(|(item, cents)| MenuItem::new(*item, Money::from_cents(*cents)))
                .collect(),
        })
        .collect();
    Catalog::indexed(categories)
});

// =============================================================================
// Menu Item & Category
// =============================================================================

/// A priced, orderable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MenuItem {
    pub name: String,
    pub price: Money,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        MenuItem {
            name: name.into(),
            price,
        }
    }
}

/// A named group of items. Ordering is for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub name: String,
    pub items: Vec<MenuItem>,
}

/// On-disk shape of a custom catalog.
///
/// ```json
/// { "categories": [ { "name": "Lunch", "items": [ { "name": "Soup", "price": 450 } ] } ] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub categories: Vec<Category>,
}

// =============================================================================
// Catalog
// =============================================================================

/// Read-only menu with O(1) lookups by item and category name.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    /// item name → (category position, item position)
    items: HashMap<String, (usize, usize)>,
    /// category name → category position
    category_positions: HashMap<String, usize>,
}

impl Catalog {
    /// Returns the process-wide standard menu.
    ///
    /// ## Example
    /// ```rust
    /// use dunn_core::catalog::Catalog;
    ///
    /// let price = Catalog::standard().price_of("Colombiano").unwrap();
    /// assert_eq!(price.to_string(), "$8.95");
    /// ```
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }

    /// Builds a catalog from categories after validating them.
    ///
    /// ## Rules
    /// - Category names are non-empty and unique
    /// - Item names are non-empty and unique across the whole catalog
    /// - Prices are non-negative
    pub fn new(categories: Vec<Category>) -> CoreResult<Self> {
        let mut seen_categories = HashSet::new();
        let mut seen_items = HashSet::new();

        for category in &categories {
            validate_category_name(&category.name)?;
            if !seen_categories.insert(category.name.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "category".to_string(),
                    value: category.name.clone(),
                }
                .into());
            }

            for item in &category.items {
                validate_item_name(&item.name)?;
                validate_price(item.price)?;
                if !seen_items.insert(item.name.as_str()) {
                    return Err(ValidationError::Duplicate {
                        field: "item".to_string(),
                        value: item.name.clone(),
                    }
                    .into());
                }
            }
        }

        Ok(Catalog::indexed(categories))
    }

    /// Parses and validates a catalog from its JSON document form.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let document: CatalogDocument =
            serde_json::from_str(json).map_err(|e| CoreError::InvalidCatalog {
                reason: e.to_string(),
            })?;

        let catalog = Catalog::new(document.categories)?;
        debug!(
            categories = catalog.categories.len(),
            items = catalog.items.len(),
            "Custom catalog loaded"
        );
        Ok(catalog)
    }

    fn indexed(categories: Vec<Category>) -> Self {
        let mut items = HashMap::new();
        let mut category_positions = HashMap::new();

        for (c, category) in categories.iter().enumerate() {
            category_positions.insert(category.name.clone(), c);
            for (i, item) in category.items.iter().enumerate() {
                items.insert(item.name.clone(), (c, i));
            }
        }

        Catalog {
            categories,
            items,
            category_positions,
        }
    }

    /// Looks up an item by exact name.
    pub fn item(&self, name: &str) -> CoreResult<&MenuItem> {
        self.items
            .get(name)
            .map(|&(c, i)| &self.categories[c].items[i])
            .ok_or_else(|| CoreError::UnknownItem(name.to_string()))
    }

    /// Returns the price of an item, or `UnknownItem`. Never a silent zero.
    pub fn price_of(&self, name: &str) -> CoreResult<Money> {
        self.item(name).map(|item| item.price)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    /// Items of one category, in display order.
    pub fn items_in_category(&self, name: &str) -> CoreResult<&[MenuItem]> {
        self.category_positions
            .get(name)
            .map(|&c| self.categories[c].items.as_slice())
            .ok_or_else(|| CoreError::UnknownCategory(name.to_string()))
    }

    /// The full category → items structure.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Every item, flattened across categories in insertion order.
    pub fn all_items(&self) -> impl Iterator<Item = &MenuItem> + '_ {
        self.categories.iter().flat_map(|c| c.items.iter())
    }

    /// Items priced at or below `max_price`, in natural catalog order.
    ///
    /// ## Example
    /// ```rust
    /// use dunn_core::catalog::Catalog;
    /// use dunn_core::money::Money;
    ///
    /// let cheap = Catalog::standard().items_under_budget(Money::from_cents(250));
    /// assert_eq!(cheap.len(), 1);
    /// assert_eq!(cheap[0].name, "Cold Press");
    /// ```
    pub fn items_under_budget(&self, max_price: Money) -> Vec<&MenuItem> {
        self.all_items()
            .filter(|item| item.price <= max_price)
            .collect()
    }

    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            categories: self.categories.clone(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
