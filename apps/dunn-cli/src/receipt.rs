//! # Receipt Formatting
//!
//! Turns engine results into the text the customer reads. Every function
//! returns a `String` so the layout can be asserted on directly.
//!
//! ## Order Summary Layout
//! ```text
//! === Dunn Delivery ===
//! === Order Summary ===
//! Delivery to ITEC Computer Lab
//!
//! Items Ordered:
//! - Cold Press: $2.49
//! - Colombiano: $8.95
//!
//! Subtotal: $11.44
//! Student discount applied!
//! Total after discount: $10.30
//! Estimated delivery time: 10 minutes
//! ```

use dunn_core::{Category, MenuItem, Money, OrderResult};

fn item_line(item: &MenuItem) -> String {
    format!("{}: {}\n", item.name, item.price)
}

/// One category block.
pub fn render_category(name: &str, items: &[MenuItem]) -> String {
    let mut out = format!("\n=== {name} ===\n");
    for item in items {
        out.push_str(&item_line(item));
    }
    out
}

/// Every category, in display order.
pub fn render_menu(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|c| render_category(&c.name, &c.items))
        .collect()
}

pub fn render_budget(budget: Money, items: &[&MenuItem]) -> String {
    let mut out = "\n=== Here are the menu items within your budget ===\n".to_string();
    if items.is_empty() {
        out.push_str(&format!("Nothing on the menu costs {budget} or less.\n"));
    }
    for item in items {
        out.push_str(&item_line(item));
    }
    out
}

/// Everything known before the priority question.
pub fn render_summary(store_name: &str, result: &OrderResult) -> String {
    let mut out = format!("\n=== {store_name} ===\n=== Order Summary ===\n");
    out.push_str(&format!("Delivery to {}\n", result.location));
    out.push_str("\nItems Ordered:\n");
    for line in &result.lines {
        out.push_str(&format!("- {}", item_line(line)));
    }

    out.push_str(&format!("\nSubtotal: {}\n", result.subtotal));
    if result.discount_applied {
        out.push_str("Student discount applied!\n");
    }
    out.push_str(&format!("Total after discount: {}\n", result.total));
    out.push_str(&format!(
        "Estimated delivery time: {} minutes\n",
        result.delivery_minutes
    ));
    out
}

/// The answer to the priority question.
pub fn render_priority_outcome(result: &OrderResult) -> String {
    match result.priority {
        Some(priority) => format!(
            "Priority delivery total: {}\nNew estimated delivery time: {} minutes\n",
            priority.total, priority.delivery_minutes
        ),
        None => "Your total and estimated delivery times will remain the same.\n".to_string(),
    }
}

pub fn render_rating(rating: i64) -> String {
    format!("\nYou gave this delivery a rating of {rating}\n")
}
