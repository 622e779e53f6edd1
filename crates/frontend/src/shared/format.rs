//! Price formatting for product cards and the order form.

/// Format a computed price. A product whose published price was not numeric
/// has no computed price and renders blank rather than breaking the card.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(value) => format!("${:.2}", value),
        None => String::new(),
    }
}

/// Savings badge text for a discounted product.
pub fn format_savings(discount: f64) -> String {
    format!("Save ${:.2}", discount)
}
