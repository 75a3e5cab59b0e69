//! Data models for the shoe inventory.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Header line written at the top of every inventory file.
pub const FILE_HEADER: &str = "Country,Code,Product,Cost,Quantity";

/// Field delimiter used in the inventory file.
pub const DELIMITER: char = ',';

/// A single shoe line item in the inventory.
///
/// `code` identifies the record within a session; the store itself does
/// not enforce uniqueness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shoe {
    pub country: String,
    pub code: String,
    pub product: String,
    pub cost: f64,
    pub quantity: u32,
}

impl Shoe {
    /// Create a new shoe record.
    pub fn new(
        country: impl Into<String>,
        code: impl Into<String>,
        product: impl Into<String>,
        cost: f64,
        quantity: u32,
    ) -> Self {
        Self {
            country: country.into(),
            code: code.into(),
            product: product.into(),
            cost,
            quantity,
        }
    }

    /// Total stock value for this record: cost per pair times pairs in stock.
    ///
    /// Computed on demand, never cached.
    pub fn total_value(&self) -> f64 {
        self.cost * f64::from(self.quantity)
    }
}

impl fmt::Display for Shoe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Country: {} | Code: {} | Product: {} | Cost: {} | Quantity: {}",
            self.country,
            self.code,
            self.product,
            format_rands(self.cost),
            self.quantity
        )
    }
}

/// Format a non-negative amount as rands with thousands separators,
/// e.g. `R3,200.00`.
pub fn format_rands(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let whole = cents / 100;
    let fraction = (cents % 100).abs();

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("R{}.{:02}", grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_value() {
        let shoe = Shoe::new("US", "A1", "Boot", 40.0, 5);
        assert_eq!(shoe.total_value(), 200.0);
    }

    #[test]
    fn test_format_rands() {
        assert_eq!(format_rands(0.0), "R0.00");
        assert_eq!(format_rands(40.0), "R40.00");
        assert_eq!(format_rands(649.99), "R649.99");
        assert_eq!(format_rands(3200.0), "R3,200.00");
        assert_eq!(format_rands(1_234_567.5), "R1,234,567.50");
    }

    #[test]
    fn test_display() {
        let shoe = Shoe::new("South Africa", "SKU44386", "Air Max", 2450.0, 20);
        assert_eq!(
            shoe.to_string(),
            "Country: South Africa | Code: SKU44386 | Product: Air Max | Cost: R2,450.00 | Quantity: 20"
        );
    }
}
