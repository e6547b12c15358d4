// 💰 Pricing - total of price × quantity with optional percent discount
// Plain f64 arithmetic; no rounding to currency precision.

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub quantity: u32,

    /// Percent off this line (0-100 expected, not enforced). None = full price.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Product {
            name: name.into(),
            price,
            quantity,
            discount: None,
        }
    }

    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = Some(discount);
        self
    }

    /// Line total after the discount, if any
    pub fn subtotal(&self) -> f64 {
        let gross = self.price * f64::from(self.quantity);
        match self.discount {
            Some(discount) => gross - (gross * discount) / 100.0,
            None => gross,
        }
    }
}

pub fn calculate_total_price(products: &[Product]) -> f64 {
    if products.is_empty() {
        return 0.0;
    }

    let total = products.iter().fold(0.0, |total, p| total + p.subtotal());
    debug!(lines = products.len(), total, "calculated total price");
    total
}
