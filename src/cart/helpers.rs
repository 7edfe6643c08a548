//! Shopping Cart Business Logic Helpers
//!
//! This module contains the summary computation and the JSON export used by
//! the `S` and `E` commands.

use super::state::Cart;
use crate::config::TotalsMode;
use rust_decimal::Decimal;
use std::fmt;

/// One numbered row of the cart summary.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLine {
    /// Position in the name-sorted listing, starting at 1
    pub index: usize,

    /// Units of the product
    pub quantity: i64,

    /// Unit price
    pub price: Decimal,

    /// `quantity * price` under the summary's [`TotalsMode`]
    pub line_total: Decimal,
}

/// Per-product totals in name order plus the grand total.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// One row per product in the cart
    pub lines: Vec<SummaryLine>,

    /// Sum of every line total
    pub total: Decimal,

    /// Mode the totals were computed with; also decides how they render
    pub mode: TotalsMode,
}

/// Computes `quantity * price` under the given mode. Results beyond the
/// decimal range saturate instead of overflowing.
pub fn line_total(quantity: i64, price: Decimal, mode: TotalsMode) -> Decimal {
    let quantity = Decimal::from(quantity);
    match mode {
        TotalsMode::Exact => quantity.saturating_mul(price),
        TotalsMode::Truncated => quantity.saturating_mul(price.trunc()),
    }
}

/// Builds the summary for every product in the cart, numbered from 1.
pub fn summarize(cart: &Cart, mode: TotalsMode) -> Summary {
    let lines: Vec<SummaryLine> = cart
        .contents()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let quantity = entry.product.quantity();
            let price = entry.product.price();
            SummaryLine {
                index: i + 1,
                quantity,
                price,
                line_total: line_total(quantity, price, mode),
            }
        })
        .collect();

    let total = lines
        .iter()
        .fold(Decimal::ZERO, |acc, l| acc.saturating_add(l.line_total));
    Summary { lines, total, mode }
}

/// Renders a decimal without trailing zeros but always with a fractional
/// part (`7.5`, `6.0`).
fn format_decimal(value: Decimal) -> String {
    let value = value.normalize();
    if value.scale() == 0 {
        format!("{}.0", value)
    } else {
        value.to_string()
    }
}

/// Renders a line or grand total: whole numbers in truncated mode.
fn format_amount(value: Decimal, mode: TotalsMode) -> String {
    match mode {
        TotalsMode::Exact => format_decimal(value),
        TotalsMode::Truncated => value.trunc().normalize().to_string(),
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(
                f,
                "   {} - {} * {} = {}",
                line.index,
                line.quantity,
                format_decimal(line.price),
                format_amount(line.line_total, self.mode)
            )?;
        }
        write!(f, "  Total = {}", format_amount(self.total, self.mode))
    }
}

/// One JSON object per product, in name order.
pub fn export_lines(cart: &Cart) -> Result<Vec<String>, serde_json::Error> {
    cart.contents()
        .iter()
        .map(|entry| entry.product.to_json())
        .collect()
}
