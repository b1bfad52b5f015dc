//! Line-item aggregation.

use rust_decimal::Decimal;
use serde::Serialize;

use super::format::round_currency;
use crate::schema::LineItem;
use crate::templates::TaxRate;

/// Derived amounts of a priced line-item table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// quantity × unit price, per row
    pub line_totals: Vec<Decimal>,
    pub subtotal: Decimal,
    /// Present only when the template taxes.
    pub tax: Option<Decimal>,
    pub grand_total: Decimal,
}

impl Totals {
    /// Sum the rows and apply the tax rate, if any.
    ///
    /// Tax is rounded to the currency unit; the grand total is exactly
    /// subtotal plus tax. Amounts too large for `Decimal` saturate instead
    /// of overflowing.
    pub fn compute(items: &[LineItem], tax_rate: Option<TaxRate>) -> Self {
        let line_totals: Vec<Decimal> = items.iter().map(LineItem::line_total).collect();
        let subtotal = line_totals
            .iter()
            .fold(Decimal::ZERO, |sum, total| sum.saturating_add(*total));
        let tax = tax_rate.map(|rate| round_currency(subtotal.saturating_mul(rate.fraction())));
        let grand_total = subtotal.saturating_add(tax.unwrap_or(Decimal::ZERO));
        if grand_total == Decimal::MAX || grand_total == Decimal::MIN {
            log::warn!("line-item totals saturated at {}", grand_total);
        }

        Self {
            line_totals,
            subtotal,
            tax,
            grand_total,
        }
    }
}
