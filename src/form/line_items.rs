//! Editable line-item rows of the active form.
//!
//! The list is never empty: it starts with one blank row and refuses to
//! remove the last one. Every mutation completes before the caller can
//! re-render, so no intermediate row count is ever observable.

use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;

use super::coerce_number;
use crate::schema::LineItem;

/// Editable column of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    Name,
    Unit,
    Quantity,
    UnitPrice,
    Note,
}

impl RowField {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Quantity | Self::UnitPrice)
    }
}

impl FromStr for RowField {
    type Err = String;

    /// Accepts the column keys the form widgets use.
    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "name" => Ok(Self::Name),
            "unit" => Ok(Self::Unit),
            "qty" | "quantity" => Ok(Self::Quantity),
            "price" | "unitPrice" => Ok(Self::UnitPrice),
            "note" => Ok(Self::Note),
            other => Err(format!("unknown line-item column '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItems {
    rows: Vec<LineItem>,
    #[serde(skip)]
    default_unit: String,
}

impl LineItems {
    /// A list holding a single blank row.
    pub fn new(default_unit: impl Into<String>) -> Self {
        let default_unit = default_unit.into();
        Self {
            rows: vec![LineItem::blank(default_unit.clone())],
            default_unit,
        }
    }

    pub fn rows(&self) -> &[LineItem] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn add_row(&mut self) {
        self.rows.push(LineItem::blank(self.default_unit.clone()));
        log::debug!("line item added, {} rows", self.rows.len());
    }

    /// Remove a row; a no-op when it is the only row or the index is out of
    /// range. Returns whether a row was removed.
    pub fn remove_row(&mut self, index: usize) -> bool {
        if self.rows.len() <= 1 || index >= self.rows.len() {
            return false;
        }
        self.rows.remove(index);
        log::debug!("line item {} removed, {} rows", index, self.rows.len());
        true
    }

    /// Update one cell from raw input. Quantity and price coerce like numeric
    /// form fields and never go below zero. Returns false for an unknown row.
    pub fn update_row(&mut self, index: usize, field: RowField, raw: &str) -> bool {
        let Some(row) = self.rows.get_mut(index) else {
            return false;
        };
        match field {
            RowField::Name => row.name = raw.to_string(),
            RowField::Unit => row.unit = raw.to_string(),
            RowField::Note => row.note = raw.to_string(),
            RowField::Quantity => row.quantity = coerce_amount(raw),
            RowField::UnitPrice => row.unit_price = coerce_amount(raw),
        }
        true
    }
}

fn coerce_amount(raw: &str) -> Decimal {
    coerce_number(raw).max(Decimal::ZERO)
}
