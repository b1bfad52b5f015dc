//! Schema model - the static shapes a template author declares.
//!
//! Fields, clauses and line items are plain data. Templates in the catalog
//! are built from these once at start-up and never mutated afterwards.

mod record;

pub use record::{DataRecord, RawInputs, Value};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Section name used for fields that do not declare one.
pub const DEFAULT_SECTION: &str = "Thông tin";

/// Input kind of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Multiline,
    Choice,
}

impl FieldKind {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number)
    }
}

/// A single form field declared by a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// Ordered options of a `Choice` field.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default)]
    pub full_width: bool,
}

impl Field {
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            required: false,
            placeholder: None,
            default: None,
            options: Vec::new(),
            section: None,
            full_width: false,
        }
    }

    pub fn text(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, label, FieldKind::Text)
    }

    pub fn number(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, label, FieldKind::Number)
    }

    pub fn date(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, label, FieldKind::Date)
    }

    pub fn multiline(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, label, FieldKind::Multiline)
    }

    pub fn choice(id: impl Into<String>, label: impl Into<String>, options: &[&str]) -> Self {
        let mut field = Self::new(id, label, FieldKind::Choice);
        field.options = options.iter().map(|o| o.to_string()).collect();
        field
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    pub fn full(mut self) -> Self {
        self.full_width = true;
        self
    }

    /// Section this field is grouped under.
    pub fn section_name(&self) -> &str {
        self.section.as_deref().unwrap_or(DEFAULT_SECTION)
    }

    /// Raw value a freshly opened form shows for this field.
    ///
    /// A choice field without a default starts on its first option.
    pub fn initial_raw(&self) -> String {
        if let Some(default) = &self.default {
            return default.clone();
        }
        if self.kind == FieldKind::Choice {
            if let Some(first) = self.options.first() {
                return first.clone();
            }
        }
        String::new()
    }
}

/// An optional legal paragraph a user may include.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clause {
    pub id: String,
    pub name: String,
    pub preview: String,
    pub body: String,
    #[serde(default)]
    pub preselected: bool,
}

impl Clause {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        preview: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            preview: preview.into(),
            body: body.into(),
            preselected: false,
        }
    }

    pub fn preselected(mut self) -> Self {
        self.preselected = true;
        self
    }
}

/// Selected clause ids of the active session.
pub type ClauseSelection = BTreeSet<String>;

/// One row of a quantity/price table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub name: String,
    pub unit: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    #[serde(default)]
    pub note: String,
}

impl LineItem {
    /// The row appended by "add row": one unit of an unnamed item at price zero.
    pub fn blank(unit: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            unit: unit.into(),
            quantity: Decimal::ONE,
            unit_price: Decimal::ZERO,
            note: String::new(),
        }
    }

    /// quantity × unit price, saturating at the bounds of `Decimal`.
    pub fn line_total(&self) -> Decimal {
        self.quantity.saturating_mul(self.unit_price)
    }
}

/// A static catalog entry that breaks its own schema.
///
/// These are programming errors in the built-in catalog and are reported
/// when the registry loads, never while a user is filling a form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaViolation {
    #[error("template '{template}' renders field '{field}' which it does not declare")]
    UndeclaredField { template: String, field: String },
    #[error("template '{template}' declares field '{field}' more than once")]
    DuplicateField { template: String, field: String },
    #[error("template '{template}' declares clause '{clause}' more than once")]
    DuplicateClause { template: String, clause: String },
    #[error("template id '{template}' is used more than once")]
    DuplicateTemplate { template: String },
}
