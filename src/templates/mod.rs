//! Template registry - the fixed catalog of document templates.
//!
//! Each template bundles its field schema, clause set, line-item and
//! numbering policies, legal sources and a render function selected by
//! its `TemplateKind`:
//! - `quotation` - Báo giá
//! - `invoice` - Hóa đơn bán hàng
//! - `rental` - Hợp đồng thuê nhà
//! - `service` - Hợp đồng dịch vụ
//! - `sales` - Hợp đồng mua bán hàng hóa
//! - `labor` - Hợp đồng lao động
//! - `poa` - Giấy ủy quyền
//! - `liquidation` - Biên bản thanh lý hợp đồng
//! - `handover` - Biên bản bàn giao
//! - `receipt` - Giấy biên nhận

pub mod catalog;
pub mod legal;
pub mod registry;
pub mod render;

pub use registry::{registry, TemplateRegistry, TemplateSummary};

use rust_decimal::Decimal;
use serde::Serialize;

use crate::form::LineItemColumns;
use crate::schema::{Clause, Field};

/// Document type; selects the render function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Quotation,
    Invoice,
    Rental,
    Service,
    Sales,
    Labor,
    #[serde(rename = "poa")]
    PowerOfAttorney,
    Liquidation,
    Handover,
    Receipt,
}

/// A tax applied to a line-item subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxRate {
    percent: u32,
}

impl TaxRate {
    /// Value-added tax, 10%.
    pub const VAT: TaxRate = TaxRate { percent: 10 };

    pub fn percent(&self) -> u32 {
        self.percent
    }

    /// The rate as a fraction, 0.10 for 10%.
    pub fn fraction(&self) -> Decimal {
        Decimal::new(self.percent as i64, 2)
    }
}

/// How rows of a line-item table are priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pricing {
    /// Priced rows with a tax line under the subtotal.
    Taxed(TaxRate),
    /// Priced rows with a single total.
    Untaxed,
    /// Row data only, no arithmetic.
    Unpriced,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItemPolicy {
    /// Unit of a freshly added row.
    pub default_unit: &'static str,
    pub pricing: Pricing,
}

impl LineItemPolicy {
    pub fn is_priced(&self) -> bool {
        !matches!(self.pricing, Pricing::Unpriced)
    }

    pub fn tax_rate(&self) -> Option<TaxRate> {
        match self.pricing {
            Pricing::Taxed(rate) => Some(rate),
            Pricing::Untaxed | Pricing::Unpriced => None,
        }
    }

    pub fn columns(&self) -> LineItemColumns {
        if self.is_priced() {
            LineItemColumns::Priced
        } else {
            LineItemColumns::Handover
        }
    }
}

/// How selected clauses are numbered when appended to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseNumbering {
    /// Bold-name paragraphs, no article numbers.
    Inline,
    /// "Điều N" starting at a fixed number.
    FixedOffset(u32),
    /// Continue right after the template's own `fixed` articles; a closing
    /// general-provisions article follows the clauses.
    AfterFixedArticles { fixed: u32 },
}

impl ClauseNumbering {
    /// Article number of the first selected clause.
    pub fn first_clause_number(&self) -> Option<u32> {
        match *self {
            Self::Inline => None,
            Self::FixedOffset(first) => Some(first),
            Self::AfterFixedArticles { fixed } => Some(fixed + 1),
        }
    }

    /// Article number of the closing general-provisions article:
    /// `fixed + 1 + selected`.
    pub fn closing_article_number(&self, selected: usize) -> Option<u32> {
        match *self {
            Self::AfterFixedArticles { fixed } => Some(fixed + 1 + selected as u32),
            Self::Inline | Self::FixedOffset(_) => None,
        }
    }
}

/// A named document type.
#[derive(Debug, Clone)]
pub struct Template {
    pub kind: TemplateKind,
    /// Stable routing key.
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub badge: Option<&'static str>,
    pub fields: Vec<Field>,
    pub clauses: Vec<Clause>,
    pub line_items: Option<LineItemPolicy>,
    pub numbering: ClauseNumbering,
    /// Keys into the legal-source registry, in citation order.
    pub legal_sources: &'static [&'static str],
}

impl Template {
    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.id == id)
    }

    pub fn clause(&self, id: &str) -> Option<&Clause> {
        self.clauses.iter().find(|clause| clause.id == id)
    }

    pub fn supports_line_items(&self) -> bool {
        self.line_items.is_some()
    }

    pub fn summary(&self) -> TemplateSummary {
        TemplateSummary {
            id: self.id.to_string(),
            icon: self.icon.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            badge: self.badge.map(str::to_string),
        }
    }
}
