//! Document composer - merges entered data, selected clauses and line items
//! into a finished content tree.
//!
//! Composition never fails: missing values read as empty text or zero, and
//! validation in the form builder is the only gate in front of export. The
//! composer never mutates its inputs.

pub mod format;
pub mod totals;
pub mod view;

pub use format::{format_date, format_money, format_quantity, round_currency, today};
pub use totals::Totals;
pub use view::FieldView;

use chrono::NaiveDate;

use crate::content::{Block, Citation, Document, LegalFooter};
use crate::schema::{Clause, ClauseSelection, DataRecord, LineItem};
use crate::templates::{legal, render, Template};

const LEGAL_HEADING: &str = "📌 Căn cứ pháp lý:";
const LEGAL_DISCLAIMER: &str = "⚠️ Văn bản này chỉ mang tính chất tham khảo. Vui lòng tra cứu tại vbpl.vn (Cổng TTĐT Bộ Tư pháp) hoặc vanban.chinhphu.vn để đảm bảo tính chính xác và cập nhật.";

/// A selected clause with the article number it renders under.
#[derive(Debug, Clone, Copy)]
pub struct NumberedClause<'a> {
    /// `None` under inline numbering.
    pub number: Option<u32>,
    pub clause: &'a Clause,
}

/// Everything a template's render function may read.
pub struct RenderContext<'a> {
    pub template: &'a Template,
    pub fields: FieldView<'a>,
    /// Selected clauses in the template's declared order.
    pub clauses: Vec<NumberedClause<'a>>,
    pub items: &'a [LineItem],
    /// Present for templates with priced line items.
    pub totals: Option<Totals>,
}

impl RenderContext<'_> {
    /// Number of the trailing general-provisions article, for templates
    /// whose numbering continues after their fixed articles.
    pub fn closing_article(&self) -> Option<u32> {
        self.template
            .numbering
            .closing_article_number(self.clauses.len())
    }
}

/// Filter the template's clauses to the selection, keeping declared order,
/// and number them per the template's policy.
pub fn resolve_clauses<'a>(
    template: &'a Template,
    selected: &ClauseSelection,
) -> Vec<NumberedClause<'a>> {
    let first = template.numbering.first_clause_number();
    template
        .clauses
        .iter()
        .filter(|clause| selected.contains(&clause.id))
        .enumerate()
        .map(|(i, clause)| NumberedClause {
            number: first.map(|first| first + i as u32),
            clause,
        })
        .collect()
}

/// Resolve legal-source keys into a citation footer. Unknown keys are
/// dropped; no footer is produced when nothing resolves.
pub fn legal_footer(keys: &[&str]) -> Option<LegalFooter> {
    let citations: Vec<Citation> = keys
        .iter()
        .filter_map(|key| {
            let source = legal::lookup(key);
            if source.is_none() {
                log::debug!("dropping unknown legal source '{}'", key);
            }
            source.map(|source| source.citation())
        })
        .collect();

    if citations.is_empty() {
        return None;
    }

    Some(LegalFooter {
        heading: LEGAL_HEADING.to_string(),
        citations,
        disclaimer: LEGAL_DISCLAIMER.to_string(),
    })
}

/// Compose a document dated today.
pub fn compose(
    template: &Template,
    record: &DataRecord,
    selected: &ClauseSelection,
    items: &[LineItem],
) -> Document {
    compose_on(template, record, selected, items, today())
}

/// Compose a document as of `date`.
pub fn compose_on(
    template: &Template,
    record: &DataRecord,
    selected: &ClauseSelection,
    items: &[LineItem],
    date: NaiveDate,
) -> Document {
    let (document, undeclared) = compose_checked(template, record, selected, items, date);
    for field in undeclared {
        log::warn!(
            "template '{}' rendered undeclared field '{}' as empty",
            template.id,
            field
        );
    }
    document
}

/// Compose and report every field id the render function read that the
/// template does not declare.
pub(crate) fn compose_checked(
    template: &Template,
    record: &DataRecord,
    selected: &ClauseSelection,
    items: &[LineItem],
    date: NaiveDate,
) -> (Document, Vec<String>) {
    let today = format_date(date);
    let items: &[LineItem] = if template.supports_line_items() {
        items
    } else {
        &[]
    };
    let totals = template
        .line_items
        .as_ref()
        .filter(|policy| policy.is_priced())
        .map(|policy| Totals::compute(items, policy.tax_rate()));

    let ctx = RenderContext {
        template,
        fields: FieldView::new(template, record, &today),
        clauses: resolve_clauses(template, selected),
        items,
        totals,
    };

    let mut document = render::render(&ctx);
    if let Some(footer) = legal_footer(template.legal_sources) {
        document.blocks.push(Block::LegalFooter(footer));
    }

    (document, ctx.fields.undeclared())
}
