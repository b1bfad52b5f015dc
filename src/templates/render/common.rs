//! Pieces shared by several render functions.

use crate::composer::{format_money, format_quantity, FieldView, NumberedClause, Totals};
use crate::content::{Align, Article, Block, Column, Paragraph, Party, Signature, Table};
use crate::schema::LineItem;

const SIGNATURE_NOTE: &str = "(Ký, ghi rõ họ tên)";

/// Condition shown for a handed-over asset with no note.
pub(super) const DEFAULT_CONDITION: &str = "Tốt";

pub(super) const BASIS_CIVIL_CODE: &str = "Căn cứ Bộ luật Dân sự số 91/2015/QH13 ngày 24/11/2015;";
pub(super) const BASIS_COMMERCIAL_LAW: &str =
    "Căn cứ Luật Thương mại số 36/2005/QH11 ngày 14/06/2005;";
pub(super) const BASIS_MUTUAL_NEEDS: &str = "Căn cứ nhu cầu và khả năng thực tế của hai bên;";

/// "Ngày D/M/YYYY" under the heading.
pub(super) fn dated(fields: &FieldView) -> String {
    format!("Ngày {}", fields.today())
}

/// Amount with its currency suffix, "10.000.000 VNĐ".
pub(super) fn vnd(amount: String) -> String {
    format!("{} VNĐ", amount)
}

/// Standard identification block of a party declared with `party_fields`.
pub(super) fn party(fields: &FieldView, prefix: &str, label: &str) -> Party {
    let name = fields.text(&format!("{}_name", prefix));
    let id = fields.text(&format!("{}_id", prefix));
    let address = fields.text(&format!("{}_address", prefix));
    let phone = fields.text(&format!("{}_phone", prefix));
    let email = fields.optional(&format!("{}_email", prefix));

    let mut contact = format!("Điện thoại: {}", phone);
    if let Some(email) = email {
        contact.push_str(&format!(" | Email: {}", email));
    }

    Party {
        label: label.to_string(),
        lines: vec![
            Paragraph::plain("Họ và tên/Tên công ty: ").bold(name),
            Paragraph::plain(format!("CMND/CCCD/MST: {}", id)),
            Paragraph::plain(format!("Địa chỉ: {}", address)),
            Paragraph::plain(contact),
        ],
    }
}

pub(super) fn signature(title: &str, name: impl Into<String>) -> Signature {
    Signature {
        title: title.to_string(),
        note: SIGNATURE_NOTE.to_string(),
        name: name.into(),
    }
}

/// Bên A / Bên B signature columns named after the parties.
pub(super) fn party_signatures(fields: &FieldView) -> Vec<Signature> {
    vec![
        signature("Bên A", fields.text("a_name")),
        signature("Bên B", fields.text("b_name")),
    ]
}

/// Selected clauses as blocks: numbered articles, or bold-name paragraphs
/// under inline numbering.
pub(super) fn clause_blocks(clauses: &[NumberedClause]) -> Vec<Block> {
    clauses
        .iter()
        .map(|numbered| match numbered.number {
            Some(number) => Block::Article(
                Article::numbered(number, numbered.clause.name.clone())
                    .line(Paragraph::plain(numbered.clause.body.clone())),
            ),
            None => Block::Paragraph(
                Paragraph::strong(format!("{}:", numbered.clause.name))
                    .text(format!(" {}", numbered.clause.body)),
            ),
        })
        .collect()
}

/// Priced item rows with per-row totals; the caller appends footer rows.
pub(super) fn priced_table(
    items: &[LineItem],
    totals: &Totals,
    name_label: &str,
    price_label: &str,
    total_label: &str,
) -> Table {
    let columns = vec![
        Column::new("STT", Align::Center),
        Column::new(name_label, Align::Left),
        Column::new("ĐVT", Align::Center),
        Column::new("SL", Align::Right),
        Column::new(price_label, Align::Right),
        Column::new(total_label, Align::Right),
    ];

    items
        .iter()
        .zip(&totals.line_totals)
        .enumerate()
        .fold(Table::new(columns), |table, (i, (item, line_total))| {
            table.row(vec![
                (i + 1).to_string(),
                item.name.clone(),
                item.unit.clone(),
                format_quantity(item.quantity),
                format_money(item.unit_price),
                format_money(*line_total),
            ])
        })
}

/// Asset rows with a condition column and no arithmetic.
pub(super) fn handover_table(items: &[LineItem]) -> Table {
    let columns = vec![
        Column::new("STT", Align::Center),
        Column::new("Tên tài sản", Align::Left),
        Column::new("ĐVT", Align::Center),
        Column::new("SL", Align::Right),
        Column::new("Tình trạng", Align::Left),
    ];

    items
        .iter()
        .enumerate()
        .fold(Table::new(columns), |table, (i, item)| {
            let condition = if item.note.trim().is_empty() {
                DEFAULT_CONDITION.to_string()
            } else {
                item.note.clone()
            };
            table.row(vec![
                (i + 1).to_string(),
                item.name.clone(),
                item.unit.clone(),
                format_quantity(item.quantity),
                condition,
            ])
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Clause;
    use rust_decimal::Decimal;

    #[test]
    fn test_inline_clause_paragraph() {
        let clause = Clause::new("warranty", "Bảo hành", "", "Nội dung.");
        let blocks = clause_blocks(&[NumberedClause {
            number: None,
            clause: &clause,
        }]);
        match &blocks[0] {
            Block::Paragraph(p) => assert_eq!(p.to_text(), "Bảo hành: Nội dung."),
            other => panic!("unexpected block {:?}", other),
        }
    }

    #[test]
    fn test_numbered_clause_article() {
        let clause = Clause::new("revoke", "Thu hồi ủy quyền", "", "Nội dung.");
        let blocks = clause_blocks(&[NumberedClause {
            number: Some(10),
            clause: &clause,
        }]);
        match &blocks[0] {
            Block::Article(article) => {
                assert_eq!(article.heading().as_deref(), Some("Điều 10. Thu hồi ủy quyền"))
            }
            other => panic!("unexpected block {:?}", other),
        }
    }

    #[test]
    fn test_handover_blank_note() {
        let mut item = LineItem::blank("cái");
        item.name = "Máy tính".to_string();
        item.quantity = Decimal::from(2);
        let table = handover_table(&[item]);
        assert_eq!(table.rows[0], vec!["1", "Máy tính", "cái", "2", "Tốt"]);
        assert!(table.totals.is_empty());
    }
}
