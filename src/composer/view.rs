//! Read access to a data record through a template's own schema.

use rust_decimal::Decimal;
use std::cell::RefCell;

use super::format::{format_money, format_quantity};
use crate::schema::{DataRecord, Field, FieldKind};
use crate::templates::Template;

/// Field lookups for render functions.
///
/// Absent values read as empty text or zero. Blank date fields read as
/// today's date. A lookup of an id the template does not declare still
/// returns the fallback, but is remembered so catalog loading can reject it.
pub struct FieldView<'a> {
    template: &'a Template,
    record: &'a DataRecord,
    today: &'a str,
    undeclared: RefCell<Vec<String>>,
}

impl<'a> FieldView<'a> {
    pub fn new(template: &'a Template, record: &'a DataRecord, today: &'a str) -> Self {
        Self {
            template,
            record,
            today,
            undeclared: RefCell::new(Vec::new()),
        }
    }

    fn field(&self, id: &str) -> Option<&'a Field> {
        let field = self.template.field(id);
        if field.is_none() {
            let mut undeclared = self.undeclared.borrow_mut();
            if !undeclared.iter().any(|seen| seen == id) {
                undeclared.push(id.to_string());
            }
        }
        field
    }

    /// Display text of a field.
    pub fn text(&self, id: &str) -> String {
        let field = self.field(id);
        let text = self.record.text(id);
        match field {
            Some(field) if field.kind == FieldKind::Date && text.trim().is_empty() => {
                self.today.to_string()
            }
            _ => text,
        }
    }

    /// Display text, or `fallback` when blank.
    pub fn text_or(&self, id: &str, fallback: &str) -> String {
        let text = self.text(id);
        if text.trim().is_empty() {
            fallback.to_string()
        } else {
            text
        }
    }

    /// Entered text, or `None` when blank. Blank dates stay `None`.
    pub fn optional(&self, id: &str) -> Option<String> {
        let _ = self.field(id);
        let text = self.record.text(id);
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    pub fn number(&self, id: &str) -> Decimal {
        let _ = self.field(id);
        self.record.number(id)
    }

    /// A count or measure, with `fallback` standing in for zero.
    pub fn count_or(&self, id: &str, fallback: i64) -> String {
        let number = self.number(id);
        if number.is_zero() {
            fallback.to_string()
        } else {
            format_quantity(number)
        }
    }

    /// A measure, blank when zero or unset.
    pub fn measure(&self, id: &str) -> String {
        let number = self.number(id);
        if number.is_zero() {
            String::new()
        } else {
            format_quantity(number)
        }
    }

    /// A currency amount, "10.000.000".
    pub fn money(&self, id: &str) -> String {
        format_money(self.number(id))
    }

    pub fn today(&self) -> &str {
        self.today
    }

    /// Ids looked up that the template does not declare, in first-seen order.
    pub fn undeclared(&self) -> Vec<String> {
        self.undeclared.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::registry;

    #[test]
    fn test_blank_date_reads_today() {
        let receipt = registry().unwrap().find("receipt").unwrap();
        let record = DataRecord::new().with("receipt_date", "");
        let view = FieldView::new(receipt, &record, "19/10/2026");
        assert_eq!(view.text("receipt_date"), "19/10/2026");

        let record = DataRecord::new().with("receipt_date", "2026-03-01");
        let view = FieldView::new(receipt, &record, "19/10/2026");
        assert_eq!(view.text("receipt_date"), "2026-03-01");
    }

    #[test]
    fn test_optional_date_has_no_default() {
        let labor = registry().unwrap().find("labor").unwrap();
        let record = DataRecord::new().with("b_dob", " ");
        let view = FieldView::new(labor, &record, "19/10/2026");
        assert_eq!(view.optional("b_dob"), None);
        assert_eq!(view.text("b_dob"), "19/10/2026");

        let record = DataRecord::new().with("b_dob", "2/9/1990");
        let view = FieldView::new(labor, &record, "19/10/2026");
        assert_eq!(view.optional("b_dob").as_deref(), Some("2/9/1990"));
    }

    #[test]
    fn test_blank_text_is_not_a_date() {
        let receipt = registry().unwrap().find("receipt").unwrap();
        let record = DataRecord::new();
        let view = FieldView::new(receipt, &record, "19/10/2026");
        assert_eq!(view.text("reason"), "");
        assert_eq!(view.optional("reason"), None);
        assert_eq!(view.text_or("reason", "..."), "...");
    }

    #[test]
    fn test_money_and_count() {
        let labor = registry().unwrap().find("labor").unwrap();
        let record = DataRecord::new().with("salary", 15_000_000i64);
        let view = FieldView::new(labor, &record, "1/1/2026");
        assert_eq!(view.money("salary"), "15.000.000");
        assert_eq!(view.money("allowance"), "0");
        assert_eq!(view.count_or("probation", 60), "60");
    }

    #[test]
    fn test_undeclared_lookup_is_remembered() {
        let receipt = registry().unwrap().find("receipt").unwrap();
        let record = DataRecord::new().with("ghost", "boo");
        let view = FieldView::new(receipt, &record, "1/1/2026");
        assert_eq!(view.text("ghost"), "boo");
        view.text("ghost");
        view.number("phantom");
        assert_eq!(view.undeclared(), vec!["ghost".to_string(), "phantom".to_string()]);
    }
}
