//! The working state of one open template and the controller that owns it.

mod app;

pub use app::{App, AppError, PreviewError, Screen};

use uuid::Uuid;

use crate::composer::compose;
use crate::content::Document;
use crate::form::{
    build_input_spec, initial_inputs, read_values, validate, InputSpec, LineItems, RowField,
    ValidationError,
};
use crate::schema::{ClauseSelection, DataRecord, LineItem, RawInputs};
use crate::templates::Template;

/// Inputs, clause selection and line items of the active template.
#[derive(Debug, Clone)]
pub struct Session<'t> {
    id: Uuid,
    template: &'t Template,
    inputs: RawInputs,
    selected: ClauseSelection,
    line_items: Option<LineItems>,
}

impl<'t> Session<'t> {
    /// Fresh session: defaults, preselected clauses, one default row.
    pub fn open(template: &'t Template) -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            template,
            inputs: initial_inputs(template),
            selected: preselected(template),
            line_items: template
                .line_items
                .as_ref()
                .map(|policy| LineItems::new(policy.default_unit)),
        };
        log::info!("session {} opened for '{}'", session.id, template.id);
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn template(&self) -> &'t Template {
        self.template
    }

    pub fn inputs(&self) -> &RawInputs {
        &self.inputs
    }

    pub fn input(&self, field_id: &str) -> Option<&str> {
        self.inputs.get(field_id).map(String::as_str)
    }

    pub fn selected(&self) -> &ClauseSelection {
        &self.selected
    }

    pub fn line_items(&self) -> Option<&LineItems> {
        self.line_items.as_ref()
    }

    /// Current rows; empty for templates without line items.
    pub fn items(&self) -> &[LineItem] {
        self.line_items.as_ref().map(LineItems::rows).unwrap_or(&[])
    }

    pub fn input_spec(&self) -> InputSpec {
        build_input_spec(self.template)
    }

    /// Set a declared field's raw value. Unknown ids are ignored.
    pub fn set_input(&mut self, field_id: &str, raw: impl Into<String>) -> bool {
        match self.inputs.get_mut(field_id) {
            Some(value) => {
                *value = raw.into();
                true
            }
            None => {
                log::debug!("ignoring input for undeclared field '{}'", field_id);
                false
            }
        }
    }

    /// Flip a declared clause in or out of the selection.
    pub fn toggle_clause(&mut self, clause_id: &str) -> bool {
        if self.template.clause(clause_id).is_none() {
            log::debug!("ignoring toggle of unknown clause '{}'", clause_id);
            return false;
        }
        if !self.selected.remove(clause_id) {
            self.selected.insert(clause_id.to_string());
        }
        log::debug!("clause '{}' toggled, {} selected", clause_id, self.selected.len());
        true
    }

    pub fn add_row(&mut self) -> bool {
        match self.line_items.as_mut() {
            Some(items) => {
                items.add_row();
                true
            }
            None => false,
        }
    }

    pub fn remove_row(&mut self, index: usize) -> bool {
        self.line_items
            .as_mut()
            .map(|items| items.remove_row(index))
            .unwrap_or(false)
    }

    pub fn update_row(&mut self, index: usize, field: RowField, raw: &str) -> bool {
        self.line_items
            .as_mut()
            .map(|items| items.update_row(index, field, raw))
            .unwrap_or(false)
    }

    /// Back to the state `open` produced, keeping the template and id.
    pub fn reset(&mut self) {
        self.inputs = initial_inputs(self.template);
        self.selected = preselected(self.template);
        self.line_items = self
            .template
            .line_items
            .as_ref()
            .map(|policy| LineItems::new(policy.default_unit));
        log::info!("session {} reset", self.id);
    }

    /// Entered values with numeric fields coerced.
    pub fn record(&self) -> DataRecord {
        read_values(&self.input_spec(), &self.inputs)
    }

    /// Required-field check over the raw strings as entered.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(self.template, &DataRecord::from_raw(&self.inputs))
    }

    pub fn compose(&self) -> Document {
        compose(self.template, &self.record(), &self.selected, self.items())
    }
}

fn preselected(template: &Template) -> ClauseSelection {
    template
        .clauses
        .iter()
        .filter(|clause| clause.preselected)
        .map(|clause| clause.id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::registry;
    use rust_decimal::Decimal;

    fn open(id: &str) -> Session<'static> {
        Session::open(registry().unwrap().find(id).unwrap())
    }

    #[test]
    fn test_open_uses_defaults_and_preselection() {
        let session = open("rental");
        let selected: Vec<&str> = session.selected().iter().map(String::as_str).collect();
        assert_eq!(
            selected,
            vec!["dispute", "force_majeure", "repair", "sublease", "utilities"]
        );
        assert!(session.line_items().is_none());
        assert!(session.items().is_empty());
    }

    #[test]
    fn test_open_line_item_template_has_one_row() {
        let session = open("invoice");
        assert_eq!(session.items().len(), 1);
        assert_eq!(session.items()[0].quantity, Decimal::ONE);
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        let mut session = open("service");
        let before = session.selected().clone();
        assert!(session.toggle_clause("confidential"));
        assert_ne!(session.selected(), &before);
        assert!(session.toggle_clause("confidential"));
        assert_eq!(session.selected(), &before);
    }

    #[test]
    fn test_unknown_clause_and_field_ignored() {
        let mut session = open("service");
        let before = session.selected().clone();
        assert!(!session.toggle_clause("ghost"));
        assert_eq!(session.selected(), &before);
        assert!(!session.set_input("ghost", "x"));
        assert!(session.input("ghost").is_none());
    }

    #[test]
    fn test_rows_unavailable_without_line_items() {
        let mut session = open("labor");
        assert!(!session.add_row());
        assert!(!session.remove_row(0));
        assert!(!session.update_row(0, RowField::Name, "x"));
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut session = open("quotation");
        let id = session.id();
        session.set_input("company_name", "ABC");
        session.add_row();
        session.toggle_clause("warranty");

        session.reset();

        assert_eq!(session.id(), id);
        assert_eq!(session.input("company_name"), Some(""));
        assert_eq!(session.items().len(), 1);
        assert_eq!(session.inputs(), &initial_inputs(session.template()));
    }

    #[test]
    fn test_validate_reports_first_required_field() {
        let mut session = open("receipt");
        let err = session.validate().unwrap_err();
        assert_eq!(err.field, "receiver_name");

        session.set_input("receiver_name", "Nguyễn Văn A");
        let err = session.validate().unwrap_err();
        assert_ne!(err.field, "receiver_name");
    }

    #[test]
    fn test_record_coerces_numbers() {
        let mut session = open("receipt");
        session.set_input("amount", "1500000đ");
        assert_eq!(session.record().number("amount"), Decimal::from(1_500_000));
    }
}
