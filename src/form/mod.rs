//! Form builder - turns a template's field schema into a grouped input
//! description and reads entered values back into a data record.
//!
//! - `build_input_spec` groups fields by section, first-seen order.
//! - `read_values` coerces numeric inputs; everything else passes through.
//! - `validate` is the fail-fast gate in front of preview and export.
//! - `LineItems` owns the editable quantity/price rows.

pub mod line_items;
pub mod validation;

pub use line_items::{LineItems, RowField};
pub use validation::{validate, validate_required, ValidationError};

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{json, Map, Value as JsonValue};
use std::str::FromStr;

use crate::schema::{DataRecord, Field, FieldKind, RawInputs, Value};
use crate::templates::Template;

lazy_static! {
    /// Leading decimal literal of a raw input, the way a browser number box
    /// reads "12abc" as 12.
    static ref LEADING_NUMBER: Regex =
        Regex::new(r"^\s*([+-]?(?:\d+(?:\.\d*)?|\.\d+))").expect("valid number pattern");
}

/// Largest magnitude a numeric input holds, 10^15.
const MAX_INPUT_UNITS: i64 = 1_000_000_000_000_000;

pub fn max_input() -> Decimal {
    Decimal::from(MAX_INPUT_UNITS)
}

/// Coerce raw input to a number; anything unparseable reads as zero.
/// Magnitudes beyond [`max_input`] saturate to it, keeping the sign.
pub fn coerce_number(raw: &str) -> Decimal {
    let Some(literal) = LEADING_NUMBER
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().trim_end_matches('.'))
    else {
        return Decimal::ZERO;
    };

    let limit = max_input();
    match Decimal::from_str(literal) {
        Ok(value) if value.abs() <= limit => value,
        // parse errors here are integer parts too wide for `Decimal`
        _ => {
            log::warn!("numeric input '{}' is out of range, using ±{}", literal, limit);
            if literal.starts_with('-') {
                -limit
            } else {
                limit
            }
        }
    }
}

/// One titled group of fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSection {
    pub name: String,
    pub fields: Vec<Field>,
}

/// A clause checkbox as the form presents it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClauseOption {
    pub id: String,
    pub name: String,
    pub preview: String,
    pub preselected: bool,
}

/// Columns of the line-item editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineItemColumns {
    /// Description, unit, quantity, unit price, line total.
    Priced,
    /// Asset name, unit, quantity, condition note.
    Handover,
}

/// Structured description of a template's input form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSpec {
    pub template_id: String,
    pub sections: Vec<InputSection>,
    pub clauses: Vec<ClauseOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<LineItemColumns>,
}

impl InputSpec {
    /// All fields in declared order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.sections.iter().flat_map(|section| section.fields.iter())
    }

    /// JSON-schema-like description of the form, for hosts that build their
    /// own input widgets.
    pub fn to_json_schema(&self) -> JsonValue {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for field in self.fields() {
            let mut property = Map::new();
            let kind = if field.kind.is_numeric() { "number" } else { "string" };
            property.insert("type".into(), json!(kind));
            property.insert("description".into(), json!(field.label));
            property.insert("section".into(), json!(field.section_name()));
            if field.kind == FieldKind::Date {
                property.insert("format".into(), json!("date"));
            }
            if !field.options.is_empty() {
                property.insert("enum".into(), json!(field.options));
            }
            if let Some(default) = &field.default {
                property.insert("default".into(), json!(default));
            }
            properties.insert(field.id.clone(), JsonValue::Object(property));
            if field.required {
                required.push(field.id.clone());
            }
        }

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

/// Group the template's fields by section, preserving first-seen section
/// order and declared field order within each section.
pub fn build_input_spec(template: &Template) -> InputSpec {
    let mut sections: Vec<InputSection> = Vec::new();

    for field in &template.fields {
        let name = field.section_name();
        match sections.iter_mut().find(|section| section.name == name) {
            Some(section) => section.fields.push(field.clone()),
            None => sections.push(InputSection {
                name: name.to_string(),
                fields: vec![field.clone()],
            }),
        }
    }

    let clauses = template
        .clauses
        .iter()
        .map(|clause| ClauseOption {
            id: clause.id.clone(),
            name: clause.name.clone(),
            preview: clause.preview.clone(),
            preselected: clause.preselected,
        })
        .collect();

    InputSpec {
        template_id: template.id.to_string(),
        sections,
        clauses,
        line_items: template.line_items.as_ref().map(|policy| policy.columns()),
    }
}

/// Raw inputs of a freshly opened form: defaults, first choice options,
/// otherwise empty.
pub fn initial_inputs(template: &Template) -> RawInputs {
    template
        .fields
        .iter()
        .map(|field| (field.id.clone(), field.initial_raw()))
        .collect()
}

/// Read entered values back. Numeric fields coerce to a number (zero on
/// parse failure); all other kinds keep the raw string, empty included.
/// Fields with no raw input at all are left out of the record.
pub fn read_values(spec: &InputSpec, raw: &RawInputs) -> DataRecord {
    let mut record = DataRecord::new();
    for field in spec.fields() {
        let Some(input) = raw.get(&field.id) else {
            continue;
        };
        let value = if field.kind.is_numeric() {
            Value::Number(coerce_number(input))
        } else {
            Value::Text(input.clone())
        };
        record.insert(field.id.clone(), value);
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::registry;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number("42"), dec("42"));
        assert_eq!(coerce_number(" 12.5 "), dec("12.5"));
        assert_eq!(coerce_number("12abc"), dec("12"));
        assert_eq!(coerce_number("7."), dec("7"));
        assert_eq!(coerce_number(".5"), dec("0.5"));
        assert_eq!(coerce_number("-3"), dec("-3"));
        assert_eq!(coerce_number("abc"), Decimal::ZERO);
        assert_eq!(coerce_number(""), Decimal::ZERO);
    }

    #[test]
    fn test_coerce_number_saturates_out_of_range() {
        assert_eq!(coerce_number("1000000000000000"), max_input());
        assert_eq!(coerce_number("1000000000000001"), max_input());
        assert_eq!(coerce_number("79228162514264337593543950335"), max_input());
        assert_eq!(coerce_number("-79228162514264337593543950335"), -max_input());
        assert_eq!(coerce_number("999999999999999999999999999999999999"), max_input());
    }

    #[test]
    fn test_sections_keep_first_seen_order() {
        let quotation = registry().unwrap().find("quotation").unwrap();
        let spec = build_input_spec(quotation);
        let names: Vec<&str> = spec.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Thông tin công ty",
                "Thông tin báo giá",
                "Thông tin khách hàng",
            ]
        );
        let ids: Vec<&str> = spec.sections[0].fields.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["company_name", "company_address", "company_phone", "company_tax"]
        );
        assert_eq!(spec.fields().count(), quotation.fields.len());
    }

    #[test]
    fn test_fields_without_section_group_under_default() {
        let mut template = registry().unwrap().find("receipt").unwrap().clone();
        template.fields = vec![
            Field::text("x", "X"),
            Field::text("y", "Y").section("Khác"),
            Field::text("z", "Z"),
        ];
        let spec = build_input_spec(&template);
        let names: Vec<&str> = spec.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Thông tin", "Khác"]);
        let ids: Vec<&str> = spec.sections[0].fields.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["x", "z"]);
    }

    #[test]
    fn test_read_values_coerces_numbers_only() {
        let receipt = registry().unwrap().find("receipt").unwrap();
        let spec = build_input_spec(receipt);
        let mut raw = RawInputs::new();
        raw.insert("amount".into(), "1.5e".into());
        raw.insert("receiver_name".into(), "".into());
        raw.insert("reason".into(), "Tiền thuê".into());

        let record = read_values(&spec, &raw);
        assert_eq!(record.get("amount"), Some(&Value::Number(dec("1.5"))));
        assert_eq!(record.get("receiver_name"), Some(&Value::Text(String::new())));
        assert_eq!(record.text("reason"), "Tiền thuê");
        assert!(record.get("payer_name").is_none());
    }

    #[test]
    fn test_unparseable_number_reads_zero() {
        let rental = registry().unwrap().find("rental").unwrap();
        let spec = build_input_spec(rental);
        let mut raw = RawInputs::new();
        raw.insert("rent_amount".into(), "mười triệu".into());
        let record = read_values(&spec, &raw);
        assert_eq!(record.get("rent_amount"), Some(&Value::Number(Decimal::ZERO)));
    }

    #[test]
    fn test_initial_inputs_use_defaults() {
        let labor = registry().unwrap().find("labor").unwrap();
        let inputs = initial_inputs(labor);
        assert_eq!(inputs["probation"], "60");
        assert_eq!(inputs["contract_type"], "Không xác định thời hạn");
        assert_eq!(inputs["a_name"], "");
    }

    #[test]
    fn test_json_schema_lists_required_fields() {
        let invoice = registry().unwrap().find("invoice").unwrap();
        let schema = build_input_spec(invoice).to_json_schema();
        let required = schema["required"].as_array().unwrap();
        assert!(required.contains(&json!("company_tax")));
        assert!(!required.contains(&json!("company_bank")));
        assert_eq!(schema["properties"]["inv_date"]["format"], "date");
        assert_eq!(schema["properties"]["payment_method"]["enum"][0], "Chuyển khoản");
    }

    #[test]
    fn test_line_item_columns() {
        let registry = registry().unwrap();
        let spec = build_input_spec(registry.find("handover").unwrap());
        assert_eq!(spec.line_items, Some(LineItemColumns::Handover));
        let spec = build_input_spec(registry.find("invoice").unwrap());
        assert_eq!(spec.line_items, Some(LineItemColumns::Priced));
        let spec = build_input_spec(registry.find("rental").unwrap());
        assert_eq!(spec.line_items, None);
    }
}
