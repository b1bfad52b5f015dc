//! Template registry - read-only lookup over the built-in catalog.
//!
//! Provides `list()`, `find()` and `search()`; loading checks every template
//! against its own schema and refuses a catalog that breaks it.

use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashSet;

use super::{catalog, Template};
use crate::composer::{compose_checked, today};
use crate::schema::{ClauseSelection, DataRecord, LineItem, SchemaViolation};

/// Catalog card metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateSummary {
    pub id: String,
    pub icon: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

/// Ordered, immutable set of templates.
#[derive(Debug)]
pub struct TemplateRegistry {
    templates: Vec<Template>,
}

lazy_static! {
    static ref BUILTIN: Result<TemplateRegistry, SchemaViolation> =
        TemplateRegistry::load(catalog::builtin());
}

/// The process-wide built-in registry.
pub fn registry() -> Result<&'static TemplateRegistry, SchemaViolation> {
    BUILTIN.as_ref().map_err(Clone::clone)
}

impl TemplateRegistry {
    /// Build a registry, rejecting duplicate ids and templates whose render
    /// function reads fields they do not declare.
    pub fn load(templates: Vec<Template>) -> Result<Self, SchemaViolation> {
        let mut seen = HashSet::new();
        for template in &templates {
            if !seen.insert(template.id) {
                return Err(SchemaViolation::DuplicateTemplate {
                    template: template.id.to_string(),
                });
            }
            check_template(template)?;
        }

        log::info!("loaded {} document templates", templates.len());
        Ok(Self { templates })
    }

    pub fn list(&self) -> Vec<TemplateSummary> {
        self.templates.iter().map(Template::summary).collect()
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn find(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|template| template.id == id)
    }

    /// Templates whose title, description or badge contains the query,
    /// case-insensitively, in catalog order. A blank query matches all.
    pub fn search(&self, query: &str) -> Vec<TemplateSummary> {
        let query = query.trim().to_lowercase();
        self.templates
            .iter()
            .filter(|template| query.is_empty() || matches(template, &query))
            .map(Template::summary)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn matches(template: &Template, query: &str) -> bool {
    template.title.to_lowercase().contains(query)
        || template.description.to_lowercase().contains(query)
        || template
            .badge
            .map(|badge| badge.to_lowercase().contains(query))
            .unwrap_or(false)
}

fn check_template(template: &Template) -> Result<(), SchemaViolation> {
    let mut fields = HashSet::new();
    for field in &template.fields {
        if !fields.insert(field.id.as_str()) {
            return Err(SchemaViolation::DuplicateField {
                template: template.id.to_string(),
                field: field.id.clone(),
            });
        }
    }

    let mut clauses = HashSet::new();
    for clause in &template.clauses {
        if !clauses.insert(clause.id.as_str()) {
            return Err(SchemaViolation::DuplicateClause {
                template: template.id.to_string(),
                clause: clause.id.clone(),
            });
        }
    }

    // Dry render with every clause and one row so each branch reads its fields.
    let selected: ClauseSelection = template.clauses.iter().map(|c| c.id.clone()).collect();
    let items: Vec<LineItem> = template
        .line_items
        .as_ref()
        .map(|policy| vec![LineItem::blank(policy.default_unit)])
        .unwrap_or_default();
    let (_, undeclared) =
        compose_checked(template, &DataRecord::new(), &selected, &items, today());

    match undeclared.into_iter().next() {
        Some(field) => Err(SchemaViolation::UndeclaredField {
            template: template.id.to_string(),
            field,
        }),
        None => Ok(()),
    }
}
