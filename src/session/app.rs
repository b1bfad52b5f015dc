//! Top-level application controller.
//!
//! Owns the single live session, the screen, the theme preference and the
//! notice queue. Hosts drive it from user events.

use serde::Serialize;
use thiserror::Error;

use super::Session;
use crate::composer::today;
use crate::config::{AppConfig, ConfigError};
use crate::content::Document;
use crate::export::{
    suggested_filename, Encoder, ExportError, ExportedFile, Exporter, FileSink, Rasterizer,
};
use crate::form::{InputSpec, RowField, ValidationError};
use crate::notice::{Notice, EXPORT_FAILED, EXPORT_STARTED, EXPORT_SUCCEEDED};
use crate::schema::SchemaViolation;
use crate::templates::{registry, TemplateRegistry, TemplateSummary};
use crate::theme::{load_or_default, JsonThemeStore, Theme, ThemeStore};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("template catalog is invalid: {0}")]
    Schema(#[from] SchemaViolation),
    #[error("configuration is invalid: {0}")]
    Config(#[from] ConfigError),
}

/// Why a preview could not be shown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreviewError {
    #[error("no template is open")]
    NoTemplate,
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl PreviewError {
    /// Field the form should focus.
    pub fn focus(&self) -> Option<&str> {
        match self {
            Self::Validation(error) => Some(&error.field),
            Self::NoTemplate => None,
        }
    }
}

impl From<PreviewError> for ExportError {
    fn from(error: PreviewError) -> Self {
        match error {
            PreviewError::NoTemplate => ExportError::NoTemplate,
            PreviewError::Validation(error) => ExportError::Validation(error),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Catalog,
    Form,
    Preview,
}

pub struct App {
    config: AppConfig,
    registry: &'static TemplateRegistry,
    session: Option<Session<'static>>,
    screen: Screen,
    theme: Theme,
    theme_store: Box<dyn ThemeStore>,
    exporter: Exporter,
    notices: Vec<Notice>,
}

impl App {
    pub fn new(config: AppConfig, theme_store: Box<dyn ThemeStore>) -> Result<Self, AppError> {
        let registry = registry()?;
        let theme = load_or_default(&*theme_store);
        let exporter = Exporter::new(config.export.clone());
        log::info!("app ready with {} templates, theme {:?}", registry.len(), theme);

        Ok(Self {
            config,
            registry,
            session: None,
            screen: Screen::Catalog,
            theme,
            theme_store,
            exporter,
            notices: Vec::new(),
        })
    }

    /// Configuration from the environment, theme kept in the configured file.
    pub fn from_env() -> Result<Self, AppError> {
        let config = AppConfig::from_env()?;
        let store = JsonThemeStore::new(config.theme_file.clone());
        Self::new(config, Box::new(store))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn session(&self) -> Option<&Session<'static>> {
        self.session.as_ref()
    }

    pub fn exporter(&self) -> &Exporter {
        &self.exporter
    }

    pub fn list(&self) -> Vec<TemplateSummary> {
        self.registry.list()
    }

    pub fn search(&self, query: &str) -> Vec<TemplateSummary> {
        self.registry.search(query)
    }

    /// Open a template's form. Reopening the template of the live session
    /// resumes it; any other template replaces it with a fresh one.
    pub fn open(&mut self, template_id: &str) -> bool {
        let Some(template) = self.registry.find(template_id) else {
            log::warn!("no template with id '{}'", template_id);
            return false;
        };
        let resume = self
            .session
            .as_ref()
            .map(|session| session.template().id == template.id)
            .unwrap_or(false);
        if !resume {
            if let Some(old) = self.session.take() {
                log::info!("session {} discarded", old.id());
            }
            self.session = Some(Session::open(template));
        }
        self.screen = Screen::Form;
        true
    }

    pub fn input_spec(&self) -> Option<InputSpec> {
        self.session.as_ref().map(Session::input_spec)
    }

    pub fn set_input(&mut self, field_id: &str, raw: impl Into<String>) -> bool {
        self.session
            .as_mut()
            .map(|session| session.set_input(field_id, raw))
            .unwrap_or(false)
    }

    pub fn toggle_clause(&mut self, clause_id: &str) -> bool {
        self.session
            .as_mut()
            .map(|session| session.toggle_clause(clause_id))
            .unwrap_or(false)
    }

    pub fn add_row(&mut self) -> bool {
        self.session.as_mut().map(Session::add_row).unwrap_or(false)
    }

    pub fn remove_row(&mut self, index: usize) -> bool {
        self.session
            .as_mut()
            .map(|session| session.remove_row(index))
            .unwrap_or(false)
    }

    pub fn update_row(&mut self, index: usize, field: RowField, raw: &str) -> bool {
        self.session
            .as_mut()
            .map(|session| session.update_row(index, field, raw))
            .unwrap_or(false)
    }

    /// Validate, then compose. A failed check leaves the form on screen and
    /// queues one notice.
    pub fn preview(&mut self) -> Result<Document, PreviewError> {
        let session = self.session.as_ref().ok_or(PreviewError::NoTemplate)?;
        if let Err(error) = session.validate() {
            self.notices.push(Notice::error(error.message.clone()));
            return Err(error.into());
        }
        let document = session.compose();
        self.screen = Screen::Preview;
        Ok(document)
    }

    pub fn back_to_form(&mut self) {
        if self.session.is_some() {
            self.screen = Screen::Form;
        }
    }

    /// Return to the catalog. The session survives until another template
    /// is opened.
    pub fn back_to_catalog(&mut self) {
        self.screen = Screen::Catalog;
    }

    /// Export the live session as a PDF.
    ///
    /// Queues exactly one failure notice when it fails; the session and the
    /// screen are left as they were either way.
    pub async fn export(
        &mut self,
        rasterizer: &dyn Rasterizer,
        encoder: &dyn Encoder,
        sink: &dyn FileSink,
    ) -> Result<ExportedFile, ExportError> {
        let Some(session) = self.session.as_ref() else {
            return Err(ExportError::NoTemplate);
        };
        if let Err(error) = session.validate() {
            self.notices.push(Notice::error(error.message.clone()));
            return Err(error.into());
        }

        let filename = suggested_filename(session.template().title, today());
        self.notices.push(Notice::info(EXPORT_STARTED));
        let result = self
            .exporter
            .export(|| session.compose(), filename, rasterizer, encoder, sink)
            .await;

        match &result {
            Ok(_) => self.notices.push(Notice::success(EXPORT_SUCCEEDED)),
            Err(e) => {
                log::error!("export of '{}' failed: {}", session.template().id, e);
                self.notices.push(Notice::error(EXPORT_FAILED));
            }
        }
        result
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(e) = self.theme_store.save(self.theme) {
            log::warn!("could not save theme preference: {}", e);
        }
        self.theme
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn dismiss(&mut self, index: usize) -> Option<Notice> {
        (index < self.notices.len()).then(|| self.notices.remove(index))
    }
}
