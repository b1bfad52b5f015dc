//! Vietnamese legal and business document generation.
//!
//! A user picks a template, fills its form, toggles clauses and line items,
//! previews the composed document and exports it as a paginated PDF.

pub mod composer;
pub mod config;
pub mod content;
pub mod export;
pub mod form;
pub mod notice;
pub mod schema;
pub mod session;
pub mod templates;
pub mod theme;

pub use crate::composer::compose;
pub use crate::config::AppConfig;
pub use crate::content::Document;
pub use crate::session::{App, AppError, Session};
pub use crate::templates::{registry, Template, TemplateRegistry};

/// Initialise `env_logger`, defaulting to `info` when `RUST_LOG` is unset.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
