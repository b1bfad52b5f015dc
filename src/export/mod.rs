//! Paginated export.
//!
//! - `paginate` slices one tall surface into fixed-size pages.
//! - `pipeline` drives render, rasterize, paginate and encode as one
//!   at-most-one-in-flight job.
//! - `file` wraps the encoded bytes; `sink` saves them.

pub mod file;
pub mod paginate;
pub mod pipeline;
pub mod sink;

pub use file::{suggested_filename, EncodedFile, ExportedFile, FileMetadata, PDF_MIME};
pub use paginate::{image_height, page_count, paginate, PageGeometry, PageSlice, Surface};
pub use pipeline::{
    Bitmap, Encoder, ExportSettings, ExportState, Exporter, FileSink, PlacedPage, RasterOptions,
    Rasterizer, ServiceError, MAX_PAGES,
};
pub use sink::DirectorySink;

use thiserror::Error;

use crate::form::ValidationError;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("an export is already in progress")]
    Busy,
    #[error("no template is open")]
    NoTemplate,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("rasterization failed: {0}")]
    Rasterize(String),
    #[error("encoding failed: {0}")]
    Encode(String),
    #[error("failed to save exported file: {0}")]
    Save(#[from] std::io::Error),
}
