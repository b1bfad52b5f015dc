//! Structured content tree for composed documents.
//!
//! The composer builds a tree of sections, parties, articles and tables
//! instead of markup strings; layout and rasterization are separate stages.

pub mod builder;
pub mod layout;
pub mod types;

pub use builder::DocumentBuilder;
pub use layout::to_plain_text;
pub use types::{
    Align, Article, Block, Citation, Column, Document, LegalFooter, Paragraph, ParagraphStyle,
    Party, Signature, Span, Table, TotalRow,
};
