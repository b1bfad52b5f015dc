//! Exported file envelope and file naming.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{NaiveDate, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const PDF_MIME: &str = "application/pdf";

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("valid whitespace pattern");
}

/// Metadata of an exported file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    /// File name with extension
    pub filename: String,
    pub mime_type: String,
    pub size_bytes: usize,
    /// RFC 3339 creation timestamp
    pub created_at: String,
}

impl FileMetadata {
    pub fn new(filename: impl Into<String>, mime_type: impl Into<String>, size_bytes: usize) -> Self {
        Self {
            filename: filename.into(),
            mime_type: mime_type.into(),
            size_bytes,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Encoded document bytes with their metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedFile {
    pub metadata: FileMetadata,
    pub bytes: Vec<u8>,
}

/// Serializable view with base64 data, for hosts that move files as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EncodedFile {
    pub metadata: FileMetadata,
    pub data: String,
}

impl ExportedFile {
    pub fn new(filename: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            metadata: FileMetadata::new(filename, mime_type, bytes.len()),
            bytes,
        }
    }

    pub fn pdf(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::new(filename, PDF_MIME, bytes)
    }

    pub fn filename(&self) -> &str {
        &self.metadata.filename
    }

    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.bytes)
    }

    pub fn encoded(&self) -> EncodedFile {
        EncodedFile {
            metadata: self.metadata.clone(),
            data: self.to_base64(),
        }
    }
}

impl EncodedFile {
    /// Decode back to an exported file.
    pub fn decode(&self) -> Result<ExportedFile, base64::DecodeError> {
        Ok(ExportedFile {
            metadata: self.metadata.clone(),
            bytes: BASE64.decode(&self.data)?,
        })
    }
}

/// `<title_with_underscores>_<YYYY-MM-DD>.pdf`, safe for file systems.
pub fn suggested_filename(title: &str, date: NaiveDate) -> String {
    let stem = WHITESPACE.replace_all(title.trim(), "_");
    let name = format!("{}_{}.pdf", stem, date.format("%Y-%m-%d"));
    sanitize_filename::sanitize(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_suggested_filename() {
        assert_eq!(
            suggested_filename("Hợp Đồng Thuê Nhà", date(2026, 3, 1)),
            "Hợp_Đồng_Thuê_Nhà_2026-03-01.pdf"
        );
        assert_eq!(
            suggested_filename("Báo  Giá", date(2026, 12, 31)),
            "Báo_Giá_2026-12-31.pdf"
        );
    }

    #[test]
    fn test_filename_is_sanitized() {
        assert_eq!(
            suggested_filename("Biên Bản Thanh Lý HĐ/A", date(2026, 1, 2)),
            "Biên_Bản_Thanh_Lý_HĐA_2026-01-02.pdf"
        );
    }

    #[test]
    fn test_pdf_metadata() {
        let file = ExportedFile::pdf("a.pdf", b"%PDF-1.4".to_vec());
        assert_eq!(file.metadata.mime_type, PDF_MIME);
        assert_eq!(file.metadata.size_bytes, 8);
        assert_eq!(file.filename(), "a.pdf");
    }

    #[test]
    fn test_base64_view() {
        let file = ExportedFile::pdf("a.pdf", b"hello".to_vec());
        assert_eq!(file.to_base64(), "aGVsbG8=");
        let encoded = file.encoded();
        let json = serde_json::to_value(&encoded).unwrap();
        assert_eq!(json["metadata"]["mimeType"], PDF_MIME);
        assert_eq!(encoded.decode().unwrap(), file);
    }
}
