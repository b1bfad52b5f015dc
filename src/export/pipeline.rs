//! Export pipeline: render, rasterize, paginate, encode, save.
//!
//! Rasterizing and encoding are external services behind async traits. The
//! exporter owns the state machine and admits at most one export at a time.

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::io;

use super::file::ExportedFile;
use super::paginate::{image_height, page_count, paginate, PageGeometry, Surface};
use super::ExportError;
use crate::content::Document;

/// Most pages one export may produce.
pub const MAX_PAGES: usize = 500;

/// Error type reported by external rasterize/encode services.
pub type ServiceError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportState {
    Idle,
    Rendering,
    Rasterizing,
    Paginating,
    Encoding,
    Done,
    Failed,
}

impl ExportState {
    pub fn is_in_flight(&self) -> bool {
        matches!(
            self,
            Self::Rendering | Self::Rasterizing | Self::Paginating | Self::Encoding
        )
    }
}

/// Capture options handed to the rasterizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RasterOptions {
    /// Device pixels per layout unit.
    pub scale: f64,
    /// CSS color painted behind the document.
    pub background: String,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: 2.0,
            background: "#ffffff".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSettings {
    pub page: PageGeometry,
    pub raster: RasterOptions,
    /// JPEG quality of embedded page images, 0.0 to 1.0.
    pub jpeg_quality: f32,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            page: PageGeometry::A4,
            raster: RasterOptions::default(),
            jpeg_quality: 0.95,
        }
    }
}

/// A captured surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub pixels_per_unit: f64,
    /// Encoded image data, opaque to the pipeline.
    pub data: Vec<u8>,
}

impl Bitmap {
    pub fn surface(&self) -> Surface {
        Surface::new(self.width as f64, self.height as f64, self.pixels_per_unit)
    }
}

/// Where the image is drawn on one output page, in page units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacedPage {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[async_trait]
pub trait Rasterizer: Send + Sync {
    async fn rasterize(
        &self,
        document: &Document,
        options: &RasterOptions,
    ) -> Result<Bitmap, ServiceError>;
}

#[async_trait]
pub trait Encoder: Send + Sync {
    /// Encode one page per placement, each drawing the same image.
    async fn encode(
        &self,
        image: &Bitmap,
        pages: &[PlacedPage],
        quality: f32,
    ) -> Result<Vec<u8>, ServiceError>;
}

#[async_trait]
pub trait FileSink: Send + Sync {
    async fn save(&self, file: &ExportedFile) -> io::Result<()>;
}

/// Runs exports one at a time.
#[derive(Debug)]
pub struct Exporter {
    settings: ExportSettings,
    state: Mutex<ExportState>,
}

/// Marks the export failed unless it reached `Done`.
struct InFlight<'a> {
    state: &'a Mutex<ExportState>,
    done: bool,
}

impl InFlight<'_> {
    fn advance(&self, next: ExportState) {
        let mut state = self.state.lock();
        log::debug!("export state {:?} -> {:?}", *state, next);
        *state = next;
    }

    fn finish(mut self) {
        self.advance(ExportState::Done);
        self.done = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.done {
            self.advance(ExportState::Failed);
        }
    }
}

impl Exporter {
    pub fn new(settings: ExportSettings) -> Self {
        Self {
            settings,
            state: Mutex::new(ExportState::Idle),
        }
    }

    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    pub fn state(&self) -> ExportState {
        *self.state.lock()
    }

    pub fn is_busy(&self) -> bool {
        self.state().is_in_flight()
    }

    fn begin(&self) -> Result<InFlight<'_>, ExportError> {
        let mut state = self.state.lock();
        if state.is_in_flight() {
            log::warn!("export rejected, another export is {:?}", *state);
            return Err(ExportError::Busy);
        }
        log::debug!("export state {:?} -> {:?}", *state, ExportState::Rendering);
        *state = ExportState::Rendering;
        Ok(InFlight {
            state: &self.state,
            done: false,
        })
    }

    /// Export the document produced by `render` as `filename`.
    ///
    /// Fails with [`ExportError::Busy`] while another export is in flight.
    /// On failure nothing is saved and the caller's state is untouched.
    pub async fn export<F>(
        &self,
        render: F,
        filename: String,
        rasterizer: &dyn Rasterizer,
        encoder: &dyn Encoder,
        sink: &dyn FileSink,
    ) -> Result<ExportedFile, ExportError>
    where
        F: FnOnce() -> Document,
    {
        let flight = self.begin()?;
        let document = render();

        flight.advance(ExportState::Rasterizing);
        let bitmap = rasterizer
            .rasterize(&document, &self.settings.raster)
            .await
            .map_err(|e| {
                log::error!("rasterizing '{}' failed: {}", document.template_id, e);
                ExportError::Rasterize(e.to_string())
            })?;

        let page = self.settings.page;
        let surface = bitmap.surface();
        let pages = page_count(&surface, &page);
        if bitmap.width == 0 || pages > MAX_PAGES {
            log::error!(
                "rasterizing '{}' gave an unusable {}x{} surface ({} pages)",
                document.template_id,
                bitmap.width,
                bitmap.height,
                pages
            );
            return Err(ExportError::Rasterize(format!(
                "surface {}x{} needs {} pages, at most {} allowed",
                bitmap.width, bitmap.height, pages, MAX_PAGES
            )));
        }

        flight.advance(ExportState::Paginating);
        let height = image_height(&surface, &page);
        let placed: Vec<PlacedPage> = paginate(&surface, &page)
            .into_iter()
            .map(|slice| PlacedPage {
                x: 0.0,
                y: slice.offset_y,
                width: page.width,
                height,
            })
            .collect();

        flight.advance(ExportState::Encoding);
        let bytes = encoder
            .encode(&bitmap, &placed, self.settings.jpeg_quality)
            .await
            .map_err(|e| {
                log::error!("encoding '{}' failed: {}", document.template_id, e);
                ExportError::Encode(e.to_string())
            })?;
        let file = ExportedFile::pdf(filename, bytes);
        sink.save(&file).await.map_err(|e| {
            log::error!("saving '{}' failed: {}", file.filename(), e);
            ExportError::Save(e)
        })?;

        flight.finish();
        log::info!(
            "exported '{}' ({} pages, {} bytes)",
            file.filename(),
            placed.len(),
            file.metadata.size_bytes
        );
        Ok(file)
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new(ExportSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::DocumentBuilder;
    use std::sync::Arc;
    use std::time::Duration;

    struct FixedRasterizer {
        /// Surface height in pixels for a 210 px wide capture.
        height: u32,
        delay: Option<Duration>,
        fail: bool,
    }

    impl FixedRasterizer {
        fn new(height: u32) -> Self {
            Self {
                height,
                delay: None,
                fail: false,
            }
        }
    }

    #[async_trait]
    impl Rasterizer for FixedRasterizer {
        async fn rasterize(
            &self,
            _document: &Document,
            options: &RasterOptions,
        ) -> Result<Bitmap, ServiceError> {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            if self.fail {
                return Err("canvas tainted".into());
            }
            Ok(Bitmap {
                width: 210,
                height: self.height,
                pixels_per_unit: options.scale,
                data: vec![0; 4],
            })
        }
    }

    #[derive(Default)]
    struct RecordingEncoder {
        pages: Mutex<Vec<PlacedPage>>,
        fail: bool,
    }

    #[async_trait]
    impl Encoder for RecordingEncoder {
        async fn encode(
            &self,
            _image: &Bitmap,
            pages: &[PlacedPage],
            _quality: f32,
        ) -> Result<Vec<u8>, ServiceError> {
            if self.fail {
                return Err("out of memory".into());
            }
            self.pages.lock().extend_from_slice(pages);
            Ok(b"%PDF-1.4".to_vec())
        }
    }

    #[derive(Default)]
    struct MemorySink {
        saved: Mutex<Vec<ExportedFile>>,
        fail: bool,
    }

    #[async_trait]
    impl FileSink for MemorySink {
        async fn save(&self, file: &ExportedFile) -> io::Result<()> {
            if self.fail {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
            }
            self.saved.lock().push(file.clone());
            Ok(())
        }
    }

    fn document() -> Document {
        DocumentBuilder::new("invoice", "Hóa Đơn Bán Hàng")
            .heading("HÓA ĐƠN BÁN HÀNG")
            .build()
    }

    #[tokio::test]
    async fn test_export_places_three_pages() {
        let exporter = Exporter::default();
        let encoder = RecordingEncoder::default();
        let sink = MemorySink::default();

        let file = exporter
            .export(
                document,
                "a.pdf".to_string(),
                &FixedRasterizer::new(650),
                &encoder,
                &sink,
            )
            .await
            .unwrap();

        assert_eq!(exporter.state(), ExportState::Done);
        assert_eq!(file.filename(), "a.pdf");
        assert_eq!(sink.saved.lock().len(), 1);

        let pages = encoder.pages.lock();
        let offsets: Vec<f64> = pages.iter().map(|p| p.y).collect();
        assert_eq!(offsets, vec![0.0, -297.0, -594.0]);
        assert!(pages.iter().all(|p| p.width == 210.0 && p.height == 650.0));
    }

    #[tokio::test]
    async fn test_rasterize_failure() {
        let exporter = Exporter::default();
        let encoder = RecordingEncoder::default();
        let sink = MemorySink::default();
        let rasterizer = FixedRasterizer {
            fail: true,
            ..FixedRasterizer::new(100)
        };

        let err = exporter
            .export(document, "a.pdf".to_string(), &rasterizer, &encoder, &sink)
            .await
            .unwrap_err();

        assert!(matches!(err, ExportError::Rasterize(ref message) if message == "canvas tainted"));
        assert_eq!(exporter.state(), ExportState::Failed);
        assert!(encoder.pages.lock().is_empty());
        assert!(sink.saved.lock().is_empty());
    }

    #[tokio::test]
    async fn test_oversized_surface_rejected() {
        struct SliverRasterizer;

        #[async_trait]
        impl Rasterizer for SliverRasterizer {
            async fn rasterize(
                &self,
                _document: &Document,
                options: &RasterOptions,
            ) -> Result<Bitmap, ServiceError> {
                Ok(Bitmap {
                    width: 1,
                    height: u32::MAX,
                    pixels_per_unit: options.scale,
                    data: Vec::new(),
                })
            }
        }

        let exporter = Exporter::default();
        let encoder = RecordingEncoder::default();
        let sink = MemorySink::default();

        let err = exporter
            .export(document, "a.pdf".to_string(), &SliverRasterizer, &encoder, &sink)
            .await
            .unwrap_err();

        assert!(matches!(err, ExportError::Rasterize(_)));
        assert_eq!(exporter.state(), ExportState::Failed);
        assert!(encoder.pages.lock().is_empty());
        assert!(sink.saved.lock().is_empty());
    }

    #[tokio::test]
    async fn test_longest_allowed_export() {
        let exporter = Exporter::default();
        let encoder = RecordingEncoder::default();
        let sink = MemorySink::default();
        // 210 px wide at 297 px per page
        let height = 297 * MAX_PAGES as u32;

        exporter
            .export(
                document,
                "a.pdf".to_string(),
                &FixedRasterizer::new(height),
                &encoder,
                &sink,
            )
            .await
            .unwrap();

        assert_eq!(encoder.pages.lock().len(), MAX_PAGES);
    }

    #[tokio::test]
    async fn test_encode_failure() {
        let exporter = Exporter::default();
        let encoder = RecordingEncoder {
            fail: true,
            ..Default::default()
        };
        let sink = MemorySink::default();

        let err = exporter
            .export(
                document,
                "a.pdf".to_string(),
                &FixedRasterizer::new(100),
                &encoder,
                &sink,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ExportError::Encode(_)));
        assert_eq!(exporter.state(), ExportState::Failed);
        assert!(sink.saved.lock().is_empty());
    }

    #[tokio::test]
    async fn test_save_failure() {
        let exporter = Exporter::default();
        let sink = MemorySink {
            fail: true,
            ..Default::default()
        };

        let err = exporter
            .export(
                document,
                "a.pdf".to_string(),
                &FixedRasterizer::new(100),
                &RecordingEncoder::default(),
                &sink,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ExportError::Save(_)));
        assert_eq!(exporter.state(), ExportState::Failed);
    }

    #[tokio::test]
    async fn test_second_export_in_flight_is_rejected() {
        let exporter = Arc::new(Exporter::default());
        let slow = FixedRasterizer {
            delay: Some(Duration::from_millis(50)),
            ..FixedRasterizer::new(100)
        };
        let encoder = RecordingEncoder::default();
        let sink = MemorySink::default();

        let (first, second) = tokio::join!(
            exporter.export(document, "a.pdf".to_string(), &slow, &encoder, &sink),
            exporter.export(document, "b.pdf".to_string(), &slow, &encoder, &sink),
        );

        assert!(first.is_ok());
        assert!(matches!(second, Err(ExportError::Busy)));
        assert_eq!(sink.saved.lock().len(), 1);
        assert_eq!(exporter.state(), ExportState::Done);
    }

    #[tokio::test]
    async fn test_exporter_reusable_after_failure() {
        let exporter = Exporter::default();
        let failing = FixedRasterizer {
            fail: true,
            ..FixedRasterizer::new(100)
        };
        let encoder = RecordingEncoder::default();
        let sink = MemorySink::default();

        assert!(exporter
            .export(document, "a.pdf".to_string(), &failing, &encoder, &sink)
            .await
            .is_err());
        assert!(exporter
            .export(
                document,
                "a.pdf".to_string(),
                &FixedRasterizer::new(100),
                &encoder,
                &sink
            )
            .await
            .is_ok());
        assert_eq!(exporter.state(), ExportState::Done);
    }

    #[test]
    fn test_in_flight_states() {
        assert!(!ExportState::Idle.is_in_flight());
        assert!(ExportState::Encoding.is_in_flight());
        assert!(!ExportState::Failed.is_in_flight());
    }
}
