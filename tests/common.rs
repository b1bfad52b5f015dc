//! Shared fakes for the rasterize/encode/save services.

#![allow(dead_code)]

use parking_lot::Mutex;
use std::io;
use std::sync::Arc;

use vilex::config::AppConfig;
use vilex::content::Document;
use vilex::export::{
    Bitmap, Encoder, ExportedFile, FileSink, PlacedPage, RasterOptions, Rasterizer, ServiceError,
};
use vilex::schema::FieldKind;
use vilex::theme::MemoryThemeStore;
use vilex::App;

/// Captures every document as a 210 px wide surface of a fixed height.
pub struct StubRasterizer {
    pub height: u32,
    pub fail: bool,
    pub documents: Mutex<Vec<Document>>,
}

impl StubRasterizer {
    pub fn new(height: u32) -> Self {
        Self {
            height,
            fail: false,
            documents: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(100)
        }
    }
}

#[async_trait::async_trait]
impl Rasterizer for StubRasterizer {
    async fn rasterize(
        &self,
        document: &Document,
        options: &RasterOptions,
    ) -> Result<Bitmap, ServiceError> {
        if self.fail {
            return Err("surface capture failed".into());
        }
        self.documents.lock().push(document.clone());
        Ok(Bitmap {
            width: 210,
            height: self.height,
            pixels_per_unit: options.scale,
            data: Vec::new(),
        })
    }
}

/// Records the placements and returns a fixed PDF body.
#[derive(Default)]
pub struct StubEncoder {
    pub fail: bool,
    pub pages: Mutex<Vec<PlacedPage>>,
}

#[async_trait::async_trait]
impl Encoder for StubEncoder {
    async fn encode(
        &self,
        _image: &Bitmap,
        pages: &[PlacedPage],
        _quality: f32,
    ) -> Result<Vec<u8>, ServiceError> {
        if self.fail {
            return Err("encoder crashed".into());
        }
        *self.pages.lock() = pages.to_vec();
        Ok(b"%PDF-1.4\n%stub".to_vec())
    }
}

#[derive(Default, Clone)]
pub struct MemorySink {
    pub files: Arc<Mutex<Vec<ExportedFile>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.files.lock().len()
    }
}

#[async_trait::async_trait]
impl FileSink for MemorySink {
    async fn save(&self, file: &ExportedFile) -> io::Result<()> {
        self.files.lock().push(file.clone());
        Ok(())
    }
}

pub fn app() -> App {
    App::new(AppConfig::default(), Box::new(MemoryThemeStore::new())).unwrap()
}

/// Give every required field of the open template a plausible value.
pub fn fill_required(app: &mut App) {
    let spec = app.input_spec().expect("a template is open");
    for field in spec.fields().filter(|field| field.required) {
        let value = match field.kind {
            FieldKind::Number => "1000000".to_string(),
            FieldKind::Date => "1/3/2026".to_string(),
            FieldKind::Choice => field.options.first().cloned().unwrap_or_default(),
            FieldKind::Text | FieldKind::Multiline => format!("{} mẫu", field.label),
        };
        app.set_input(&field.id, value);
    }
}
