//! File sink that writes exports into a directory.

use async_trait::async_trait;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use super::file::ExportedFile;
use super::pipeline::FileSink;

/// Saves each export as `<dir>/<filename>`, replacing an existing file.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.dir.join(sanitize_filename::sanitize(filename))
    }
}

#[async_trait]
impl FileSink for DirectorySink {
    async fn save(&self, file: &ExportedFile) -> io::Result<()> {
        let dir = self.dir.clone();
        let target = self.path_for(file.filename());
        let bytes = file.bytes.clone();

        // Write to a temp file in the same directory, then rename into place.
        let path = tokio::task::spawn_blocking(move || -> io::Result<PathBuf> {
            fs::create_dir_all(&dir)?;
            let mut tmp = NamedTempFile::new_in(&dir)?;
            tmp.write_all(&bytes)?;
            tmp.persist(&target).map_err(|e| e.error)?;
            Ok(target)
        })
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))??;

        log::info!("saved export to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_saves_into_directory() {
        let dir = TempDir::new().unwrap();
        let sink = DirectorySink::new(dir.path().join("out"));
        let file = ExportedFile::pdf("Báo_Giá_2026-03-01.pdf", b"%PDF-1.4".to_vec());

        sink.save(&file).await.unwrap();

        let written = fs::read(dir.path().join("out").join("Báo_Giá_2026-03-01.pdf")).unwrap();
        assert_eq!(written, b"%PDF-1.4");
    }

    #[tokio::test]
    async fn test_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let sink = DirectorySink::new(dir.path());
        sink.save(&ExportedFile::pdf("a.pdf", b"old".to_vec())).await.unwrap();
        sink.save(&ExportedFile::pdf("a.pdf", b"new".to_vec())).await.unwrap();

        assert_eq!(fs::read(sink.path_for("a.pdf")).unwrap(), b"new");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_path_for_strips_separators() {
        let sink = DirectorySink::new("/tmp/out");
        assert_eq!(sink.path_for("../x.pdf"), PathBuf::from("/tmp/out/..x.pdf"));
    }
}
