//! The local export directory.
//!
//! Files are named `slide_<8 hex>.pptx` and opened with `create_new`, so two
//! concurrent exports never write to the same file.

use std::fs::OpenOptions;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::pptx::write_deck;
use crate::models::Slide;

const FILE_PREFIX: &str = "slide_";
const FILE_EXTENSION: &str = ".pptx";
/// Fresh names to try if a generated one already exists.
const MAX_NAME_ATTEMPTS: usize = 4;

#[derive(Debug, Clone)]
pub struct ExportStore {
    dir: PathBuf,
}

/// A file written by `ExportStore::save`.
#[derive(Debug, Clone)]
pub struct ExportedFile {
    pub filename: String,
    pub path: PathBuf,
}

impl ExportStore {
    /// Opens the store, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create export directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes `slides` as a new `.pptx` file on the blocking pool.
    pub async fn save(&self, slides: Vec<Slide>) -> Result<ExportedFile, AppError> {
        let dir = self.dir.clone();
        tokio::task::spawn_blocking(move || write_new_file(&dir, &slides))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Export task failed: {e}")))?
    }

    /// Maps a download name to its path. Only plain `slide_*.pptx`-style names
    /// inside the export directory are accepted.
    pub fn resolve(&self, filename: &str) -> Option<PathBuf> {
        is_safe_filename(filename).then(|| self.dir.join(filename))
    }
}

pub fn new_filename() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("{FILE_PREFIX}{}{FILE_EXTENSION}", &id[..8])
}

fn write_new_file(dir: &Path, slides: &[Slide]) -> Result<ExportedFile, AppError> {
    for _ in 0..MAX_NAME_ATTEMPTS {
        let filename = new_filename();
        let path = dir.join(&filename);

        let file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                warn!("Export name {filename} already taken, picking another");
                continue;
            }
            Err(e) => {
                return Err(AppError::Export(format!(
                    "Failed to create {}: {e}",
                    path.display()
                )))
            }
        };

        let written = write_deck(slides, BufWriter::new(file))
            .map_err(|e| e.to_string())
            .and_then(|mut writer| writer.flush().map_err(|e| e.to_string()));

        if let Err(e) = written {
            // Partial packages must not be served by /download.
            discard_partial(&path);
            return Err(AppError::Export(format!(
                "Failed to write {}: {e}",
                path.display()
            )));
        }

        info!("Exported {} slides to {}", slides.len(), path.display());
        return Ok(ExportedFile { filename, path });
    }

    Err(AppError::Export(format!(
        "No free export file name after {MAX_NAME_ATTEMPTS} attempts"
    )))
}

/// Removes a half-written export. Returns whether the file is gone.
fn discard_partial(path: &Path) -> bool {
    match std::fs::remove_file(path) {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to remove partial export {}: {e}", path.display());
            false
        }
    }
}

fn is_safe_filename(filename: &str) -> bool {
    !filename.is_empty()
        && filename.ends_with(FILE_EXTENSION)
        && filename.len() > FILE_EXTENSION.len()
        && !filename.contains(['/', '\\'])
        && !filename.contains("..")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use zip::ZipArchive;

    #[test]
    fn test_new_filename_shape() {
        let name = new_filename();
        assert!(name.starts_with("slide_"));
        assert!(name.ends_with(".pptx"));
        assert_eq!(name.len(), "slide_".len() + 8 + ".pptx".len());
        assert!(name[6..14].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_new_filenames_differ() {
        assert_ne!(new_filename(), new_filename());
    }

    #[test]
    fn test_open_creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("exports").join("decks");
        let store = ExportStore::open(&nested).unwrap();
        assert!(store.dir().is_dir());
    }

    #[test]
    fn test_resolve_rejects_traversal_and_other_extensions() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ExportStore::open(tmp.path()).unwrap();

        assert!(store.resolve("slide_abcd1234.pptx").is_some());
        assert!(store.resolve("../secret.pptx").is_none());
        assert!(store.resolve("nested/slide.pptx").is_none());
        assert!(store.resolve("..\\slide.pptx").is_none());
        assert!(store.resolve("notes.txt").is_none());
        assert!(store.resolve(".pptx").is_none());
        assert!(store.resolve("").is_none());
    }

    #[test]
    fn test_discard_partial_removes_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("slide_deadbeef.pptx");
        std::fs::write(&path, b"PK").unwrap();

        assert!(discard_partial(&path));
        assert!(!path.exists());
    }

    #[test]
    fn test_discard_partial_reports_failure() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(!discard_partial(&tmp.path().join("never_written.pptx")));
    }

    #[tokio::test]
    async fn test_save_writes_valid_package() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ExportStore::open(tmp.path()).unwrap();
        let slides = vec![
            Slide::new("Intro", vec!["Hello".to_string()]),
            Slide::new("Summary", vec![]),
        ];

        let exported = store.save(slides.clone()).await.unwrap();

        assert_eq!(exported.path, tmp.path().join(&exported.filename));
        assert_eq!(store.resolve(&exported.filename), Some(exported.path.clone()));

        let bytes = std::fs::read(&exported.path).unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let slide_parts = archive
            .file_names()
            .filter(|n| n.starts_with("ppt/slides/slide"))
            .count();
        assert_eq!(slide_parts, slides.len());
    }

    #[tokio::test]
    async fn test_concurrent_saves_get_distinct_files() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ExportStore::open(tmp.path()).unwrap();

        let (a, b) = tokio::join!(store.save(vec![]), store.save(vec![]));
        let (a, b) = (a.unwrap(), b.unwrap());

        assert_ne!(a.filename, b.filename);
        assert!(a.path.exists() && b.path.exists());
    }
}
