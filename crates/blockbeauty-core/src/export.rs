//! Export pipeline: snapshot the card, then save the image.
//!
//! The pipeline never surfaces an error to the caller. A missing card is
//! skipped, and any collaborator failure is logged once and dropped.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::ExportResult;
use crate::highlight::{EditorOptions, Language, SyntaxTheme};
use crate::style::{Background, CardStyle};

/// Name every exported image is saved under.
pub const EXPORT_FILENAME: &str = "blockbeauty.png";

/// Everything needed to draw the card, detached from live UI state.
#[derive(Clone, Debug, PartialEq)]
pub struct CardSnapshot {
    pub width: u32,
    pub height: u32,
    pub padding: u32,
    pub background: Background,
    pub theme: SyntaxTheme,
    pub language: Language,
    pub filename: String,
    pub source: String,
    pub font_size: f32,
    pub word_wrap: bool,
}

impl CardSnapshot {
    pub fn capture(style: &CardStyle, options: &EditorOptions) -> Self {
        Self {
            width: style.width(),
            height: style.height(),
            padding: style.padding().pixels(),
            background: style.background(),
            theme: style.theme(),
            language: style.language(),
            filename: style.filename().to_string(),
            source: style.source().to_string(),
            font_size: options.font_size,
            word_wrap: options.word_wrap,
        }
    }
}

/// An encoded PNG.
#[derive(Clone, Debug, PartialEq)]
pub struct CardImage {
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

/// Converts a card snapshot into an encoded image.
pub trait Rasterizer: Send + Sync {
    fn snapshot(&self, card: &CardSnapshot) -> ExportResult<CardImage>;
}

/// Persists an encoded image under a filename.
pub trait ImageSaver: Send + Sync {
    fn save(&self, image: &CardImage, filename: &str) -> ExportResult<PathBuf>;
}

/// Saves images into a fixed directory, overwriting earlier exports.
#[derive(Clone, Debug)]
pub struct DownloadSaver {
    dir: PathBuf,
}

impl DownloadSaver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ImageSaver for DownloadSaver {
    fn save(&self, image: &CardImage, filename: &str) -> ExportResult<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(filename);
        std::fs::write(&path, &image.png)?;
        Ok(path)
    }
}

/// Result of one export attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    /// No card was attached; nothing happened.
    Skipped,
    /// The image was written to this path.
    Saved(PathBuf),
    /// A collaborator failed; the failure has been logged.
    Failed,
}

/// Runs snapshot → save against the configured collaborators.
pub struct Exporter<R, S> {
    rasterizer: R,
    saver: S,
}

impl<R: Rasterizer, S: ImageSaver> Exporter<R, S> {
    pub fn new(rasterizer: R, saver: S) -> Self {
        Self { rasterizer, saver }
    }

    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    pub fn saver(&self) -> &S {
        &self.saver
    }

    fn run(&self, card: &CardSnapshot) -> ExportResult<PathBuf> {
        let image = self.rasterizer.snapshot(card)?;
        tracing::debug!(width = image.width, height = image.height, bytes = image.png.len(), "card captured");
        self.saver.save(&image, EXPORT_FILENAME)
    }

    /// Export synchronously on the current thread.
    pub fn export(&self, card: Option<&CardSnapshot>) -> ExportOutcome {
        let Some(card) = card else {
            tracing::debug!("export requested before card was mounted");
            return ExportOutcome::Skipped;
        };

        match self.run(card) {
            Ok(path) => {
                tracing::info!("Exported card to {:?}", path);
                ExportOutcome::Saved(path)
            }
            Err(e) => {
                tracing::error!("Failed to export card: {}", e);
                ExportOutcome::Failed
            }
        }
    }
}

impl<R, S> Exporter<R, S>
where
    R: Rasterizer + 'static,
    S: ImageSaver + 'static,
{
    /// Export on the blocking pool so the UI thread keeps running.
    ///
    /// Concurrent calls are not serialized; each one runs to completion.
    pub async fn export_detached(self: Arc<Self>, card: Option<CardSnapshot>) -> ExportOutcome {
        let Some(card) = card else {
            return self.export(None);
        };

        match tokio::task::spawn_blocking(move || self.export(Some(&card))).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("Export task failed: {}", e);
                ExportOutcome::Failed
            }
        }
    }
}
