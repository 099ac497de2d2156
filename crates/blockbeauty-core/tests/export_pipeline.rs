//! Export pipeline tests
//!
//! Drives the Exporter with recording collaborators, plus the real
//! DownloadSaver against a temporary directory.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use blockbeauty_core::{
    CardImage, CardRasterizer, CardSnapshot, CardStyle, DownloadSaver, EditorOptions, ExportError, ExportOutcome,
    ExportResult, Exporter, ImageSaver, Rasterizer, EXPORT_FILENAME,
};

/// Rasterizer that returns a fixed payload or a capture error.
#[derive(Default)]
struct FakeRasterizer {
    fail: bool,
    calls: AtomicUsize,
}

impl Rasterizer for FakeRasterizer {
    fn snapshot(&self, card: &CardSnapshot) -> ExportResult<CardImage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ExportError::Capture("simulated capture failure".to_string()));
        }
        Ok(CardImage {
            width: card.width,
            height: card.height,
            png: vec![0x89, b'P', b'N', b'G'],
        })
    }
}

/// Saver that records the filenames it was asked to write.
#[derive(Default)]
struct RecordingSaver {
    fail: bool,
    saved: Mutex<Vec<String>>,
}

impl ImageSaver for RecordingSaver {
    fn save(&self, _image: &CardImage, filename: &str) -> ExportResult<PathBuf> {
        if self.fail {
            return Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full").into());
        }
        self.saved.lock().push(filename.to_string());
        Ok(PathBuf::from(filename))
    }
}

fn snapshot() -> CardSnapshot {
    CardSnapshot::capture(&CardStyle::new(), &EditorOptions::default())
}

#[test]
fn test_missing_card_skips_without_saving() {
    let exporter = Exporter::new(FakeRasterizer::default(), RecordingSaver::default());

    assert_eq!(exporter.export(None), ExportOutcome::Skipped);
    assert_eq!(exporter.rasterizer().calls.load(Ordering::SeqCst), 0);
    assert!(exporter.saver().saved.lock().is_empty());
}

#[test]
fn test_successful_export_uses_fixed_filename() {
    let exporter = Exporter::new(FakeRasterizer::default(), RecordingSaver::default());

    let outcome = exporter.export(Some(&snapshot()));
    assert_eq!(outcome, ExportOutcome::Saved(PathBuf::from(EXPORT_FILENAME)));
    assert_eq!(*exporter.saver().saved.lock(), vec!["blockbeauty.png".to_string()]);
}

#[test]
fn test_capture_failure_is_swallowed() {
    let rasterizer = FakeRasterizer {
        fail: true,
        ..Default::default()
    };
    let exporter = Exporter::new(rasterizer, RecordingSaver::default());

    assert_eq!(exporter.export(Some(&snapshot())), ExportOutcome::Failed);
    assert!(exporter.saver().saved.lock().is_empty());
}

#[test]
fn test_save_failure_is_swallowed() {
    let saver = RecordingSaver {
        fail: true,
        ..Default::default()
    };
    let exporter = Exporter::new(FakeRasterizer::default(), saver);

    assert_eq!(exporter.export(Some(&snapshot())), ExportOutcome::Failed);
    // No retry.
    assert_eq!(exporter.rasterizer().calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_snapshot_reflects_style() {
    let mut style = CardStyle::new();
    style.select_background(4);
    style.select_padding(2);
    style.set_filename("main.rs");
    style.set_source("fn main() {}");

    let options = EditorOptions {
        font_size: 20.0,
        word_wrap: false,
        ..Default::default()
    };
    let card = CardSnapshot::capture(&style, &options);
    assert_eq!(card.padding, 48);
    assert_eq!(card.filename, "main.rs");
    assert_eq!(card.source, "fn main() {}");
    assert_eq!(card.font_size, 20.0);
    assert!(!card.word_wrap);
    assert_eq!((card.width, card.height), (640, 500));
}

#[test]
fn test_download_saver_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let saver = DownloadSaver::new(dir.path().join("exports"));
    assert_eq!(saver.dir(), dir.path().join("exports"));
    let image = CardImage {
        width: 1,
        height: 1,
        png: vec![1, 2, 3],
    };

    let path = saver.save(&image, EXPORT_FILENAME).unwrap();
    assert_eq!(path, dir.path().join("exports").join("blockbeauty.png"));
    assert_eq!(std::fs::read(&path).unwrap(), vec![1, 2, 3]);

    // A second export overwrites the first.
    let image = CardImage { png: vec![9], ..image };
    saver.save(&image, EXPORT_FILENAME).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), vec![9]);
}

#[test]
fn test_real_card_export_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let rasterizer = CardRasterizer::new(None);
    let mut style = CardStyle::new();
    style.set_source("fn main() {\n\tprintln!(\"héllo → wörld\");\n}\n");
    let card = CardSnapshot::capture(&style, &EditorOptions::default());
    if let Err(ExportError::FontUnavailable(reason)) = rasterizer.snapshot(&card) {
        eprintln!("skipping, {}", reason);
        return;
    }

    let exporter = Exporter::new(rasterizer, DownloadSaver::new(dir.path()));
    let outcome = exporter.export(Some(&card));
    let path = dir.path().join(EXPORT_FILENAME);
    assert_eq!(outcome, ExportOutcome::Saved(path.clone()));

    let bytes = std::fs::read(&path).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (640, 500));
}

#[tokio::test]
async fn test_detached_export() {
    let dir = tempfile::tempdir().unwrap();
    let exporter = Arc::new(Exporter::new(
        FakeRasterizer::default(),
        DownloadSaver::new(dir.path()),
    ));

    let outcome = exporter.clone().export_detached(Some(snapshot())).await;
    assert_eq!(outcome, ExportOutcome::Saved(dir.path().join(EXPORT_FILENAME)));

    let outcome = exporter.clone().export_detached(None).await;
    assert_eq!(outcome, ExportOutcome::Skipped);
}

#[tokio::test]
async fn test_overlapping_exports_both_complete() {
    let exporter = Arc::new(Exporter::new(FakeRasterizer::default(), RecordingSaver::default()));

    let (a, b) = tokio::join!(
        exporter.clone().export_detached(Some(snapshot())),
        exporter.clone().export_detached(Some(snapshot())),
    );
    assert!(matches!(a, ExportOutcome::Saved(_)));
    assert!(matches!(b, ExportOutcome::Saved(_)));
    assert_eq!(exporter.saver().saved.lock().len(), 2);
}
