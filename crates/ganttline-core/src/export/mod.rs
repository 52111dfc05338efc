//! Static export of rendered timelines.
//!
//! Takes a captured [`Snapshot`] and writes it out as a PNG image or a
//! single-page PDF document. Failures never leave a partial file with a
//! misleading success path: the error is returned for the caller to
//! surface, and the user re-triggers the export.
//!
//! Concurrent exports are intentionally not serialized; each call is
//! independent and produces its own timestamped file.

mod pdf;

pub use pdf::{fit_scale, PX_TO_MM, USABLE_HEIGHT_MM, USABLE_WIDTH_MM};

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::Utc;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::error::ExportError;
use crate::render::Snapshot;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Pdf => "pdf",
        }
    }

    pub fn extension(&self) -> &'static str {
        self.as_str()
    }
}

/// Writes snapshots to disk as downloadable files.
pub struct Exporter {
    output_dir: PathBuf,
    title: String,
}

impl Exporter {
    /// Create an exporter writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            title: "Gantt Chart".to_string(),
        }
    }

    /// Set the document title used in the PDF header band.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Export a snapshot, returning the path of the written file.
    ///
    /// Files are named `gantt-chart-<epoch-ms>.<ext>`.
    ///
    /// # Errors
    /// * [`ExportError::RenderNotReady`] when the snapshot has zero
    ///   dimensions -- nothing is written
    /// * [`ExportError::Encode`] when bitmap or document encoding fails
    pub fn export(&self, snapshot: &Snapshot, format: ExportFormat) -> Result<PathBuf, ExportError> {
        if snapshot.is_empty() {
            return Err(ExportError::RenderNotReady {
                width: snapshot.width(),
                height: snapshot.height(),
            });
        }

        std::fs::create_dir_all(&self.output_dir)?;
        let file_name = format!(
            "gantt-chart-{}.{}",
            Utc::now().timestamp_millis(),
            format.extension()
        );
        let path = self.output_dir.join(file_name);

        match format {
            ExportFormat::Png => write_png(snapshot, &path)?,
            ExportFormat::Pdf => pdf::write_pdf(snapshot, &self.title, &path)?,
        }

        Ok(path)
    }
}

fn write_png(snapshot: &Snapshot, path: &Path) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    PngEncoder::new(&mut writer)
        .write_image(
            snapshot.image.as_raw(),
            snapshot.width(),
            snapshot.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| ExportError::Encode {
            format: "png",
            message: e.to_string(),
        })
}
