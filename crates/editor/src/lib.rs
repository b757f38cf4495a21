pub mod history;

use std::fs;
use std::path::{Path, PathBuf};

use app_settings::AppSettings;
use core_types::{Operation, RasterImage, RepeatDirection};
use engine::{ops, ppm, FormatError};
use thiserror::Error;
use tracing::{debug, warn};

use crate::history::EditHistory;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("PPM format error: {0}")]
    Format(#[from] FormatError),

    #[error("no image loaded")]
    NoImage,

    #[error("no non-zoomed image available as a zoom base")]
    NoZoomBase,

    #[error("repeat count {0} is out of range")]
    InvalidRepeatCount(u32),

    #[error("zoom factor {0} must be positive")]
    InvalidZoomFactor(f64),
}

pub type Result<T> = std::result::Result<T, EditorError>;

/// The editing session: owns the snapshot history and exposes the command
/// and query surface the GUI shell drives. All work is synchronous and
/// single-threaded; images handed out are shared read-only borrows.
#[derive(Debug, Default)]
pub struct Editor {
    history: EditHistory,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a P3 file and make it the entire history. Any failure, whether
    /// reading or parsing, leaves the current session untouched; the history
    /// is only reset once the file has fully decoded.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!("Editor::load_file {}", path.display());
        let text = fs::read_to_string(path).map_err(|source| EditorError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let img = ppm::decode(&text)?;
        self.history.reset(img);
        Ok(())
    }

    /// Encode the current image as P3 and write it out.
    pub fn save_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!("Editor::save_file {}", path.display());
        let img = self.history.current().ok_or(EditorError::NoImage)?;
        fs::write(path, ppm::encode(img)).map_err(|source| EditorError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    /// Apply a transform to the current image and push the result. Zoom is
    /// special-cased twice: it validates its factor up front, and it reads
    /// from the most recent non-zoomed snapshot so consecutive zooms all
    /// resample the same base.
    pub fn apply(&mut self, op: Operation) -> Result<()> {
        debug!("Editor::apply {op:?}");
        let result = match op {
            Operation::ZeroRed => ops::zero_red(self.current_required()?),
            Operation::Grayscale => ops::grayscale(self.current_required()?),
            Operation::Invert => ops::invert(self.current_required()?),
            Operation::Mirror(dir) => ops::mirror(self.current_required()?, dir),
            Operation::Rotate(dir) => ops::rotate(self.current_required()?, dir),
            Operation::Repeat { direction, count } => {
                if count < 1 {
                    return Err(EditorError::InvalidRepeatCount(count));
                }
                let img = self.current_required()?;
                let tiled = match direction {
                    RepeatDirection::Horizontal => img.width() as u64 * count as u64,
                    RepeatDirection::Vertical => img.height() as u64 * count as u64,
                };
                if tiled > u32::MAX as u64 {
                    return Err(EditorError::InvalidRepeatCount(count));
                }
                ops::repeat(img, count, direction)
            }
            Operation::Zoom { factor } => {
                if !factor.is_finite() || factor <= 0.0 {
                    return Err(EditorError::InvalidZoomFactor(factor));
                }
                let base = self.history.current_original().ok_or(EditorError::NoZoomBase)?;
                let out = ops::zoom(base, factor);
                if out.is_empty() {
                    warn!("zoom factor {factor} collapsed the image to zero size");
                }
                out
            }
        };
        self.history.push(result, op.is_zoom());
        Ok(())
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// The image to render, if one is loaded.
    pub fn current_image(&self) -> Option<&RasterImage> {
        self.history.current()
    }

    /// The zoom base, when one is reachable on the undo stack.
    pub fn original_image(&self) -> Option<&RasterImage> {
        self.history.current_original()
    }

    /// The most recently opened image path from the persisted settings.
    pub fn last_used() -> Option<PathBuf> {
        AppSettings::load().ok().and_then(|s| s.last_image)
    }

    /// Record `path` as the most recently opened image and push it onto the
    /// recent-files list. Settings failures are logged, not surfaced; losing
    /// a recents entry never fails an edit.
    pub fn set_last_used(path: impl AsRef<Path>) {
        let path = path.as_ref();
        let mut settings = AppSettings::load().unwrap_or_default();
        settings.set_last_image(path.to_path_buf());
        settings.push_recent(path.to_path_buf());
        if let Err(err) = settings.save() {
            warn!("failed to persist last-used image {}: {err}", path.display());
        }
    }

    fn current_required(&self) -> Result<&RasterImage> {
        self.history.current().ok_or(EditorError::NoImage)
    }
}
