use core_types::RasterImage;

/// Linear undo/redo history of image snapshots.
///
/// Two stacks of complete snapshots, plus `original_index`: the number of
/// buffers at the bottom of the undo stack ending at the most recent
/// non-zoom-derived one. Zoom requests resample from that base image, so
/// repeated zooms compose from one reference instead of drifting through
/// successive resamples. Undo and redo never adjust the index; an index of
/// zero or one past the stack top means no base is currently reachable.
#[derive(Debug, Default)]
pub struct EditHistory {
    undo: Vec<RasterImage>,
    redo: Vec<RasterImage>,
    original_index: usize,
}

impl EditHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all history with a freshly loaded image. The image counts as
    /// non-zoomed, so it immediately serves as the zoom base.
    pub fn reset(&mut self, initial: RasterImage) {
        self.undo.clear();
        self.redo.clear();
        self.original_index = 0;
        self.push(initial, false);
    }

    /// Record an edit result. Any pending redo chain is discarded; history
    /// forward of this point no longer exists.
    pub fn push(&mut self, result: RasterImage, zoom_derived: bool) {
        self.undo.push(result);
        self.redo.clear();
        if !zoom_derived {
            self.original_index += 1;
        }
    }

    /// Step back one snapshot. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.undo.pop() {
            Some(img) => {
                self.redo.push(img);
                true
            }
            None => false,
        }
    }

    /// Step forward one snapshot. Returns `false` when there is nothing to
    /// redo.
    pub fn redo(&mut self) -> bool {
        match self.redo.pop() {
            Some(img) => {
                self.undo.push(img);
                true
            }
            None => false,
        }
    }

    /// The image currently shown, if any.
    pub fn current(&self) -> Option<&RasterImage> {
        self.undo.last()
    }

    /// The most recent non-zoomed image, if it is still on the undo stack.
    pub fn current_original(&self) -> Option<&RasterImage> {
        if self.original_index >= 1 && self.original_index <= self.undo.len() {
            self.undo.get(self.original_index - 1)
        } else {
            None
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }
}
