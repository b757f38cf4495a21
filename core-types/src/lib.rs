use serde::{Deserialize, Serialize};

mod raster;

pub use raster::RasterImage;

/// Axis for the mirror transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MirrorDirection {
    Horizontal,
    Vertical,
}

/// Quarter-turn direction for the rotate transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotateDirection {
    Clockwise,
    CounterClockwise,
}

/// Axis along which the repeat transform tiles the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatDirection {
    Horizontal,
    Vertical,
}

/// One user-requested edit together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Operation {
    ZeroRed,
    Grayscale,
    Invert,
    Mirror(MirrorDirection),
    Rotate(RotateDirection),
    Repeat {
        direction: RepeatDirection,
        count: u32,
    },
    Zoom {
        factor: f64,
    },
}

impl Operation {
    /// Zoom results are kept out of the non-zoomed history chain, so later
    /// zooms resample from a clean base instead of an already-zoomed image.
    pub fn is_zoom(self) -> bool {
        matches!(self, Operation::Zoom { .. })
    }
}
