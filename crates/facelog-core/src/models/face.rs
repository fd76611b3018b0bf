use serde::{Deserialize, Serialize};

/// Bounding box of a detected face, in source-image pixel space with a
/// top-left origin.
///
/// `x`/`y` are signed because some detectors report boxes that start slightly
/// outside the frame; drawing clamps to image bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceBox {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl FaceBox {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}
