//! Software rendering: the drawing surface and the grid rasterizer

pub mod canvas;
pub mod raster;

pub use canvas::Canvas;

use crate::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// The fixed-size RGBA surface strokes are painted onto.
///
/// Dimensions are always [`CANVAS_WIDTH`] x [`CANVAS_HEIGHT`]; the grid
/// rasterizer relies on that. Pixels start fully transparent, and only the
/// alpha channel carries meaning downstream: a pixel counts as inked when
/// its alpha is nonzero.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceBitmap {
    data: Vec<u8>,
}

impl SourceBitmap {
    /// Create a blank (fully transparent) surface.
    pub fn new() -> Self {
        Self {
            data: vec![0; (CANVAS_WIDTH * CANVAS_HEIGHT * 4) as usize],
        }
    }

    /// Create a surface with every pixel set to the given alpha.
    /// Color channels stay zero; handy for exercising the rasterizer.
    pub fn filled(alpha: u8) -> Self {
        let mut bitmap = Self::new();
        for px in bitmap.data.chunks_exact_mut(4) {
            px[3] = alpha;
        }
        bitmap
    }

    pub fn width(&self) -> u32 {
        CANVAS_WIDTH
    }

    pub fn height(&self) -> u32 {
        CANVAS_HEIGHT
    }

    /// Raw RGBA8 pixel data, row-major, `width * height * 4` bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Alpha channel of the pixel at (x, y).
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        debug_assert!(x < CANVAS_WIDTH && y < CANVAS_HEIGHT);
        self.data[((y * CANVAS_WIDTH + x) * 4 + 3) as usize]
    }

    /// The coverage plane alone: one alpha byte per pixel, row-major,
    /// `width * height` bytes. This is everything the rasterizer looks at.
    pub fn alpha_plane(&self) -> Vec<u8> {
        self.data.chunks_exact(4).map(|px| px[3]).collect()
    }

    /// Write one pixel. Coordinates outside the surface are ignored, which
    /// is what keeps off-surface stroke segments harmless.
    pub fn set_pixel(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) {
        if x < CANVAS_WIDTH && y < CANVAS_HEIGHT {
            let idx = ((y * CANVAS_WIDTH + x) * 4) as usize;
            self.data[idx] = r;
            self.data[idx + 1] = g;
            self.data[idx + 2] = b;
            self.data[idx + 3] = a;
        }
    }

    /// True when no pixel has been inked.
    pub fn is_blank(&self) -> bool {
        self.data.chunks_exact(4).all(|px| px[3] == 0)
    }

    /// Reset every pixel to fully transparent.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }
}

impl Default for SourceBitmap {
    fn default() -> Self {
        Self::new()
    }
}
