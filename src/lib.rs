//! Inkpad headless sketch widget
//!
//! A headless implementation of a freehand digit-sketch widget: strokes are
//! painted onto a fixed 280x280 software surface, downsampled into a 28x28
//! binary grid, and submitted to a classifier backend that returns the
//! predicted digit. User feedback on predictions is tallied in memory.
//!
//! # Features
//!
//! - **Remote Backend** (default): POSTs the grid as JSON to an HTTP
//!   classifier endpoint
//! - **Headless by Design**: no graphical toolkit; pointer events are plain
//!   method calls, so the widget can be embedded or driven from tests
//! - **Explicit State**: one `Sketchpad` container owns surface, prediction,
//!   and tally, with no hidden globals
//!
//! # Example
//!
//! ```
//! use inkpad::{OfflineClassifier, PadConfig, Sketchpad};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pad = Sketchpad::new(PadConfig::default());
//! pad.pointer_down(40.0, 220.0);
//! pad.pointer_move(240.0, 60.0);
//! pad.pointer_up();
//!
//! let digit = pad.submit_with(&OfflineClassifier::default())?;
//! println!("predicted: {}", digit);
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

// Software drawing surface and grid rasterizer
pub mod rendering;

// Remote HTTP classifier backend (POSTs the grid as JSON)
#[cfg(feature = "remote")]
pub mod remote;

// Offline classifier: fixed-answer backend for tests, demos, and builds
// without the `remote` feature
pub mod offline;

pub mod tally;

pub mod sketchpad;

// Async-friendly pad API (simple worker-backed abstraction)
pub mod async_api;

// Re-export the main types at the crate root for ergonomic examples
pub use async_api::Pad;
pub use offline::OfflineClassifier;
#[cfg(feature = "remote")]
pub use remote::RemoteClassifier;
pub use rendering::raster::{rasterize, TargetGrid};
pub use rendering::{Canvas, SourceBitmap};
pub use sketchpad::Sketchpad;
pub use tally::FeedbackTally;

/// Width of the drawing surface in pixels.
pub const CANVAS_WIDTH: u32 = 280;
/// Height of the drawing surface in pixels.
pub const CANVAS_HEIGHT: u32 = 280;
/// Side length of the downsampled grid sent to the classifier.
pub const GRID_SIZE: usize = 28;
/// Side length of the square block of surface pixels backing one grid cell.
pub const BLOCK_SIZE: usize = 10;

/// Configuration for the sketch pad
///
/// This struct contains the knobs a host application may want to adjust.
/// The defaults reproduce the reference widget: a 10px brush, near-black
/// ink, and a classifier listening on localhost. Surface and grid
/// dimensions are fixed crate constants ([`CANVAS_WIDTH`], [`GRID_SIZE`])
/// rather than configuration, because the classifier wire contract depends
/// on them.
///
/// # Examples
///
/// ```
/// let cfg = inkpad::PadConfig::default();
/// assert_eq!(cfg.stroke_width, 10);
/// assert!(cfg.endpoint.contains("/predict"));
/// ```
#[derive(Debug, Clone)]
pub struct PadConfig {
    /// Classifier endpoint that receives the grid POST
    pub endpoint: String,
    /// Timeout for classify requests in milliseconds
    pub timeout_ms: u64,
    /// User agent string to send with requests
    pub user_agent: String,
    /// Custom HTTP headers (tunnel-bypass or auth headers, typically)
    pub headers: HashMap<String, String>,
    /// Brush width in surface pixels
    pub stroke_width: u32,
    /// Grayscale shade of the ink (only the alpha channel feeds the grid)
    pub ink_shade: u8,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000/predict".to_string(),
            timeout_ms: 30000,
            user_agent: "inkpad/0.1".to_string(),
            headers: HashMap::new(),
            stroke_width: 10,
            ink_shade: 1,
        }
    }
}

/// A point on the drawing surface, in pixel coordinates
///
/// The surface origin is the top-left corner. Coordinates outside the
/// surface are accepted and clamped at paint time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One freehand stroke: the ordered points visited while the pointer was down.
pub type Stroke = Vec<Point>;

/// A point-in-time summary of the pad state
///
/// This type is returned by [`Sketchpad::snapshot`] and by the async facade,
/// and contains what a host UI needs to render prediction text, a busy
/// indicator, and tally counters without reaching into the container.
#[derive(Debug, Clone)]
pub struct PadSnapshot {
    /// Current prediction, if any
    pub prediction: Option<u8>,
    /// Whether a classify request is in flight
    pub submitting: bool,
    /// Number of strokes drawn since the last reset
    pub stroke_count: usize,
    /// Number of grid cells that currently rasterize to 255
    pub inked_cells: usize,
    /// Predictions confirmed correct, across all digits
    pub total_correct: u64,
    /// Predictions marked incorrect, across all digits
    pub total_incorrect: u64,
}

/// Core trait for classifier backend implementations
///
/// A backend takes the rasterized grid and returns the predicted digit. The
/// trait is object-safe so backends can be boxed and handed to the async
/// facade's worker thread.
pub trait Classifier {
    /// Short backend name, used in logs
    fn name(&self) -> &str;

    /// Classify a grid, returning the predicted digit in `0..=9`
    fn classify(&self, grid: &TargetGrid) -> Result<u8>;
}

/// Create a classifier with the default backend
///
/// This prefers the remote HTTP backend when the `remote` feature is enabled
/// (default). Without it, the offline fixed-answer backend is used so the
/// rest of the widget stays exercisable.
#[cfg(feature = "remote")]
pub fn new_classifier(config: &PadConfig) -> Result<impl Classifier> {
    remote::RemoteClassifier::new(config)
}

// Fallback when the remote backend is compiled out.
#[cfg(not(feature = "remote"))]
pub fn new_classifier(_config: &PadConfig) -> Result<impl Classifier> {
    Ok(offline::OfflineClassifier::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PadConfig::default();
        assert_eq!(config.stroke_width, 10);
        assert_eq!(config.ink_shade, 1);
        assert_eq!(config.timeout_ms, 30000);
        assert!(config.endpoint.starts_with("http://localhost"));
        assert!(config.headers.is_empty());
    }

    #[test]
    fn test_fixed_dimensions() {
        // The surface must tile exactly into grid blocks.
        assert_eq!(CANVAS_WIDTH as usize, GRID_SIZE * BLOCK_SIZE);
        assert_eq!(CANVAS_HEIGHT as usize, GRID_SIZE * BLOCK_SIZE);
    }

    #[test]
    fn test_point_roundtrip() {
        let p = Point::new(12.5, 99.0);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
