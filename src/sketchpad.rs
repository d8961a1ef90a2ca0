//! The widget state container
//!
//! One `Sketchpad` owns everything the digit widget mutates: the drawing
//! surface, the recorded strokes, the current prediction, the busy flag,
//! and the feedback tally. All updates go through named methods so hosts
//! never reach into fields, and the container never touches a UI framework.

use std::sync::Arc;

use crate::error::Result;
use crate::rendering::raster::{rasterize, TargetGrid};
use crate::rendering::Canvas;
use crate::tally::FeedbackTally;
use crate::{Classifier, PadConfig, PadSnapshot, Point, Stroke};

type OnPredictionHandler = Arc<dyn Fn(u8) + Send + Sync>;

/// Explicit, single-owner state for the sketch widget.
///
/// The container is strictly sequential: every operation is a plain method
/// call that runs to completion, and a classify request is only in flight
/// inside [`Sketchpad::submit_with`]. Overlapping submissions are therefore
/// impossible by construction rather than guarded by a queue.
pub struct Sketchpad {
    config: PadConfig,
    canvas: Canvas,
    strokes: Vec<Stroke>,
    /// Points of the stroke currently being drawn, if the pointer is down.
    active: Option<Stroke>,
    prediction: Option<u8>,
    submitting: bool,
    tally: FeedbackTally,
    on_prediction: Option<OnPredictionHandler>,
}

impl Sketchpad {
    pub fn new(config: PadConfig) -> Self {
        let canvas = Canvas::new(config.stroke_width, config.ink_shade);
        Self {
            config,
            canvas,
            strokes: Vec::new(),
            active: None,
            prediction: None,
            submitting: false,
            tally: FeedbackTally::new(),
            on_prediction: None,
        }
    }

    pub fn config(&self) -> &PadConfig {
        &self.config
    }

    // --- Pointer events ---

    /// Start a stroke at (x, y). If a previous stroke was never released
    /// (a missed pointer-up), it is closed first.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        if self.active.is_some() {
            self.pointer_up();
        }
        self.canvas.begin_stroke(x, y);
        self.active = Some(vec![Point::new(x, y)]);
    }

    /// Extend the active stroke. Ignored while the pointer is up, matching
    /// hover movement over the surface.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if let Some(stroke) = self.active.as_mut() {
            stroke.push(Point::new(x, y));
            self.canvas.line_to(x, y);
        }
    }

    /// Finish the active stroke and append it to the recording. A stroke
    /// with a single point is still recorded even though it paints nothing.
    pub fn pointer_up(&mut self) {
        if let Some(stroke) = self.active.take() {
            self.strokes.push(stroke);
            self.canvas.end_stroke();
        }
    }

    /// Paint a pre-recorded stroke list, e.g. one loaded from a file.
    pub fn replay_strokes(&mut self, strokes: &[Stroke]) {
        self.canvas.paint_strokes(strokes);
        self.strokes.extend_from_slice(strokes);
    }

    // --- State updates ---

    /// Clear the surface, the stroke recording, and the current prediction.
    /// The feedback tally survives: it describes the session, not the
    /// current drawing.
    pub fn reset(&mut self) {
        self.canvas.clear();
        self.strokes.clear();
        self.active = None;
        self.prediction = None;
    }

    /// Set or clear the current prediction. Labels outside 0..=9 are
    /// discarded. Storing a label fires the `on_prediction` handler.
    pub fn set_prediction(&mut self, label: Option<u8>) {
        self.prediction = label.filter(|l| *l <= 9);
        if let (Some(label), Some(cb)) = (self.prediction, &self.on_prediction) {
            cb(label);
        }
    }

    /// Record user feedback on the current prediction. No-op when no
    /// prediction is held.
    pub fn record_feedback(&mut self, was_correct: bool) {
        if let Some(label) = self.prediction {
            self.tally.record(label, was_correct);
        }
    }

    /// Rasterize the surface and ask the classifier for a digit.
    ///
    /// On success the prediction is stored through [`Self::set_prediction`],
    /// which fires the `on_prediction` handler. On failure the error is
    /// logged and returned, and every other piece of state is left exactly
    /// as it was, so the user can redraw or resubmit. Submitting a blank
    /// surface is allowed; the grid is simply all zeros.
    pub fn submit_with(&mut self, classifier: &dyn Classifier) -> Result<u8> {
        self.submitting = true;
        let grid = rasterize(self.canvas.bitmap());
        let outcome = classifier.classify(&grid);
        self.submitting = false;

        match outcome {
            Ok(label) => {
                self.set_prediction(Some(label));
                Ok(label)
            }
            Err(e) => {
                log::warn!("{} classifier failed: {}", classifier.name(), e);
                Err(e)
            }
        }
    }

    // --- Callbacks ---

    /// Register a callback invoked with each successful prediction.
    pub fn on_prediction<F>(&mut self, cb: F)
    where
        F: Fn(u8) + Send + Sync + 'static,
    {
        self.on_prediction = Some(Arc::new(cb));
    }

    /// Remove a previously registered on_prediction callback if any.
    pub fn clear_on_prediction(&mut self) {
        self.on_prediction = None;
    }

    // --- Accessors ---

    pub fn prediction(&self) -> Option<u8> {
        self.prediction
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn tally(&self) -> &FeedbackTally {
        &self.tally
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Rasterize the current surface without submitting it.
    pub fn grid(&self) -> TargetGrid {
        rasterize(self.canvas.bitmap())
    }

    /// The current grid as terminal-friendly text art.
    pub fn render_grid_text(&self) -> String {
        self.grid().to_text()
    }

    /// Summarize the pad for host UIs.
    pub fn snapshot(&self) -> PadSnapshot {
        PadSnapshot {
            prediction: self.prediction,
            submitting: self.submitting,
            stroke_count: self.strokes.len(),
            inked_cells: self.grid().inked_cells(),
            total_correct: self.tally.total_correct(),
            total_incorrect: self.tally.total_incorrect(),
        }
    }
}
