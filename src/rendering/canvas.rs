//! Freehand stroke painting onto the source bitmap
//!
//! The canvas mirrors what a 2D drawing context does for a pen tool: while a
//! stroke is active, each new point extends a thick polyline from the
//! previous one. Segments are rendered by stamping a square brush along the
//! interpolated line, which is cheap and plenty for a 280x280 surface.

use crate::rendering::SourceBitmap;
use crate::{Point, Stroke, CANVAS_HEIGHT, CANVAS_WIDTH};

/// A drawing surface with an active-stroke cursor.
#[derive(Debug, Clone)]
pub struct Canvas {
    bitmap: SourceBitmap,
    /// Half the brush span in pixels, so the stamped square is
    /// `2 * brush_half + 1` wide.
    brush_half: i32,
    ink_shade: u8,
    /// Pen position while a stroke is in progress.
    pen: Option<(f32, f32)>,
}

impl Canvas {
    /// Create a blank canvas with the given brush width and ink shade.
    /// Brush widths are capped at the surface width.
    pub fn new(stroke_width: u32, ink_shade: u8) -> Self {
        Self {
            bitmap: SourceBitmap::new(),
            brush_half: (stroke_width.min(CANVAS_WIDTH) as f32 / 2.0).ceil() as i32,
            ink_shade,
            pen: None,
        }
    }

    /// The painted surface.
    pub fn bitmap(&self) -> &SourceBitmap {
        &self.bitmap
    }

    /// Start a stroke at (x, y). No ink is laid down yet: a press with no
    /// movement leaves the surface untouched, matching butt-capped strokes.
    pub fn begin_stroke(&mut self, x: f32, y: f32) {
        self.pen = Some((x, y));
    }

    /// Extend the active stroke to (x, y), painting the segment from the
    /// current pen position. Without an active stroke this only moves the
    /// pen, like a bare `move_to`.
    pub fn line_to(&mut self, x: f32, y: f32) {
        match self.pen {
            Some((px, py)) => {
                self.stamp_segment(px, py, x, y);
                self.pen = Some((x, y));
            }
            None => self.pen = Some((x, y)),
        }
    }

    /// Finish the active stroke, if any.
    pub fn end_stroke(&mut self) {
        self.pen = None;
    }

    /// Erase everything and drop any active stroke.
    pub fn clear(&mut self) {
        self.bitmap.clear();
        self.pen = None;
    }

    /// Paint a full recorded stroke list onto the canvas, one stroke at a
    /// time. Single-point strokes paint nothing, same as live input.
    pub fn paint_strokes(&mut self, strokes: &[Stroke]) {
        for stroke in strokes {
            let mut points = stroke.iter();
            if let Some(Point { x, y }) = points.next() {
                self.begin_stroke(*x, *y);
            }
            for Point { x, y } in points {
                self.line_to(*x, *y);
            }
            self.end_stroke();
        }
    }

    /// Stamp the brush along the segment, one step per pixel of the longer
    /// axis. A zero-length segment paints nothing.
    ///
    /// Endpoints are pulled into brush reach of the surface first: ink
    /// cannot land beyond that band, and pointer capture may report
    /// coordinates arbitrarily far outside it. The clamp keeps the step
    /// count and the center casts below bounded.
    fn stamp_segment(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) {
        let reach = 2.0 * self.brush_half as f32;
        let x0 = x0.clamp(-reach, CANVAS_WIDTH as f32 + reach);
        let x1 = x1.clamp(-reach, CANVAS_WIDTH as f32 + reach);
        let y0 = y0.clamp(-reach, CANVAS_HEIGHT as f32 + reach);
        let y1 = y1.clamp(-reach, CANVAS_HEIGHT as f32 + reach);

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let steps = dx.max(dy).ceil() as i32;
        if steps == 0 {
            return;
        }
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let cx = (x0 + t * (x1 - x0)).round() as i32;
            let cy = (y0 + t * (y1 - y0)).round() as i32;
            self.stamp_brush(cx, cy);
        }
    }

    /// Paint one square brush footprint centered at (cx, cy). Pixels that
    /// fall outside the surface are skipped, so strokes may wander off the
    /// edge freely.
    fn stamp_brush(&mut self, cx: i32, cy: i32) {
        let shade = self.ink_shade;
        for oy in -self.brush_half..=self.brush_half {
            for ox in -self.brush_half..=self.brush_half {
                let px = cx + ox;
                let py = cy + oy;
                if px >= 0
                    && py >= 0
                    && (px as u32) < CANVAS_WIDTH
                    && (py as u32) < CANVAS_HEIGHT
                {
                    self.bitmap.set_pixel(px as u32, py as u32, shade, shade, shade, 255);
                }
            }
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        let cfg = crate::PadConfig::default();
        Self::new(cfg.stroke_width, cfg.ink_shade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_without_movement_paints_nothing() {
        let mut canvas = Canvas::default();
        canvas.begin_stroke(140.0, 140.0);
        canvas.end_stroke();
        assert!(canvas.bitmap().is_blank());
    }

    #[test]
    fn segment_paints_brush_width() {
        let mut canvas = Canvas::default();
        canvas.begin_stroke(100.0, 140.0);
        canvas.line_to(180.0, 140.0);
        canvas.end_stroke();

        let bitmap = canvas.bitmap();
        // Brush half-span is 5, so rows 135..=145 around the segment ink up.
        assert_eq!(bitmap.alpha_at(140, 140), 255);
        assert_eq!(bitmap.alpha_at(140, 135), 255);
        assert_eq!(bitmap.alpha_at(140, 145), 255);
        assert_eq!(bitmap.alpha_at(140, 134), 0);
        assert_eq!(bitmap.alpha_at(140, 146), 0);
        // Ink carries the configured shade with full opacity.
        let idx_probe = bitmap.data();
        let idx = ((140 * CANVAS_WIDTH + 140) * 4) as usize;
        assert_eq!(&idx_probe[idx..idx + 4], &[1, 1, 1, 255]);
    }

    #[test]
    fn off_surface_segments_are_clamped() {
        let mut canvas = Canvas::default();
        canvas.begin_stroke(-40.0, 10.0);
        canvas.line_to(400.0, 10.0);
        canvas.end_stroke();

        let bitmap = canvas.bitmap();
        assert_eq!(bitmap.alpha_at(0, 10), 255);
        assert_eq!(bitmap.alpha_at(CANVAS_WIDTH - 1, 10), 255);
        // Nothing below the brush span is touched.
        assert_eq!(bitmap.alpha_at(140, 30), 0);
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let mut canvas = Canvas::default();
        // Coordinates far beyond the surface, as a stuck pointer capture
        // can produce, must neither panic nor stall.
        canvas.begin_stroke(3.0e9, 0.0);
        canvas.line_to(3.0e9, 5.0);
        canvas.end_stroke();
        canvas.begin_stroke(f32::NAN, f32::NAN);
        canvas.line_to(10.0, 10.0);
        canvas.end_stroke();
        assert!(canvas.bitmap().is_blank());

        // A stroke entering from far away still paints its on-surface part.
        canvas.begin_stroke(-3.0e9, 140.0);
        canvas.line_to(140.0, 140.0);
        canvas.end_stroke();
        assert_eq!(canvas.bitmap().alpha_at(0, 140), 255);
        assert_eq!(canvas.bitmap().alpha_at(140, 140), 255);
        assert_eq!(canvas.bitmap().alpha_at(140, 120), 0);
    }

    #[test]
    fn line_to_without_begin_only_moves_pen() {
        let mut canvas = Canvas::default();
        canvas.line_to(50.0, 50.0);
        assert!(canvas.bitmap().is_blank());
        // The next point does draw, from the moved pen position.
        canvas.line_to(90.0, 50.0);
        assert_eq!(canvas.bitmap().alpha_at(70, 50), 255);
    }

    #[test]
    fn paint_strokes_replays_recording() {
        let strokes: Vec<Stroke> = vec![
            vec![Point::new(20.0, 20.0), Point::new(120.0, 20.0)],
            // Single-point stroke, paints nothing
            vec![Point::new(200.0, 200.0)],
        ];
        let mut canvas = Canvas::default();
        canvas.paint_strokes(&strokes);

        let bitmap = canvas.bitmap();
        assert_eq!(bitmap.alpha_at(70, 20), 255);
        assert_eq!(bitmap.alpha_at(200, 200), 0);
    }

    #[test]
    fn clear_forgets_active_stroke() {
        let mut canvas = Canvas::default();
        canvas.begin_stroke(10.0, 10.0);
        canvas.line_to(60.0, 10.0);
        canvas.clear();
        assert!(canvas.bitmap().is_blank());
        // A line after clear starts a fresh pen, not a segment from (60,10).
        canvas.line_to(100.0, 100.0);
        assert!(canvas.bitmap().is_blank());
    }
}
