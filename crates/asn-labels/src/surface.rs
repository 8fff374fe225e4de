//! Drawing surface abstraction
//!
//! The layout engine only talks to a [`Surface`]. [`PdfSurface`](crate::PdfSurface)
//! turns the calls into PDF content; [`Recorder`] keeps them as a list of
//! [`DrawOp`]s so layouts can be inspected and compared.

use crate::layout::Rect;
use crate::metrics;

/// A single drawing instruction, in points with a bottom-left origin
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    SetStrokeGray(f32),
    SetFillGray(f32),
    SetLineWidth(f32),
    FillRect(Rect),
    StrokeRect(Rect),
    Text {
        x: f32,
        y: f32,
        size_pt: f32,
        text: String,
    },
    PageBreak,
}

/// Something the label engine can draw on
pub trait Surface {
    /// Stroke colour as a grey level (0 = black, 1 = white)
    fn set_stroke_gray(&mut self, level: f32);

    /// Fill colour as a grey level; also used for text
    fn set_fill_gray(&mut self, level: f32);

    fn set_line_width(&mut self, width_pt: f32);

    fn fill_rect(&mut self, rect: Rect);

    fn stroke_rect(&mut self, rect: Rect);

    /// Draw Helvetica text with its baseline starting at (x, y)
    fn draw_text(&mut self, x: f32, y: f32, size_pt: f32, text: &str);

    /// Width of `text` in points at `size_pt`
    fn text_width(&self, text: &str, size_pt: f32) -> f32 {
        metrics::string_width(text, size_pt)
    }

    /// Finish the current page and start a new one
    fn page_break(&mut self);
}

/// Surface that records every call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recorder {
    ops: Vec<DrawOp>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of pages the recorded ops span
    pub fn page_count(&self) -> usize {
        1 + self
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::PageBreak))
            .count()
    }

    /// Recorded ops split at page breaks
    pub fn pages(&self) -> Vec<&[DrawOp]> {
        self.ops
            .split(|op| matches!(op, DrawOp::PageBreak))
            .collect()
    }
}

impl Surface for Recorder {
    fn set_stroke_gray(&mut self, level: f32) {
        self.ops.push(DrawOp::SetStrokeGray(level));
    }

    fn set_fill_gray(&mut self, level: f32) {
        self.ops.push(DrawOp::SetFillGray(level));
    }

    fn set_line_width(&mut self, width_pt: f32) {
        self.ops.push(DrawOp::SetLineWidth(width_pt));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ops.push(DrawOp::FillRect(rect));
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.ops.push(DrawOp::StrokeRect(rect));
    }

    fn draw_text(&mut self, x: f32, y: f32, size_pt: f32, text: &str) {
        self.ops.push(DrawOp::Text {
            x,
            y,
            size_pt,
            text: text.to_string(),
        });
    }

    fn page_break(&mut self) {
        self.ops.push(DrawOp::PageBreak);
    }
}
