//! Per-label placement
//!
//! Everything here is pure geometry; nothing is drawn.

use crate::constants::mm_to_pt;
use crate::options::LabelOptions;

use super::{LabelSlot, PageGeometry, Rect, cell_bounds, inner_area, label_slot};

/// Format a label value: prefix followed by the zero-padded number.
///
/// Padding is a minimum; values wider than `digits` are kept whole.
pub fn format_label_text(prefix: &str, digits: usize, value: i64) -> String {
    format!("{prefix}{value:0digits$}")
}

/// Size the barcode should be scaled towards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarcodeTarget {
    pub width: f32,
    pub height: f32,
}

/// All geometry for one label, before any glyph is generated
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLayout {
    pub slot: LabelSlot,
    pub value: i64,
    pub text: String,
    /// Outer cell on the page
    pub cell: Rect,
    /// Cell after the inner margin
    pub inner: Rect,
    pub barcode_target: BarcodeTarget,
    /// Baseline of the text above the inner area's bottom edge
    pub text_offset_pt: f32,
}

impl LabelLayout {
    pub fn compute(index: u64, value: i64, page: &PageGeometry, options: &LabelOptions) -> Self {
        let slot = label_slot(index, page.columns, page.rows);
        let cell = cell_bounds(page, slot.grid_pos);
        let inner = inner_area(&cell, mm_to_pt(options.inner_margin_mm));

        Self {
            slot,
            value,
            text: format_label_text(&options.prefix, options.digits, value),
            cell,
            inner,
            barcode_target: BarcodeTarget {
                width: inner.width,
                height: inner.height * options.barcode_height_ratio,
            },
            text_offset_pt: mm_to_pt(options.text_offset_mm),
        }
    }

    /// Bottom-left corner for a glyph of the given width.
    ///
    /// Centered horizontally; the glyph's top edge sits on the inner
    /// area's top edge. Glyphs wider than the area overflow evenly.
    pub fn barcode_origin(&self, glyph_width: f32) -> (f32, f32) {
        let x = self.inner.x + (self.inner.width - glyph_width) / 2.0;
        let y = self.inner.y + (self.inner.height - self.barcode_target.height);
        (x, y)
    }

    /// Baseline start for text of the given width
    pub fn text_origin(&self, text_width: f32) -> (f32, f32) {
        let x = self.inner.x + (self.inner.width - text_width) / 2.0;
        let y = self.inner.y + self.text_offset_pt;
        (x, y)
    }
}
