//! Label layout engine
//!
//! One sequential pass over the label range: lay out each label, size and
//! draw its barcode, draw its text and cutting guide, and break pages when
//! a sheet fills up. A label whose barcode cannot be produced is reported
//! and skipped; the batch always runs to the end.

use crate::barcode::{GlyphGenerator, size_glyph};
use crate::constants::{SEPARATOR_GREY, SEPARATOR_LINE_WIDTH};
use crate::layout::{LabelLayout, PageGeometry, needs_page_break, sheet_count};
use crate::options::LabelOptions;
use crate::surface::Surface;
use crate::types::RenderError;
use crate::validation::ValidatedParams;

/// A label whose barcode could not be drawn
#[derive(Debug, Clone, PartialEq)]
pub struct LabelFailure {
    pub value: i64,
    pub text: String,
    pub error: RenderError,
}

/// Summary of a generation pass
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GenerationReport {
    /// Labels placed (text and guide are drawn even if the barcode failed)
    pub labels_drawn: u64,
    /// Pages used
    pub pages: u64,
    /// Labels whose barcode is missing
    pub failures: Vec<LabelFailure>,
}

impl GenerationReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Draw every label of `params` onto `surface`.
///
/// The surface starts on the first page; page breaks are requested between
/// sheets, never after the last label.
pub fn generate(
    params: &ValidatedParams,
    options: &LabelOptions,
    generator: &dyn GlyphGenerator,
    surface: &mut dyn Surface,
) -> GenerationReport {
    let page = PageGeometry::from_options(options, &params.grid);
    let total = params.range.len();
    let per_sheet = page.labels_per_sheet();

    let mut report = GenerationReport {
        labels_drawn: 0,
        pages: sheet_count(total, per_sheet),
        failures: Vec::new(),
    };

    for (index, value) in (0u64..).zip(params.range.values()) {
        let layout = LabelLayout::compute(index, value, &page, options);

        log::debug!(
            "label {} -> sheet {}, row {}, col {}",
            layout.text,
            layout.slot.sheet_index,
            layout.slot.grid_pos.row,
            layout.slot.grid_pos.col
        );

        if let Err(error) = draw_label(&layout, options, generator, surface) {
            log::warn!(
                "Issue while rendering barcode with number {}: {}",
                layout.text,
                error
            );
            report.failures.push(LabelFailure {
                value,
                text: layout.text.clone(),
                error,
            });
        }
        report.labels_drawn += 1;

        if needs_page_break(index + 1, total, per_sheet) {
            surface.page_break();
        }
    }

    report
}

/// Draw one label: barcode, text, then the cutting guide.
///
/// A barcode error is returned only after the text and guide are drawn, so
/// a failed label still shows its number on the sheet.
pub fn draw_label(
    layout: &LabelLayout,
    options: &LabelOptions,
    generator: &dyn GlyphGenerator,
    surface: &mut dyn Surface,
) -> Result<(), RenderError> {
    let barcode = size_glyph(
        generator,
        &layout.text,
        layout.barcode_target,
        options.nominal_bar_width_pt,
        options.max_scale,
    )
    .map(|sized| {
        let (x, y) = layout.barcode_origin(sized.glyph.width());
        sized.glyph.draw_to(surface, x, y);
    });

    let text_width = surface.text_width(&layout.text, options.font_size_pt);
    let (text_x, text_y) = layout.text_origin(text_width);
    surface.set_fill_gray(0.0);
    surface.draw_text(text_x, text_y, options.font_size_pt, &layout.text);

    if options.draw_separator {
        surface.set_stroke_gray(SEPARATOR_GREY);
        surface.set_line_width(SEPARATOR_LINE_WIDTH);
        surface.stroke_rect(layout.inner);
    }

    barcode
}
