use crate::constants::*;
use crate::types::*;

/// Tunables for a label sheet run
#[derive(Debug, Clone, PartialEq)]
pub struct LabelOptions {
    // Text
    pub prefix: String,
    pub digits: usize,
    pub font_size_pt: f32,
    pub text_offset_mm: f32,

    // Sheet
    pub paper_size: PaperSize,
    pub orientation: Orientation,

    // Per-label geometry
    pub inner_margin_mm: f32,
    pub barcode_height_ratio: f32,

    // Barcode sizing
    pub nominal_bar_width_pt: f32,
    pub max_scale: f32,

    // Cutting guide
    pub draw_separator: bool,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            digits: DEFAULT_DIGITS,
            font_size_pt: DEFAULT_FONT_SIZE_PT,
            text_offset_mm: DEFAULT_TEXT_OFFSET_MM,
            paper_size: PaperSize::A4,
            orientation: Orientation::Portrait,
            inner_margin_mm: DEFAULT_INNER_MARGIN_MM,
            barcode_height_ratio: DEFAULT_BARCODE_HEIGHT_RATIO,
            nominal_bar_width_pt: DEFAULT_NOMINAL_BAR_WIDTH_PT,
            max_scale: DEFAULT_MAX_SCALE,
            draw_separator: true,
        }
    }
}

impl LabelOptions {
    /// Page size in points, orientation applied
    pub fn page_size_pt(&self) -> (f32, f32) {
        let (w, h) = self.paper_size.dimensions_with_orientation(self.orientation);
        (mm_to_pt(w), mm_to_pt(h))
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let (w, h) = self.paper_size.dimensions_mm();
        if !(w > 0.0 && h > 0.0) {
            return Err(LabelError::Config(format!(
                "Paper dimensions must be positive, got {}x{} mm",
                w, h
            )));
        }

        if self.inner_margin_mm < 0.0 {
            return Err(LabelError::Config(
                "Inner margin cannot be negative".to_string(),
            ));
        }

        if !(self.barcode_height_ratio > 0.0 && self.barcode_height_ratio <= 1.0) {
            return Err(LabelError::Config(format!(
                "Barcode height ratio must be in (0, 1], got {}",
                self.barcode_height_ratio
            )));
        }

        if self.nominal_bar_width_pt <= 0.0 {
            return Err(LabelError::Config(
                "Nominal bar width must be positive".to_string(),
            ));
        }

        if self.max_scale <= 0.0 {
            return Err(LabelError::Config(
                "Maximum barcode scale must be positive".to_string(),
            ));
        }

        if self.digits > MAX_DIGITS {
            return Err(LabelError::Config(format!(
                "Digit count must be at most {}, got {}",
                MAX_DIGITS, self.digits
            )));
        }

        if self.font_size_pt <= 0.0 {
            return Err(LabelError::Config("Font size must be positive".to_string()));
        }

        Ok(())
    }
}
