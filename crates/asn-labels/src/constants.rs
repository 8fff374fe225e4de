//! Shared constants for label generation
//!
//! Defaults for every tunable in [`LabelOptions`](crate::LabelOptions)
//! live here, next to the unit conversions they depend on.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

// =============================================================================
// Label Text
// =============================================================================

/// Longest zero padding accepted; `i64::MAX` has 19 digits
pub const MAX_DIGITS: usize = 19;

/// Prefix placed in front of every label number
pub const DEFAULT_PREFIX: &str = "ASN";

/// Minimum digit count; longer numbers are never truncated
pub const DEFAULT_DIGITS: usize = 6;

/// Label text font size (points)
pub const DEFAULT_FONT_SIZE_PT: f32 = 10.0;

/// Distance from the inner area's bottom edge to the text baseline
pub const DEFAULT_TEXT_OFFSET_MM: f32 = 3.0;

// =============================================================================
// Label Geometry
// =============================================================================

/// Inset applied on all four sides of a grid cell
pub const DEFAULT_INNER_MARGIN_MM: f32 = 3.0;

/// Share of the inner height given to the barcode
pub const DEFAULT_BARCODE_HEIGHT_RATIO: f32 = 0.6;

// =============================================================================
// Barcode Sizing
// =============================================================================

/// Module width used for the measuring pass (points)
pub const DEFAULT_NOMINAL_BAR_WIDTH_PT: f32 = 0.5;

/// Upper bound on the stroke scale factor
pub const DEFAULT_MAX_SCALE: f32 = 5.0;

/// Quiet zone on each side of a Code128 symbol, in bar widths
pub const QUIET_ZONE_MODULES: f32 = 10.0;

/// Narrowest quiet zone allowed, whatever the bar width (a quarter inch)
pub const MIN_QUIET_ZONE_PT: f32 = 18.0;

// =============================================================================
// Separator Frame
// =============================================================================

/// Grey level of the cutting guide (0 = black, 1 = white)
pub const SEPARATOR_GREY: f32 = 0.83;

/// Line width for the cutting guide (points)
pub const SEPARATOR_LINE_WIDTH: f32 = 1.0;

// =============================================================================
// Output
// =============================================================================

/// Document title written into the PDF info dictionary
pub const DOCUMENT_TITLE: &str = "ASN Labels";

/// Suffix of the scratch file used while saving
pub const PARTIAL_FILE_SUFFIX: &str = "part";
