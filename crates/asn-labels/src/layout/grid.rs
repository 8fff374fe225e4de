//! Grid layout calculation
//!
//! Maps the linear sequence of labels onto pages, rows and columns, and
//! computes the rectangles each label is drawn into.

use super::{GridPosition, LabelSlot, PageGeometry, Rect};

// =============================================================================
// Slot Assignment
// =============================================================================

/// Compute the slot for the label at `index` (0-based from the range start).
///
/// Labels fill each sheet left-to-right, then top-to-bottom.
pub fn label_slot(index: u64, columns: usize, rows: usize) -> LabelSlot {
    let per_sheet = (columns * rows) as u64;
    let position_in_sheet = (index % per_sheet) as usize;

    LabelSlot {
        index,
        sheet_index: index / per_sheet,
        position_in_sheet,
        grid_pos: GridPosition::new(position_in_sheet / columns, position_in_sheet % columns),
    }
}

/// Number of sheets needed for `total_labels`
pub fn sheet_count(total_labels: u64, labels_per_sheet: usize) -> u64 {
    total_labels.div_ceil(labels_per_sheet as u64)
}

/// Whether a page break follows after `drawn` labels have been placed.
///
/// The last sheet never gets a trailing break, even when it is full.
pub fn needs_page_break(drawn: u64, total_labels: u64, labels_per_sheet: usize) -> bool {
    drawn % labels_per_sheet as u64 == 0 && drawn != total_labels
}

// =============================================================================
// Cell Calculations
// =============================================================================

/// Calculate the outer bounds of the cell at the given grid position.
///
/// Row 0 is the top of the page; rectangles use the PDF bottom-left origin.
pub fn cell_bounds(page: &PageGeometry, pos: GridPosition) -> Rect {
    let x = pos.col as f32 * page.label_width_pt;
    let y = page.page_height_pt - (pos.row + 1) as f32 * page.label_height_pt;

    Rect::new(x, y, page.label_width_pt, page.label_height_pt)
}

/// Drawable area of a cell after the inner margin
pub fn inner_area(cell: &Rect, margin_pt: f32) -> Rect {
    cell.inset(margin_pt)
}

// =============================================================================
// Tests
// =============================================================================
