//! Layout data types for label sheets

use crate::options::LabelOptions;
use crate::validation::GridSpec;

/// Position within the grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Where a label lands in the output document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelSlot {
    /// 0-based offset from the first label of the range
    pub index: u64,
    /// Output page (0-based)
    pub sheet_index: u64,
    /// Position among the labels of its sheet, row-major
    pub position_in_sheet: usize,
    /// Cell within the sheet grid
    pub grid_pos: GridPosition,
}

/// Physical page size and the derived cell size, all in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub page_width_pt: f32,
    pub page_height_pt: f32,
    pub columns: usize,
    pub rows: usize,
    pub label_width_pt: f32,
    pub label_height_pt: f32,
}

impl PageGeometry {
    pub fn new(page_width_pt: f32, page_height_pt: f32, grid: &GridSpec) -> Self {
        Self {
            page_width_pt,
            page_height_pt,
            columns: grid.columns(),
            rows: grid.rows(),
            label_width_pt: page_width_pt / grid.columns() as f32,
            label_height_pt: page_height_pt / grid.rows() as f32,
        }
    }

    pub fn from_options(options: &LabelOptions, grid: &GridSpec) -> Self {
        let (w, h) = options.page_size_pt();
        Self::new(w, h, grid)
    }

    pub fn labels_per_sheet(&self) -> usize {
        self.columns * self.rows
    }
}

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Shrink by `amount` on every side
    pub fn inset(&self, amount: f32) -> Self {
        Self {
            x: self.x + amount,
            y: self.y + amount,
            width: self.width - 2.0 * amount,
            height: self.height - 2.0 * amount,
        }
    }
}
