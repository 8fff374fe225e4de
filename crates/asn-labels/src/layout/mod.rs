//! Label layout calculations
//!
//! This module handles all the geometric calculations for a label sheet:
//! - Slot assignment (which page, row and column a label lands on)
//! - Cell and inner-area rectangles
//! - Placement of the barcode and the human-readable text

mod grid;
mod label;
mod types;

pub use grid::*;
pub use label::*;
pub use types::*;
