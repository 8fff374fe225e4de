use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabelError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, LabelError>;

/// Failure to produce the barcode for a single label.
///
/// These never abort a batch; the engine collects them into the
/// [`GenerationReport`](crate::GenerationReport).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("cannot encode '{payload}': {reason}")]
    Barcode { payload: String, reason: String },
    #[error("barcode for '{payload}' has no bars")]
    EmptyGlyph { payload: String },
    #[error("no room for the barcode of '{payload}' ({width}x{height} pt)")]
    NoRoom {
        payload: String,
        width: f32,
        height: f32,
    },
}

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Orientation {
    /// Portrait: height > width
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Supported label sheet sizes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PaperSize {
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PaperSize::A4 => "A4",
            PaperSize::A5 => "A5",
            PaperSize::Letter => "Letter",
            PaperSize::Legal => "Legal",
            PaperSize::Custom { .. } => "Custom",
        }
    }
}
