pub mod barcode;
pub mod constants;
mod engine;
pub mod layout;
pub mod metrics;
mod options;
mod pdf;
mod stats;
mod surface;
mod types;
mod validation;

pub use barcode::{Code128Generator, Glyph, GlyphGenerator, SizedGlyph, size_glyph};
pub use engine::{GenerationReport, LabelFailure, draw_label, generate};
pub use options::*;
pub use pdf::{PdfSurface, generate_pdf, generate_pdf_bytes, save_pdf};
pub use stats::{LabelStatistics, calculate_statistics};
pub use surface::{DrawOp, Recorder, Surface};
pub use types::*;
pub use validation::*;
