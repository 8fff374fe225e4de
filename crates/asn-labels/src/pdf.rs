use crate::barcode::Code128Generator;
use crate::constants::{DOCUMENT_TITLE, PARTIAL_FILE_SUFFIX};
use crate::engine::{GenerationReport, generate};
use crate::layout::Rect;
use crate::options::LabelOptions;
use crate::surface::Surface;
use crate::types::Result;
use crate::validation::ValidatedParams;
use printpdf::{
    BuiltinFont, Color, LinePoint, Mm, Op, PaintMode, PdfDocument, PdfPage, PdfSaveOptions,
    Point, Polygon, PolygonRing, Pt, Rgb, TextItem, WindingOrder,
};
use std::path::{Path, PathBuf};

/// Surface that collects printpdf operations, one list per page
pub struct PdfSurface {
    page_width_pt: f32,
    page_height_pt: f32,
    pages: Vec<Vec<Op>>,
    current: Vec<Op>,
}

impl PdfSurface {
    pub fn new(page_width_pt: f32, page_height_pt: f32) -> Self {
        Self {
            page_width_pt,
            page_height_pt,
            pages: Vec::new(),
            current: Vec::new(),
        }
    }

    /// Pages finished so far plus the one in progress
    pub fn page_count(&self) -> usize {
        self.pages.len() + 1
    }

    /// Serialize all pages into a PDF document
    pub fn finish(mut self, title: &str) -> Vec<u8> {
        self.pages.push(std::mem::take(&mut self.current));

        let width = Mm::from(Pt(self.page_width_pt));
        let height = Mm::from(Pt(self.page_height_pt));

        let mut doc = PdfDocument::new(title);
        doc.pages = self
            .pages
            .into_iter()
            .map(|ops| PdfPage::new(width, height, ops))
            .collect();

        let mut warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            log::debug!("PDF serialization produced {} warnings", warnings.len());
        }
        bytes
    }

    fn push_rect(&mut self, rect: Rect, mode: PaintMode) {
        let corners = [
            (rect.x, rect.y),
            (rect.right(), rect.y),
            (rect.right(), rect.top()),
            (rect.x, rect.top()),
        ];
        let points = corners
            .iter()
            .map(|&(x, y)| LinePoint {
                p: Point { x: Pt(x), y: Pt(y) },
                bezier: false,
            })
            .collect();

        self.current.push(Op::DrawPolygon {
            polygon: Polygon {
                rings: vec![PolygonRing { points }],
                mode,
                winding_order: WindingOrder::NonZero,
            },
        });
    }
}

fn grey(level: f32) -> Color {
    Color::Rgb(Rgb::new(level, level, level, None))
}

impl Surface for PdfSurface {
    fn set_stroke_gray(&mut self, level: f32) {
        self.current.push(Op::SetOutlineColor { col: grey(level) });
    }

    fn set_fill_gray(&mut self, level: f32) {
        self.current.push(Op::SetFillColor { col: grey(level) });
    }

    fn set_line_width(&mut self, width_pt: f32) {
        self.current.push(Op::SetOutlineThickness { pt: Pt(width_pt) });
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.push_rect(rect, PaintMode::Fill);
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.push_rect(rect, PaintMode::Stroke);
    }

    fn draw_text(&mut self, x: f32, y: f32, size_pt: f32, text: &str) {
        self.current.push(Op::StartTextSection);
        self.current.push(Op::SetTextCursor {
            pos: Point { x: Pt(x), y: Pt(y) },
        });
        self.current.push(Op::SetFontSizeBuiltinFont {
            font: BuiltinFont::Helvetica,
            size: Pt(size_pt),
        });
        self.current.push(Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(text.to_string())],
            font: BuiltinFont::Helvetica,
        });
        self.current.push(Op::EndTextSection);
    }

    fn page_break(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
    }
}

/// Lay out and serialize the whole label sheet in memory
pub fn generate_pdf_bytes(
    params: &ValidatedParams,
    options: &LabelOptions,
) -> Result<(Vec<u8>, GenerationReport)> {
    options.validate()?;

    let (width, height) = options.page_size_pt();
    let mut surface = PdfSurface::new(width, height);
    let report = generate(params, options, &Code128Generator::default(), &mut surface);

    Ok((surface.finish(DOCUMENT_TITLE), report))
}

/// Generate the label PDF and write it to `output_path`
pub async fn generate_pdf(
    params: &ValidatedParams,
    options: &LabelOptions,
    output_path: impl AsRef<Path>,
) -> Result<GenerationReport> {
    let params = *params;
    let options = options.clone();

    let (bytes, report) =
        tokio::task::spawn_blocking(move || generate_pdf_bytes(&params, &options)).await??;

    save_pdf(bytes, output_path).await?;

    Ok(report)
}

/// Write `bytes` to `output_path` without ever leaving a truncated file.
///
/// Data goes to a sibling `.part` file first and is renamed into place;
/// the scratch file is removed if anything fails.
pub async fn save_pdf(bytes: Vec<u8>, output_path: impl AsRef<Path>) -> Result<()> {
    let output_path = output_path.as_ref();
    let partial = partial_path(output_path);

    let written = async {
        tokio::fs::write(&partial, &bytes).await?;
        tokio::fs::rename(&partial, output_path).await
    }
    .await;

    if let Err(e) = written {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(e.into());
    }

    log::info!("Wrote {} bytes to {}", bytes.len(), output_path.display());
    Ok(())
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(PARTIAL_FILE_SUFFIX);
    PathBuf::from(name)
}
