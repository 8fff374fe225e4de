//! Code128 glyph generation and sizing
//!
//! Sizing is a two-step protocol: measure the glyph at the nominal bar
//! width, then render it again at the scaled bar width. Generators keep no
//! state between the two calls.

use crate::constants::{MIN_QUIET_ZONE_PT, QUIET_ZONE_MODULES};
use crate::layout::{BarcodeTarget, Rect};
use crate::surface::Surface;
use crate::types::RenderError;
use barcoders::sym::code128::Code128;

/// Character-set selectors understood by `barcoders`
const CODE_SET_B: char = 'Ɓ';
const CODE_SET_C: char = 'Ć';

/// Shortest trailing digit run worth switching to code set C for
const MIN_CODE_SET_C_RUN: usize = 4;

/// Produces barcode glyphs for text payloads
pub trait GlyphGenerator {
    /// Width in points the glyph would have at `bar_width`
    fn measure_natural_width(&self, payload: &str, bar_width: f32) -> Result<f32, RenderError>;

    /// Render the glyph with modules `bar_width` wide and bars `height` tall
    fn render(&self, payload: &str, bar_width: f32, height: f32) -> Result<Glyph, RenderError>;
}

/// A rendered barcode, positioned relative to its own bottom-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// (x offset, width) of each dark bar, in points
    bars: Vec<(f32, f32)>,
    width: f32,
    height: f32,
}

impl Glyph {
    /// Build a glyph from a module pattern (`1` = dark, `0` = light).
    ///
    /// Adjacent dark modules merge into one bar; `quiet_zone` points of
    /// blank space are added on both sides and count towards the width.
    pub fn from_modules(modules: &[u8], bar_width: f32, height: f32, quiet_zone: f32) -> Self {
        let mut bars = Vec::new();
        let mut run_start: Option<usize> = None;

        for (i, &module) in modules.iter().enumerate() {
            match (module != 0, run_start) {
                (true, None) => run_start = Some(i),
                (false, Some(start)) => {
                    bars.push(bar_extent(start, i, quiet_zone, bar_width));
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(start) = run_start {
            bars.push(bar_extent(start, modules.len(), quiet_zone, bar_width));
        }

        Self {
            bars,
            width: modules.len() as f32 * bar_width + 2.0 * quiet_zone,
            height,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn bars(&self) -> &[(f32, f32)] {
        &self.bars
    }

    /// Draw the bars in black with the glyph's bottom-left corner at (x, y)
    pub fn draw_to(&self, surface: &mut dyn Surface, x: f32, y: f32) {
        surface.set_fill_gray(0.0);
        for &(offset, width) in &self.bars {
            surface.fill_rect(Rect::new(x + offset, y, width, self.height));
        }
    }
}

fn bar_extent(start: usize, end: usize, quiet_zone: f32, bar_width: f32) -> (f32, f32) {
    (
        quiet_zone + start as f32 * bar_width,
        (end - start) as f32 * bar_width,
    )
}

/// Code128 generator backed by `barcoders`.
///
/// Each quiet zone is `quiet_zone_modules` bar widths, but never narrower
/// than `min_quiet_zone_pt`.
#[derive(Debug, Clone, Copy)]
pub struct Code128Generator {
    quiet_zone_modules: f32,
    min_quiet_zone_pt: f32,
}

impl Default for Code128Generator {
    fn default() -> Self {
        Self {
            quiet_zone_modules: QUIET_ZONE_MODULES,
            min_quiet_zone_pt: MIN_QUIET_ZONE_PT,
        }
    }
}

impl Code128Generator {
    /// Width of one quiet zone at `bar_width`
    pub fn quiet_zone(&self, bar_width: f32) -> f32 {
        (self.quiet_zone_modules * bar_width).max(self.min_quiet_zone_pt)
    }

    /// Module pattern for `payload`, start/check/stop symbols included
    pub fn encode(&self, payload: &str) -> Result<Vec<u8>, RenderError> {
        let barcode =
            Code128::new(code128_data(payload)).map_err(|e| RenderError::Barcode {
                payload: payload.to_string(),
                reason: e.to_string(),
            })?;
        let modules = barcode.encode();

        if !modules.iter().any(|&m| m != 0) {
            return Err(RenderError::EmptyGlyph {
                payload: payload.to_string(),
            });
        }
        Ok(modules)
    }
}

impl GlyphGenerator for Code128Generator {
    fn measure_natural_width(&self, payload: &str, bar_width: f32) -> Result<f32, RenderError> {
        let modules = self.encode(payload)?;
        Ok(modules.len() as f32 * bar_width + 2.0 * self.quiet_zone(bar_width))
    }

    fn render(&self, payload: &str, bar_width: f32, height: f32) -> Result<Glyph, RenderError> {
        let modules = self.encode(payload)?;
        Ok(Glyph::from_modules(
            &modules,
            bar_width,
            height,
            self.quiet_zone(bar_width),
        ))
    }
}

/// Annotate `payload` with code-set selectors.
///
/// Text goes in code set B. A trailing run of digits switches to code set
/// C, which packs two digits per symbol; an odd leading digit stays in B.
pub fn code128_data(payload: &str) -> String {
    let digit_run = payload
        .bytes()
        .rev()
        .take_while(|b| b.is_ascii_digit())
        .count();
    let split = payload.len() - digit_run;
    let split = if digit_run % 2 == 1 { split + 1 } else { split };
    let paired = payload.len() - split;

    if paired < MIN_CODE_SET_C_RUN {
        return format!("{CODE_SET_B}{payload}");
    }

    let (text, digits) = payload.split_at(split);
    if text.is_empty() {
        format!("{CODE_SET_C}{digits}")
    } else {
        format!("{CODE_SET_B}{text}{CODE_SET_C}{digits}")
    }
}

/// A glyph scaled towards its target, with the factor that was applied
#[derive(Debug, Clone, PartialEq)]
pub struct SizedGlyph {
    pub glyph: Glyph,
    pub scale: f32,
    pub bar_width: f32,
}

/// Two-pass sizing: measure at `nominal_bar_width`, scale towards the
/// target width with the factor capped at `max_scale`, render again.
///
/// A glyph that is still too wide at the capped scale is returned as is;
/// it overflows the target rather than being clipped.
pub fn size_glyph(
    generator: &dyn GlyphGenerator,
    payload: &str,
    target: BarcodeTarget,
    nominal_bar_width: f32,
    max_scale: f32,
) -> Result<SizedGlyph, RenderError> {
    if target.width <= 0.0 || target.height <= 0.0 {
        return Err(RenderError::NoRoom {
            payload: payload.to_string(),
            width: target.width,
            height: target.height,
        });
    }

    let natural_width = generator.measure_natural_width(payload, nominal_bar_width)?;
    if natural_width <= 0.0 {
        return Err(RenderError::EmptyGlyph {
            payload: payload.to_string(),
        });
    }

    let scale = (target.width / natural_width).min(max_scale);
    let bar_width = nominal_bar_width * scale;
    let glyph = generator.render(payload, bar_width, target.height)?;

    Ok(SizedGlyph {
        glyph,
        scale,
        bar_width,
    })
}
