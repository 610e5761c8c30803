//! Text rendering for the spectrogram encoder.
//!
//! Renderers are tried in order; the first one that can draw the whole
//! string wins. The chain always ends in a renderer that never refuses, so
//! font selection can degrade but never fail generation.

use image::{GrayImage, Luma};
use tracing::debug;

use super::glyphs::{FIRST_GLYPH, GLYPHS_5X7, GLYPHS_5X7_EXTRA};

const GLYPH_COLUMNS: u32 = 5;
const GLYPH_ROWS: u32 = 7;
/// Nominal em height of the 5x7 pattern, used to derive the pixel scale.
const GLYPH_EM: u32 = 8;

/// A source of rasterized glyphs.
pub trait TextRenderer {
    /// Short identifier for logging.
    fn name(&self) -> &str;

    /// Bounding box `(right, bottom)` of `text` drawn at the origin, or
    /// `None` if this renderer cannot draw every character.
    fn measure(&self, text: &str, size: u32) -> Option<(u32, u32)>;

    /// Draws `text` in full white with its origin at `(x, y)`.
    ///
    /// Pixels falling outside `canvas` are clipped. Returns `None` under the
    /// same conditions as [`TextRenderer::measure`].
    fn draw(&self, canvas: &mut GrayImage, text: &str, size: u32, x: i64, y: i64) -> Option<()>;
}

/// Block font built from 5x7 patterns scaled to the requested size.
#[derive(Debug, Clone)]
pub struct BitmapFont {
    name: &'static str,
    /// Glyph substituted for characters outside the table.
    substitute: Option<char>,
}

impl BitmapFont {
    /// Refuses text containing characters outside printable ASCII.
    pub fn strict() -> Self {
        Self {
            name: "block-5x7",
            substitute: None,
        }
    }

    /// Draws `?` for anything it has no glyph for.
    pub fn lenient() -> Self {
        Self {
            name: "block-5x7-fallback",
            substitute: Some('?'),
        }
    }

    fn scale(size: u32) -> u32 {
        (size / GLYPH_EM).max(1)
    }

    fn pattern(c: char) -> Option<&'static [u8; 7]> {
        let c = c.to_ascii_uppercase();
        let index = (c as u32).checked_sub(FIRST_GLYPH)? as usize;
        GLYPHS_5X7.get(index).or_else(|| {
            GLYPHS_5X7_EXTRA
                .iter()
                .find(|(symbol, _)| *symbol == c)
                .map(|(_, rows)| rows)
        })
    }

    fn glyphs(&self, text: &str) -> Option<Vec<&'static [u8; 7]>> {
        text.chars()
            .map(|c| {
                Self::pattern(c).or_else(|| self.substitute.and_then(Self::pattern))
            })
            .collect()
    }
}

impl TextRenderer for BitmapFont {
    fn name(&self) -> &str {
        self.name
    }

    fn measure(&self, text: &str, size: u32) -> Option<(u32, u32)> {
        let glyphs = self.glyphs(text)?;
        if glyphs.is_empty() {
            return Some((0, 0));
        }
        let scale = Self::scale(size);
        let advance = (GLYPH_COLUMNS + 1) * scale;
        let width = glyphs.len() as u32 * advance - scale;
        Some((width, GLYPH_ROWS * scale))
    }

    fn draw(&self, canvas: &mut GrayImage, text: &str, size: u32, x: i64, y: i64) -> Option<()> {
        let glyphs = self.glyphs(text)?;
        let scale = Self::scale(size) as i64;
        let advance = (GLYPH_COLUMNS as i64 + 1) * scale;
        let (width, height) = (canvas.width() as i64, canvas.height() as i64);

        for (index, rows) in glyphs.iter().enumerate() {
            let origin_x = x + index as i64 * advance;
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_COLUMNS {
                    if bits & (1 << (GLYPH_COLUMNS - 1 - col)) == 0 {
                        continue;
                    }
                    let px = origin_x + col as i64 * scale;
                    let py = y + row as i64 * scale;
                    for dy in 0..scale {
                        for dx in 0..scale {
                            let (cx, cy) = (px + dx, py + dy);
                            if (0..width).contains(&cx) && (0..height).contains(&cy) {
                                canvas.put_pixel(cx as u32, cy as u32, Luma([255]));
                            }
                        }
                    }
                }
            }
        }
        Some(())
    }
}

/// Ordered renderer candidates with a guaranteed final default.
pub struct FontChain {
    candidates: Vec<Box<dyn TextRenderer + Send + Sync>>,
    default: BitmapFont,
}

impl Default for FontChain {
    fn default() -> Self {
        Self::new(vec![Box::new(BitmapFont::strict())])
    }
}

impl FontChain {
    /// Creates a chain; [`BitmapFont::lenient`] is appended as the default.
    pub fn new(candidates: Vec<Box<dyn TextRenderer + Send + Sync>>) -> Self {
        Self {
            candidates,
            default: BitmapFont::lenient(),
        }
    }

    /// Picks the first renderer able to draw `text` and returns it with the
    /// measured bounding box.
    pub fn select(&self, text: &str, size: u32) -> (&dyn TextRenderer, (u32, u32)) {
        for candidate in &self.candidates {
            if let Some(bbox) = candidate.measure(text, size) {
                debug!(font = candidate.name(), "selected font");
                return (candidate.as_ref(), bbox);
            }
            debug!(font = candidate.name(), "font cannot render text, trying next");
        }
        let bbox = self.default.measure(text, size).unwrap_or((0, 0));
        debug!(font = self.default.name(), "using default font");
        (&self.default, bbox)
    }
}
