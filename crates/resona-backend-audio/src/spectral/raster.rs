//! Text to time×frequency intensity raster.

use image::imageops::{self, FilterType};
use image::GrayImage;
use resona_spec::SPECTRAL_PIXELS_PER_SECOND;
use tracing::debug;

use super::font::FontChain;
use crate::error::{AudioError, AudioResult};

/// Number of frequency bands (raster rows).
pub const RASTER_HEIGHT: u32 = 64;

/// Font size the text is rendered at.
pub const FONT_SIZE: u32 = 40;

/// Blank margin left and right of the rendered text.
pub const TEXT_PADDING: u32 = 10;

/// How the rendered text was placed on the time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterLayout {
    /// Text fit; pasted unscaled with its left edge at `offset`.
    Centered {
        /// Column of the padded text image's left edge.
        offset: u32,
    },
    /// Text was wider than the time axis and squeezed to fit.
    Resized {
        /// Measured text width before resampling.
        from_width: u32,
    },
}

/// Intensity grid in [0, 1]; row 0 is the lowest frequency band.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrogramRaster {
    width: u32,
    height: u32,
    intensities: Vec<f64>,
    layout: RasterLayout,
}

impl SpectrogramRaster {
    /// Number of time columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of frequency rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Placement of the text.
    pub fn layout(&self) -> RasterLayout {
        self.layout
    }

    /// Intensity at `(row, column)`.
    pub fn intensity(&self, row: u32, column: u32) -> f64 {
        self.intensities[(row * self.width + column) as usize]
    }

    /// Intensities of one column, lowest band first.
    pub fn column(&self, column: u32) -> impl Iterator<Item = f64> + '_ {
        (0..self.height).map(move |row| self.intensity(row, column))
    }

    fn from_image(image: &GrayImage, layout: RasterLayout) -> Self {
        let intensities = image.pixels().map(|p| p.0[0] as f64 / 255.0).collect();
        Self {
            width: image.width(),
            height: image.height(),
            intensities,
            layout,
        }
    }
}

/// Renders text into a [`SpectrogramRaster`].
pub struct SpectrogramEncoder {
    fonts: FontChain,
    font_size: u32,
    height: u32,
}

impl Default for SpectrogramEncoder {
    fn default() -> Self {
        Self::new(FontChain::default())
    }
}

impl SpectrogramEncoder {
    /// Creates an encoder with the given font candidates.
    pub fn new(fonts: FontChain) -> Self {
        Self {
            fonts,
            font_size: FONT_SIZE,
            height: RASTER_HEIGHT,
        }
    }

    /// Raster width for a duration: 50 columns per second, floored.
    pub fn width_for(duration: f64) -> u32 {
        (duration * SPECTRAL_PIXELS_PER_SECOND).max(0.0) as u32
    }

    /// Rasterizes `text` for a clip of `duration` seconds.
    ///
    /// Text wider than the time axis is resampled (Lanczos3) to exactly the
    /// axis width; otherwise it is centered. The result is flipped so low
    /// frequencies sit in row 0.
    pub fn encode(&self, text: &str, duration: f64) -> AudioResult<SpectrogramRaster> {
        let width = Self::width_for(duration);
        if width == 0 {
            return Err(AudioError::invalid_param(
                "duration_seconds",
                format!("{} seconds is too short for a spectrogram column", duration),
            ));
        }

        let (font, (text_w, text_h)) = self.fonts.select(text, self.font_size);

        let mut text_image = GrayImage::new(text_w + 2 * TEXT_PADDING, self.height);
        let ty = (self.height as i64 - text_h as i64).div_euclid(2);
        font.draw(
            &mut text_image,
            text,
            self.font_size,
            TEXT_PADDING as i64,
            ty,
        )
        .ok_or_else(|| AudioError::synthesis(format!("font '{}' failed to draw", font.name())))?;

        let mut canvas = GrayImage::new(width, self.height);
        let layout = if text_w > width {
            debug!(from = text_w, to = width, "resizing text to fit duration");
            let resized = imageops::resize(&text_image, width, self.height, FilterType::Lanczos3);
            imageops::replace(&mut canvas, &resized, 0, 0);
            RasterLayout::Resized { from_width: text_w }
        } else {
            let offset = (width as i64 - text_image.width() as i64).div_euclid(2).max(0);
            imageops::replace(&mut canvas, &text_image, offset, 0);
            RasterLayout::Centered {
                offset: offset as u32,
            }
        };

        imageops::flip_vertical_in_place(&mut canvas);
        Ok(SpectrogramRaster::from_image(&canvas, layout))
    }
}
