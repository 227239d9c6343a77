//! Raster drawing surface
//!
//! Plain pixel operations over an `RgbaImage`: stroked segments, filled
//! discs and 8x8 bitmap text. Layout coordinates in `[-1, 1]` are mapped
//! into the plot area below the title band.

use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgba, RgbaImage};

use crate::config::{RenderConfig, Rgb};
use crate::render::layout::Position;

const GLYPH_SIZE: u32 = 8;
const TITLE_PADDING: u32 = 8;

pub fn rgba([r, g, b]: Rgb) -> Rgba<u8> {
    Rgba([r, g, b, 255])
}

/// A frame being drawn
pub struct Canvas {
    image: RgbaImage,
    plot_left: f64,
    plot_top: f64,
    plot_width: f64,
    plot_height: f64,
}

impl Canvas {
    pub fn new(config: &RenderConfig) -> Self {
        let image = RgbaImage::from_pixel(config.width, config.height, rgba(config.background));

        let title_band = title_band_height(config.title_scale);
        let inset = f64::from(config.margin.saturating_add(config.node_radius));
        let plot_left = inset;
        let plot_top = f64::from(title_band) + inset;
        let plot_width = (f64::from(config.width) - 2.0 * inset).max(0.0);
        let plot_height = (f64::from(config.height) - plot_top - inset).max(0.0);

        Canvas {
            image,
            plot_left,
            plot_top,
            plot_width,
            plot_height,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Map a layout position into pixel coordinates (y grows downward)
    pub fn project(&self, p: Position) -> (f64, f64) {
        let x = self.plot_left + (p.x + 1.0) / 2.0 * self.plot_width;
        let y = self.plot_top + (1.0 - (p.y + 1.0) / 2.0) * self.plot_height;
        (x, y)
    }

    fn put(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x < self.image.width() && y < self.image.height() {
            self.image.put_pixel(x, y, color);
        }
    }

    /// Stroke a segment with the given width
    pub fn line(&mut self, from: (f64, f64), to: (f64, f64), width: f32, color: Rgba<u8>) {
        let half = (f64::from(width) / 2.0).max(0.5);
        let min_x = (from.0.min(to.0) - half).floor() as i64;
        let max_x = (from.0.max(to.0) + half).ceil() as i64;
        let min_y = (from.1.min(to.1) - half).floor() as i64;
        let max_y = (from.1.max(to.1) + half).ceil() as i64;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let center = (x as f64 + 0.5, y as f64 + 0.5);
                if segment_distance(center, from, to) <= half {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Fill a disc centred on `center`
    pub fn disc(&mut self, center: (f64, f64), radius: f64, color: Rgba<u8>) {
        let min_x = (center.0 - radius).floor() as i64;
        let max_x = (center.0 + radius).ceil() as i64;
        let min_y = (center.1 - radius).floor() as i64;
        let max_y = (center.1 + radius).ceil() as i64;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = x as f64 + 0.5 - center.0;
                let dy = y as f64 + 0.5 - center.1;
                if dx.hypot(dy) <= radius {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Draw `text` with its top edge at `top`, horizontally centred on `center_x`
    pub fn text(&mut self, text: &str, center_x: f64, top: f64, scale: u32, color: Rgba<u8>) {
        let width = text_width(text, scale);
        let mut left = (center_x - f64::from(width) / 2.0).round() as i64;
        let top = top.round() as i64;
        let scale = i64::from(scale);

        for ch in text.chars() {
            // Glyphs missing from the basic set render as blank cells.
            if let Some(glyph) = BASIC_FONTS.get(ch) {
                for (row, bits) in glyph.iter().enumerate() {
                    for col in 0..GLYPH_SIZE {
                        if bits & (1 << col) == 0 {
                            continue;
                        }
                        let x0 = left + i64::from(col) * scale;
                        let y0 = top + row as i64 * scale;
                        for dy in 0..scale {
                            for dx in 0..scale {
                                self.put(x0 + dx, y0 + dy, color);
                            }
                        }
                    }
                }
            }
            left += i64::from(GLYPH_SIZE) * scale;
        }
    }

    /// Draw a title centred in the band above the plot area
    pub fn title(&mut self, text: &str, scale: u32, color: Rgba<u8>) {
        let center_x = f64::from(self.width()) / 2.0;
        self.text(text, center_x, f64::from(TITLE_PADDING), scale, color);
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

/// Pixel width of `text` at `scale`
pub fn text_width(text: &str, scale: u32) -> u32 {
    let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
    chars.saturating_mul(text_height(scale))
}

/// Pixel height of one line of text at `scale`
pub fn text_height(scale: u32) -> u32 {
    GLYPH_SIZE.saturating_mul(scale)
}

/// Height reserved above the plot area for a title at `scale`
pub fn title_band_height(scale: u32) -> u32 {
    text_height(scale).saturating_add(2 * TITLE_PADDING)
}

/// Distance from `p` to the segment `a`-`b`
fn segment_distance(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq < f64::EPSILON {
        0.0
    } else {
        (((p.0 - a.0) * dx + (p.1 - a.1) * dy) / len_sq).clamp(0.0, 1.0)
    };
    let closest = (a.0 + t * dx, a.1 + t * dy);
    (p.0 - closest.0).hypot(p.1 - closest.1)
}
