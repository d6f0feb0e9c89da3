//! Off-screen monochrome raster the labels are drawn into.

use crate::assets::BitmapFont;

/// A width x height grid of on/off pixels, row-major from the top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonoBitmap {
    width: u32,
    height: u32,
    pixels: Vec<bool>,
}

impl MonoBitmap {
    /// Creates an all-off bitmap.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; width as usize * height as usize],
        }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Whether pixel `(x, y)` is on. Out-of-range reads are off.
    #[inline]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.pixels[self.index(x, y)]
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Number of lit pixels.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }

    /// Lights a `scale` x `scale` block at `(x, y)`, clipped to the bitmap.
    ///
    /// The block is clipped before filling, so the cost never exceeds the
    /// bitmap's own size however large `scale` is.
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    fn fill_block(&mut self, x: i64, y: i64, scale: u32) {
        let clip = |start: i64, limit: u32| {
            let limit = i64::from(limit);
            let end = start.saturating_add(i64::from(scale));
            (start.clamp(0, limit) as u32, end.clamp(0, limit) as u32)
        };
        let (left, right) = clip(x, self.width);
        let (top, bottom) = clip(y, self.height);
        if left >= right {
            return;
        }
        for row in top..bottom {
            let start = self.index(left, row);
            let end = self.index(right - 1, row) + 1;
            self.pixels[start..end].fill(true);
        }
    }

    /// Draws `text` with its top-left corner at `(x, y)`, each font cell
    /// becoming a `scale` x `scale` block. Pixels outside the bitmap are
    /// clipped.
    pub fn draw_text(&mut self, font: &BitmapFont, text: &str, x: i64, y: i64, scale: u32) {
        let advance = i64::from(font.advance()) * i64::from(scale);
        let mut pen_x = x;
        for ch in text.chars() {
            if pen_x >= i64::from(self.width) {
                break;
            }
            if let Some(glyph) = font.glyph(ch) {
                for row in 0..font.height() {
                    for col in 0..font.width() {
                        if font.is_ink(glyph, col, row) {
                            self.fill_block(
                                pen_x + i64::from(col) * i64::from(scale),
                                y + i64::from(row) * i64::from(scale),
                                scale,
                            );
                        }
                    }
                }
            }
            pen_x = pen_x.saturating_add(advance);
        }
    }
}
