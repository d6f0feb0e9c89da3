//! Bitmap label fonts.
//!
//! ## Font Format
//!
//! ```text
//! # comment lines are allowed outside glyph blocks
//! size 5 7
//!
//! glyph A
//! .###.
//! #...#
//! ...          (exactly `height` rows of `width` cells)
//!
//! glyph space
//! .....
//! ```
//!
//! `#` cells are ink, `.` cells are paper.

use std::collections::HashMap;

use skyline_core::{SkylineError, SkylineResult};

/// Glyph substituted for characters the font does not know.
const REPLACEMENT: char = '?';

/// Largest accepted glyph side, in cells.
pub const MAX_GLYPH_SIDE: u32 = 256;

/// One character's ink cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    cells: Vec<bool>,
}

/// A fixed-cell bitmap font.
#[derive(Debug, Clone)]
pub struct BitmapFont {
    name: String,
    width: u32,
    height: u32,
    glyphs: HashMap<char, Glyph>,
}

impl BitmapFont {
    /// Parses a font document.
    ///
    /// # Errors
    ///
    /// [`SkylineError::Asset`] if the header is missing, a glyph is malformed
    /// or the font defines no glyphs.
    pub fn parse(name: &str, text: &str) -> SkylineResult<Self> {
        let bad = |reason: String| SkylineError::asset(name, reason);

        let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l.trim()));
        let mut size = None;
        let mut glyphs = HashMap::new();

        while let Some((line_no, line)) = lines.next() {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut words = line.split_whitespace();
            match words.next() {
                Some("size") => {
                    if size.is_some() {
                        return Err(bad(format!("line {line_no}: repeated size header")));
                    }
                    let mut dim = || -> Option<u32> { words.next()?.parse().ok() };
                    match (dim(), dim()) {
                        (Some(w), Some(h))
                            if (1..=MAX_GLYPH_SIDE).contains(&w)
                                && (1..=MAX_GLYPH_SIDE).contains(&h) =>
                        {
                            size = Some((w, h));
                        }
                        _ => return Err(bad(format!("line {line_no}: malformed size"))),
                    }
                }
                Some("glyph") => {
                    let (width, height) =
                        size.ok_or_else(|| bad(format!("line {line_no}: glyph before size")))?;
                    let ch = match words.next() {
                        Some("space") => ' ',
                        Some(label) if label.chars().count() == 1 => {
                            label.chars().next().unwrap_or(REPLACEMENT)
                        }
                        _ => return Err(bad(format!("line {line_no}: bad glyph name"))),
                    };
                    let cell_count = usize::try_from(width)
                        .ok()
                        .zip(usize::try_from(height).ok())
                        .and_then(|(w, h)| w.checked_mul(h))
                        .ok_or_else(|| bad(format!("line {line_no}: glyph too large")))?;
                    let mut cells = Vec::with_capacity(cell_count);
                    for _ in 0..height {
                        let (row_no, row) = lines
                            .next()
                            .ok_or_else(|| bad(format!("glyph {ch:?}: missing rows")))?;
                        if row.chars().count() != width as usize {
                            return Err(bad(format!("line {row_no}: expected {width} cells")));
                        }
                        for cell in row.chars() {
                            match cell {
                                '#' => cells.push(true),
                                '.' => cells.push(false),
                                other => {
                                    return Err(bad(format!("line {row_no}: bad cell {other:?}")))
                                }
                            }
                        }
                    }
                    glyphs.insert(ch, Glyph { cells });
                }
                _ => return Err(bad(format!("line {line_no}: unexpected {line:?}"))),
            }
        }

        let (width, height) = size.ok_or_else(|| bad("missing size header".to_string()))?;
        if glyphs.is_empty() {
            return Err(bad("font defines no glyphs".to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            width,
            height,
            glyphs,
        })
    }

    /// Font name, as given by the asset provider.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Glyph cell width.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Glyph cell height.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Looks up `ch`, falling back to the other letter case and then `?`.
    #[must_use]
    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs
            .get(&ch)
            .or_else(|| ch.to_uppercase().next().and_then(|u| self.glyphs.get(&u)))
            .or_else(|| ch.to_lowercase().next().and_then(|l| self.glyphs.get(&l)))
            .or_else(|| self.glyphs.get(&REPLACEMENT))
    }

    /// Whether cell `(col, row)` of `glyph` is ink. Cells outside the
    /// glyph are paper.
    #[inline]
    #[must_use]
    pub fn is_ink(&self, glyph: &Glyph, col: u32, row: u32) -> bool {
        if col >= self.width || row >= self.height {
            return false;
        }
        let index = row as usize * self.width as usize + col as usize;
        glyph.cells.get(index).copied().unwrap_or(false)
    }

    /// Horizontal advance per character, in font cells (one blank column).
    #[inline]
    #[must_use]
    pub const fn advance(&self) -> u32 {
        self.width + 1
    }

    /// Width of `text` in font cells, without trailing spacing.
    #[must_use]
    pub fn measure(&self, text: &str) -> u32 {
        let count = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
        if count == 0 {
            return 0;
        }
        count.saturating_mul(self.advance()) - 1
    }
}
