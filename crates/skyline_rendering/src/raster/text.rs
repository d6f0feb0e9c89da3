//! Text rasterizer: draws a label into a face-sized bitmap, then turns every
//! lit pixel into one voxel.

use skyline_core::{Anchor, SkylineResult};
use tracing::debug;

use super::bitmap::MonoBitmap;
use crate::assets::{load_label_font, AssetProvider};
use crate::voxel::{FaceGeometry, Mesh};

/// A single-line label placed on the face.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    /// Text to draw.
    pub text: String,
    /// Target text height in face pixels.
    pub font_size: f64,
    /// Which part of the text sits on the anchor point.
    pub anchor: Anchor,
    /// Anchor position as a fraction of the face width.
    pub offset: f64,
}

impl TextLabel {
    /// Creates a label.
    #[must_use]
    pub fn new(text: impl Into<String>, font_size: f64, anchor: Anchor, offset: f64) -> Self {
        Self {
            text: text.into(),
            font_size,
            anchor,
            offset,
        }
    }
}

/// Face pixels per font cell for a font of `glyph_height` cells.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn glyph_scale(font_size: f64, glyph_height: u32) -> u32 {
    let cells = (font_size / f64::from(glyph_height.max(1))).floor();
    if cells.is_finite() && cells >= 1.0 {
        cells.min(f64::from(u32::MAX)) as u32
    } else {
        1
    }
}

/// Rasterizes `label` onto `face` with voxels protruding `depth` millimeters.
///
/// The font is loaded from `assets` for the duration of this call.
///
/// # Errors
///
/// Font load failure (primary and fallback) and cube emission errors.
pub fn render_text(
    face: &FaceGeometry,
    assets: &dyn AssetProvider,
    label: &TextLabel,
    depth: f64,
) -> SkylineResult<Mesh> {
    let font = load_label_font(assets)?;
    let res_x = face.resolution_x;
    let res_y = face.resolution_y();

    let scale = glyph_scale(label.font_size, font.height());
    let text_width = f64::from(font.measure(&label.text)) * f64::from(scale);
    let text_height = f64::from(font.height()) * f64::from(scale);

    let anchor_x = label.offset * f64::from(res_x);
    let anchor_y = f64::from(res_y) / 2.0;
    #[allow(clippy::cast_possible_truncation)]
    let left = (anchor_x - label.anchor.fraction() * text_width).floor() as i64;
    #[allow(clippy::cast_possible_truncation)]
    let top = (anchor_y - text_height / 2.0).floor() as i64;

    let mut bitmap = MonoBitmap::new(res_x, res_y);
    bitmap.draw_text(&font, &label.text, left, top, scale);

    let mut mesh = Mesh::with_capacity(bitmap.lit_count() * crate::voxel::TRIANGLES_PER_CUBE);
    for x in 0..bitmap.width() {
        for y in 0..bitmap.height() {
            if bitmap.get(x, y) {
                mesh.extend_from_slice(&face.voxel(f64::from(x), f64::from(y), 1.0, depth)?);
            }
        }
    }

    debug!(
        "rasterized {:?} with {} at scale {scale}: {} triangles",
        label.text,
        font.name(),
        mesh.len()
    );
    Ok(mesh)
}
