//! Logo rasterizer.

use skyline_core::{LogoConfig, SkylineResult};
use tracing::debug;

use crate::assets::AssetProvider;
use crate::voxel::{FaceGeometry, Mesh, TRIANGLES_PER_CUBE};

/// Rasterizes the provider's logo onto `face`.
///
/// Each solid logo pixel becomes one `scale` x `scale` voxel at face pixel
/// `(left * res_x + x * scale, top * res_y + y * scale)`. Columns are
/// scanned left to right, each from the bottom row up.
///
/// # Errors
///
/// Logo load failure and cube emission errors.
pub fn render_logo(
    face: &FaceGeometry,
    assets: &dyn AssetProvider,
    placement: &LogoConfig,
    depth: f64,
) -> SkylineResult<Mesh> {
    let logo = assets.logo()?;
    let origin_x = placement.left_offset * f64::from(face.resolution_x);
    let origin_y = placement.top_offset * f64::from(face.resolution_y());
    let scale = placement.scale;

    let mut mesh = Mesh::with_capacity(logo.solid_count() * TRIANGLES_PER_CUBE);
    for x in 0..logo.width() {
        for y in (0..logo.height()).rev() {
            if !logo.pixel(x, y).is_solid() {
                continue;
            }
            let cube = face.voxel(
                origin_x + f64::from(x) * scale,
                origin_y + f64::from(y) * scale,
                scale,
                depth,
            )?;
            mesh.extend_from_slice(&cube);
        }
    }

    debug!("rasterized {}x{} logo: {} triangles", logo.width(), logo.height(), mesh.len());
    Ok(mesh)
}
