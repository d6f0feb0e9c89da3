//! Voxel cube emitter.
//!
//! Every voxel in the model, from a tower tier to a single text pixel, is an
//! independent closed box of 12 triangles. Faces are never merged.
//!
//! ```text
//!        v7 ──────── v6
//!        /│          /│        z
//!      v4 ──────── v5 │        │  y
//!       │ v3 ───────│ v2       │ /
//!       │/          │/         │/
//!      v0 ──────── v1          └──── x
//! ```

use skyline_core::{SkylineError, SkylineResult};

use super::mesh::Triangle;

/// Triangles emitted per voxel.
pub const TRIANGLES_PER_CUBE: usize = 12;

/// Corner indices per triangle, counter-clockwise seen from outside,
/// faces ordered bottom, top, front (-Y), back (+Y), left (-X), right (+X).
const CUBE_FACES: [([usize; 3], [f32; 3]); TRIANGLES_PER_CUBE] = [
    ([0, 2, 1], [0.0, 0.0, -1.0]),
    ([0, 3, 2], [0.0, 0.0, -1.0]),
    ([4, 5, 6], [0.0, 0.0, 1.0]),
    ([4, 6, 7], [0.0, 0.0, 1.0]),
    ([0, 1, 5], [0.0, -1.0, 0.0]),
    ([0, 5, 4], [0.0, -1.0, 0.0]),
    ([3, 6, 2], [0.0, 1.0, 0.0]),
    ([3, 7, 6], [0.0, 1.0, 0.0]),
    ([0, 4, 7], [-1.0, 0.0, 0.0]),
    ([0, 7, 3], [-1.0, 0.0, 0.0]),
    ([1, 2, 6], [1.0, 0.0, 0.0]),
    ([1, 6, 5], [1.0, 0.0, 0.0]),
];

/// Emits the 12 triangles of the box with corner `(x, y, z)` and extents
/// `(dx, dy, dz)`.
///
/// # Errors
///
/// [`SkylineError::InvalidExtent`] if any extent is not a finite, strictly
/// positive number.
pub fn create_cube(
    x: f64,
    y: f64,
    z: f64,
    dx: f64,
    dy: f64,
    dz: f64,
) -> SkylineResult<[Triangle; TRIANGLES_PER_CUBE]> {
    if [dx, dy, dz].iter().any(|e| !(e.is_finite() && *e > 0.0)) {
        return Err(SkylineError::InvalidExtent([dx, dy, dz]));
    }

    #[allow(clippy::cast_possible_truncation)]
    let corner = |cx: f64, cy: f64, cz: f64| [cx as f32, cy as f32, cz as f32];
    let (x1, y1, z1) = (x + dx, y + dy, z + dz);
    let corners = [
        corner(x, y, z),
        corner(x1, y, z),
        corner(x1, y1, z),
        corner(x, y1, z),
        corner(x, y, z1),
        corner(x1, y, z1),
        corner(x1, y1, z1),
        corner(x, y1, z1),
    ];

    Ok(CUBE_FACES.map(|([a, b, c], normal)| {
        Triangle::new(normal, [corners[a], corners[b], corners[c]])
    }))
}
