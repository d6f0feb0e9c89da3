//! Raster face: maps face pixels to physical voxels on the front of the plinth.
//!
//! ```text
//!  z = 0  ┌──────────────────────────────┐  pixel row 0
//!         │  [logo]  username      2024  │
//!  z = -H └──────────────────────────────┘  pixel row res_y
//!         x = 0                      x = W
//! ```
//!
//! The face lies in the plane y = 0; voxels protrude towards -y.

use skyline_core::SkylineResult;

use super::cube::{create_cube, TRIANGLES_PER_CUBE};
use super::mesh::Triangle;

/// A virtual raster stretched over a physical rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceGeometry {
    /// Physical width in millimeters.
    pub width: f64,
    /// Physical height in millimeters.
    pub height: f64,
    /// Horizontal resolution in pixels.
    pub resolution_x: u32,
}

impl FaceGeometry {
    /// Creates a face.
    #[must_use]
    pub const fn new(width: f64, height: f64, resolution_x: u32) -> Self {
        Self {
            width,
            height,
            resolution_x,
        }
    }

    /// Vertical resolution, scaled to keep the face's aspect ratio.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn resolution_y(&self) -> u32 {
        (f64::from(self.resolution_x) * self.height / self.width).floor().max(0.0) as u32
    }

    /// Physical x of a horizontal pixel coordinate.
    #[inline]
    #[must_use]
    pub fn to_physical_x(&self, px: f64) -> f64 {
        px / f64::from(self.resolution_x) * self.width
    }

    /// Physical distance below the face's top edge of a vertical pixel coordinate.
    #[inline]
    #[must_use]
    pub fn to_physical_y(&self, py: f64) -> f64 {
        py / self.exact_resolution_y() * self.height
    }

    /// Unrounded vertical resolution used for the pixel mapping.
    #[inline]
    fn exact_resolution_y(&self) -> f64 {
        f64::from(self.resolution_x) * self.height / self.width
    }

    /// Emits the voxel covering `size` x `size` pixels with its top-left
    /// corner at pixel `(px, py)`, protruding `depth` millimeters.
    ///
    /// # Errors
    ///
    /// Propagates [`create_cube`] errors for non-positive sizes or depth.
    pub fn voxel(
        &self,
        px: f64,
        py: f64,
        size: f64,
        depth: f64,
    ) -> SkylineResult<[Triangle; TRIANGLES_PER_CUBE]> {
        let x = self.to_physical_x(px);
        let top = self.to_physical_y(py);
        let size_x = self.to_physical_x(size);
        let size_z = self.to_physical_y(size);

        create_cube(
            x,              // left to right
            -depth,         // out of the face towards the viewer
            -size_z - top,  // downwards from the top edge
            size_x,
            depth,
            size_z,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_keeps_aspect() {
        let face = FaceGeometry::new(150.0, 10.0, 2000);
        assert_eq!(face.resolution_y(), 133);
    }

    #[test]
    fn test_linear_mapping() {
        let face = FaceGeometry::new(200.0, 10.0, 2000);
        assert!((face.to_physical_x(1000.0) - 100.0).abs() < 1e-9);
        assert!((face.to_physical_y(50.0) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_voxel_placement() {
        let face = FaceGeometry::new(100.0, 10.0, 100);
        let cube = face.voxel(10.0, 0.0, 1.0, 1.0).unwrap();
        let xs: Vec<f32> = cube.iter().flat_map(|t| t.vertices).map(|v| v[0]).collect();
        let ys: Vec<f32> = cube.iter().flat_map(|t| t.vertices).map(|v| v[1]).collect();
        let zs: Vec<f32> = cube.iter().flat_map(|t| t.vertices).map(|v| v[2]).collect();
        let min = |v: &[f32]| v.iter().copied().fold(f32::INFINITY, f32::min);
        let max = |v: &[f32]| v.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        assert!((min(&xs) - 10.0).abs() < 1e-5 && (max(&xs) - 11.0).abs() < 1e-5);
        assert!((min(&ys) + 1.0).abs() < 1e-5 && max(&ys).abs() < 1e-5);
        assert!((min(&zs) + 1.0).abs() < 1e-5 && max(&zs).abs() < 1e-5);
    }

    #[test]
    fn test_zero_depth_fails() {
        let face = FaceGeometry::new(100.0, 10.0, 100);
        assert!(face.voxel(0.0, 0.0, 1.0, 0.0).is_err());
    }
}
