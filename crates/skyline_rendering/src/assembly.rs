//! # Mesh Assembly
//!
//! Builds the printable solid for one year and lays consecutive years out
//! along +X.
//!
//! ```text
//!   z                     towers: one per contributing day,
//!   │   ▓ ▓               1..3 tiers of `tier_height`
//!   │ ▓ ▓ ▓ ▓   ▓
//! 0 ├─┴─┴─┴─┴───┴────────────────┐
//!   │ [logo] username      2024  │  front face (y = 0), labels
//!   └────────────────────────────┘  protrude towards -y
//!  -base_height                    x
//! ```
//!
//! Row `r` of the tower grid is the weekday (Sunday = 0), growing along +y
//! away from the labelled face.

use skyline_core::{
    classify_week, ContributionGrid, SkylineConfig, SkylineResult, DAYS_PER_WEEK,
};
use tracing::{debug, info};

use crate::assets::AssetProvider;
use crate::raster::{render_logo, render_text, TextLabel};
use crate::voxel::{create_cube, FaceGeometry, Mesh, TRIANGLES_PER_CUBE};

/// Assembles yearly skyline meshes.
///
/// Holds the configuration and the asset provider the label and logo
/// rasterizers load from.
pub struct SkylineAssembler<'a> {
    config: &'a SkylineConfig,
    assets: &'a dyn AssetProvider,
}

impl<'a> SkylineAssembler<'a> {
    /// Creates an assembler.
    #[must_use]
    pub fn new(config: &'a SkylineConfig, assets: &'a dyn AssetProvider) -> Self {
        Self { config, assets }
    }

    /// Plinth width for `grid`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn year_width(&self, grid: &ContributionGrid) -> f64 {
        let layout = &self.config.layout;
        let weeks = grid.week_count().max(layout.min_weeks);
        weeks as f64 * layout.cell_size + 2.0 * layout.base_margin
    }

    /// Plinth depth, the same for every year.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn year_depth(&self) -> f64 {
        let layout = &self.config.layout;
        DAYS_PER_WEEK as f64 * layout.cell_size + 2.0 * layout.base_margin
    }

    /// Builds the solid for one year.
    ///
    /// # Errors
    ///
    /// [`skyline_core::SkylineError::EmptyGrid`] for a grid without weeks,
    /// asset load failures and geometry errors from degenerate dimensions.
    pub fn build_year(&self, grid: &ContributionGrid, user: &str, year: i32) -> SkylineResult<Mesh> {
        grid.ensure_not_empty()?;
        let layout = &self.config.layout;
        let width = self.year_width(grid);

        let mut mesh = Mesh::new();
        mesh.extend_from_slice(&create_cube(
            0.0,
            0.0,
            -layout.base_height,
            width,
            self.year_depth(),
            layout.base_height,
        )?);

        self.add_towers(&mut mesh, grid)?;
        let towers = mesh.len() / TRIANGLES_PER_CUBE - 1;

        let face = FaceGeometry::new(width, layout.base_height, self.config.face.voxel_resolution);
        let depth = self.config.face.voxel_depth;
        let labels = &self.config.labels;

        let username = TextLabel::new(
            user,
            labels.username_font_size,
            labels.username_anchor,
            labels.username_offset,
        );
        mesh.append(render_text(&face, self.assets, &username, depth)?);

        let year_label = TextLabel::new(
            year.to_string(),
            labels.year_font_size,
            labels.year_anchor,
            labels.year_offset,
        );
        mesh.append(render_text(&face, self.assets, &year_label, depth)?);
        mesh.append(render_logo(&face, self.assets, &self.config.logo, depth)?);

        debug!(
            "{year}: {} weeks, {towers} tower voxels, {} triangles",
            grid.week_count(),
            mesh.len()
        );
        Ok(mesh)
    }

    /// Stacks `tiers` voxels per contributing day.
    #[allow(clippy::cast_precision_loss)]
    fn add_towers(&self, mesh: &mut Mesh, grid: &ContributionGrid) -> SkylineResult<()> {
        let layout = &self.config.layout;
        let max_count = grid.max_count();

        for (column, week) in grid.weeks().iter().enumerate() {
            let x = layout.base_margin + column as f64 * layout.cell_size;
            for (day, classification) in week.days().iter().zip(classify_week(week, max_count)) {
                let y = layout.base_margin + day.weekday_row() as f64 * layout.cell_size;
                for tier in 0..classification.level.tiers() {
                    mesh.extend_from_slice(&create_cube(
                        x,
                        y,
                        f64::from(tier) * layout.tier_height,
                        layout.cell_size,
                        layout.cell_size,
                        layout.tier_height,
                    )?);
                }
            }
        }
        Ok(())
    }

    /// Builds every year and places them side by side along +X, separated
    /// by the configured spacing.
    ///
    /// # Errors
    ///
    /// The first [`SkylineAssembler::build_year`] failure.
    #[allow(clippy::cast_possible_truncation)]
    pub fn build_range(&self, years: &[(i32, ContributionGrid)], user: &str) -> SkylineResult<Mesh> {
        let mut model = Mesh::new();
        let mut offset = 0.0;
        for (year, grid) in years {
            let solid = self.build_year(grid, user, *year)?;
            model.append_translated(&solid, [offset as f32, 0.0, 0.0]);
            offset += self.year_width(grid) + self.config.layout.year_spacing;
        }
        info!("assembled {} year(s): {} triangles", years.len(), model.len());
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::EmbeddedAssets;
    use chrono::{Duration, NaiveDate};
    use skyline_core::{ContributionDay, SkylineError};

    /// Small face so label rasterization stays cheap.
    fn config() -> SkylineConfig {
        let mut config = SkylineConfig::default();
        config.face.voxel_resolution = 600;
        config.labels.username_font_size = 7.0;
        config.labels.year_font_size = 7.0;
        config.logo.scale = 1.0;
        config
    }

    fn grid(weeks: usize, count: impl Fn(usize, usize) -> u32) -> ContributionGrid {
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        ContributionGrid::from_days(
            (0..weeks)
                .map(|w| {
                    (0..DAYS_PER_WEEK)
                        .map(|d| {
                            let offset = i64::try_from(w * DAYS_PER_WEEK + d).unwrap();
                            ContributionDay::new(start + Duration::days(offset), count(w, d))
                        })
                        .collect()
                })
                .collect(),
        )
        .unwrap()
    }

    /// Triangles from everything except the plinth and the towers.
    fn overlay_triangles(config: &SkylineConfig, user: &str) -> usize {
        let assembler = SkylineAssembler::new(config, &EmbeddedAssets);
        let mesh = assembler.build_year(&grid(1, |_, _| 0), user, 2023).unwrap();
        mesh.len() - TRIANGLES_PER_CUBE
    }

    #[test]
    fn test_empty_grid_fails() {
        let config = config();
        let assembler = SkylineAssembler::new(&config, &EmbeddedAssets);
        let err = assembler
            .build_year(&ContributionGrid::default(), "u", 2023)
            .unwrap_err();
        assert!(matches!(err, SkylineError::EmptyGrid));
    }

    #[test]
    fn test_plinth_dimensions() {
        let config = config();
        let assembler = SkylineAssembler::new(&config, &EmbeddedAssets);
        let g = grid(2, |_, _| 0);
        assert!((assembler.year_width(&g) - (53.0 * 2.5 + 8.0)).abs() < 1e-9);
        assert!((assembler.year_depth() - (7.0 * 2.5 + 8.0)).abs() < 1e-9);

        let mesh = assembler.build_year(&g, "u", 2023).unwrap();
        let plinth = &mesh.triangles()[..TRIANGLES_PER_CUBE];
        let xs: Vec<f32> = plinth.iter().flat_map(|t| t.vertices).map(|v| v[0]).collect();
        let zs: Vec<f32> = plinth.iter().flat_map(|t| t.vertices).map(|v| v[2]).collect();
        assert!(xs.iter().any(|&x| (x - 140.5).abs() < 1e-4));
        assert!(zs.iter().any(|&z| (z + 10.0).abs() < 1e-4));
    }

    #[test]
    fn test_tower_tiers_follow_levels() {
        let config = config();
        let overlay = overlay_triangles(&config, "u");
        let assembler = SkylineAssembler::new(&config, &EmbeddedAssets);

        // Counts 1, 2, 3 against max 3: Low, Medium, High = 1 + 2 + 3 tiers.
        let g = grid(1, |_, d| match d {
            0 => 1,
            1 => 2,
            2 => 3,
            _ => 0,
        });
        let mesh = assembler.build_year(&g, "u", 2023).unwrap();
        assert_eq!(mesh.len(), TRIANGLES_PER_CUBE * (1 + 6) + overlay);
    }

    #[test]
    fn test_tower_placement() {
        let config = config();
        let assembler = SkylineAssembler::new(&config, &EmbeddedAssets);
        // Week 1, Tuesday (row 2), single High day.
        let g = grid(2, |w, d| u32::from(w == 1 && d == 2));
        let mesh = assembler.build_year(&g, "u", 2023).unwrap();
        let tower = &mesh.triangles()[TRIANGLES_PER_CUBE..TRIANGLES_PER_CUBE * 4];
        let corner = tower[0].vertices[0];
        assert!((corner[0] - (4.0 + 2.5)).abs() < 1e-5);
        assert!((corner[1] - (4.0 + 5.0)).abs() < 1e-5);
        assert!(corner[2].abs() < 1e-5);
        let top = tower
            .iter()
            .flat_map(|t| t.vertices)
            .map(|v| v[2])
            .fold(f32::NEG_INFINITY, f32::max);
        assert!((top - 24.0).abs() < 1e-4);
    }

    #[test]
    fn test_labels_protrude_from_front_face() {
        let config = config();
        let assembler = SkylineAssembler::new(&config, &EmbeddedAssets);
        let mesh = assembler.build_year(&grid(1, |_, _| 0), "octocat", 2023).unwrap();
        let overlay = &mesh.triangles()[TRIANGLES_PER_CUBE..];
        assert!(!overlay.is_empty());
        for v in overlay.iter().flat_map(|t| t.vertices) {
            assert!(v[1] <= 1e-5 && v[1] >= -1.0 - 1e-5);
            assert!(v[2] <= 1e-5 && v[2] >= -10.0 - 1e-4);
        }
    }

    #[test]
    fn test_range_offsets_years() {
        let config = config();
        let assembler = SkylineAssembler::new(&config, &EmbeddedAssets);
        let g = grid(1, |_, d| u32::from(d == 0));
        let first = assembler.build_year(&g, "u", 2023).unwrap();
        let second = assembler.build_year(&g, "u", 2024).unwrap();

        let years = vec![(2023, g.clone()), (2024, g.clone())];
        let model = assembler.build_range(&years, "u").unwrap();
        assert_eq!(model.len(), first.len() + second.len());
        assert_eq!(&model.triangles()[..first.len()], first.triangles());

        #[allow(clippy::cast_possible_truncation)]
        let offset = (assembler.year_width(&g) + config.layout.year_spacing) as f32;
        let expected: Vec<_> = second
            .triangles()
            .iter()
            .map(|t| t.translated([offset, 0.0, 0.0]))
            .collect();
        assert_eq!(&model.triangles()[first.len()..], expected.as_slice());
    }

    #[test]
    fn test_range_of_one_matches_single_year() {
        let config = config();
        let assembler = SkylineAssembler::new(&config, &EmbeddedAssets);
        let g = grid(3, |w, d| (w + d) as u32);
        let single = assembler.build_year(&g, "u", 2023).unwrap();
        let range = assembler.build_range(&[(2023, g)], "u").unwrap();
        assert_eq!(single, range);
    }
}
