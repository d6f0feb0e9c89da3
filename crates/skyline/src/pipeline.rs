//! # Skyline Pipeline
//!
//! ```text
//! resolve user ─→ resolve years ─→ fetch each year ─┬─→ ASCII preview (stdout)
//!                                                   └─→ assemble ─→ STL file
//! ```
//!
//! The preview is best effort: a year that fails to render or print is
//! logged and skipped. Fetching, assembly and writing stop at the first
//! error.

use std::io::Write;
use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use skyline_core::{
    format_year_range, generate_output_filename, validate_year_range_at, ContributionGrid,
    SkylineConfig, SkylineError, SkylineResult,
};
use skyline_rendering::{
    render_ascii, strip_header, write_stl_file, AsciiOptions, AssetProvider, SkylineAssembler,
};
use tracing::{debug, info, warn};

use crate::source::ContributionSource;

/// What to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkylineRequest {
    /// Target user; the authenticated user when `None` or empty.
    pub user: Option<String>,
    /// First year (ignored with `full`).
    pub start_year: i32,
    /// Last year (ignored with `full`).
    pub end_year: i32,
    /// Cover every year from the user's join year to the current year.
    pub full: bool,
    /// Only print the ASCII preview.
    pub art_only: bool,
    /// Output path override.
    pub output: Option<String>,
}

impl SkylineRequest {
    /// Request for one year of the authenticated user.
    #[must_use]
    pub fn for_year(year: i32) -> Self {
        Self {
            user: None,
            start_year: year,
            end_year: year,
            full: false,
            art_only: false,
            output: None,
        }
    }
}

/// Resolves the target user.
fn resolve_user(source: &dyn ContributionSource, requested: Option<&str>) -> SkylineResult<String> {
    if let Some(user) = requested.filter(|u| !u.is_empty()) {
        return Ok(user.to_string());
    }
    debug!("no target user specified, using authenticated user");
    let user = source.authenticated_user()?;
    if user.is_empty() {
        return Err(SkylineError::EmptyUsername);
    }
    Ok(user)
}

fn print(stdout: &mut dyn Write, text: &str) -> SkylineResult<()> {
    writeln!(stdout, "{text}").map_err(|source| SkylineError::Stream {
        context: "failed to print ASCII preview",
        source,
    })
}

/// Runs the whole pipeline.
///
/// Returns the written model path, or `None` for art-only requests.
///
/// # Errors
///
/// User or year resolution failures, data source failures, assembly errors
/// and model write errors. ASCII rendering and printing failures are only
/// logged.
pub fn generate_skyline(
    source: &dyn ContributionSource,
    assets: &dyn AssetProvider,
    config: &SkylineConfig,
    request: &SkylineRequest,
    stdout: &mut dyn Write,
    today: NaiveDate,
) -> SkylineResult<Option<PathBuf>> {
    let user = resolve_user(source, request.user.as_deref())?;

    let (start_year, end_year) = if request.full {
        let join_year = source.join_year(&user)?;
        debug!("{user} joined in {join_year}");
        (join_year, today.year())
    } else {
        (request.start_year, request.end_year)
    };
    validate_year_range_at(start_year, end_year, today.year())?;
    info!("generating skyline for {user}, {}", format_year_range(start_year, end_year));

    let mut years: Vec<(i32, ContributionGrid)> = Vec::new();
    for year in start_year..=end_year {
        let grid = source.fetch_year(&user, year)?;
        debug!("{year}: {} weeks, {} contributions", grid.week_count(), grid.total_count());

        let options = AsciiOptions {
            include_header: year == start_year && !request.art_only,
            include_footer: !request.art_only,
            today,
        };
        let art = match render_ascii(&grid, &user, year, &options) {
            Ok(art) if year == start_year => Some(art),
            Ok(art) => Some(strip_header(&art)),
            Err(e) => {
                warn!("failed to generate ASCII preview for {year}: {e}");
                None
            }
        };
        if let Some(art) = art {
            if let Err(e) = print(stdout, &art) {
                warn!("ASCII preview for {year} dropped: {e}");
            }
        }
        years.push((year, grid));
    }

    if request.art_only {
        return Ok(None);
    }

    let output = request.output.as_deref().unwrap_or_default();
    let path = PathBuf::from(generate_output_filename(&user, start_year, end_year, output));
    let assembler = SkylineAssembler::new(config, assets);
    let model = assembler.build_range(&years, &user)?;
    let header = format!(
        "{user} {} contribution skyline",
        format_year_range(start_year, end_year)
    );
    write_stl_file(&path, model.triangles(), &header)?;
    Ok(Some(path))
}
