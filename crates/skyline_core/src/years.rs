//! Year range parsing, validation and output naming.

use chrono::Datelike;

use crate::error::{SkylineError, SkylineResult};

/// First year with contribution data.
pub const LAUNCH_YEAR: i32 = 2008;

/// Suffix of generated model files.
const OUTPUT_SUFFIX: &str = "github-skyline.stl";

/// Parses `"2024"` or `"2014-2024"` and validates the result against the
/// current calendar year.
///
/// # Errors
///
/// - [`SkylineError::InvalidYearRangeFormat`] for more than one `-`
/// - [`SkylineError::InvalidYear`] for non-numeric parts
/// - any error from [`validate_year_range`]
pub fn parse_year_range(input: &str) -> SkylineResult<(i32, i32)> {
    parse_year_range_at(input, current_year())
}

/// Like [`parse_year_range`] with an explicit current year.
///
/// # Errors
///
/// See [`parse_year_range`].
pub fn parse_year_range_at(input: &str, current_year: i32) -> SkylineResult<(i32, i32)> {
    let (start, end) = if input.contains('-') {
        let parts: Vec<&str> = input.split('-').collect();
        if parts.len() != 2 {
            return Err(SkylineError::InvalidYearRangeFormat);
        }
        (parse_year(parts[0])?, parse_year(parts[1])?)
    } else {
        let year = parse_year(input)?;
        (year, year)
    };
    validate_year_range_at(start, end, current_year)?;
    Ok((start, end))
}

fn parse_year(text: &str) -> SkylineResult<i32> {
    text.parse::<i32>().map_err(|source| SkylineError::InvalidYear {
        input: text.to_string(),
        source,
    })
}

/// Checks `LAUNCH_YEAR <= start <= end <= current year`.
///
/// # Errors
///
/// [`SkylineError::YearOutOfRange`] or [`SkylineError::StartAfterEnd`].
pub fn validate_year_range(start: i32, end: i32) -> SkylineResult<()> {
    validate_year_range_at(start, end, current_year())
}

/// Like [`validate_year_range`] with an explicit current year.
///
/// # Errors
///
/// See [`validate_year_range`].
pub fn validate_year_range_at(start: i32, end: i32, current_year: i32) -> SkylineResult<()> {
    if start < LAUNCH_YEAR || end > current_year {
        return Err(SkylineError::YearOutOfRange {
            min: LAUNCH_YEAR,
            max: current_year,
        });
    }
    if start > end {
        return Err(SkylineError::StartAfterEnd);
    }
    Ok(())
}

/// `"2024"` for a single year, `"2020-24"` for a range.
#[must_use]
pub fn format_year_range(start: i32, end: i32) -> String {
    if start == end {
        return start.to_string();
    }
    format!("{start:04}-{:02}", end.rem_euclid(100))
}

/// Name of the model file.
///
/// A non-empty `output` wins and gets `.stl` appended when missing; otherwise
/// `<user>-<years>-github-skyline.stl`.
#[must_use]
pub fn generate_output_filename(user: &str, start: i32, end: i32, output: &str) -> String {
    if !output.is_empty() {
        if output.to_lowercase().ends_with(".stl") {
            return output.to_string();
        }
        return format!("{output}.stl");
    }
    format!("{user}-{}-{OUTPUT_SUFFIX}", format_year_range(start, end))
}

/// The current local calendar year.
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
