//! # ASCII Skyline
//!
//! Renders one year as a 7-row character block, one column per week.
//!
//! ```text
//!  column = week          top    ' '  sky / padding
//!  ┌─┬─┬─┬─┐                     '.'  future day
//!  │ │.│ │ │                     '╻'  spire (top of a stack)
//!  │╻│.│ │┃│                     '░'  body / foundation
//!  │░│░│ │▒│            bottom
//!  └─┴─┴─┴─┘
//! ```
//!
//! Inside a column, days without contributions float to the top and the
//! contributing days stack from the bottom, earliest first.

use chrono::NaiveDate;
use skyline_core::{
    classify, Classification, ContributionDay, ContributionGrid, HeightLevel, SkylineResult,
    StackRole, Week, DAYS_PER_WEEK,
};

/// Sky, padding and days without contributions.
pub const EMPTY_BLOCK: char = ' ';
/// Days after the reference date.
pub const FUTURE_BLOCK: char = '.';

/// Foundation block, low height.
pub const FOUNDATION_LOW: char = '░';
/// Foundation block, medium height.
pub const FOUNDATION_MEDIUM: char = '▒';
/// Foundation block, high height.
pub const FOUNDATION_HIGH: char = '▓';

/// Middle block, low height.
pub const MIDDLE_LOW: char = '░';
/// Middle block, medium height.
pub const MIDDLE_MEDIUM: char = '▒';
/// Middle block, high height.
pub const MIDDLE_HIGH: char = '▓';

/// Spire, low height.
pub const TOP_LOW: char = '╻';
/// Spire, medium height.
pub const TOP_MEDIUM: char = '┃';
/// Spire, high height.
pub const TOP_HIGH: char = '╽';

/// Banner printed above the first year.
pub const HEADER_TEMPLATE: &str = "\
 ____  _          _ _
/ ___|| | ___   _| (_)_ __   ___
\\___ \\| |/ / | | | | | '_ \\ / _ \\
 ___) |   <| |_| | | | | | |  __/
|____/|_|\\_\\\\__, |_|_|_| |_|\\___|
            |___/";

/// Legend printed below the grid.
const LEGEND: [&str; 4] = [
    "' ' no contributions   '.' future day",
    "'░' low   '▒' medium   '▓' high",
    "'╻' low   '┃' medium   '╽' high   (tops)",
    "",
];

/// What to print around the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiOptions {
    /// Banner plus the `"<user> - <year>"` line.
    pub include_header: bool,
    /// Glyph legend.
    pub include_footer: bool,
    /// Days strictly after this date are drawn as future days.
    pub today: NaiveDate,
}

impl AsciiOptions {
    /// Grid only.
    #[must_use]
    pub const fn bare(today: NaiveDate) -> Self {
        Self {
            include_header: false,
            include_footer: false,
            today,
        }
    }

    /// Grid with header and footer.
    #[must_use]
    pub const fn decorated(today: NaiveDate) -> Self {
        Self {
            include_header: true,
            include_footer: true,
            today,
        }
    }
}

/// Glyph for a contributing day.
#[must_use]
pub const fn block_glyph(classification: Classification) -> char {
    match (classification.role, classification.level) {
        (_, HeightLevel::Sky) | (None, _) => EMPTY_BLOCK,
        (Some(StackRole::Top), HeightLevel::Low) => TOP_LOW,
        (Some(StackRole::Top), HeightLevel::Medium) => TOP_MEDIUM,
        (Some(StackRole::Top), HeightLevel::High) => TOP_HIGH,
        (Some(StackRole::Middle), HeightLevel::Low) => MIDDLE_LOW,
        (Some(StackRole::Middle), HeightLevel::Medium) => MIDDLE_MEDIUM,
        (Some(StackRole::Middle), HeightLevel::High) => MIDDLE_HIGH,
        (Some(StackRole::Foundation), HeightLevel::Low) => FOUNDATION_LOW,
        (Some(StackRole::Foundation), HeightLevel::Medium) => FOUNDATION_MEDIUM,
        (Some(StackRole::Foundation), HeightLevel::High) => FOUNDATION_HIGH,
    }
}

/// Renders `grid` as a skyline.
///
/// # Errors
///
/// [`skyline_core::SkylineError::EmptyGrid`] when the grid has no weeks.
pub fn render_ascii(
    grid: &ContributionGrid,
    user: &str,
    year: i32,
    options: &AsciiOptions,
) -> SkylineResult<String> {
    grid.ensure_not_empty()?;
    let max_count = grid.max_count();

    let columns: Vec<[char; DAYS_PER_WEEK]> = grid
        .weeks()
        .iter()
        .map(|week| render_column(week, max_count, options.today))
        .collect();

    let mut lines: Vec<String> = Vec::with_capacity(DAYS_PER_WEEK + 16);
    if options.include_header {
        lines.extend(HEADER_TEMPLATE.lines().map(str::to_string));
        lines.push(format!("{user} - {year}"));
        lines.push(String::new());
    }
    for row in 0..DAYS_PER_WEEK {
        lines.push(columns.iter().map(|column| column[row]).collect());
    }
    if options.include_footer {
        lines.push(String::new());
        lines.extend(LEGEND.iter().map(|l| (*l).to_string()));
    }
    Ok(lines.join("\n"))
}

/// Column glyphs, top row first.
fn render_column(week: &Week, max_count: u32, today: NaiveDate) -> [char; DAYS_PER_WEEK] {
    let is_future = |day: &ContributionDay| day.date > today;
    let (stacked, idle): (Vec<&ContributionDay>, Vec<&ContributionDay>) = week
        .days()
        .iter()
        .partition(|day| day.is_active() && !is_future(day));

    let mut column = [EMPTY_BLOCK; DAYS_PER_WEEK];
    let mut row = DAYS_PER_WEEK - week.days().len();
    for day in &idle {
        column[row] = if is_future(day) { FUTURE_BLOCK } else { EMPTY_BLOCK };
        row += 1;
    }
    // Latest contribution directly under the idle days, earliest at the bottom.
    for (index, day) in stacked.iter().enumerate().rev() {
        column[row] = block_glyph(classify(day.count, max_count, index, stacked.len()));
        row += 1;
    }
    column
}

/// Whether `ch` can appear inside the grid.
fn is_grid_glyph(ch: char) -> bool {
    matches!(
        ch,
        EMPTY_BLOCK
            | FUTURE_BLOCK
            | FOUNDATION_LOW
            | FOUNDATION_MEDIUM
            | FOUNDATION_HIGH
            | TOP_LOW
            | TOP_MEDIUM
            | TOP_HIGH
    )
}

/// Whether `ch` is a foundation or middle body glyph.
fn is_body_glyph(ch: char) -> bool {
    matches!(ch, FOUNDATION_LOW | FOUNDATION_MEDIUM | FOUNDATION_HIGH)
}

/// Drops the lines above the grid of a previously rendered block.
///
/// The kept part starts at the first grid line holding a body glyph; rows
/// above it (sky, spires and future days alike) go with the header. Legend
/// lines never match. A block with no body glyph is returned whole.
#[must_use]
pub fn strip_header(rendered: &str) -> String {
    let lines: Vec<&str> = rendered.split('\n').collect();
    let start = lines
        .iter()
        .position(|line| line.chars().all(is_grid_glyph) && line.chars().any(is_body_glyph))
        .unwrap_or(0);
    lines[start..].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }

    /// `weeks` full weeks from 2023-01-01 where day `d` of week `w` has
    /// `count(w, d)` contributions.
    fn grid(weeks: usize, count: impl Fn(usize, usize) -> u32) -> ContributionGrid {
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let days = (0..weeks)
            .map(|w| {
                (0..DAYS_PER_WEEK)
                    .map(|d| {
                        let offset = i64::try_from(w * DAYS_PER_WEEK + d).unwrap();
                        ContributionDay::new(start + Duration::days(offset), count(w, d))
                    })
                    .collect()
            })
            .collect();
        ContributionGrid::from_days(days).unwrap()
    }

    fn grid_lines(text: &str) -> Vec<Vec<char>> {
        text.split('\n').map(|l| l.chars().collect()).collect()
    }

    #[test]
    fn test_empty_grid_fails() {
        let options = AsciiOptions::bare(today());
        let result = render_ascii(&ContributionGrid::default(), "testuser", 2023, &options);
        assert!(result.is_err());
    }

    #[test]
    fn test_bare_output_excludes_header() {
        let g = grid(3, |w, d| (w * d) as u32);
        let text = render_ascii(&g, "testuser", 2023, &AsciiOptions::bare(today())).unwrap();
        assert!(!text.contains("testuser"));
        assert!(!text.contains("2023"));
        assert!(!text.contains(HEADER_TEMPLATE));
        assert_eq!(text.split('\n').count(), DAYS_PER_WEEK);
    }

    #[test]
    fn test_header_and_footer() {
        let g = grid(3, |w, d| (w * d) as u32);
        let text = render_ascii(&g, "testuser", 2023, &AsciiOptions::decorated(today())).unwrap();
        assert!(text.starts_with(HEADER_TEMPLATE));
        assert!(text.contains("testuser - 2023"));
        assert!(text.contains("future day"));
    }

    #[test]
    fn test_all_zero_renders_sky() {
        for options in [AsciiOptions::bare(today()), AsciiOptions::decorated(today())] {
            let text = render_ascii(&grid(3, |_, _| 0), "testuser", 2023, &options).unwrap();
            let lines: Vec<&str> = text.split('\n').collect();
            let start = if options.include_header {
                HEADER_TEMPLATE.lines().count() + 2
            } else {
                0
            };
            for line in &lines[start..start + DAYS_PER_WEEK] {
                assert_eq!(line.chars().count(), 3);
                assert!(line.chars().all(|c| c == EMPTY_BLOCK), "{line:?}");
            }
        }
    }

    #[test]
    fn test_contributions_stack_from_bottom() {
        // One week: Monday 1, Wednesday 3, everything else idle.
        let g = grid(1, |_, d| match d {
            1 => 1,
            3 => 3,
            _ => 0,
        });
        let text = render_ascii(&g, "u", 2023, &AsciiOptions::bare(today())).unwrap();
        let column: Vec<char> = grid_lines(&text).iter().map(|l| l[0]).collect();
        assert_eq!(column[..5], [EMPTY_BLOCK; 5]);
        assert_eq!(column[5], TOP_HIGH);
        assert_eq!(column[6], FOUNDATION_LOW);
    }

    #[test]
    fn test_single_day_is_foundation() {
        let g = grid(1, |_, d| u32::from(d == 4) * 5);
        let text = render_ascii(&g, "u", 2023, &AsciiOptions::bare(today())).unwrap();
        assert_eq!(grid_lines(&text)[6][0], FOUNDATION_HIGH);
    }

    #[test]
    fn test_future_days() {
        let g = grid(1, |_, d| u32::from(d < 2));
        let cutoff = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
        let text = render_ascii(&g, "u", 2023, &AsciiOptions::bare(cutoff)).unwrap();
        let column: Vec<char> = grid_lines(&text).iter().map(|l| l[0]).collect();
        assert_eq!(column[..5], [FUTURE_BLOCK; 5]);
        assert_eq!(column[5], TOP_HIGH);
        assert_eq!(column[6], FOUNDATION_HIGH);
    }

    #[test]
    fn test_short_week_padded_with_sky() {
        let day = ContributionDay::new(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(), 2);
        let g = ContributionGrid::from_days(vec![vec![day]]).unwrap();
        let text = render_ascii(&g, "u", 2023, &AsciiOptions::bare(today())).unwrap();
        let column: Vec<char> = grid_lines(&text).iter().map(|l| l[0]).collect();
        assert_eq!(column[..6], [EMPTY_BLOCK; 6]);
        assert_eq!(column[6], FOUNDATION_HIGH);
    }

    #[test]
    fn test_deterministic() {
        let g = grid(5, |w, d| ((w + 3 * d) % 4) as u32);
        let options = AsciiOptions::decorated(today());
        assert_eq!(
            render_ascii(&g, "u", 2023, &options).unwrap(),
            render_ascii(&g, "u", 2023, &options).unwrap()
        );
    }

    #[test]
    fn test_block_glyph_table() {
        let cases = [
            (0, 0, 1, EMPTY_BLOCK),
            (2, 0, 1, FOUNDATION_LOW),
            (5, 0, 1, FOUNDATION_MEDIUM),
            (8, 0, 1, FOUNDATION_HIGH),
            (2, 0, 2, FOUNDATION_LOW),
            (8, 1, 3, MIDDLE_HIGH),
            (5, 2, 3, TOP_MEDIUM),
        ];
        for (count, index, active, expected) in cases {
            assert_eq!(block_glyph(classify(count, 10, index, active)), expected);
        }
    }

    #[test]
    fn test_strip_header() {
        let g = grid(2, |w, d| u32::from(w == 1 && d == 6));
        let text = render_ascii(&g, "octocat", 2024, &AsciiOptions::decorated(today())).unwrap();
        let stripped = strip_header(&text);
        assert!(!stripped.contains("octocat"));
        assert!(stripped.starts_with(&format!("{EMPTY_BLOCK}{FOUNDATION_HIGH}")));
    }

    #[test]
    fn test_strip_header_drops_spire_rows() {
        // Two contributing days: a spire above a single body glyph.
        let g = grid(1, |_, d| u32::from(d >= 5));
        let text = render_ascii(&g, "octocat", 2023, &AsciiOptions::bare(today())).unwrap();
        assert!(text.contains(TOP_HIGH));
        assert_eq!(strip_header(&text), FOUNDATION_HIGH.to_string());
    }

    #[test]
    fn test_strip_header_ignores_legend() {
        let g = grid(2, |_, _| 0);
        let text = render_ascii(&g, "octocat", 2023, &AsciiOptions::decorated(today())).unwrap();
        assert_eq!(strip_header(&text), text);
    }

    #[test]
    fn test_strip_header_without_match_keeps_everything() {
        assert_eq!(strip_header("  \n  "), "  \n  ");
    }
}
