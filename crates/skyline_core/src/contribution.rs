//! # Contribution Data Model
//!
//! Days, weeks and yearly grids as delivered by the data source.
//! Everything here is immutable once built.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{SkylineError, SkylineResult};

/// Number of day slots in a week column.
pub const DAYS_PER_WEEK: usize = 7;

/// Contribution count for a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionDay {
    /// Calendar date of the day.
    pub date: NaiveDate,
    /// Number of contributions made that day.
    #[serde(rename = "contributionCount")]
    pub count: u32,
}

impl ContributionDay {
    /// Creates a new day.
    #[inline]
    #[must_use]
    pub const fn new(date: NaiveDate, count: u32) -> Self {
        Self { date, count }
    }

    /// Returns true if at least one contribution was made.
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.count > 0
    }

    /// Row of this day within its week column (Sunday = 0).
    #[inline]
    #[must_use]
    pub fn weekday_row(&self) -> usize {
        self.date.weekday().num_days_from_sunday() as usize
    }
}

/// One week column: 1 to 7 days in chronological order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    days: Vec<ContributionDay>,
}

impl Week {
    /// Creates a week from its days.
    ///
    /// # Errors
    ///
    /// Returns [`SkylineError::InvalidWeekLength`] unless there are 1 to 7 days.
    pub fn new(days: Vec<ContributionDay>) -> SkylineResult<Self> {
        if days.is_empty() || days.len() > DAYS_PER_WEEK {
            return Err(SkylineError::InvalidWeekLength(days.len()));
        }
        Ok(Self { days })
    }

    /// Days of the week in chronological order.
    #[inline]
    #[must_use]
    pub fn days(&self) -> &[ContributionDay] {
        &self.days
    }

    /// Number of days with at least one contribution.
    #[must_use]
    pub fn active_days(&self) -> usize {
        self.days.iter().filter(|d| d.is_active()).count()
    }

    /// Highest count in this week.
    #[must_use]
    pub fn max_count(&self) -> u32 {
        self.days.iter().map(|d| d.count).max().unwrap_or(0)
    }
}

/// All weeks of one year, in calendar order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContributionGrid {
    weeks: Vec<Week>,
}

impl ContributionGrid {
    /// Creates a grid. An empty grid is allowed here and rejected by consumers.
    #[must_use]
    pub fn new(weeks: Vec<Week>) -> Self {
        Self { weeks }
    }

    /// Builds a grid from raw day lists.
    ///
    /// # Errors
    ///
    /// Returns [`SkylineError::InvalidWeekLength`] for any week outside 1..=7 days.
    pub fn from_days(weeks: Vec<Vec<ContributionDay>>) -> SkylineResult<Self> {
        let weeks = weeks
            .into_iter()
            .map(Week::new)
            .collect::<SkylineResult<Vec<_>>>()?;
        Ok(Self { weeks })
    }

    /// Weeks of the grid.
    #[inline]
    #[must_use]
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Number of weeks.
    #[inline]
    #[must_use]
    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// True when the grid holds no weeks.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Highest daily count across the grid (normalization denominator).
    #[must_use]
    pub fn max_count(&self) -> u32 {
        self.weeks.iter().map(Week::max_count).max().unwrap_or(0)
    }

    /// Sum of all daily counts.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.weeks
            .iter()
            .flat_map(|w| w.days())
            .map(|d| u64::from(d.count))
            .sum()
    }

    /// Fails with [`SkylineError::EmptyGrid`] when there are no weeks.
    ///
    /// # Errors
    ///
    /// See above.
    pub fn ensure_not_empty(&self) -> SkylineResult<()> {
        if self.is_empty() {
            return Err(SkylineError::EmptyGrid);
        }
        Ok(())
    }
}
