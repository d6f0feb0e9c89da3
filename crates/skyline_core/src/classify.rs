//! # Height Classifier
//!
//! Maps a day's count to a discrete height level and, for contributing days,
//! to its position in the week's building stack.
//!
//! ## Levels
//!
//! ```text
//! normalized = count / max(maxCount, 1)
//!
//!   0            -> Sky
//!   (0, 1/3]     -> Low
//!   (1/3, 2/3]   -> Medium
//!   (2/3, 1]     -> High
//! ```
//!
//! ## Roles
//!
//! Contributing days of a week stack bottom-to-top in chronological order.
//! The first one is the Foundation (even when it is also the last), the last
//! one is the Top, everything between is Middle.

use crate::contribution::Week;

/// Upper bound of the Low band.
const LOW_CEILING: f64 = 1.0 / 3.0;

/// Upper bound of the Medium band.
const MEDIUM_CEILING: f64 = 2.0 / 3.0;

/// Discrete height of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeightLevel {
    /// No contributions.
    Sky,
    /// Up to a third of the maximum.
    Low,
    /// Up to two thirds of the maximum.
    Medium,
    /// Above two thirds of the maximum.
    High,
}

impl HeightLevel {
    /// Classifies a normalized value in `[0, 1]`.
    #[must_use]
    pub fn from_normalized(normalized: f64) -> Self {
        if normalized <= 0.0 {
            Self::Sky
        } else if normalized <= LOW_CEILING {
            Self::Low
        } else if normalized <= MEDIUM_CEILING {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Number of stacked building tiers for this level (Sky = 0, High = 3).
    #[inline]
    #[must_use]
    pub const fn tiers(self) -> u32 {
        match self {
            Self::Sky => 0,
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }
}

/// Vertical position of a contributing day among its week's contributing days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackRole {
    /// Bottom of the stack.
    Foundation,
    /// Between foundation and top.
    Middle,
    /// Last contributing day of the week.
    Top,
}

impl StackRole {
    /// Role of the `index`-th contributing day out of `active_days`.
    #[must_use]
    pub const fn for_index(index: usize, active_days: usize) -> Self {
        if index == 0 {
            Self::Foundation
        } else if index + 1 == active_days {
            Self::Top
        } else {
            Self::Middle
        }
    }
}

/// Result of classifying one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Height band.
    pub level: HeightLevel,
    /// Stack position, `None` for sky days.
    pub role: Option<StackRole>,
}

impl Classification {
    /// Classification of a day without contributions.
    pub const SKY: Self = Self {
        level: HeightLevel::Sky,
        role: None,
    };
}

/// Normalizes `count` against `max_count`, clamped to `[0, 1]`.
#[inline]
#[must_use]
pub fn normalize(count: u32, max_count: u32) -> f64 {
    (f64::from(count) / f64::from(max_count.max(1))).clamp(0.0, 1.0)
}

/// Classifies a single day.
///
/// # Arguments
///
/// * `count` - The day's count
/// * `max_count` - Highest count in the grid
/// * `day_index` - Index among the week's contributing days, bottom-to-top
/// * `active_days` - Number of contributing days in the week
#[must_use]
pub fn classify(count: u32, max_count: u32, day_index: usize, active_days: usize) -> Classification {
    let level = HeightLevel::from_normalized(normalize(count, max_count));
    if level == HeightLevel::Sky {
        return Classification::SKY;
    }
    Classification {
        level,
        role: Some(StackRole::for_index(day_index, active_days)),
    }
}

/// Classifies every day of a week, in the week's chronological order.
#[must_use]
pub fn classify_week(week: &Week, max_count: u32) -> Vec<Classification> {
    let active_days = week.active_days();
    let mut next_index = 0;
    week.days()
        .iter()
        .map(|day| {
            if !day.is_active() {
                return Classification::SKY;
            }
            let classification = classify(day.count, max_count, next_index, active_days);
            next_index += 1;
            classification
        })
        .collect()
}
