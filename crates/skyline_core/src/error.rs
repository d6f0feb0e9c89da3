//! # Skyline Error Types
//!
//! All errors that can occur while turning contribution data into a skyline.

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Broad category of a [`SkylineError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input rejected before any work was done.
    Validation,
    /// File, font or image access failed.
    Io,
    /// Degenerate geometry was requested.
    Geometry,
    /// The contribution data source failed.
    Network,
}

/// Errors that can occur in the skyline pipeline.
#[derive(Error, Debug)]
pub enum SkylineError {
    /// A grid with no weeks was passed to a renderer or assembler.
    #[error("contribution grid has no weeks")]
    EmptyGrid,

    /// A week must hold between one and seven days.
    #[error("a week must contain 1 to 7 days, got {0}")]
    InvalidWeekLength(usize),

    /// Year range string had more than one separator.
    #[error("invalid year range format")]
    InvalidYearRangeFormat,

    /// A year component was not a number.
    #[error("invalid year {input:?}: {source}")]
    InvalidYear {
        /// The offending text.
        input: String,
        /// Parser failure.
        #[source]
        source: ParseIntError,
    },

    /// Year outside the supported window.
    #[error("years must be between {min} and {max}")]
    YearOutOfRange {
        /// First supported year.
        min: i32,
        /// Current year.
        max: i32,
    },

    /// Start year is after end year.
    #[error("start year cannot be after end year")]
    StartAfterEnd,

    /// No username was given or resolved.
    #[error("username cannot be empty")]
    EmptyUsername,

    /// Configuration value rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Cube extents must all be strictly positive.
    #[error("invalid cube extents {0:?}: every extent must be strictly positive")]
    InvalidExtent([f64; 3]),

    /// Filesystem failure.
    #[error("{context} ({}): {source}", .path.display())]
    Io {
        /// What was being attempted.
        context: &'static str,
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// Stream failure with no file attached (in-memory writers, readers).
    #[error("{context}: {source}")]
    Stream {
        /// What was being attempted.
        context: &'static str,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// A font or image resource could not be loaded.
    #[error("failed to load asset {name}: {reason}")]
    Asset {
        /// Resource name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The contribution data source failed.
    #[error("{context}: {reason}")]
    Source {
        /// What was being fetched.
        context: String,
        /// Why it failed.
        reason: String,
    },
}

impl SkylineError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyGrid
            | Self::InvalidWeekLength(_)
            | Self::InvalidYearRangeFormat
            | Self::InvalidYear { .. }
            | Self::YearOutOfRange { .. }
            | Self::StartAfterEnd
            | Self::EmptyUsername
            | Self::InvalidConfig(_) => ErrorKind::Validation,
            Self::InvalidExtent(_) => ErrorKind::Geometry,
            Self::Io { .. } | Self::Stream { .. } | Self::Asset { .. } => ErrorKind::Io,
            Self::Source { .. } => ErrorKind::Network,
        }
    }

    /// Builds an [`SkylineError::Io`] for `path`.
    pub fn io(context: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            context,
            path: path.into(),
            source,
        }
    }

    /// Builds an [`SkylineError::Asset`].
    pub fn asset(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Asset {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Builds a [`SkylineError::Source`].
    pub fn fetch(context: impl Into<String>, reason: impl ToString) -> Self {
        Self::Source {
            context: context.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for skyline operations.
pub type SkylineResult<T> = Result<T, SkylineError>;
