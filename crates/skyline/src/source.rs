//! # Contribution Sources
//!
//! The only place that knows where contribution data comes from. The
//! renderers receive finished [`ContributionGrid`]s and never see this
//! module.
//!
//! ## Fixture Layout
//!
//! ```text
//! <data-dir>/
//! ├── viewer.json              {"viewer": {"login": "octocat"}}
//! └── octocat/
//!     ├── profile.json         {"createdAt": "2011-01-25T18:44:36Z"}
//!     ├── 2023.json            GraphQL contributions response
//!     └── 2024.json
//! ```

use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use skyline_core::{
    ContributionDay, ContributionGrid, SkylineError, SkylineResult, LAUNCH_YEAR,
};
use tracing::debug;

/// Where contribution data comes from.
pub trait ContributionSource {
    /// Login of the user the source is authenticated as.
    ///
    /// # Errors
    ///
    /// [`SkylineError::Source`] if the lookup fails or returns no login.
    fn authenticated_user(&self) -> SkylineResult<String>;

    /// Calendar year in which `user` created their account.
    ///
    /// # Errors
    ///
    /// [`SkylineError::EmptyUsername`] or [`SkylineError::Source`].
    fn join_year(&self, user: &str) -> SkylineResult<i32>;

    /// One year of contributions for `user`.
    ///
    /// # Errors
    ///
    /// [`SkylineError::EmptyUsername`], [`SkylineError::YearOutOfRange`] for
    /// years before launch, or [`SkylineError::Source`].
    fn fetch_year(&self, user: &str, year: i32) -> SkylineResult<ContributionGrid>;
}

/// `viewer { login }` response.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewerResponse {
    /// Authenticated viewer.
    pub viewer: Viewer,
}

/// The authenticated viewer.
#[derive(Debug, Clone, Deserialize)]
pub struct Viewer {
    /// Login name.
    pub login: String,
}

/// `user { createdAt }` response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    /// Account creation time.
    pub created_at: DateTime<Utc>,
}

/// Contributions query response.
#[derive(Debug, Clone, Deserialize)]
pub struct ContributionsResponse {
    /// Queried user.
    pub user: ContributionsUser,
}

/// User node of a contributions response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsUser {
    /// Login name.
    pub login: String,
    /// Contributions in the queried window.
    pub contributions_collection: ContributionsCollection,
}

/// Contributions collection node.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsCollection {
    /// The calendar.
    pub contribution_calendar: ContributionCalendar,
}

/// Calendar: weeks of days.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCalendar {
    /// Sum over every day.
    #[serde(default)]
    pub total_contributions: u64,
    /// Weeks, oldest first.
    pub weeks: Vec<CalendarWeek>,
}

/// One calendar week.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarWeek {
    /// Days, oldest first.
    pub contribution_days: Vec<ContributionDay>,
}

impl ContributionsResponse {
    /// Converts the calendar into a grid.
    ///
    /// # Errors
    ///
    /// [`SkylineError::Source`] when the response names no user, and
    /// [`SkylineError::InvalidWeekLength`] for malformed weeks.
    pub fn into_grid(self) -> SkylineResult<ContributionGrid> {
        if self.user.login.is_empty() {
            return Err(SkylineError::fetch(
                "failed to fetch contributions",
                "received empty username",
            ));
        }
        let weeks = self
            .user
            .contributions_collection
            .contribution_calendar
            .weeks
            .into_iter()
            .map(|week| week.contribution_days)
            .collect();
        ContributionGrid::from_days(weeks)
    }
}

/// Reads GraphQL-shaped JSON responses from a directory.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    root: PathBuf,
}

impl FixtureSource {
    /// File holding the viewer response.
    pub const VIEWER_FILE: &'static str = "viewer.json";
    /// Per-user file holding the profile response.
    pub const PROFILE_FILE: &'static str = "profile.json";

    /// Creates a source rooted at `root`.
    #[must_use]
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn read<T: DeserializeOwned>(&self, context: &str, relative: &Path) -> SkylineResult<T> {
        let path = self.root.join(relative);
        debug!("reading {}", path.display());
        let text = std::fs::read_to_string(&path)
            .map_err(|e| SkylineError::fetch(context, format!("{}: {e}", path.display())))?;
        serde_json::from_str(&text)
            .map_err(|e| SkylineError::fetch(context, format!("{}: {e}", path.display())))
    }
}

fn require_user(user: &str) -> SkylineResult<()> {
    if user.is_empty() {
        return Err(SkylineError::EmptyUsername);
    }
    Ok(())
}

impl ContributionSource for FixtureSource {
    fn authenticated_user(&self) -> SkylineResult<String> {
        let response: ViewerResponse =
            self.read("failed to fetch authenticated user", Path::new(Self::VIEWER_FILE))?;
        if response.viewer.login.is_empty() {
            return Err(SkylineError::fetch(
                "failed to fetch authenticated user",
                "received empty username",
            ));
        }
        Ok(response.viewer.login)
    }

    fn join_year(&self, user: &str) -> SkylineResult<i32> {
        require_user(user)?;
        let relative = Path::new(user).join(Self::PROFILE_FILE);
        let profile: ProfileResponse = self.read("failed to fetch user's join date", &relative)?;
        Ok(profile.created_at.year())
    }

    fn fetch_year(&self, user: &str, year: i32) -> SkylineResult<ContributionGrid> {
        require_user(user)?;
        if year < LAUNCH_YEAR {
            return Err(SkylineError::YearOutOfRange {
                min: LAUNCH_YEAR,
                max: skyline_core::current_year(),
            });
        }
        let relative = Path::new(user).join(format!("{year}.json"));
        let response: ContributionsResponse =
            self.read("failed to fetch contributions", &relative)?;
        response.into_grid()
    }
}
