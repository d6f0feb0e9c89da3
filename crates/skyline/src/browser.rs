//! Opening a profile page (`--web`).

use std::io::Write;
use std::process::Command;

use skyline_core::{SkylineError, SkylineResult};
use tracing::debug;

use crate::source::ContributionSource;

/// Host profile pages live on.
pub const PROFILE_HOST: &str = "github.com";

/// Something that can show a URL to the user.
pub trait Browser {
    /// Shows `url`.
    ///
    /// # Errors
    ///
    /// [`SkylineError::Io`] or [`SkylineError::Stream`] if the URL could not
    /// be shown.
    fn browse(&mut self, url: &str) -> SkylineResult<()>;
}

/// Writes the URL to a stream instead of opening it.
#[derive(Debug)]
pub struct PrintBrowser<W: Write> {
    out: W,
}

impl<W: Write> PrintBrowser<W> {
    /// Creates a browser printing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying stream.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Browser for PrintBrowser<W> {
    fn browse(&mut self, url: &str) -> SkylineResult<()> {
        writeln!(self.out, "{url}").map_err(|source| SkylineError::Stream {
            context: "failed to print profile URL",
            source,
        })
    }
}

/// Launches an external program with the URL as its only argument.
#[derive(Debug, Clone)]
pub struct CommandBrowser {
    program: String,
}

impl CommandBrowser {
    /// Creates a browser launching `program`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Browser named by the `BROWSER` environment variable, if set.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        std::env::var("BROWSER")
            .ok()
            .filter(|program| !program.trim().is_empty())
            .map(Self::new)
    }
}

impl Browser for CommandBrowser {
    fn browse(&mut self, url: &str) -> SkylineResult<()> {
        debug!("opening {url} with {}", self.program);
        let status = Command::new(&self.program)
            .arg(url)
            .status()
            .map_err(|e| SkylineError::io("failed to launch browser", &self.program, e))?;
        if status.success() {
            Ok(())
        } else {
            Err(SkylineError::io(
                "browser exited with failure",
                &self.program,
                std::io::Error::other(status.to_string()),
            ))
        }
    }
}

/// Profile page URL of `user`.
#[must_use]
pub fn profile_url(user: &str) -> String {
    format!("https://{PROFILE_HOST}/{user}")
}

/// Opens the profile of `user`, or of the authenticated user when `None`.
///
/// # Errors
///
/// Failure to resolve the authenticated user or to show the URL.
pub fn open_profile(
    user: Option<&str>,
    source: &dyn ContributionSource,
    browser: &mut dyn Browser,
) -> SkylineResult<String> {
    let user = match user.filter(|u| !u.is_empty()) {
        Some(user) => user.to_string(),
        None => source.authenticated_user()?,
    };
    let url = profile_url(&user);
    browser.browse(&url)?;
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyline_core::ContributionGrid;

    struct Viewer(&'static str);

    impl ContributionSource for Viewer {
        fn authenticated_user(&self) -> SkylineResult<String> {
            Ok(self.0.to_string())
        }

        fn join_year(&self, _user: &str) -> SkylineResult<i32> {
            Ok(2015)
        }

        fn fetch_year(&self, _user: &str, _year: i32) -> SkylineResult<ContributionGrid> {
            Ok(ContributionGrid::default())
        }
    }

    #[test]
    fn test_explicit_user() {
        let mut browser = PrintBrowser::new(Vec::new());
        let url = open_profile(Some("hubot"), &Viewer("octocat"), &mut browser).unwrap();
        assert_eq!(url, "https://github.com/hubot");
        assert_eq!(browser.into_inner(), b"https://github.com/hubot\n");
    }

    #[test]
    fn test_falls_back_to_authenticated_user() {
        let mut browser = PrintBrowser::new(Vec::new());
        let url = open_profile(None, &Viewer("octocat"), &mut browser).unwrap();
        assert_eq!(url, "https://github.com/octocat");
        let url = open_profile(Some(""), &Viewer("octocat"), &mut browser).unwrap();
        assert_eq!(url, "https://github.com/octocat");
    }

    #[test]
    fn test_missing_program_fails() {
        let mut browser = CommandBrowser::new("definitely-not-a-browser-binary");
        assert!(browser.browse("https://github.com/octocat").is_err());
    }
}
