//! `skyline` command line entry point.
//!
//! ```text
//! skyline -y 2024 -u octocat            # one year
//! skyline -y 2014-2024 --data-dir data  # a range from fixture data
//! skyline -f -a                         # join year to now, preview only
//! skyline -w                            # show the profile URL
//! ```
//!
//! Legend of the ASCII preview:
//!
//! ```text
//!   ' '  no contributions        '░' low
//!   '.'  future dates            '▒' medium
//!   '╻┃╽' top of a week's stack  '▓' high
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use skyline::{
    asset_provider, generate_skyline, open_profile, Browser, CommandBrowser, FixtureSource,
    PrintBrowser, SkylineRequest,
};
use skyline_core::{current_year, parse_year_range, SkylineConfig};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    name = "skyline",
    about = "Generate a 3D model of a user's contribution history",
    long_about = "Creates 3D printable STL files from contribution data for a \
                  year or a range of years. An ASCII preview is printed while \
                  the model is generated. Each preview column is one week; \
                  days without contributions float to the top.",
    version
)]
struct Cli {
    /// Year or year range (e.g. 2024 or 2014-2024); defaults to this year
    #[arg(short = 'y', long = "year")]
    year: Option<String>,

    /// Username; defaults to the authenticated user
    #[arg(short = 'u', long, env = "SKYLINE_USER")]
    user: Option<String>,

    /// Cover every year from the join year to this year
    #[arg(short = 'f', long)]
    full: bool,

    /// Enable debug logging
    #[arg(short = 'd', long)]
    debug: bool,

    /// Open the profile page of the user instead of generating
    #[arg(short = 'w', long)]
    web: bool,

    /// Only print the ASCII preview
    #[arg(short = 'a', long = "art-only")]
    art_only: bool,

    /// Output file path
    #[arg(short = 'o', long)]
    output: Option<String>,

    /// Directory holding contribution fixture data
    #[arg(long = "data-dir", default_value = ".")]
    data_dir: PathBuf,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_tracing(debug: bool) {
    let filter = if debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let source = FixtureSource::new(&cli.data_dir);

    if cli.web {
        let mut browser: Box<dyn Browser> = match CommandBrowser::from_env() {
            Some(browser) => Box::new(browser),
            None => Box::new(PrintBrowser::new(std::io::stdout())),
        };
        open_profile(cli.user.as_deref(), &source, browser.as_mut())
            .context("failed to open profile")?;
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => SkylineConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SkylineConfig::default(),
    };
    debug!("configuration: {config:?}");

    let year_range = cli.year.unwrap_or_else(|| current_year().to_string());
    let (start_year, end_year) =
        parse_year_range(&year_range).with_context(|| format!("invalid year range {year_range:?}"))?;

    let request = SkylineRequest {
        user: cli.user,
        start_year,
        end_year,
        full: cli.full,
        art_only: cli.art_only,
        output: cli.output,
    };
    let assets = asset_provider(&config);
    let today = chrono::Local::now().date_naive();
    let mut stdout = std::io::stdout().lock();

    if let Some(path) = generate_skyline(&source, assets.as_ref(), &config, &request, &mut stdout, today)
        .context("failed to generate skyline")?
    {
        info!("model written to {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);
    debug!("debug logging enabled");

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from([
            "skyline", "-y", "2020-2024", "-u", "octocat", "-f", "-d", "-a", "-o", "model",
        ])
        .unwrap();
        assert_eq!(cli.year.as_deref(), Some("2020-2024"));
        assert_eq!(cli.user.as_deref(), Some("octocat"));
        assert!(cli.full && cli.debug && cli.art_only && !cli.web);
        assert_eq!(cli.output.as_deref(), Some("model"));
        assert_eq!(cli.data_dir, PathBuf::from("."));
    }
}
