use crate::config::ResolvedConfig;
use crate::constants::{DAY_HELP_TEXT, DEFAULT_DAY};
use crate::downloader::{download_file, select_link, HeadlessBrowser, LinkSource};
use crate::errors::{AppError, AppResult};
use crate::models::{DayToken, Weekday};
use crate::viewer::{show_and_cleanup, PreviewViewer, ViewerBackend, ViewerOutcome};
use chrono::Datelike;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use tracing::{info, warn};

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

/// How a run ended when no error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The resolved day falls on a weekend; nothing was fetched.
    Weekend,
    /// The menu page had no link for the resolved day.
    LinkNotFound(Weekday),
    /// The PDF was downloaded, shown, and deleted.
    Displayed(ViewerOutcome),
}

fn build_command() -> Command {
    Command::new("noon-menu")
        .version(APP_VERSION)
        .about(APP_ABOUT)
        .arg(
            Arg::new("day")
                .help(DAY_HELP_TEXT)
                .default_value(DEFAULT_DAY)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a TOML file overriding the built-in settings")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
}

/// Parses command-line arguments and runs the menu workflow.
///
/// Accepts one optional positional day argument (`today` by default) and an
/// optional `--config` file. The current weekday is taken from the local
/// clock.
///
/// # Errors
///
/// Returns an error if the config file is invalid, the browser cannot be
/// driven, the download fails, or the viewer cannot be run. Weekends and
/// missing links are not errors.
pub async fn cli() -> AppResult<()> {
    let matches = build_command().get_matches();
    let (day_arg, config) = resolve_args(&matches)?;

    let viewer = PreviewViewer::new(config.viewer_app.clone());
    let today = Weekday::from(chrono::Local::now().weekday());
    let client = reqwest::Client::new();
    run_workflow(&day_arg, today, &config, &client, &HeadlessBrowser, &viewer).await?;
    Ok(())
}

fn resolve_args(matches: &ArgMatches) -> AppResult<(String, ResolvedConfig)> {
    let day_arg = matches
        .get_one::<String>("day")
        .cloned()
        .unwrap_or_else(|| DEFAULT_DAY.to_string());

    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => ResolvedConfig::from_toml_file(path)?,
        None => ResolvedConfig::default(),
    };

    Ok((day_arg, config))
}

/// Runs the menu workflow for one day argument.
///
/// 1. Resolves the day argument against `today`
/// 2. Stops if the day is a weekend, before any network access
/// 3. Renders the menu page and collects the weekday links
/// 4. Stops if no link matches the day's Danish name
/// 5. Downloads the PDF
/// 6. Shows it in the viewer and deletes it afterwards
///
pub async fn run_workflow<L, V>(
    day_arg: &str,
    today: Weekday,
    config: &ResolvedConfig,
    client: &reqwest::Client,
    link_source: &L,
    viewer: &V,
) -> AppResult<RunOutcome>
where
    L: LinkSource + ?Sized,
    V: ViewerBackend + ?Sized,
{
    let token = DayToken::from(day_arg);
    if token.is_unknown() {
        warn!(day = day_arg.trim(), "Unknown day argument");
        println!("Unknown day argument. Defaulting to today.");
    }

    let target = token.resolve(today);
    let day_name = match target.danish_name() {
        Some(name) if target.is_menu_day() => name,
        _ => {
            info!(weekday = target.index(), "Weekend requested, nothing to fetch");
            println!("No menu PDF for weekends");
            return Ok(RunOutcome::Weekend);
        }
    };
    info!(weekday = target.index(), day = day_name, "Fetching menu");

    let links = link_source.candidate_links(config).await?;
    let pdf_url = match select_link(&links, day_name) {
        Some(link) => link.url.clone(),
        None => {
            println!("Could not find PDF for {day_name}");
            return Ok(RunOutcome::LinkNotFound(target));
        }
    };

    let download_dir = std::env::current_dir()
        .map_err(|e| AppError::IoError(format!("Failed to read working directory: {e}")))?
        .join(&config.download_dir);
    let file = download_file(client, &pdf_url, &download_dir).await?;

    let outcome = show_and_cleanup(viewer, file, config).await?;
    info!(outcome = ?outcome, "Menu shown");
    Ok(RunOutcome::Displayed(outcome))
}
