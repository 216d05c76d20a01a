use crate::constants::*;
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resolved configuration with every value filled in.
///
/// `Default` reproduces the built-in behaviour. A TOML file may override any
/// subset of the fields; missing fields keep their defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolvedConfig {
    /// Page listing one download link per weekday
    pub page_url: String,
    /// CSS selector matching the weekday links on that page
    pub link_selector: String,
    /// Directory the PDF is downloaded into, relative to the working directory
    pub download_dir: PathBuf,
    /// Chrome/Chromium executable. When unset, the browser is auto-detected.
    pub chrome_executable: Option<PathBuf>,

    // Viewer
    /// macOS application used to display the PDF
    pub viewer_app: String,
    /// Seconds to wait for the viewer window to close before force-quitting
    pub viewer_timeout_secs: u64,
    /// Milliseconds between viewer window polls
    pub viewer_poll_interval_ms: u64,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            page_url: MENU_PAGE_URL.to_string(),
            link_selector: DAY_LINK_SELECTOR.to_string(),
            download_dir: PathBuf::from(DOWNLOAD_DIR),
            chrome_executable: None,
            viewer_app: VIEWER_APP.to_string(),
            viewer_timeout_secs: VIEWER_TIMEOUT_SECS,
            viewer_poll_interval_ms: VIEWER_POLL_INTERVAL_MS,
        }
    }
}

impl ResolvedConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the file cannot be read, and `InvalidInput` if the
    /// TOML is malformed, contains unknown keys, or sets a zero timeout or
    /// poll interval.
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            AppError::IoError(format!("Failed to read config {}: {e}", path.display()))
        })?;
        let config: ResolvedConfig = toml::from_str(&contents)?;

        if config.viewer_timeout_secs == 0 {
            return Err(AppError::InvalidInput(
                "Viewer timeout must be greater than 0".into(),
            ));
        }
        if config.viewer_poll_interval_ms == 0 {
            return Err(AppError::InvalidInput(
                "Viewer poll interval must be greater than 0".into(),
            ));
        }

        Ok(config)
    }

    pub fn viewer_timeout(&self) -> Duration {
        Duration::from_secs(self.viewer_timeout_secs)
    }

    pub fn viewer_poll_interval(&self) -> Duration {
        Duration::from_millis(self.viewer_poll_interval_ms)
    }
}
