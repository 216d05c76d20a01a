use super::watch::ViewerBackend;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;
use tracing::debug;

/// Drives a macOS document viewer (Preview by default) through `osascript`.
#[derive(Debug, Clone)]
pub struct PreviewViewer {
    app: String,
}

impl PreviewViewer {
    pub fn new(app: impl Into<String>) -> Self {
        Self { app: app.into() }
    }

    fn open_script(&self, path: &Path) -> String {
        format!(
            "tell application \"{app}\"\n\
             \topen POSIX file \"{path}\"\n\
             \tactivate\n\
             end tell",
            app = escape(&self.app),
            path = escape(&path.to_string_lossy()),
        )
    }

    // Checks `is running` first so polling never relaunches a quit viewer.
    fn window_count_script(&self) -> String {
        format!(
            "if application \"{app}\" is running then\n\
             \ttell application \"{app}\" to return count of windows\n\
             else\n\
             \treturn 0\n\
             end if",
            app = escape(&self.app),
        )
    }

    fn quit_script(&self) -> String {
        format!(
            "if application \"{app}\" is running then tell application \"{app}\" to quit",
            app = escape(&self.app),
        )
    }
}

#[async_trait]
impl ViewerBackend for PreviewViewer {
    async fn open(&self, path: &Path) -> AppResult<()> {
        run_osascript(&self.open_script(path)).await?;
        Ok(())
    }

    async fn window_count(&self) -> AppResult<usize> {
        let output = run_osascript(&self.window_count_script()).await?;
        parse_window_count(&output)
    }

    async fn quit(&self) -> AppResult<()> {
        run_osascript(&self.quit_script()).await?;
        Ok(())
    }
}

/// Runs an AppleScript snippet and returns its trimmed stdout.
async fn run_osascript(script: &str) -> AppResult<String> {
    debug!(script = script, "Running osascript");
    let output = Command::new("osascript")
        .arg("-e")
        .arg(script)
        .output()
        .await
        .map_err(|e| AppError::ViewerError(format!("Failed to run osascript: {e}")))?;

    if !output.status.success() {
        return Err(AppError::ViewerError(format!(
            "osascript exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn parse_window_count(output: &str) -> AppResult<usize> {
    output
        .trim()
        .parse()
        .map_err(|e| AppError::ParseError(format!("Unexpected window count '{output}': {e}")))
}

/// Escapes a value for use inside an AppleScript string literal.
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
