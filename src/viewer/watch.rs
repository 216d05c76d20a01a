use super::cleanup::DownloadedFile;
use crate::config::ResolvedConfig;
use crate::errors::AppResult;
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// An external application able to display a file.
#[async_trait]
pub trait ViewerBackend {
    /// Opens `path` and brings the viewer to the front.
    async fn open(&self, path: &Path) -> AppResult<()>;

    /// Number of windows the viewer currently has open.
    async fn window_count(&self) -> AppResult<usize>;

    /// Quits the viewer application.
    async fn quit(&self) -> AppResult<()>;
}

/// How a viewer session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerOutcome {
    /// The user closed every window before the timeout.
    Closed,
    /// The timeout elapsed and the viewer was force-quit.
    TimedOut,
}

/// Opens `path` in the viewer and blocks until its windows are closed.
///
/// The window count is checked every `poll_interval`. Once it drops to zero
/// the viewer is quit and [`ViewerOutcome::Closed`] returned. If windows are
/// still open after `timeout`, the viewer is quit anyway and
/// [`ViewerOutcome::TimedOut`] returned. A failed poll counts as "still
/// open", so the timeout always bounds the wait.
pub async fn watch_until_closed<V>(
    viewer: &V,
    path: &Path,
    timeout: Duration,
    poll_interval: Duration,
) -> AppResult<ViewerOutcome>
where
    V: ViewerBackend + ?Sized,
{
    viewer.open(path).await?;
    info!(file_path = %path.display(), "Opened PDF in viewer");

    let deadline = Instant::now() + timeout;
    loop {
        match viewer.window_count().await {
            Ok(0) => {
                viewer.quit().await?;
                info!("Viewer closed");
                return Ok(ViewerOutcome::Closed);
            }
            Ok(windows) => debug!(windows = windows, "Viewer still open"),
            Err(e) => warn!(error = %e, "Failed to poll viewer windows"),
        }

        let now = Instant::now();
        if now >= deadline {
            break;
        }
        tokio::time::sleep(poll_interval.min(deadline - now)).await;
    }

    warn!(
        timeout_secs = timeout.as_secs(),
        "Viewer still open after timeout, closing it"
    );
    viewer.quit().await?;
    Ok(ViewerOutcome::TimedOut)
}

/// Shows the downloaded file, then deletes it.
///
/// The file is removed after the viewer closes or is force-quit. If driving
/// the viewer fails, the file is still removed before the error is returned.
pub async fn show_and_cleanup<V>(
    viewer: &V,
    file: DownloadedFile,
    config: &ResolvedConfig,
) -> AppResult<ViewerOutcome>
where
    V: ViewerBackend + ?Sized,
{
    let outcome = watch_until_closed(
        viewer,
        file.path(),
        config.viewer_timeout(),
        config.viewer_poll_interval(),
    )
    .await;

    let removed = file.remove();
    let outcome = outcome?;
    removed?;
    Ok(outcome)
}
