//! Displaying the downloaded PDF and removing it afterwards.
//!
//! [`watch_until_closed`] drives any [`ViewerBackend`]: it opens the file,
//! polls until the viewer has no windows left, and force-quits the viewer
//! once the timeout is reached. [`show_and_cleanup`] wraps this so the
//! [`DownloadedFile`] is deleted however the viewer session ends.

mod cleanup;
mod preview;
mod watch;

// Re-export public API
pub use cleanup::DownloadedFile;
pub use preview::PreviewViewer;
pub use watch::{show_and_cleanup, watch_until_closed, ViewerBackend, ViewerOutcome};
