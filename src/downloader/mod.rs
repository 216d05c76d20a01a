//! Locating and fetching the menu PDF.
//!
//! The menu page is rendered in a headless browser and its weekday links are
//! collected ([`fetch_candidate_links`], behind the [`LinkSource`] trait); the
//! link for the requested day is picked ([`select_link`]) and streamed to disk
//! ([`download_file`]).

mod file_downloader;
mod link_fetcher;
mod link_selector;

// Re-export public API
pub use file_downloader::download_file;
pub use link_fetcher::{build_candidate_links, fetch_candidate_links, HeadlessBrowser, LinkSource};
pub use link_selector::select_link;
