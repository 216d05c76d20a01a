//! noon-menu library
//!
//! This crate provides the core functionality for the `noon-menu` binary,
//! which fetches the day's lunch menu PDF from the Noon CPH website, opens it
//! in a viewer, and deletes it once the viewer is closed.
//!
//! ## Overview
//!
//! - [`models`] - Day arguments, weekday indices and candidate links
//! - [`downloader`] - Renders the menu page, picks the day's link, downloads the PDF
//! - [`viewer`] - Shows the PDF and guarantees it is deleted afterwards
//! - [`cli`] - Command-line interface and the end-to-end workflow
//! - [`config`] - Settings with built-in defaults and optional TOML overrides
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! ```no_run
//! use noon_menu::{cli, config::ResolvedConfig, errors::AppResult, models::Weekday};
//! use noon_menu::{downloader::HeadlessBrowser, viewer::PreviewViewer};
//!
//! # async fn example() -> AppResult<()> {
//! let config = ResolvedConfig::default();
//! let client = reqwest::Client::new();
//! let viewer = PreviewViewer::new(config.viewer_app.clone());
//! cli::run_workflow("tirsdag", Weekday::MONDAY, &config, &client, &HeadlessBrowser, &viewer).await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod downloader;
pub mod errors;
pub mod models;
pub mod utils;
pub mod viewer;
