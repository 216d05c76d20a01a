use crate::errors::{AppError, AppResult};
use crate::utils::{file_name_from_url, format_size};
use crate::viewer::DownloadedFile;
use std::path::Path;
use tokio::fs;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};
use url::Url;

/// Streams a PDF into `download_dir`.
///
/// The file is named after the last path segment of `url` and written chunk
/// by chunk, so the body is never held in memory. A file with the same name
/// is overwritten. The directory is created if missing.
///
/// The returned [`DownloadedFile`] owns the file and deletes it when dropped.
/// If the transfer fails part-way, the partial file is removed.
///
/// # Errors
///
/// Returns an error if:
/// - The URL is invalid or has no file name
/// - The request fails or the server answers with a non-success status
/// - The directory or file cannot be created or written
///
pub async fn download_file(
    client: &reqwest::Client,
    url: &str,
    download_dir: &Path,
) -> AppResult<DownloadedFile> {
    let parsed = Url::parse(url)?;
    let filename = file_name_from_url(&parsed)
        .ok_or_else(|| AppError::UrlError(format!("No file name in {url}")))?
        .to_string();

    // Create directory if it doesn't exist
    if !download_dir.exists() {
        fs::create_dir_all(download_dir)
            .await
            .map_err(|e| AppError::IoError(format!("Failed to create directory: {e}")))?;
    }
    let file_path = download_dir.join(&filename);

    debug!(url = url, "Requesting PDF");
    let response = client
        .get(parsed)
        .send()
        .await
        .map_err(|e| AppError::NetworkError(format!("Failed to download {filename}: {e}")))?;

    let status = response.status();
    let mut response = response.error_for_status().map_err(|e| {
        let status_code = status.as_u16();
        AppError::NetworkError(format!(
            "HTTP {status_code}: Failed to download {filename}: {e}"
        ))
    })?;

    let mut file = File::create(&file_path).await.map_err(|e| {
        AppError::IoError(format!(
            "Failed to create file {}: {}",
            file_path.display(),
            e
        ))
    })?;
    let downloaded = DownloadedFile::new(file_path);

    let mut written: u64 = 0;
    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk).await.map_err(|e| {
            AppError::IoError(format!(
                "Failed to write to file {}: {}",
                downloaded.path().display(),
                e
            ))
        })?;
        written += chunk.len() as u64;
    }
    file.flush().await?;
    // Close the handle before the viewer gets the file
    drop(file);

    info!(
        filename = %filename,
        size = %format_size(written),
        "PDF downloaded"
    );

    Ok(downloaded)
}
