//! HTTP utilities for downloading runtime archives.

use crate::bundler::error::{Error, ErrorExt, Result};
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Downloads a file from a URL to `dest`, streaming the body to disk.
///
/// JDK archives run to a few hundred megabytes, so the response is written
/// chunk by chunk instead of being buffered in memory. There is no retry: a
/// network failure or an HTTP error status aborts the run.
pub async fn download(url: &str, dest: &Path) -> Result<()> {
    log::info!("Downloading {}", url);

    let mut response = reqwest::get(url)
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|source| Error::Download {
            url: url.to_string(),
            source,
        })?;

    let mut file = tokio::fs::File::create(dest)
        .await
        .fs_context("creating download target", dest)?;

    while let Some(chunk) = response.chunk().await.map_err(|source| Error::Download {
        url: url.to_string(),
        source,
    })? {
        file.write_all(&chunk)
            .await
            .fs_context("writing downloaded chunk", dest)?;
    }

    file.flush().await.fs_context("flushing download", dest)?;
    Ok(())
}
