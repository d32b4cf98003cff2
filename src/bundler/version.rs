//! Package version resolution from the build descriptor.

use crate::bundler::error::{Error, ErrorExt, Result};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// First `<version>` element wins; the descriptor is not parsed as XML.
static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<version>(.*?)</version>").expect("version pattern must compile")
});

/// Reads the build descriptor and returns the captured package version.
///
/// # Errors
///
/// Returns [`Error::VersionNotFound`] if the descriptor contains no
/// `<version>` element. The rest of the pipeline cannot proceed without a
/// version, so the caller aborts the whole run.
pub async fn resolve_version(descriptor: &Path) -> Result<String> {
    let text = tokio::fs::read_to_string(descriptor)
        .await
        .fs_context("reading build descriptor", descriptor)?;

    VERSION_PATTERN
        .captures(&text)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| Error::VersionNotFound {
            path: descriptor.to_path_buf(),
        })
}
