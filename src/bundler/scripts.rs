//! Launcher-script selection and JAVA_HOME patching.
//!
//! The application archive ships both launcher variants for every script
//! (shell and batch). Per platform, the non-matching pair is deleted and the
//! surviving scripts get a JAVA_HOME default pointing at the bundled runtime
//! image, inserted directly after the script's anchor line.

use crate::bundler::error::{Error, ErrorExt, Result};
use crate::bundler::settings::Platform;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Launcher base names shipped in `bin/`.
const LAUNCHERS: [&str; 2] = ["ltex-ls", "ltex-cli"];

/// Anchor in the batch launchers. The JAVA_HOME default goes right after it.
static WINDOWS_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^set REPO=.*$").expect("anchor pattern must compile"));

/// Anchor in the shell launchers.
static UNIX_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^BASEDIR=.*$").expect("anchor pattern must compile"));

/// Deletes the non-matching launcher pair and patches the surviving scripts.
///
/// `runtime_dir_name` is the archive-relative directory of the runtime image
/// (e.g. `jdk-11.0.12+7`), as returned by
/// [`runtime::provision`](crate::bundler::runtime::provision).
pub async fn patch_launcher_scripts(
    dist_dir: &Path,
    platform: Platform,
    runtime_dir_name: &str,
) -> Result<()> {
    log::info!("Setting default for JAVA_HOME in startup script...");

    let bin_dir = dist_dir.join("bin");

    let (kept, removed, anchor): (Vec<PathBuf>, Vec<PathBuf>, &Regex) = match platform {
        Platform::Windows => (
            LAUNCHERS
                .iter()
                .map(|l| bin_dir.join(format!("{l}.bat")))
                .collect(),
            LAUNCHERS.iter().map(|l| bin_dir.join(l)).collect(),
            &WINDOWS_ANCHOR,
        ),
        _ => (
            LAUNCHERS.iter().map(|l| bin_dir.join(l)).collect(),
            LAUNCHERS
                .iter()
                .map(|l| bin_dir.join(format!("{l}.bat")))
                .collect(),
            &UNIX_ANCHOR,
        ),
    };

    for script in &removed {
        tokio::fs::remove_file(script)
            .await
            .fs_context("removing launcher script", script)?;
    }

    let insert = java_home_default(platform, runtime_dir_name);
    for script in &kept {
        insert_after_anchor(script, anchor, &insert).await?;
    }

    Ok(())
}

/// Returns the platform's JAVA_HOME default line, including its leading
/// line break.
fn java_home_default(platform: Platform, runtime_dir_name: &str) -> String {
    match platform {
        Platform::Windows => format!(
            "\r\nif not defined JAVA_HOME set JAVA_HOME=\"%BASEDIR%\\{runtime_dir_name}\""
        ),
        _ => format!(
            "\n[ -z \"$JAVA_HOME\" ] && JAVA_HOME=\"$BASEDIR\"/{runtime_dir_name}"
        ),
    }
}

/// Inserts `insert` directly after the first anchor match in `script`.
///
/// A missing anchor means the application archive's internal layout changed;
/// that aborts the run.
async fn insert_after_anchor(script: &Path, anchor: &Regex, insert: &str) -> Result<()> {
    let text = tokio::fs::read_to_string(script)
        .await
        .fs_context("reading launcher script", script)?;

    let anchor_match = anchor.find(&text).ok_or_else(|| Error::AnchorNotFound {
        path: script.to_path_buf(),
    })?;

    let mut patched = String::with_capacity(text.len() + insert.len());
    patched.push_str(&text[..anchor_match.end()]);
    patched.push_str(insert);
    patched.push_str(&text[anchor_match.end()..]);

    tokio::fs::write(script, patched)
        .await
        .fs_context("writing launcher script", script)?;

    Ok(())
}
