//! External tool detection and availability checking.

use std::sync::LazyLock;

/// Check if jlink is available for runtime-image creation.
///
/// Cached result to avoid repeated subprocess calls; the probe runs once at
/// first use, before any download happens.
pub static HAS_JLINK: LazyLock<bool> = LazyLock::new(|| match which::which("jlink") {
    Ok(path) => {
        log::debug!("Found jlink at: {}", path.display());

        match std::process::Command::new(&path).arg("--version").output() {
            Ok(output) if output.status.success() => {
                let version = String::from_utf8_lossy(&output.stdout);
                log::info!("✓ jlink available: {}", version.trim());
                true
            }
            Ok(output) => {
                log::warn!(
                    "jlink found at {} but --version check failed (exit code: {:?}). \
                         Stderr: {}",
                    path.display(),
                    output.status.code(),
                    String::from_utf8_lossy(&output.stderr)
                );
                false
            }
            Err(e) => {
                log::warn!(
                    "jlink found at {} but failed to execute: {}. \
                         Check file permissions.",
                    path.display(),
                    e
                );
                false
            }
        }
    }
    Err(e) => {
        log::debug!("jlink not found in PATH: {}", e);
        false
    }
});
