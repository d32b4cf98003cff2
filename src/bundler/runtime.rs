//! Java runtime-image provisioning.
//!
//! Downloads the platform's Temurin JDK archive, extracts it into the
//! scratch directory, and runs jlink to produce a trimmed runtime image
//! inside the distribution directory. The downloaded archive and the full
//! JDK directory are both deleted again, so only the runtime image remains
//! in the final distribution.

use crate::bundler::error::{Error, ErrorExt, Result};
use crate::bundler::settings::{Arch, Platform, Settings};
use crate::bundler::utils::{archive, http};
use std::path::{Path, PathBuf};

/// Temurin release the distribution archives bundle.
pub const JAVA_VERSION: &str = "11.0.12+7";

/// Modules linked into the runtime image.
///
/// Generated by running `bin/java --list-modules` on the last AdoptOpenJDK
/// JRE. "java.se" alone does not suffice: ltex-ls then crashes on startup
/// under VS Code while deserializing LSP capability types.
pub const JAVA_MODULES: [&str; 54] = [
    "java.base",
    "java.compiler",
    "java.datatransfer",
    "java.desktop",
    "java.instrument",
    "java.logging",
    "java.management",
    "java.management.rmi",
    "java.naming",
    "java.net.http",
    "java.prefs",
    "java.rmi",
    "java.scripting",
    "java.se",
    "java.security.jgss",
    "java.security.sasl",
    "java.smartcardio",
    "java.sql",
    "java.sql.rowset",
    "java.transaction.xa",
    "java.xml",
    "java.xml.crypto",
    "jdk.accessibility",
    "jdk.aot",
    "jdk.charsets",
    "jdk.crypto.cryptoki",
    "jdk.crypto.ec",
    "jdk.dynalink",
    "jdk.httpserver",
    "jdk.internal.ed",
    "jdk.internal.le",
    "jdk.internal.vm.ci",
    "jdk.internal.vm.compiler",
    "jdk.internal.vm.compiler.management",
    "jdk.jdwp.agent",
    "jdk.jfr",
    "jdk.jsobject",
    "jdk.localedata",
    "jdk.management",
    "jdk.management.agent",
    "jdk.management.jfr",
    "jdk.naming.dns",
    "jdk.naming.ldap",
    "jdk.naming.rmi",
    "jdk.net",
    "jdk.pack",
    "jdk.scripting.nashorn",
    "jdk.scripting.nashorn.shell",
    "jdk.sctp",
    "jdk.security.auth",
    "jdk.security.jgss",
    "jdk.unsupported",
    "jdk.xml.dom",
    "jdk.zipfs",
];

/// Adoptium release downloads, parameterized by release tag and asset name.
const TEMURIN_BASE_URL: &str =
    "https://github.com/adoptium/temurin11-binaries/releases/download";

/// Provisions a trimmed runtime image for one platform/arch pair.
///
/// Downloads the JDK archive into `dist_dir`, extracts the full JDK into
/// `scratch_dir`, links the runtime image at `dist_dir/jdk-<version>`, and
/// removes both the archive and the extracted JDK again.
///
/// Returns the archive-relative directory name of the runtime image, used
/// afterwards when patching the launcher scripts.
pub async fn provision(
    scratch_dir: &Path,
    dist_dir: &Path,
    platform: Platform,
    arch: Arch,
    settings: &Settings,
) -> Result<String> {
    let java_version = settings.java_version();
    let archive_name = runtime_archive_name(platform, arch, java_version);
    let url = download_url(java_version, &archive_name);
    let archive_path = dist_dir.join(&archive_name);

    log::info!(
        "Downloading JDK from '{}' to '{}'...",
        url,
        archive_path.display()
    );
    http::download(&url, &archive_path).await?;

    log::info!("Extracting JDK archive...");
    archive::extract(&archive_path, scratch_dir).await?;

    log::info!("Removing JDK archive...");
    tokio::fs::remove_file(&archive_path)
        .await
        .fs_context("removing JDK archive", &archive_path)?;

    let runtime_dir_name = format!("jdk-{java_version}");
    let jdk_dir = scratch_dir.join(&runtime_dir_name);
    let jmods_dir = jmods_dir(&jdk_dir, platform);
    let image_dir = dist_dir.join(&runtime_dir_name);

    log::info!("Creating Java distribution...");
    link_runtime_image(&jmods_dir, settings.java_modules(), &image_dir).await?;

    log::info!("Removing JDK directory...");
    tokio::fs::remove_dir_all(&jdk_dir)
        .await
        .fs_context("removing JDK directory", &jdk_dir)?;

    Ok(runtime_dir_name)
}

/// Runs jlink to produce the runtime image at `image_dir`.
///
/// The exit status is checked explicitly, and a missing output directory is
/// still treated as a failure afterwards: jlink has been observed to exit
/// zero without producing output when the module path is wrong.
async fn link_runtime_image(
    jmods_dir: &Path,
    modules: &[String],
    image_dir: &Path,
) -> Result<()> {
    let status = tokio::process::Command::new("jlink")
        .arg("--module-path")
        .arg(jmods_dir)
        .arg("--add-modules")
        .arg(modules.join(","))
        .args(["--strip-debug", "--no-man-pages", "--no-header-files", "--compress=2"])
        .arg("--output")
        .arg(image_dir)
        .status()
        .await
        .map_err(|e| Error::CommandFailed {
            command: "jlink".to_string(),
            error: e,
        })?;

    if !status.success() {
        return Err(Error::RuntimeImageFailed {
            code: status.code(),
        });
    }

    if !image_dir.is_dir() {
        return Err(Error::RuntimeImageFailed { code: status.code() });
    }

    Ok(())
}

/// Returns the Temurin asset name for one platform/arch pair.
///
/// The release tags use `+` in the version while the asset names use `_`.
fn runtime_archive_name(platform: Platform, arch: Arch, java_version: &str) -> String {
    format!(
        "OpenJDK11U-jdk_{}_{}_hotspot_{}{}",
        arch,
        platform,
        java_version.replace('+', "_"),
        platform.archive_extension()
    )
}

/// Returns the download URL for one asset, quote-plus-encoding the version.
fn download_url(java_version: &str, archive_name: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(java_version.as_bytes()).collect();
    format!("{TEMURIN_BASE_URL}/jdk-{encoded}/{archive_name}")
}

/// Returns the module directory of an extracted JDK.
fn jmods_dir(jdk_dir: &Path, platform: Platform) -> PathBuf {
    match platform {
        // macOS JDK archives nest the real home directory.
        Platform::Mac => jdk_dir.join("Contents").join("Home").join("jmods"),
        _ => jdk_dir.join("jmods"),
    }
}
