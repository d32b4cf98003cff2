//! Core Settings struct and implementations.

use super::{Arch, Platform};
use std::path::{Path, PathBuf};

/// Main settings for one bundler run.
///
/// Central configuration for the assembler, constructed via
/// [`SettingsBuilder`](super::SettingsBuilder). The platform target list, the
/// Java version, and the module allow-list are plain data here so that tests
/// can substitute smaller fixtures.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Package name, used in archive and directory names.
    product_name: String,

    /// Resolved package version (from the build descriptor).
    version: String,

    /// Build output directory.
    ///
    /// Holds the prebuilt application archive and receives the produced
    /// distribution archives.
    target_dir: PathBuf,

    /// Java runtime version to bundle (Temurin release tag, e.g. "11.0.12+7").
    java_version: String,

    /// Modules linked into the trimmed runtime image.
    java_modules: Vec<String>,

    /// Platform/architecture pairs to produce, in order.
    targets: Vec<(Platform, Arch)>,
}

impl Settings {
    /// Returns the product name.
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Returns the version string.
    pub fn version_string(&self) -> &str {
        &self.version
    }

    /// Returns the build output directory.
    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Returns the bundled Java runtime version.
    pub fn java_version(&self) -> &str {
        &self.java_version
    }

    /// Returns the runtime-image module allow-list.
    pub fn java_modules(&self) -> &[String] {
        &self.java_modules
    }

    /// Returns the platform/architecture pairs to produce.
    pub fn targets(&self) -> &[(Platform, Arch)] {
        &self.targets
    }

    /// Returns the path of the prebuilt application archive.
    pub fn app_archive_path(&self) -> PathBuf {
        self.target_dir
            .join(format!("{}-{}.tar.gz", self.product_name, self.version))
    }

    /// Returns the top-level directory name inside the application archive.
    pub fn dist_dir_name(&self) -> String {
        format!("{}-{}", self.product_name, self.version)
    }

    /// Returns the output path of the distribution archive for one target.
    pub fn dist_archive_path(&self, platform: Platform, arch: Arch) -> PathBuf {
        self.target_dir.join(format!(
            "{}-{}-{}-{}{}",
            self.product_name,
            self.version,
            platform,
            arch,
            platform.archive_extension()
        ))
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        product_name: String,
        version: String,
        target_dir: PathBuf,
        java_version: String,
        java_modules: Vec<String>,
        targets: Vec<(Platform, Arch)>,
    ) -> Self {
        Self {
            product_name,
            version,
            target_dir,
            java_version,
            java_modules,
            targets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::SettingsBuilder;
    use super::*;

    fn settings() -> Settings {
        SettingsBuilder::new()
            .version("1.2.3".into())
            .target_dir("target")
            .build()
            .expect("settings should build")
    }

    #[test]
    fn app_archive_path_is_versioned_tar_gz() {
        assert_eq!(
            settings().app_archive_path(),
            Path::new("target/ltex-ls-1.2.3.tar.gz")
        );
    }

    #[test]
    fn dist_archive_name_includes_platform_arch_and_extension() {
        let settings = settings();
        assert_eq!(
            settings.dist_archive_path(Platform::Linux, Arch::X64),
            Path::new("target/ltex-ls-1.2.3-linux-x64.tar.gz")
        );
        assert_eq!(
            settings.dist_archive_path(Platform::Windows, Arch::X64),
            Path::new("target/ltex-ls-1.2.3-windows-x64.zip")
        );
    }
}
