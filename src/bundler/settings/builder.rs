//! Builder for constructing Settings.

use super::{Arch, Platform, Settings, platform::DIST_TARGETS};
use crate::bundler::error::Context;
use crate::bundler::runtime;
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// Only the version and the build output directory are required; the product
/// name, Java version, module allow-list, and target list default to the
/// values used for ltex-ls releases.
#[derive(Default)]
pub struct SettingsBuilder {
    product_name: Option<String>,
    version: Option<String>,
    target_dir: Option<PathBuf>,
    java_version: Option<String>,
    java_modules: Option<Vec<String>>,
    targets: Option<Vec<(Platform, Arch)>>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the product name.
    ///
    /// Default: `ltex-ls`
    pub fn product_name(mut self, name: String) -> Self {
        self.product_name = Some(name);
        self
    }

    /// Sets the package version.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn version(mut self, version: String) -> Self {
        self.version = Some(version);
        self
    }

    /// Sets the build output directory.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn target_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.target_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the Java runtime version to bundle.
    ///
    /// Default: [`runtime::JAVA_VERSION`]
    pub fn java_version(mut self, version: String) -> Self {
        self.java_version = Some(version);
        self
    }

    /// Sets the runtime-image module allow-list.
    ///
    /// Default: [`runtime::JAVA_MODULES`]
    pub fn java_modules(mut self, modules: Vec<String>) -> Self {
        self.java_modules = Some(modules);
        self
    }

    /// Sets the platform/architecture pairs to produce.
    ///
    /// Default: linux/x64, mac/x64, windows/x64
    pub fn targets(mut self, targets: Vec<(Platform, Arch)>) -> Self {
        self.targets = Some(targets);
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `version` or `target_dir` is missing.
    pub fn build(self) -> crate::bundler::Result<Settings> {
        Ok(Settings::new(
            self.product_name.unwrap_or_else(|| "ltex-ls".into()),
            self.version.context("version is required")?,
            self.target_dir.context("target_dir is required")?,
            self.java_version
                .unwrap_or_else(|| runtime::JAVA_VERSION.into()),
            self.java_modules.unwrap_or_else(|| {
                runtime::JAVA_MODULES.iter().map(|m| m.to_string()).collect()
            }),
            self.targets.unwrap_or_else(|| DIST_TARGETS.to_vec()),
        ))
    }
}
