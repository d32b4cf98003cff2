//! Main assembler orchestration and coordination.
//!
//! This module provides the [`Assembler`] orchestrator that produces one
//! distribution archive per platform/architecture target.

use crate::bundler::error::{ErrorExt, Result};
use crate::bundler::settings::{Arch, Platform, Settings};
use crate::bundler::utils::archive;
use crate::bundler::{checksum, lsp_config, runtime, scripts};
use std::path::PathBuf;

/// One produced distribution archive.
#[derive(Clone, Debug)]
pub struct BundledArtifact {
    /// Platform the archive targets
    pub platform: Platform,
    /// Architecture the archive targets
    pub arch: Arch,
    /// Path of the archive in the build output directory
    pub path: PathBuf,
    /// Archive size in bytes
    pub size: u64,
    /// Hex-encoded SHA-256 checksum of the archive
    pub checksum: String,
}

/// Main assembler orchestrator.
///
/// Drives the per-platform pipeline: extract the application archive into a
/// scratch directory, provision the runtime image, patch launcher scripts
/// and `.lsp-cli.json`, and repackage the result.
///
/// The targets run strictly one after another; the first failure aborts the
/// run, and remaining targets are not attempted. The scratch directory of a
/// target is removed on every exit path, including failures, because its
/// lifetime is bound to a [`tempfile::TempDir`] guard.
#[derive(Debug)]
pub struct Assembler {
    settings: Settings,
}

impl Assembler {
    /// Creates a new assembler with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Produces one archive per configured platform/architecture target.
    pub async fn assemble_all(&self) -> Result<Vec<BundledArtifact>> {
        let mut artifacts = Vec::new();

        for &(platform, arch) in self.settings.targets() {
            artifacts.push(self.assemble(platform, arch).await?);
        }

        Ok(artifacts)
    }

    /// Produces the distribution archive for one platform/architecture pair.
    pub async fn assemble(&self, platform: Platform, arch: Arch) -> Result<BundledArtifact> {
        log::info!("Processing platform/arch '{}/{}'...", platform, arch);

        let scratch = tempfile::tempdir().map_err(crate::bundler::Error::IoError)?;
        let scratch_dir = scratch.path();

        log::info!("Extracting {} archive...", self.settings.product_name());
        let app_archive = self.settings.app_archive_path();
        archive::extract(&app_archive, scratch_dir).await?;

        let dist_dir = scratch_dir.join(self.settings.dist_dir_name());
        let runtime_dir_name =
            runtime::provision(scratch_dir, &dist_dir, platform, arch, &self.settings).await?;

        scripts::patch_launcher_scripts(&dist_dir, platform, &runtime_dir_name).await?;
        lsp_config::set_server_command_line(&dist_dir, platform).await?;

        let output_path = self.settings.dist_archive_path(platform, arch);
        log::info!("Creating binary archive '{}'...", output_path.display());
        archive::create(scratch_dir, &output_path).await?;

        let size = tokio::fs::metadata(&output_path)
            .await
            .fs_context("reading artifact metadata", &output_path)?
            .len();
        let checksum = checksum::calculate_sha256(&output_path).await?;

        log::info!("✓ Created archive: {}", output_path.display());

        Ok(BundledArtifact {
            platform,
            arch,
            path: output_path,
            size,
            checksum,
        })
        // `scratch` drops here, removing the whole tree on every exit path
    }

    /// Returns a reference to the assembler settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
