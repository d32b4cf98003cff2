//! Command line interface for the ltex-ls bundler.
//!
//! Resolves the package version from the build descriptor, then drives the
//! archive assembler over the fixed platform/architecture target list.

mod args;

pub use args::Args;

use std::path::Path;

use crate::bundler::settings::SettingsBuilder;
use crate::bundler::{Assembler, tool_detection::HAS_JLINK, version};
use crate::error::Result;

/// Build descriptor holding the package version, expected in the working directory.
const BUILD_DESCRIPTOR: &str = "pom.xml";

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let _args = Args::parse_args();

    let ltex_ls_version = version::resolve_version(Path::new(BUILD_DESCRIPTOR)).await?;
    log::info!("Assembling binary archives for ltex-ls {}", ltex_ls_version);

    if !*HAS_JLINK {
        crate::bail!("jlink not found in PATH; a full JDK installation is required");
    }

    let settings = SettingsBuilder::new()
        .version(ltex_ls_version)
        .target_dir("target")
        .build()?;

    let assembler = Assembler::new(settings);
    let artifacts = assembler.assemble_all().await?;

    for artifact in &artifacts {
        log::info!(
            "{} ({} bytes, sha256 {})",
            artifact.path.display(),
            artifact.size,
            artifact.checksum
        );
    }

    Ok(0)
}
