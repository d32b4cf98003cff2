//! Command line argument parsing.
//!
//! The bundler takes no options: one invocation always processes the full,
//! fixed list of platform/architecture targets in order. clap still provides
//! the implicit `--help` and `--version` flags.

use clap::Parser;

/// Binary-archive bundler for the ltex-ls language server
#[derive(Parser, Debug)]
#[command(
    name = "ltex-ls-bundler",
    version,
    about = "Assembles ltex-ls binary distribution archives",
    long_about = "Bundles the prebuilt ltex-ls-<version>.tar.gz with a trimmed Java runtime \
image and repackages it once per target platform (linux/x64, mac/x64, windows/x64).

Run from the repository root: the version is read from pom.xml, and both the \
application archive and the produced distribution archives live in target/."
)]
pub struct Args {}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
