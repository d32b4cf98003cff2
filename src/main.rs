//! ltex-ls binary-archive bundler.
//!
//! This binary takes the prebuilt `ltex-ls-<version>.tar.gz` from the build
//! output directory, bundles a trimmed Java runtime image into it, patches the
//! launcher scripts and `.lsp-cli.json`, and emits one distribution archive
//! per supported platform/architecture.

mod bundler;
mod cli;
mod error;

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
