//! `.lsp-cli.json` server-command-line rewriting.
//!
//! The bundled configuration tells lsp-cli how to start the server. Only the
//! `defaultValues."--server-command-line"` entry changes per platform; every
//! other key passes through untouched.

use crate::bundler::error::{Error, ErrorExt, Result};
use crate::bundler::settings::Platform;
use serde_json::Value;
use std::path::Path;

/// Configuration file inside the distribution's `bin/` directory.
const LSP_CLI_CONFIG: &str = ".lsp-cli.json";

/// Rewrites the server invocation in `bin/.lsp-cli.json` for one platform.
///
/// The file is rewritten with 2-space indentation and literal (unescaped)
/// non-ASCII characters, as the upstream tooling expects.
pub async fn set_server_command_line(dist_dir: &Path, platform: Platform) -> Result<()> {
    log::info!("Setting script name in {}...", LSP_CLI_CONFIG);

    let config_path = dist_dir.join("bin").join(LSP_CLI_CONFIG);
    let text = tokio::fs::read_to_string(&config_path)
        .await
        .fs_context("reading lsp-cli configuration", &config_path)?;

    let mut config: Value = serde_json::from_str(&text)?;
    let default_values = config
        .get_mut("defaultValues")
        .and_then(Value::as_object_mut)
        .ok_or_else(|| {
            Error::GenericError(format!(
                "'{}' has no defaultValues object",
                config_path.display()
            ))
        })?;

    default_values.insert(
        "--server-command-line".to_string(),
        Value::String(server_command_line(platform).to_string()),
    );

    let rewritten = serde_json::to_string_pretty(&config)?;
    tokio::fs::write(&config_path, rewritten)
        .await
        .fs_context("writing lsp-cli configuration", &config_path)?;

    Ok(())
}

/// Returns the platform's server invocation string.
fn server_command_line(platform: Platform) -> &'static str {
    match platform {
        Platform::Windows => "ltex-ls.bat",
        _ => "./ltex-ls",
    }
}
