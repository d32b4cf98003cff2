//! Integration tests for the patch-and-package stages.
//!
//! Stages a distribution tree the way it looks after application-archive
//! extraction and runtime provisioning (no network, no jlink), then exercises
//! launcher patching, configuration rewriting, and repackaging end to end.

use ltex_ls_bundler::bundler::settings::Platform;
use ltex_ls_bundler::bundler::utils::archive;
use ltex_ls_bundler::bundler::{lsp_config, scripts};
use std::fs;
use std::path::{Path, PathBuf};

const SHELL_SCRIPT: &str = "#!/bin/sh\nBASEDIR=$(dirname \"$0\")/..\nexec java -cp \"$REPO\" app\n";
const BATCH_SCRIPT: &str = "@echo off\r\nset BASEDIR=%~dp0..\r\nset REPO=%BASEDIR%\\repo\r\njava %*\r\n";
const LSP_CLI_JSON: &str = r#"{
  "defaultValues": {
    "--server-command-line": "placeholder"
  },
  "languageId": "ltex"
}"#;

/// Builds a scratch tree as it looks right after runtime provisioning:
/// `<scratch>/ltex-ls-1.2.3/` with both launcher pairs, the lsp-cli config,
/// and a runtime image directory (no JDK archive, no full JDK directory).
fn stage_scratch_tree(scratch_dir: &Path) -> PathBuf {
    let dist_dir = scratch_dir.join("ltex-ls-1.2.3");
    let bin_dir = dist_dir.join("bin");
    fs::create_dir_all(&bin_dir).expect("mkdir bin");

    for launcher in ["ltex-ls", "ltex-cli"] {
        fs::write(bin_dir.join(launcher), SHELL_SCRIPT).expect("write shell launcher");
        fs::write(bin_dir.join(format!("{launcher}.bat")), BATCH_SCRIPT)
            .expect("write batch launcher");
    }
    fs::write(bin_dir.join(".lsp-cli.json"), LSP_CLI_JSON).expect("write config");

    let runtime_bin = dist_dir.join("jdk-11.0.12+7").join("bin");
    fs::create_dir_all(&runtime_bin).expect("mkdir runtime");
    fs::write(runtime_bin.join("java"), "binary").expect("write runtime stub");

    dist_dir
}

async fn patch(dist_dir: &Path, platform: Platform) {
    scripts::patch_launcher_scripts(dist_dir, platform, "jdk-11.0.12+7")
        .await
        .expect("patch launchers");
    lsp_config::set_server_command_line(dist_dir, platform)
        .await
        .expect("patch config");
}

fn walk_relative(root: &Path) -> Vec<(PathBuf, Option<Vec<u8>>)> {
    let mut entries: Vec<(PathBuf, Option<Vec<u8>>)> = walkdir::WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path() != root)
        .map(|e| {
            let rel = e.path().strip_prefix(root).expect("relative").to_path_buf();
            let contents = e
                .file_type()
                .is_file()
                .then(|| fs::read(e.path()).expect("read"));
            (rel, contents)
        })
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries
}

#[tokio::test]
async fn linux_distribution_ships_shell_launchers_only() {
    let scratch = tempfile::tempdir().expect("tempdir");
    let dist_dir = stage_scratch_tree(scratch.path());

    patch(&dist_dir, Platform::Linux).await;

    let bin_dir = dist_dir.join("bin");
    assert!(bin_dir.join("ltex-ls").exists());
    assert!(bin_dir.join("ltex-cli").exists());
    assert!(!bin_dir.join("ltex-ls.bat").exists());
    assert!(!bin_dir.join("ltex-cli.bat").exists());

    let launcher = fs::read_to_string(bin_dir.join("ltex-ls")).expect("read");
    let lines: Vec<&str> = launcher.lines().collect();
    let anchor_index = lines
        .iter()
        .position(|l| l.starts_with("BASEDIR="))
        .expect("anchor line");
    assert_eq!(
        lines[anchor_index + 1],
        "[ -z \"$JAVA_HOME\" ] && JAVA_HOME=\"$BASEDIR\"/jdk-11.0.12+7"
    );

    let config: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(bin_dir.join(".lsp-cli.json")).expect("read"))
            .expect("valid JSON");
    assert_eq!(config["defaultValues"]["--server-command-line"], "./ltex-ls");
    assert_eq!(config["languageId"], "ltex");
}

#[tokio::test]
async fn windows_distribution_ships_batch_launchers_only() {
    let scratch = tempfile::tempdir().expect("tempdir");
    let dist_dir = stage_scratch_tree(scratch.path());

    patch(&dist_dir, Platform::Windows).await;

    let bin_dir = dist_dir.join("bin");
    assert!(!bin_dir.join("ltex-ls").exists());
    assert!(!bin_dir.join("ltex-cli").exists());
    assert!(bin_dir.join("ltex-ls.bat").exists());
    assert!(bin_dir.join("ltex-cli.bat").exists());

    let launcher = fs::read_to_string(bin_dir.join("ltex-ls.bat")).expect("read");
    assert!(launcher.contains(
        "\r\nif not defined JAVA_HOME set JAVA_HOME=\"%BASEDIR%\\jdk-11.0.12+7\""
    ));
    assert_eq!(launcher.matches("if not defined JAVA_HOME").count(), 1);

    let config: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(bin_dir.join(".lsp-cli.json")).expect("read"))
            .expect("valid JSON");
    assert_eq!(
        config["defaultValues"]["--server-command-line"],
        "ltex-ls.bat"
    );
}

#[tokio::test]
async fn repackaging_the_scratch_tree_is_lossless() {
    let scratch = tempfile::tempdir().expect("tempdir");
    let dist_dir = stage_scratch_tree(scratch.path());
    patch(&dist_dir, Platform::Linux).await;

    let out = tempfile::tempdir().expect("tempdir");
    let archive_path = out.path().join("ltex-ls-1.2.3-linux-x64.tar.gz");
    archive::create(scratch.path(), &archive_path)
        .await
        .expect("create archive");

    let extracted = out.path().join("extracted");
    archive::extract(&archive_path, &extracted)
        .await
        .expect("extract archive");

    assert_eq!(walk_relative(scratch.path()), walk_relative(&extracted));
}

#[tokio::test]
async fn linux_archive_contains_runtime_image_without_jdk_leftovers() {
    let scratch = tempfile::tempdir().expect("tempdir");
    let dist_dir = stage_scratch_tree(scratch.path());
    patch(&dist_dir, Platform::Linux).await;

    let out = tempfile::tempdir().expect("tempdir");
    let archive_path = out.path().join("ltex-ls-1.2.3-linux-x64.tar.gz");
    archive::create(scratch.path(), &archive_path)
        .await
        .expect("create archive");

    let extracted = out.path().join("extracted");
    archive::extract(&archive_path, &extracted)
        .await
        .expect("extract archive");

    let extracted_dist = extracted.join("ltex-ls-1.2.3");
    assert!(extracted_dist.join("jdk-11.0.12+7").is_dir());

    let leftovers: Vec<PathBuf> = walkdir::WalkDir::new(&extracted)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| {
            let name = p.file_name().and_then(|n| n.to_str()).unwrap_or("");
            name.starts_with("OpenJDK11U-") || name.ends_with(".tar.gz") || name.ends_with(".zip")
        })
        .collect();
    assert!(leftovers.is_empty(), "unexpected JDK leftovers: {leftovers:?}");
}

#[tokio::test]
async fn windows_archive_is_a_zip_with_patched_contents() {
    let scratch = tempfile::tempdir().expect("tempdir");
    let dist_dir = stage_scratch_tree(scratch.path());
    patch(&dist_dir, Platform::Windows).await;

    let out = tempfile::tempdir().expect("tempdir");
    let archive_path = out.path().join("ltex-ls-1.2.3-windows-x64.zip");
    archive::create(scratch.path(), &archive_path)
        .await
        .expect("create archive");

    let extracted = out.path().join("extracted");
    archive::extract(&archive_path, &extracted)
        .await
        .expect("extract archive");

    assert_eq!(walk_relative(scratch.path()), walk_relative(&extracted));
    assert!(
        extracted
            .join("ltex-ls-1.2.3")
            .join("bin")
            .join("ltex-ls.bat")
            .exists()
    );
}
