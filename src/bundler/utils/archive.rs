//! Archive extraction and creation.
//!
//! Both directions dispatch on the archive filename: `.tar.gz` uses the
//! gzip-tar codec, `.zip` the zip codec. The blocking archive I/O runs on
//! the dedicated blocking thread pool.
//!
//! Created archives contain the *contents* of the source directory as
//! top-level entries (not the source directory itself), matching how the
//! distribution archives are laid out.

use crate::bundler::error::{Error, ErrorExt, Result};
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use std::io;
use std::path::{Path, PathBuf};

/// Extracts an archive into `dest_dir`, dispatching on the file extension.
pub async fn extract(archive_path: &Path, dest_dir: &Path) -> Result<()> {
    let archive_path = archive_path.to_path_buf();
    let dest_dir = dest_dir.to_path_buf();

    run_blocking(move || {
        let name = file_name(&archive_path);
        if name.ends_with(".tar.gz") {
            extract_tar_gz(&archive_path, &dest_dir)
        } else if name.ends_with(".zip") {
            extract_zip(&archive_path, &dest_dir)
        } else {
            Err(Error::GenericError(format!(
                "unsupported archive format: '{}' (expected .tar.gz or .zip)",
                archive_path.display()
            )))
        }
    })
    .await
}

/// Packs the contents of `src_dir` into an archive at `dest`, dispatching on
/// the destination extension.
pub async fn create(src_dir: &Path, dest: &Path) -> Result<()> {
    let src_dir = src_dir.to_path_buf();
    let dest = dest.to_path_buf();

    run_blocking(move || {
        let name = file_name(&dest);
        if name.ends_with(".tar.gz") {
            create_tar_gz(&src_dir, &dest)
        } else if name.ends_with(".zip") {
            create_zip(&src_dir, &dest)
        } else {
            Err(Error::GenericError(format!(
                "unsupported archive format: '{}' (expected .tar.gz or .zip)",
                dest.display()
            )))
        }
    })
    .await
}

/// Offloads blocking archive work to the dedicated thread pool.
async fn run_blocking<F>(work: F) -> Result<()>
where
    F: FnOnce() -> Result<()> + Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| Error::GenericError(format!("archive task panicked: {}", e)))?
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or("")
}

fn extract_tar_gz(archive_path: &Path, dest_dir: &Path) -> Result<()> {
    let file = std::fs::File::open(archive_path).fs_context("opening archive", archive_path)?;
    let decoder = GzDecoder::new(file);
    let mut archive = tar::Archive::new(decoder);
    archive.unpack(dest_dir)?;
    Ok(())
}

fn extract_zip(archive_path: &Path, dest_dir: &Path) -> Result<()> {
    let file = std::fs::File::open(archive_path).fs_context("opening archive", archive_path)?;
    let mut archive = zip::ZipArchive::new(file)?;
    archive.extract(dest_dir)?;
    Ok(())
}

fn create_tar_gz(src_dir: &Path, dest: &Path) -> Result<()> {
    let file = std::fs::File::create(dest).fs_context("creating archive", dest)?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = tar::Builder::new(encoder);
    builder.follow_symlinks(false);

    for entry in sorted_top_level_entries(src_dir)? {
        let name = entry
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| entry.clone());
        if entry.is_dir() {
            builder.append_dir_all(&name, &entry)?;
        } else {
            builder.append_path_with_name(&entry, &name)?;
        }
    }

    builder.into_inner()?.finish()?;
    Ok(())
}

fn create_zip(src_dir: &Path, dest: &Path) -> Result<()> {
    let file = std::fs::File::create(dest).fs_context("creating archive", dest)?;
    let mut writer = zip::ZipWriter::new(file);

    // Collect paths deterministically.
    let mut entries: Vec<PathBuf> = walkdir::WalkDir::new(src_dir)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p != src_dir)
        .collect();
    entries.sort();

    for path in entries {
        let rel = path
            .strip_prefix(src_dir)
            .map_err(|e| Error::GenericError(format!("path outside archive root: {}", e)))?
            .to_string_lossy()
            .replace('\\', "/");

        let metadata = std::fs::symlink_metadata(&path)?;
        let mut options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated);
        if let Some(mode) = unix_mode(&metadata) {
            options = options.unix_permissions(mode);
        }

        if metadata.is_dir() {
            writer.add_directory(format!("{rel}/"), options)?;
        } else {
            writer.start_file(rel, options)?;
            let mut src = std::fs::File::open(&path)?;
            io::copy(&mut src, &mut writer)?;
        }
    }

    writer.finish()?;
    Ok(())
}

#[cfg(unix)]
fn unix_mode(metadata: &std::fs::Metadata) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;
    Some(metadata.permissions().mode())
}

#[cfg(not(unix))]
fn unix_mode(_metadata: &std::fs::Metadata) -> Option<u32> {
    None
}

fn sorted_top_level_entries(src_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(src_dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .collect();
    entries.sort();
    Ok(entries)
}
