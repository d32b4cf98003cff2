//! Target platform and CPU architecture types.

use std::fmt;

/// Target platform of a distribution archive.
///
/// The platform decides the archive format (`.zip` for Windows, `.tar.gz`
/// otherwise), which launcher-script pair survives into the distribution,
/// and where the JDK keeps its `jmods` directory.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Linux distributions
    Linux,
    /// macOS - the JDK nests its module directory under Contents/Home
    Mac,
    /// Windows - zip archives and batch-style launchers
    Windows,
}

impl Platform {
    /// Returns the platform name as used in archive names and release URLs.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::Mac => "mac",
            Platform::Windows => "windows",
        }
    }

    /// Returns the archive extension used for this platform.
    pub fn archive_extension(self) -> &'static str {
        match self {
            Platform::Windows => ".zip",
            _ => ".tar.gz",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CPU architecture for target binaries.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    /// x86_64 / AMD64 (64-bit)
    X64,
}

impl Arch {
    /// Returns the architecture name as used in archive names and release URLs.
    pub fn as_str(self) -> &'static str {
        match self {
            Arch::X64 => "x64",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform/architecture pairs a full run produces, in processing order.
pub const DIST_TARGETS: [(Platform, Arch); 3] = [
    (Platform::Linux, Arch::X64),
    (Platform::Mac, Arch::X64),
    (Platform::Windows, Arch::X64),
];
