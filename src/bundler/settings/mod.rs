//! Configuration structures for bundler runs.
//!
//! The fixed platform/architecture list, the Java version, and the
//! runtime-image module allow-list are modeled as explicit configuration
//! data here rather than literals inside the pipeline, so tests can
//! substitute smaller fixtures.

mod builder;
mod core;
mod platform;

// Re-export all public types
pub use builder::SettingsBuilder;
pub use platform::{Arch, DIST_TARGETS, Platform};
pub use self::core::Settings;
