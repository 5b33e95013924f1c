//! Filesystem view used during resolution.
//!
//! Existence checks go through a trait so that resolution can be replayed
//! against a fixed set of paths. [`RealFileSystem`] asks the operating system.

use std::path::Path;

/// Existence checks over the host filesystem
pub trait FileSystem: Send + Sync
{
    /// Whether something exists at `path`
    fn exists(&self, path: &str) -> bool;
}

/// The filesystem of the machine this process runs on
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem
{
    fn exists(&self, path: &str) -> bool
    {
        Path::new(path).exists()
    }
}
