//! # Companion Debugger Extension
//!
//! Lookup of a companion extension that ships its own `lldb-mi` build.
//!
//! The C/C++ extension bundles `lldb-mi` under its installation root. When it
//! is installed, that copy is tried right after the `lldb-mi` derived from the
//! compiler path.

use std::collections::HashMap;

use crate::platform::Platform;

/// Identifier of the C/C++ extension that bundles `lldb-mi`
pub const CPPTOOLS_ID: &str = "ms-vscode.cpptools";

/// Path components from the companion's root to its bundled `lldb-mi`
const LLDB_MI_SUFFIX: [&str; 4] = ["debugAdapters", "lldb-mi", "bin", "lldb-mi"];

/// Resolves an extension identifier to its installation root
pub trait CompanionLocator: Send + Sync
{
    /// Installation root of `id`, or `None` when it is not installed
    fn install_root(&self, id: &str) -> Option<String>;
}

/// No companion extensions are installed
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCompanion;

impl CompanionLocator for NoCompanion
{
    fn install_root(&self, _id: &str) -> Option<String>
    {
        None
    }
}

/// Fixed set of known installation roots
#[derive(Debug, Clone, Default)]
pub struct InstalledCompanions
{
    roots: HashMap<String, String>,
}

impl InstalledCompanions
{
    /// Create an empty set
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Record `id` as installed at `root`
    #[must_use]
    pub fn with(mut self, id: impl Into<String>, root: impl Into<String>) -> Self
    {
        self.roots.insert(id.into(), root.into());
        self
    }
}

impl CompanionLocator for InstalledCompanions
{
    fn install_root(&self, id: &str) -> Option<String>
    {
        self.roots.get(id).cloned()
    }
}

/// Location of the `lldb-mi` bundled under a companion's `root`
///
/// ```rust
/// use launchsmith_core::companion::bundled_lldb_mi;
/// use launchsmith_core::platform::Platform;
///
/// assert_eq!(
///     bundled_lldb_mi(Platform::Darwin, "/ext/cpptools"),
///     "/ext/cpptools/debugAdapters/lldb-mi/bin/lldb-mi"
/// );
/// ```
pub fn bundled_lldb_mi(platform: Platform, root: &str) -> String
{
    LLDB_MI_SUFFIX
        .iter()
        .fold(root.to_string(), |path, component| platform.join(&path, component))
}
