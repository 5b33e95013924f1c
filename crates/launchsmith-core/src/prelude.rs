//! Common module for library exports

pub use crate::cache::{CacheAccessor, CacheEntry, CacheSnapshot};
pub use crate::companion::{CompanionLocator, InstalledCompanions, NoCompanion};
pub use crate::config::ResolverConfig;
pub use crate::error::{ResolveError, Result};
pub use crate::fs::{FileSystem, RealFileSystem};
pub use crate::launch::LaunchConfiguration;
pub use crate::platform::Platform;
pub use crate::probe::{ProbeOutcome, ProcessProbe, ShellProbe};
pub use crate::resolver::Resolver;
pub use crate::types::{DebuggerFamily, ExecutableTarget, MiMode, Overrides};
