//! Resolution inputs and transient candidates.

use super::family::MiMode;

/// A built executable the caller wants to debug
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutableTarget
{
    /// Target name, used to title the launch configuration
    pub name: String,
    /// Absolute path to the built binary
    pub path: String,
}

impl ExecutableTarget
{
    /// Create a new target
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self
    {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Caller-supplied shortcuts through the heuristic chain
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides
{
    /// Restrict resolution to one MI dialect
    pub mode: Option<MiMode>,
    /// Use this debugger binary instead of searching for one
    ///
    /// Ignored with a warning unless it is an absolute path that exists.
    pub debugger_path: Option<String>,
}

impl Overrides
{
    /// Overrides with only a mode set
    pub fn with_mode(mode: MiMode) -> Self
    {
        Self {
            mode: Some(mode),
            debugger_path: None,
        }
    }

    /// Overrides with only a debugger path set
    pub fn with_debugger_path(path: impl Into<String>) -> Self
    {
        Self {
            mode: None,
            debugger_path: Some(path.into()),
        }
    }
}

/// A path hypothesized to be a working debugger, pending validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebuggerCandidate
{
    /// Path (or bare command name) to probe
    pub path: String,
    /// Dialect implied by the derivation that produced this path
    pub mode: MiMode,
}

impl DebuggerCandidate
{
    /// Create a new candidate
    pub fn new(path: impl Into<String>, mode: MiMode) -> Self
    {
        Self {
            path: path.into(),
            mode,
        }
    }
}
