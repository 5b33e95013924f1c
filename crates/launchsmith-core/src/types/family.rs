//! Debugger family and MI mode.

use std::fmt;
use std::str::FromStr;

use crate::error::ResolveError;

/// Debugger family a toolchain maps onto
///
/// The family fully determines the shape of the emitted launch configuration:
/// MSVC targets get a `cppvsdbg` configuration, GDB and LLDB targets get a
/// `cppdbg` configuration speaking the matching MI dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebuggerFamily
{
    /// Visual Studio debugger engine
    Msvc,
    /// GNU debugger over the MI protocol
    Gdb,
    /// LLVM debugger over the MI protocol
    Lldb,
}

impl DebuggerFamily
{
    /// The MI dialect for this family, `None` for MSVC
    pub const fn mi_mode(self) -> Option<MiMode>
    {
        match self {
            DebuggerFamily::Msvc => None,
            DebuggerFamily::Gdb => Some(MiMode::Gdb),
            DebuggerFamily::Lldb => Some(MiMode::Lldb),
        }
    }
}

impl fmt::Display for DebuggerFamily
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            DebuggerFamily::Msvc => write!(f, "msvc"),
            DebuggerFamily::Gdb => write!(f, "gdb"),
            DebuggerFamily::Lldb => write!(f, "lldb"),
        }
    }
}

/// Machine-interface dialect spoken between the debug adapter and the debugger
///
/// This is also what callers pass as a mode override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MiMode
{
    /// `gdb` dialect
    Gdb,
    /// `lldb` dialect
    Lldb,
}

impl MiMode
{
    /// Canonical executable name of the debugger for this dialect
    ///
    /// ```rust
    /// use launchsmith_core::types::MiMode;
    ///
    /// assert_eq!(MiMode::Gdb.debugger_name(), "gdb");
    /// assert_eq!(MiMode::Lldb.debugger_name(), "lldb");
    /// ```
    pub const fn debugger_name(self) -> &'static str
    {
        match self {
            MiMode::Gdb => "gdb",
            MiMode::Lldb => "lldb",
        }
    }
}

impl From<MiMode> for DebuggerFamily
{
    fn from(mode: MiMode) -> Self
    {
        match mode {
            MiMode::Gdb => DebuggerFamily::Gdb,
            MiMode::Lldb => DebuggerFamily::Lldb,
        }
    }
}

impl fmt::Display for MiMode
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.debugger_name())
    }
}

impl FromStr for MiMode
{
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "gdb" => Ok(MiMode::Gdb),
            "lldb" => Ok(MiMode::Lldb),
            _ => Err(ResolveError::InvalidArgument(format!(
                "Unknown debugger mode: {s}. Use 'gdb' or 'lldb'"
            ))),
        }
    }
}
