//! # Launch Configurations
//!
//! The artifact handed to a debug-adapter host.
//!
//! A configuration is a sum type over the debugger family. MSVC targets get a
//! `cppvsdbg` configuration; GDB and LLDB targets get a `cppdbg`
//! configuration whose `MIMode` selects the dialect. Fields of one family can
//! never appear on another.
//!
//! Serialized with `serde` to the JSON shape hosts expect:
//!
//! ```json
//! {
//!   "type": "cppdbg",
//!   "name": "Debug app",
//!   "request": "launch",
//!   "cwd": "/work/build",
//!   "args": [],
//!   "program": "/work/build/app",
//!   "MIMode": "gdb",
//!   "miDebuggerPath": "/usr/bin/gdb",
//!   "setupCommands": [
//!     { "description": "Enable pretty-printing for gdb", "text": "-enable-pretty-printing", "ignoreFailures": true }
//!   ]
//! }
//! ```

use serde::Serialize;

use crate::error::Result;
use crate::platform::Platform;
use crate::types::{DebuggerFamily, ExecutableTarget, MiMode};

/// Request kind of every generated configuration
const LAUNCH_REQUEST: &str = "launch";

/// Description of the pretty-printing setup command
const PRETTY_PRINTING_DESCRIPTION: &str = "Enable pretty-printing for gdb";

/// GDB MI command that enables pretty-printing
const PRETTY_PRINTING_COMMAND: &str = "-enable-pretty-printing";

/// A generated debug launch configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum LaunchConfiguration
{
    /// Visual Studio debugger engine
    #[serde(rename = "cppvsdbg")]
    VsDbg(LaunchCommon),
    /// GDB or LLDB over the MI protocol
    #[serde(rename = "cppdbg")]
    Mi(MiLaunch),
}

/// Fields shared by every family
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchCommon
{
    /// Display name, `Debug <target>`
    pub name: String,
    /// Always `launch`
    pub request: String,
    /// Working directory: the directory holding the program
    pub cwd: String,
    /// Program arguments
    pub args: Vec<String>,
    /// Absolute path of the program
    pub program: String,
    /// Extra environment for the debuggee
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub environment: Vec<EnvironmentVariable>,
}

/// A `cppdbg` configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MiLaunch
{
    /// Shared fields
    #[serde(flatten)]
    pub common: LaunchCommon,
    /// Dialect-specific fields
    #[serde(flatten)]
    pub debugger: MiDebugger,
}

/// Dialect-specific part of a `cppdbg` configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "MIMode", rename_all = "lowercase")]
pub enum MiDebugger
{
    /// GDB, with pretty-printing enabled at startup
    Gdb
    {
        /// Debugger binary
        #[serde(rename = "miDebuggerPath")]
        mi_debugger_path: String,
        /// Commands run before the program starts
        #[serde(rename = "setupCommands")]
        setup_commands: Vec<SetupCommand>,
    },
    /// LLDB
    Lldb
    {
        /// Debugger binary
        #[serde(rename = "miDebuggerPath")]
        mi_debugger_path: String,
    },
}

/// A debugger command run before launch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupCommand
{
    /// Human-readable description
    pub description: String,
    /// MI command text
    pub text: String,
    /// Keep going if the command fails
    pub ignore_failures: bool,
}

/// An environment variable for the debuggee
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentVariable
{
    /// Variable name
    pub name: String,
    /// Variable value
    pub value: String,
}

impl LaunchConfiguration
{
    /// Family this configuration targets
    pub fn family(&self) -> DebuggerFamily
    {
        match self {
            LaunchConfiguration::VsDbg(_) => DebuggerFamily::Msvc,
            LaunchConfiguration::Mi(mi) => mi.debugger.mode().into(),
        }
    }

    /// Shared fields
    pub fn common(&self) -> &LaunchCommon
    {
        match self {
            LaunchConfiguration::VsDbg(common) => common,
            LaunchConfiguration::Mi(mi) => &mi.common,
        }
    }

    /// Debugger binary, `None` for MSVC
    pub fn mi_debugger_path(&self) -> Option<&str>
    {
        match self {
            LaunchConfiguration::VsDbg(_) => None,
            LaunchConfiguration::Mi(mi) => Some(mi.debugger.path()),
        }
    }

    /// MI dialect, `None` for MSVC
    pub fn mi_mode(&self) -> Option<MiMode>
    {
        self.family().mi_mode()
    }

    /// Add environment variables for the debuggee
    #[must_use]
    pub fn with_environment<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let common = match &mut self {
            LaunchConfiguration::VsDbg(common) => common,
            LaunchConfiguration::Mi(mi) => &mut mi.common,
        };
        common
            .environment
            .extend(vars.into_iter().map(|(name, value)| EnvironmentVariable {
                name: name.into(),
                value: value.into(),
            }));
        self
    }

    /// Serialize as a JSON value
    ///
    /// ## Errors
    ///
    /// Returns `Serialize` if `serde_json` rejects the value.
    pub fn to_json(&self) -> Result<serde_json::Value>
    {
        Ok(serde_json::to_value(self)?)
    }

    /// Serialize as single-line JSON text, fields in declaration order
    ///
    /// ## Errors
    ///
    /// Returns `Serialize` if `serde_json` rejects the value.
    pub fn to_json_compact(&self) -> Result<String>
    {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize as indented JSON text
    ///
    /// ## Errors
    ///
    /// Returns `Serialize` if `serde_json` rejects the value.
    pub fn to_json_pretty(&self) -> Result<String>
    {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl MiDebugger
{
    /// Dialect of this debugger
    pub const fn mode(&self) -> MiMode
    {
        match self {
            MiDebugger::Gdb { .. } => MiMode::Gdb,
            MiDebugger::Lldb { .. } => MiMode::Lldb,
        }
    }

    /// Debugger binary
    pub fn path(&self) -> &str
    {
        match self {
            MiDebugger::Gdb { mi_debugger_path, .. } | MiDebugger::Lldb { mi_debugger_path } => mi_debugger_path,
        }
    }
}

fn common(target: &ExecutableTarget, platform: Platform) -> LaunchCommon
{
    LaunchCommon {
        name: format!("Debug {}", target.name),
        request: LAUNCH_REQUEST.to_string(),
        cwd: platform.dirname(&target.path).to_string(),
        args: Vec::new(),
        program: target.path.clone(),
        environment: Vec::new(),
    }
}

/// `cppvsdbg` configuration for `target`
pub fn msvc(target: &ExecutableTarget, platform: Platform) -> LaunchConfiguration
{
    LaunchConfiguration::VsDbg(common(target, platform))
}

/// `cppdbg` configuration for `target` using the debugger at `debugger_path`
pub fn mi(mode: MiMode, debugger_path: &str, target: &ExecutableTarget, platform: Platform) -> LaunchConfiguration
{
    let debugger = match mode {
        MiMode::Gdb => MiDebugger::Gdb {
            mi_debugger_path: debugger_path.to_string(),
            setup_commands: vec![SetupCommand {
                description: PRETTY_PRINTING_DESCRIPTION.to_string(),
                text: PRETTY_PRINTING_COMMAND.to_string(),
                ignore_failures: true,
            }],
        },
        MiMode::Lldb => MiDebugger::Lldb {
            mi_debugger_path: debugger_path.to_string(),
        },
    };

    LaunchConfiguration::Mi(MiLaunch {
        common: common(target, platform),
        debugger,
    })
}

/// Configuration for `family`
///
/// `debugger_path` is ignored for MSVC, which locates its own engine. Building
/// never fails.
pub fn build(
    family: DebuggerFamily,
    debugger_path: &str,
    target: &ExecutableTarget,
    platform: Platform,
) -> LaunchConfiguration
{
    match family.mi_mode() {
        None => msvc(target, platform),
        Some(mode) => mi(mode, debugger_path, target, platform),
    }
}

#[cfg(test)]
mod tests
{
    use serde_json::json;

    use super::*;

    fn target() -> ExecutableTarget
    {
        ExecutableTarget::new("app", "/work/build/app")
    }

    #[test]
    fn test_msvc_shape()
    {
        let target = ExecutableTarget::new("app", "C:\\work\\build\\app.exe");
        let config = build(DebuggerFamily::Msvc, "ignored", &target, Platform::Windows);

        assert_eq!(
            config.to_json().unwrap(),
            json!({
                "type": "cppvsdbg",
                "name": "Debug app",
                "request": "launch",
                "cwd": "C:\\work\\build",
                "args": [],
                "program": "C:\\work\\build\\app.exe",
            })
        );
        assert_eq!(config.mi_debugger_path(), None);
        assert_eq!(config.mi_mode(), None);
    }

    #[test]
    fn test_gdb_shape()
    {
        let config = build(DebuggerFamily::Gdb, "/usr/bin/gdb", &target(), Platform::Posix);

        assert_eq!(
            config.to_json().unwrap(),
            json!({
                "type": "cppdbg",
                "name": "Debug app",
                "request": "launch",
                "cwd": "/work/build",
                "args": [],
                "program": "/work/build/app",
                "MIMode": "gdb",
                "miDebuggerPath": "/usr/bin/gdb",
                "setupCommands": [{
                    "description": "Enable pretty-printing for gdb",
                    "text": "-enable-pretty-printing",
                    "ignoreFailures": true,
                }],
            })
        );
        assert_eq!(config.family(), DebuggerFamily::Gdb);
    }

    #[test]
    fn test_lldb_shape_has_no_setup_commands()
    {
        let config = build(DebuggerFamily::Lldb, "/usr/bin/lldb-mi", &target(), Platform::Darwin);
        let value = config.to_json().unwrap();

        assert_eq!(value["type"], "cppdbg");
        assert_eq!(value["MIMode"], "lldb");
        assert_eq!(value["miDebuggerPath"], "/usr/bin/lldb-mi");
        assert!(value.get("setupCommands").is_none());
        assert_eq!(config.mi_debugger_path(), Some("/usr/bin/lldb-mi"));
    }

    #[test]
    fn test_environment_is_omitted_until_set()
    {
        let config = build(DebuggerFamily::Gdb, "/usr/bin/gdb", &target(), Platform::Posix);
        assert!(config.to_json().unwrap().get("environment").is_none());

        let config = config.with_environment([("ASAN_OPTIONS", "detect_leaks=0")]);
        assert_eq!(
            config.to_json().unwrap()["environment"],
            json!([{ "name": "ASAN_OPTIONS", "value": "detect_leaks=0" }])
        );
    }

    #[test]
    fn test_compact_json_keeps_field_order()
    {
        let config = build(DebuggerFamily::Lldb, "/usr/bin/lldb", &target(), Platform::Posix);
        assert_eq!(
            config.to_json_compact().unwrap(),
            r#"{"type":"cppdbg","name":"Debug app","request":"launch","cwd":"/work/build","args":[],"program":"/work/build/app","MIMode":"lldb","miDebuggerPath":"/usr/bin/lldb"}"#
        );
    }

    #[test]
    fn test_pretty_json_starts_with_type()
    {
        let config = build(DebuggerFamily::Lldb, "/usr/bin/lldb", &target(), Platform::Posix);
        let text = config.to_json_pretty().unwrap();
        assert!(text.starts_with("{\n  \"type\": \"cppdbg\""), "{text}");
    }
}
