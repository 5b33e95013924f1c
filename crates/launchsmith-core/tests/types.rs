//! Tests for the shared data model

use launchsmith_core::types::{DebuggerCandidate, DebuggerFamily, ExecutableTarget, MiMode, Overrides};

#[test]
fn test_mode_parse_is_case_insensitive()
{
    assert_eq!("gdb".parse::<MiMode>().unwrap(), MiMode::Gdb);
    assert_eq!("LLDB".parse::<MiMode>().unwrap(), MiMode::Lldb);
}

#[test]
fn test_mode_display_matches_debugger_name()
{
    assert_eq!(MiMode::Gdb.to_string(), "gdb");
    assert_eq!(MiMode::Lldb.to_string(), MiMode::Lldb.debugger_name());
}

#[test]
fn test_family_mode_mapping()
{
    assert_eq!(DebuggerFamily::Msvc.mi_mode(), None);
    assert_eq!(DebuggerFamily::Gdb.mi_mode(), Some(MiMode::Gdb));
    assert_eq!(DebuggerFamily::from(MiMode::Lldb), DebuggerFamily::Lldb);
    assert_eq!(DebuggerFamily::Msvc.to_string(), "msvc");
}

#[test]
fn test_overrides_default_is_empty()
{
    let overrides = Overrides::default();
    assert_eq!(overrides.mode, None);
    assert_eq!(overrides.debugger_path, None);
}

#[test]
fn test_overrides_constructors()
{
    assert_eq!(Overrides::with_mode(MiMode::Lldb).mode, Some(MiMode::Lldb));
    assert_eq!(
        Overrides::with_debugger_path("/opt/gdb").debugger_path.as_deref(),
        Some("/opt/gdb")
    );
}

#[test]
fn test_target_and_candidate_new()
{
    let target = ExecutableTarget::new("app", "/work/build/app");
    assert_eq!(target.name, "app");
    assert_eq!(target.path, "/work/build/app");

    let candidate = DebuggerCandidate::new("/usr/bin/gdb", MiMode::Gdb);
    assert_eq!(candidate.path, "/usr/bin/gdb");
    assert_eq!(candidate.mode, MiMode::Gdb);
}
