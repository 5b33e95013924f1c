//! Tests for error handling

use launchsmith_core::error::{ResolveError, Result};
use launchsmith_core::types::{DebuggerFamily, MiMode};

#[test]
fn test_no_compiler_display()
{
    let error = ResolveError::NoCompiler;
    let message = format!("{}", error);
    assert!(message.contains("Unable to find a compiler"));
    assert!(message.contains("configure"));
}

#[test]
fn test_debugger_not_found_display()
{
    let error = ResolveError::DebuggerNotFound {
        family: DebuggerFamily::Lldb,
        command: "lldb".to_string(),
    };
    let message = format!("{}", error);
    assert!(message.contains("lldb debugger"));
    assert!(message.contains("'lldb'"));
}

#[test]
fn test_invalid_argument_display()
{
    let error = ResolveError::InvalidArgument("test arg".to_string());
    let message = format!("{}", error);
    assert!(message.contains("Invalid argument"));
    assert!(message.contains("test arg"));
}

#[test]
fn test_unknown_mode_is_invalid_argument()
{
    match "windbg".parse::<MiMode>() {
        Err(ResolveError::InvalidArgument(message)) => assert!(message.contains("windbg")),
        other => panic!("Expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn test_io_error_conversion()
{
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing cache");
    let error: ResolveError = io_err.into();

    match error {
        ResolveError::Io(_) => {
            // Expected: io::Error should convert to Io variant
        }
        _ => panic!("Expected Io variant"),
    }
}

#[test]
fn test_result_type()
{
    let _result: Result<()> = Ok(());
    let _error_result: Result<()> = Err(ResolveError::NoCompiler);
}
