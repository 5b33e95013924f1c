//! # Process Probe
//!
//! Existence-and-executability check for debugger candidates.
//!
//! A candidate is considered valid when running it with `--version` through a
//! shell exits with status 0. Going through the shell lets bare command names
//! such as `gdb` resolve against the search path.
//!
//! Probes are strictly sequential: the resolver awaits each one before trying
//! the next candidate, so at most one stray process exists at a time and the
//! precedence order stays deterministic.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

/// Flag passed to every candidate
pub const VERSION_FLAG: &str = "--version";

/// Default upper bound for a single probe
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Result of running a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeOutcome
{
    /// Exit code, `None` if the process could not be spawned, was killed by a
    /// signal, or timed out
    pub retc: Option<i32>,
}

impl ProbeOutcome
{
    /// Outcome of a command that exited with `code`
    pub const fn exited(code: i32) -> Self
    {
        Self { retc: Some(code) }
    }

    /// Outcome of a command that never produced an exit code
    pub const fn failed() -> Self
    {
        Self { retc: None }
    }

    /// Whether the command exited with status 0
    pub const fn success(self) -> bool
    {
        matches!(self.retc, Some(0))
    }
}

/// Runs a command and reports how it exited
#[async_trait]
pub trait ProcessProbe: Send + Sync
{
    /// Run `program` with `args`, through the platform shell when `shell` is set
    async fn execute(&self, program: &str, args: &[&str], shell: bool) -> ProbeOutcome;
}

/// Probe backed by real child processes
///
/// Standard streams are discarded. A probe that outlives `timeout` is killed
/// and reported as failed.
#[derive(Debug, Clone, Copy)]
pub struct ShellProbe
{
    timeout: Duration,
}

impl ShellProbe
{
    /// Create a probe with the given per-command timeout
    pub const fn new(timeout: Duration) -> Self
    {
        Self { timeout }
    }

    /// Per-command timeout
    pub const fn timeout(&self) -> Duration
    {
        self.timeout
    }

    fn command(program: &str, args: &[&str], shell: bool) -> Command
    {
        if !shell {
            let mut command = Command::new(program);
            command.args(args);
            return command;
        }

        if cfg!(windows) {
            let mut command = Command::new("cmd");
            command.arg("/C").arg(program).args(args);
            command
        } else {
            // Positional parameters avoid quoting the program path into the script
            let mut command = Command::new("sh");
            command.arg("-c").arg("exec \"$0\" \"$@\"").arg(program).args(args);
            command
        }
    }
}

impl Default for ShellProbe
{
    fn default() -> Self
    {
        Self::new(DEFAULT_PROBE_TIMEOUT)
    }
}

#[async_trait]
impl ProcessProbe for ShellProbe
{
    async fn execute(&self, program: &str, args: &[&str], shell: bool) -> ProbeOutcome
    {
        let mut command = Self::command(program, args, shell);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) => {
                tracing::debug!(program, error = %e, "Failed to spawn probe");
                return ProbeOutcome::failed();
            }
        };

        match tokio::time::timeout(self.timeout, child.wait()).await {
            Ok(Ok(status)) => ProbeOutcome { retc: status.code() },
            Ok(Err(e)) => {
                tracing::debug!(program, error = %e, "Failed to wait for probe");
                ProbeOutcome::failed()
            }
            Err(_) => {
                tracing::debug!(program, timeout = ?self.timeout, "Probe timed out");
                if let Err(e) = child.start_kill() {
                    tracing::debug!(program, error = %e, "Failed to kill timed out probe");
                }
                ProbeOutcome::failed()
            }
        }
    }
}

/// Validate a candidate through `probe`
///
/// Runs `path --version` through the shell. There are no retries.
pub async fn validate(probe: &dyn ProcessProbe, path: &str) -> bool
{
    let outcome = probe.execute(path, &[VERSION_FLAG], true).await;
    tracing::debug!(path, retc = ?outcome.retc, "Probed debugger candidate");
    outcome.success()
}

/// Check whether `path` is a working debugger executable
///
/// Standalone form of the resolver's validation step, using a [`ShellProbe`]
/// with the default timeout.
///
/// ```rust,no_run
/// # async fn example() {
/// let usable = launchsmith_core::probe::check_debugger("/usr/bin/gdb").await;
/// # }
/// ```
pub async fn check_debugger(path: &str) -> bool
{
    validate(&ShellProbe::default(), path).await
}
