//! Shared fakes for resolver tests

#![allow(dead_code)]

use std::collections::HashSet;
use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use launchsmith_core::prelude::*;
use tracing_subscriber::fmt::MakeWriter;

/// Probe that succeeds for a fixed set of commands and records every call
#[derive(Default)]
pub struct FakeProbe
{
    working: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeProbe
{
    pub fn with_working(paths: &[&str]) -> Self
    {
        Self {
            working: paths.iter().map(|p| (*p).to_string()).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String>
    {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcessProbe for FakeProbe
{
    async fn execute(&self, program: &str, args: &[&str], shell: bool) -> ProbeOutcome
    {
        assert_eq!(args, ["--version"]);
        assert!(shell, "debugger probes run through the shell");
        self.calls.lock().unwrap().push(program.to_string());

        if self.working.contains(program) {
            ProbeOutcome::exited(0)
        } else {
            ProbeOutcome::exited(127)
        }
    }
}

/// Filesystem holding a fixed set of paths
#[derive(Default)]
pub struct FakeFs(HashSet<String>);

impl FakeFs
{
    pub fn with(paths: &[&str]) -> Self
    {
        Self(paths.iter().map(|p| (*p).to_string()).collect())
    }
}

impl FileSystem for FakeFs
{
    fn exists(&self, path: &str) -> bool
    {
        self.0.contains(path)
    }
}

pub fn cache(pairs: &[(&str, &str)]) -> CacheSnapshot
{
    pairs.iter().copied().collect()
}

pub fn target() -> ExecutableTarget
{
    ExecutableTarget::new("app", "/work/build/app")
}

/// In-memory sink for formatted log lines
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer
{
    /// Everything written so far
    pub fn contents(&self) -> String
    {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Subscriber writing warnings and errors into this buffer
    pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync
    {
        tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish()
    }
}

impl io::Write for LogBuffer
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize>
    {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()>
    {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer
{
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer
    {
        self.clone()
    }
}
