//! # launchsmith-core
//!
//! Debugger discovery and launch-configuration resolution for CMake-built
//! targets.
//!
//! Given the variables a CMake configure step left in its cache and a built
//! executable, this crate works out which native debugger belongs to the
//! toolchain that produced the executable and emits a launch configuration a
//! debug-adapter host can consume:
//!
//! - **MSVC** toolchains get a `cppvsdbg` configuration
//! - **GCC/Clang** toolchains get a `cppdbg` configuration driving `gdb`,
//!   `lldb` or `lldb-mi` over the MI protocol
//!
//! ## How a debugger is found
//!
//! Debuggers are derived from the compiler path by substitution
//! (`/opt/llvm/bin/clang++` → `/opt/llvm/bin/lldb-mi`, `/usr/bin/g++` →
//! `/usr/bin/gdb`) and each candidate is validated by running it with
//! `--version`. See [`candidates`] for the derivation order and [`resolver`]
//! for the full decision procedure.
//!
//! ## Collaborators
//!
//! The resolver talks to the outside world through traits, so every decision
//! can be replayed deterministically:
//!
//! - [`cache::CacheAccessor`]: build-cache key lookup
//! - [`probe::ProcessProbe`]: run a command, report its exit code
//! - [`fs::FileSystem`]: existence checks
//! - [`companion::CompanionLocator`]: bundled `lldb-mi` lookup

pub mod cache;
pub mod candidates;
pub mod companion;
pub mod config;
pub mod error;
pub mod fs;
pub mod launch;
pub mod platform;
pub mod prelude;
pub mod probe;
pub mod resolver;
pub mod toolchain;
pub mod types;

// Re-export commonly used types
pub use error::{ResolveError, Result};
pub use launch::LaunchConfiguration;
pub use probe::check_debugger;
pub use resolver::{resolve, Resolver};
