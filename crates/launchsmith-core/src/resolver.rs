//! # Resolver
//!
//! The public entry point: build cache + target in, launch configuration out.
//!
//! ## Decision order
//!
//! 1. An MSVC-style linker in the cache short-circuits to `cppvsdbg`,
//!    whatever the overrides say.
//! 2. The preferred dialect is the mode override, else the platform default
//!    (LLDB on macOS, GDB elsewhere).
//! 3. A debugger path override that is absolute and exists is used as is.
//!    Anything else is ignored with a warning.
//! 4. No compiler in the cache is fatal ([`ResolveError::NoCompiler`]).
//! 5. A `cl.exe` compiler means `cppvsdbg`.
//! 6. Compiler-derived candidates are probed one at a time; the first that
//!    starts wins.
//! 7. The generic fallback is recomputed and probed. If a mode override was
//!    given, the bare debugger name on the search path gets one last try.
//!    Otherwise there is no result, which is not an error.
//!
//! A path is probed at most once per resolution; a failed probe is never
//! retried.

use crate::cache::CacheAccessor;
use crate::candidates::CandidateGenerator;
use crate::companion::{CompanionLocator, NoCompanion};
use crate::config::ResolverConfig;
use crate::error::{ResolveError, Result};
use crate::fs::{FileSystem, RealFileSystem};
use crate::launch::{self, LaunchConfiguration};
use crate::platform::Platform;
use crate::probe::{self, ProcessProbe, ShellProbe};
use crate::toolchain::{self, Toolchain};
use crate::types::{DebuggerCandidate, ExecutableTarget, MiMode, Overrides};

/// Resolves debug launch configurations
///
/// Borrows its collaborators immutably, so one resolver can serve concurrent
/// resolutions for different targets.
pub struct Resolver<'a>
{
    platform: Platform,
    probe: &'a dyn ProcessProbe,
    fs: &'a dyn FileSystem,
    companions: &'a dyn CompanionLocator,
    config: ResolverConfig,
}

impl<'a> Resolver<'a>
{
    /// Create a resolver with no companion extensions and default settings
    pub fn new(platform: Platform, probe: &'a dyn ProcessProbe, fs: &'a dyn FileSystem) -> Self
    {
        Self {
            platform,
            probe,
            fs,
            companions: &NoCompanion,
            config: ResolverConfig::default(),
        }
    }

    /// Use `companions` to find bundled debuggers
    #[must_use]
    pub fn with_companions(mut self, companions: &'a dyn CompanionLocator) -> Self
    {
        self.companions = companions;
        self
    }

    /// Replace the settings
    #[must_use]
    pub fn with_config(mut self, config: ResolverConfig) -> Self
    {
        self.config = config;
        self
    }

    /// Platform this resolver targets
    pub const fn platform(&self) -> Platform
    {
        self.platform
    }

    /// Resolve a launch configuration for `target`
    ///
    /// Returns `Ok(None)` when no debugger could be determined for the
    /// compiler; the caller is expected to offer manual configuration.
    ///
    /// ## Errors
    ///
    /// - `NoCompiler`: the cache records no compiler at all
    /// - `DebuggerNotFound`: strict mode only, see [`ResolverConfig::strict_mode_override`]
    #[tracing::instrument(level = "debug", skip_all, fields(executable = %target.name, platform = %self.platform))]
    pub async fn resolve(
        &self,
        cache: &dyn CacheAccessor,
        target: &ExecutableTarget,
        overrides: &Overrides,
    ) -> Result<Option<LaunchConfiguration>>
    {
        if toolchain::classify(cache) == Toolchain::Msvc {
            tracing::info!("MSVC-style linker recorded, using the Visual Studio debugger");
            return Ok(Some(launch::msvc(target, self.platform)));
        }

        let preferred = overrides.mode.unwrap_or_else(|| self.platform.default_mi_mode());

        if let Some(path) = overrides.debugger_path.as_deref() {
            if self.platform.is_absolute(path) && self.fs.exists(path) {
                tracing::info!(path, mode = %preferred, "Using debugger path override");
                return Ok(Some(launch::mi(preferred, path, target, self.platform)));
            }
            tracing::warn!(path, "Ignoring debugger path override: not an absolute path to an existing file");
        }

        let compiler = toolchain::find_compiler(cache).ok_or(ResolveError::NoCompiler)?;

        if toolchain::is_msvc_compiler(self.platform, compiler) {
            tracing::info!(compiler, "MSVC compiler recorded, using the Visual Studio debugger");
            return Ok(Some(launch::msvc(target, self.platform)));
        }

        let generator = CandidateGenerator::new(self.platform, self.fs, self.companions, &self.config.companion_id);
        let mut probed = Vec::new();

        for candidate in generator.candidates(compiler, preferred, overrides.mode) {
            if let Some(config) = self.try_candidate(&candidate, target, &mut probed).await {
                return Ok(Some(config));
            }
        }

        if let Some(candidate) = generator.generic_fallback(compiler, preferred) {
            if let Some(config) = self.try_candidate(&candidate, target, &mut probed).await {
                return Ok(Some(config));
            }
        }

        if let Some(mode) = overrides.mode {
            return self.bare_command(mode, compiler, target, &mut probed).await;
        }

        tracing::warn!(compiler, "Unable to determine a debugger for this compiler");
        Ok(None)
    }

    /// Probe `candidate` unless it was already probed, and build on success
    async fn try_candidate(
        &self,
        candidate: &DebuggerCandidate,
        target: &ExecutableTarget,
        probed: &mut Vec<String>,
    ) -> Option<LaunchConfiguration>
    {
        if probed.contains(&candidate.path) {
            tracing::trace!(path = %candidate.path, "Candidate already probed");
            return None;
        }
        probed.push(candidate.path.clone());

        if !probe::validate(self.probe, &candidate.path).await {
            return None;
        }

        tracing::info!(path = %candidate.path, mode = %candidate.mode, "Found debugger");
        Some(launch::mi(candidate.mode, &candidate.path, target, self.platform))
    }

    /// Last resort for an explicit mode: the bare command on the search path
    async fn bare_command(
        &self,
        mode: MiMode,
        compiler: &str,
        target: &ExecutableTarget,
        probed: &mut Vec<String>,
    ) -> Result<Option<LaunchConfiguration>>
    {
        let candidate = DebuggerCandidate::new(mode.debugger_name(), mode);
        if let Some(config) = self.try_candidate(&candidate, target, probed).await {
            return Ok(Some(config));
        }

        if self.config.strict_mode_override {
            return Err(ResolveError::DebuggerNotFound {
                family: mode.into(),
                command: candidate.path,
            });
        }

        tracing::warn!(compiler, mode = %mode, "Unable to find a {mode} debugger for this compiler");
        Ok(None)
    }
}

/// Resolve with the real filesystem and real child processes
///
/// `platform_id` is a host identifier such as `linux`, `darwin` or `win32`.
/// Settings come from [`ResolverConfig::from_env`].
///
/// ```rust,no_run
/// use launchsmith_core::cache::CacheSnapshot;
/// use launchsmith_core::types::ExecutableTarget;
///
/// # async fn example() -> launchsmith_core::error::Result<()> {
/// let cache: CacheSnapshot = [("CMAKE_CXX_COMPILER", "/usr/bin/g++")].into_iter().collect();
/// let target = ExecutableTarget::new("app", "/work/build/app");
///
/// if let Some(config) = launchsmith_core::resolve(&cache, &target, "linux", None, None).await? {
///     println!("{}", config.to_json_pretty()?);
/// }
/// # Ok(())
/// # }
/// ```
///
/// ## Errors
///
/// See [`Resolver::resolve`].
pub async fn resolve(
    cache: &dyn CacheAccessor,
    target: &ExecutableTarget,
    platform_id: &str,
    mode_override: Option<MiMode>,
    debugger_path_override: Option<&str>,
) -> Result<Option<LaunchConfiguration>>
{
    let config = ResolverConfig::from_env();
    let probe = ShellProbe::new(config.probe_timeout);
    let overrides = Overrides {
        mode: mode_override,
        debugger_path: debugger_path_override.map(str::to_string),
    };

    Resolver::new(Platform::from_id(platform_id), &probe, &RealFileSystem)
        .with_config(config)
        .resolve(cache, target, &overrides)
        .await
}
