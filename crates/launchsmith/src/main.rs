use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};
use launchsmith_core::cache::{CacheEntry, CacheSnapshot};
use launchsmith_core::companion::{InstalledCompanions, CPPTOOLS_ID};
use launchsmith_core::config::ResolverConfig;
use launchsmith_core::fs::RealFileSystem;
use launchsmith_core::platform::Platform;
use launchsmith_core::launch::LaunchConfiguration;
use launchsmith_core::probe::{self, ShellProbe};
use launchsmith_core::types::{ExecutableTarget, MiMode, Overrides};
use launchsmith_core::{Resolver, Result as ResolveResult};
use launchsmith_utils::{
    info, init_logging, init_logging_to_dir, init_logging_with_level, LogFormat, LogLevel, LoggingError,
};

/// Infer the native debugger for a CMake-built executable.
#[derive(Parser, Debug)]
#[command(name = "launchsmith")]
#[command(version)]
#[command(about = "Infer the native debugger for a CMake-built executable and emit a launch configuration", long_about = None)]
struct Cli
{
    /// Log level (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,
    /// Log format: pretty or json (overrides LAUNCHSMITH_LOG_FORMAT)
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,
    /// Write logs to a dated file in this directory instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands
{
    /// Resolve a launch configuration and print it as JSON
    Resolve
    {
        /// Path to the built executable
        #[arg(long)]
        program: String,
        /// Target name (default: the program's file name)
        #[arg(long)]
        name: Option<String>,
        /// Build cache variable, e.g. -D CMAKE_CXX_COMPILER=/usr/bin/g++
        #[arg(short = 'D', value_name = "KEY[:TYPE]=VALUE", value_parser = CacheEntry::parse_definition)]
        definitions: Vec<CacheEntry>,
        /// Environment variable for the debuggee
        #[arg(short, long = "env", value_name = "NAME=VALUE", value_parser = parse_env)]
        environment: Vec<(String, String)>,
        /// Host platform identifier (win32, darwin, linux, ...; default: this host)
        #[arg(long)]
        platform: Option<String>,
        /// Only consider debuggers speaking this MI dialect
        #[arg(long)]
        mode: Option<MiMode>,
        /// Use this debugger binary (must be an absolute path to an existing file)
        #[arg(long)]
        debugger_path: Option<String>,
        /// Installation root of the C/C++ extension, for its bundled lldb-mi
        #[arg(long)]
        cpptools_root: Option<String>,
        /// Fail instead of printing null when --mode cannot be satisfied
        #[arg(long, default_value_t = false)]
        strict: bool,
        /// Per-probe timeout in milliseconds (overrides LAUNCHSMITH_PROBE_TIMEOUT_MS)
        #[arg(long)]
        probe_timeout_ms: Option<u64>,
        /// Print single-line JSON
        #[arg(long, default_value_t = false)]
        compact: bool,
    },
    /// Check whether a debugger executable starts
    Check
    {
        /// Debugger path or command name
        path: String,
    },
}

fn parse_env(raw: &str) -> Result<(String, String), String>
{
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("Expected NAME=VALUE, got '{raw}'")),
    }
}

fn main()
{
    let code = run(Cli::parse());
    process::exit(code);
}

fn run(cli: Cli) -> i32
{
    // Held until `run` returns so buffered file output is flushed
    let _guard = match init(&cli) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            return 1;
        }
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to start runtime: {}", e);
            return 1;
        }
    };

    match rt.block_on(run_command(cli.command)) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn init(cli: &Cli) -> Result<Option<impl Sized>, LoggingError>
{
    if let Some(dir) = &cli.log_dir {
        return init_logging_to_dir(dir, cli.log_level).map(|(_, guard)| Some(guard));
    }

    match (cli.log_level, cli.log_format) {
        (None, None) => init_logging(),
        (level, format) => init_logging_with_level(level.unwrap_or(LogLevel::Info), format.unwrap_or(LogFormat::Pretty)),
    }
}

async fn run_command(command: Commands) -> ResolveResult<i32>
{
    match command {
        Commands::Resolve {
            program,
            name,
            definitions,
            environment,
            platform,
            mode,
            debugger_path,
            cpptools_root,
            strict,
            probe_timeout_ms,
            compact,
        } => {
            let program = absolute(&program)?;
            let name = name.unwrap_or_else(|| target_name(&program));
            let target = ExecutableTarget::new(name, program);
            let cache: CacheSnapshot = definitions.into_iter().collect();
            let platform = platform.map_or_else(Platform::host, |id| Platform::from_id(&id));

            let mut config = ResolverConfig::from_env();
            config.strict_mode_override |= strict;
            if let Some(ms) = probe_timeout_ms {
                config.probe_timeout = Duration::from_millis(ms);
            }

            let companions = match cpptools_root {
                Some(root) => InstalledCompanions::new().with(CPPTOOLS_ID, root),
                None => InstalledCompanions::new(),
            };
            let probe = probe_for(&config);
            let overrides = Overrides { mode, debugger_path };

            info!(executable = %target.name, %platform, entries = cache.len(), "Resolving launch configuration");
            let resolved = Resolver::new(platform, &probe, &RealFileSystem)
                .with_companions(&companions)
                .with_config(config)
                .resolve(&cache, &target, &overrides)
                .await?;

            match resolved {
                Some(launch) => println!("{}", render(&launch.with_environment(environment), compact)?),
                None => println!("null"),
            }
            Ok(0)
        }
        Commands::Check { path } => {
            let probe = probe_for(&ResolverConfig::from_env());
            let usable = probe::validate(&probe, &path).await;
            println!("{usable}");
            Ok(if usable { 0 } else { 1 })
        }
    }
}

/// Probe honoring the configured timeout
fn probe_for(config: &ResolverConfig) -> ShellProbe
{
    ShellProbe::new(config.probe_timeout)
}

/// JSON text for `launch`, on one line when `compact`
fn render(launch: &LaunchConfiguration, compact: bool) -> ResolveResult<String>
{
    if compact {
        launch.to_json_compact()
    } else {
        launch.to_json_pretty()
    }
}

/// Make `program` absolute against the working directory
///
/// The program does not have to exist yet.
fn absolute(program: &str) -> ResolveResult<String>
{
    let path = Path::new(program);
    if path.is_absolute() {
        return Ok(program.to_string());
    }
    Ok(std::env::current_dir()?.join(path).to_string_lossy().to_string())
}

/// File name of `program` without its extension
fn target_name(program: &str) -> String
{
    Path::new(program)
        .file_stem()
        .map_or_else(|| program.to_string(), |stem| stem.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests
{
    use launchsmith_core::types::DebuggerFamily;

    use super::*;

    #[test]
    fn test_resolve_arguments()
    {
        let cli = Cli::try_parse_from([
            "launchsmith",
            "resolve",
            "--program",
            "/work/build/app",
            "-D",
            "CMAKE_CXX_COMPILER:FILEPATH=/usr/bin/g++",
            "-DCMAKE_LINKER=/usr/bin/ld",
            "--mode",
            "LLDB",
            "--env",
            "ASAN_OPTIONS=detect_leaks=0",
            "--compact",
        ])
        .unwrap();

        match cli.command {
            Commands::Resolve {
                program,
                definitions,
                environment,
                mode,
                strict,
                compact,
                ..
            } => {
                assert_eq!(program, "/work/build/app");
                assert_eq!(
                    definitions,
                    vec![
                        CacheEntry::new("CMAKE_CXX_COMPILER", "/usr/bin/g++"),
                        CacheEntry::new("CMAKE_LINKER", "/usr/bin/ld"),
                    ]
                );
                assert_eq!(
                    environment,
                    vec![("ASAN_OPTIONS".to_string(), "detect_leaks=0".to_string())]
                );
                assert_eq!(mode, Some(MiMode::Lldb));
                assert!(!strict);
                assert!(compact);
            }
            Commands::Check { .. } => panic!("Expected resolve"),
        }
    }

    #[test]
    fn test_rejects_malformed_definition()
    {
        let result = Cli::try_parse_from(["launchsmith", "resolve", "--program", "/app", "-D", "CMAKE_LINKER"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_unknown_mode()
    {
        let result = Cli::try_parse_from(["launchsmith", "resolve", "--program", "/app", "--mode", "windbg"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_logging_flags_after_subcommand()
    {
        let cli = Cli::try_parse_from(["launchsmith", "check", "/usr/bin/gdb", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        assert!(cli.log_dir.is_none());
        assert!(matches!(cli.command, Commands::Check { path } if path == "/usr/bin/gdb"));
    }

    #[test]
    fn test_parse_env()
    {
        assert_eq!(parse_env("A=1").unwrap(), ("A".to_string(), "1".to_string()));
        assert_eq!(parse_env("A=").unwrap(), ("A".to_string(), String::new()));
        assert!(parse_env("=1").is_err());
        assert!(parse_env("A").is_err());
    }

    #[test]
    fn test_target_name()
    {
        assert_eq!(target_name("/work/build/app"), "app");
        assert_eq!(target_name("/work/build/app.exe"), "app");
    }

    #[test]
    fn test_probe_uses_configured_timeout()
    {
        let config = ResolverConfig {
            probe_timeout: Duration::from_millis(250),
            ..ResolverConfig::default()
        };
        assert_eq!(probe_for(&config).timeout(), Duration::from_millis(250));
        assert_eq!(
            probe_for(&ResolverConfig::default()).timeout(),
            launchsmith_core::probe::DEFAULT_PROBE_TIMEOUT
        );
    }

    #[test]
    fn test_render_compact_and_pretty()
    {
        let target = ExecutableTarget::new("app", "/work/build/app");
        let launch = launchsmith_core::launch::build(DebuggerFamily::Gdb, "/usr/bin/gdb", &target, Platform::Posix);

        let compact = render(&launch, true).unwrap();
        assert!(!compact.contains('\n'), "{compact}");
        assert!(compact.starts_with(r#"{"type":"cppdbg","name":"Debug app""#), "{compact}");

        let pretty = render(&launch, false).unwrap();
        assert!(pretty.lines().count() > 1);
        assert_eq!(pretty, launch.to_json_pretty().unwrap());
    }

    #[test]
    fn test_absolute_keeps_absolute_paths()
    {
        assert_eq!(absolute("/work/build/app").unwrap(), "/work/build/app");
        assert!(Path::new(&absolute("build/app").unwrap()).is_absolute());
    }
}
