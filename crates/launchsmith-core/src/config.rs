//! # Resolver Configuration
//!
//! Tunables for a [`Resolver`](crate::resolver::Resolver).
//!
//! ## Environment Variables
//!
//! - `LAUNCHSMITH_PROBE_TIMEOUT_MS`: per-probe timeout in milliseconds (default: 10000)
//! - `LAUNCHSMITH_STRICT_MODE`: `1`/`true` to make an unsatisfiable mode override fatal
//!
//! Unparseable values are ignored with a warning and the default is kept.

use std::env;
use std::time::Duration;

use crate::companion::CPPTOOLS_ID;
use crate::probe::DEFAULT_PROBE_TIMEOUT;

/// Environment variable for [`ResolverConfig::probe_timeout`]
pub const PROBE_TIMEOUT_ENV: &str = "LAUNCHSMITH_PROBE_TIMEOUT_MS";

/// Environment variable for [`ResolverConfig::strict_mode_override`]
pub const STRICT_MODE_ENV: &str = "LAUNCHSMITH_STRICT_MODE";

/// Resolver settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig
{
    /// Upper bound for a single candidate probe
    pub probe_timeout: Duration,
    /// Fail with `DebuggerNotFound` instead of returning no result when an
    /// explicitly requested dialect cannot be found at all
    pub strict_mode_override: bool,
    /// Extension whose bundled `lldb-mi` is tried after the derived one
    pub companion_id: String,
}

impl Default for ResolverConfig
{
    fn default() -> Self
    {
        Self {
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            strict_mode_override: false,
            companion_id: CPPTOOLS_ID.to_string(),
        }
    }
}

impl ResolverConfig
{
    /// Defaults, overridden by environment variables where set
    pub fn from_env() -> Self
    {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(PROBE_TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.probe_timeout = Duration::from_millis(ms),
                Err(e) => tracing::warn!(variable = PROBE_TIMEOUT_ENV, value = %raw, error = %e, "Ignoring invalid timeout"),
            }
        }

        if let Some(raw) = lookup(STRICT_MODE_ENV) {
            match parse_flag(&raw) {
                Some(strict) => config.strict_mode_override = strict,
                None => tracing::warn!(variable = STRICT_MODE_ENV, value = %raw, "Ignoring invalid flag"),
            }
        }

        config
    }
}

fn parse_flag(raw: &str) -> Option<bool>
{
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
