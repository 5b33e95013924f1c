//! # Error Types
//!
//! Error handling for debugger resolution.
//!
//! Only two conditions are fatal to a resolution. Everything else the resolver
//! runs into (a candidate that fails to start, a debugger path override that
//! points nowhere) is logged as a warning and absorbed, so that a failed
//! automatic lookup never aborts an unrelated debug-launch workflow.

use thiserror::Error;

use crate::types::DebuggerFamily;

/// Main error type for resolution operations
///
/// ## Error Categories
///
/// 1. **Cache errors**: NoCompiler
/// 2. **Lookup errors**: DebuggerNotFound
/// 3. **Input errors**: InvalidArgument
/// 4. **Output errors**: Serialize
/// 5. **I/O errors**: Io
#[derive(Error, Debug)]
pub enum ResolveError
{
    /// The build cache has no compiler entry at all
    ///
    /// None of `CMAKE_CXX_COMPILER`, `CMAKE_C_COMPILER` or
    /// `CMAKE_CUDA_COMPILER` is present. This means the configure step never
    /// ran, or never completed.
    ///
    /// ## Solution
    ///
    /// Re-run the configure step. Retrying resolution against the same cache
    /// will fail the same way.
    #[error("Unable to find a compiler in the build cache; re-run the configure step")]
    NoCompiler,

    /// An explicitly requested debugger family could not be found
    ///
    /// Raised only in strict mode, once every compiler-derived candidate and
    /// the bare command name on the search path have failed to start.
    #[error("Unable to locate the {family} debugger, not even '{command}' on the search path")]
    DebuggerNotFound
    {
        /// Family the caller asked for
        family: DebuggerFamily,
        /// Bare command that was probed last
        command: String,
    },

    /// Invalid argument passed to a resolver function
    ///
    /// Examples:
    /// - A cache definition without `=`
    /// - An unknown debugger mode name
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A launch configuration could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for `Result<T, ResolveError>`
///
/// ```rust
/// use launchsmith_core::error::Result;
/// fn foo() -> Result<()>
/// {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ResolveError>;
