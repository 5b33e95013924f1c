//! # Types
//!
//! Data model shared by every stage of a resolution.
//!
//! Nothing here outlives a single resolution call: the caller supplies an
//! [`ExecutableTarget`] and optional [`Overrides`], the resolver derives a
//! [`DebuggerFamily`] and transient [`DebuggerCandidate`]s from them.

pub mod family;
pub mod target;

// Re-export all public types
pub use family::{DebuggerFamily, MiMode};
pub use target::{DebuggerCandidate, ExecutableTarget, Overrides};
