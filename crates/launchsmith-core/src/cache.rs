//! # Build Cache Access
//!
//! Read-only view over the variables a CMake configure step persisted.
//!
//! The resolver only ever asks for a handful of string entries
//! (`CMAKE_LINKER` and the per-language compiler paths), so the accessor is a
//! plain key lookup. Reading the cache file from disk is the caller's job; this
//! module provides the trait the resolver consumes and an in-memory snapshot
//! that implements it.

use std::collections::HashMap;

use crate::error::{ResolveError, Result};

/// A single cache variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry
{
    /// Variable name, e.g. `CMAKE_CXX_COMPILER`
    pub key: String,
    /// Variable value, e.g. `/usr/bin/g++`
    pub value: String,
}

impl CacheEntry
{
    /// Create a new entry
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Parse a `KEY=VALUE` or `KEY:TYPE=VALUE` definition
    ///
    /// The type annotation is accepted and dropped, the same way `cmake -D`
    /// accepts it. The value may itself contain `=`.
    ///
    /// ```rust
    /// use launchsmith_core::cache::CacheEntry;
    ///
    /// let entry = CacheEntry::parse_definition("CMAKE_CXX_COMPILER:FILEPATH=/usr/bin/g++")?;
    /// assert_eq!(entry.key, "CMAKE_CXX_COMPILER");
    /// assert_eq!(entry.value, "/usr/bin/g++");
    /// # Ok::<(), launchsmith_core::error::ResolveError>(())
    /// ```
    ///
    /// ## Errors
    ///
    /// Returns `InvalidArgument` when there is no `=` or the key is empty.
    pub fn parse_definition(definition: &str) -> Result<Self>
    {
        let (lhs, value) = definition
            .split_once('=')
            .ok_or_else(|| ResolveError::InvalidArgument(format!("Expected KEY=VALUE, got '{definition}'")))?;

        let key = lhs.split_once(':').map_or(lhs, |(key, _ty)| key).trim();
        if key.is_empty() {
            return Err(ResolveError::InvalidArgument(format!(
                "Missing cache variable name in '{definition}'"
            )));
        }

        Ok(Self::new(key, value))
    }
}

/// Key lookup over a build cache
///
/// Implementations must behave as an immutable snapshot for the duration of a
/// resolution.
pub trait CacheAccessor: Send + Sync
{
    /// Look up a variable by name
    fn get(&self, key: &str) -> Option<&CacheEntry>;
}

/// In-memory cache snapshot
#[derive(Debug, Clone, Default)]
pub struct CacheSnapshot
{
    entries: HashMap<String, CacheEntry>,
}

impl CacheSnapshot
{
    /// Create an empty snapshot
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Insert or replace an entry
    pub fn insert(&mut self, entry: CacheEntry)
    {
        self.entries.insert(entry.key.clone(), entry);
    }

    /// Build a snapshot from `KEY=VALUE` definitions
    ///
    /// Later definitions of the same key win.
    ///
    /// ## Errors
    ///
    /// Fails on the first malformed definition.
    pub fn from_definitions<I, S>(definitions: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut snapshot = Self::new();
        for definition in definitions {
            snapshot.insert(CacheEntry::parse_definition(definition.as_ref())?);
        }
        Ok(snapshot)
    }

    /// Number of entries
    pub fn len(&self) -> usize
    {
        self.entries.len()
    }

    /// Whether the snapshot has no entries
    pub fn is_empty(&self) -> bool
    {
        self.entries.is_empty()
    }
}

impl CacheAccessor for CacheSnapshot
{
    fn get(&self, key: &str) -> Option<&CacheEntry>
    {
        self.entries.get(key)
    }
}

impl FromIterator<CacheEntry> for CacheSnapshot
{
    fn from_iter<T: IntoIterator<Item = CacheEntry>>(iter: T) -> Self
    {
        let mut snapshot = Self::new();
        for entry in iter {
            snapshot.insert(entry);
        }
        snapshot
    }
}

impl<K, V> FromIterator<(K, V)> for CacheSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self
    {
        iter.into_iter().map(|(key, value)| CacheEntry::new(key, value)).collect()
    }
}
