//! # Host Platform
//!
//! Path conventions of the host the debugger will run on.
//!
//! Candidate derivation works on compiler paths as strings taken straight from
//! the build cache, so path handling cannot lean on `std::path` (which only
//! knows the conventions of the machine this code was compiled for). A cache
//! produced on Windows uses `\` and `/` interchangeably and marks executables
//! with `.exe`; a POSIX cache uses `/` only.
//!
//! Platforms are identified the way debug-adapter hosts report them:
//! `win32`, `darwin`, `linux`, `freebsd`, ...

use std::fmt;

use crate::types::MiMode;

/// Host platform family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform
{
    /// Windows (`win32`)
    Windows,
    /// macOS (`darwin`)
    Darwin,
    /// Linux and every other POSIX host
    Posix,
}

impl Platform
{
    /// Map a platform identifier onto a platform family
    ///
    /// Unknown identifiers are treated as POSIX.
    ///
    /// ```rust
    /// use launchsmith_core::platform::Platform;
    ///
    /// assert_eq!(Platform::from_id("win32"), Platform::Windows);
    /// assert_eq!(Platform::from_id("darwin"), Platform::Darwin);
    /// assert_eq!(Platform::from_id("freebsd"), Platform::Posix);
    /// ```
    pub fn from_id(id: &str) -> Self
    {
        match id.to_lowercase().as_str() {
            "win32" | "windows" | "cygwin" => Platform::Windows,
            "darwin" | "macos" => Platform::Darwin,
            _ => Platform::Posix,
        }
    }

    /// The platform this binary is running on
    pub const fn host() -> Self
    {
        if cfg!(windows) {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::Darwin
        } else {
            Platform::Posix
        }
    }

    /// Platform identifier as reported by debug-adapter hosts
    pub const fn id(self) -> &'static str
    {
        match self {
            Platform::Windows => "win32",
            Platform::Darwin => "darwin",
            Platform::Posix => "linux",
        }
    }

    /// Whether this is a Windows-family host
    pub const fn is_windows(self) -> bool
    {
        matches!(self, Platform::Windows)
    }

    /// MI dialect assumed when the caller does not pick one
    ///
    /// macOS ships LLDB with its developer tools; everywhere else GDB is the
    /// native choice.
    pub const fn default_mi_mode(self) -> MiMode
    {
        match self {
            Platform::Darwin => MiMode::Lldb,
            Platform::Windows | Platform::Posix => MiMode::Gdb,
        }
    }

    /// Suffix appended to bare executable names
    pub const fn exe_suffix(self) -> &'static str
    {
        if self.is_windows() {
            ".exe"
        } else {
            ""
        }
    }

    /// Whether `c` separates path components on this platform
    pub const fn is_separator(self, c: char) -> bool
    {
        c == '/' || (self.is_windows() && c == '\\')
    }

    /// Separator used when joining path components
    pub const fn separator(self) -> char
    {
        if self.is_windows() {
            '\\'
        } else {
            '/'
        }
    }

    /// Byte index where the last path component of `path` starts
    fn file_name_start(self, path: &str) -> usize
    {
        // Separators are ASCII, so `i + 1` stays on a char boundary
        path.rfind(|c| self.is_separator(c)).map_or(0, |i| i + 1)
    }

    /// Split `path` into everything up to and including the last separator,
    /// and the final component
    pub fn split_file_name(self, path: &str) -> (&str, &str)
    {
        path.split_at(self.file_name_start(path))
    }

    /// Final component of `path`
    ///
    /// ```rust
    /// use launchsmith_core::platform::Platform;
    ///
    /// assert_eq!(Platform::Posix.file_name("/usr/bin/g++"), "g++");
    /// assert_eq!(Platform::Windows.file_name("C:\\VS\\bin/cl.exe"), "cl.exe");
    /// ```
    pub fn file_name(self, path: &str) -> &str
    {
        self.split_file_name(path).1
    }

    /// Directory portion of `path`
    ///
    /// Returns `.` for a bare file name, and keeps a lone root separator.
    pub fn dirname(self, path: &str) -> &str
    {
        let (dir, _) = self.split_file_name(path);
        if dir.is_empty() {
            return ".";
        }

        let trimmed = dir.trim_end_matches(|c| self.is_separator(c));
        if trimmed.is_empty() {
            // Root: keep one separator
            &dir[..1]
        } else if self.is_windows() && trimmed.len() == 2 && trimmed.ends_with(':') {
            // Drive root: `C:\`
            &dir[..3]
        } else {
            trimmed
        }
    }

    /// Join `name` onto `dir`
    ///
    /// Reuses the last separator already in `dir`, so `C:/mingw/bin` stays
    /// forward-slashed on Windows.
    pub fn join(self, dir: &str, name: &str) -> String
    {
        if dir.is_empty() || dir == "." {
            return name.to_string();
        }

        if dir.ends_with(|c| self.is_separator(c)) {
            return format!("{dir}{name}");
        }

        let separator = dir.chars().rev().find(|&c| self.is_separator(c)).unwrap_or(self.separator());
        format!("{dir}{separator}{name}")
    }

    /// Whether `path` is absolute under this platform's rules
    ///
    /// On Windows a path is absolute when it starts with a separator or with a
    /// drive letter followed by a separator (`C:\`, `C:/`). `C:foo` is drive
    /// relative and therefore not absolute.
    pub fn is_absolute(self, path: &str) -> bool
    {
        let mut chars = path.chars();
        match chars.next() {
            Some(c) if self.is_separator(c) => true,
            Some(drive) if self.is_windows() && drive.is_ascii_alphabetic() => {
                chars.next() == Some(':') && chars.next().is_some_and(|c| self.is_separator(c))
            }
            _ => false,
        }
    }
}

impl fmt::Display for Platform
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.id())
    }
}
