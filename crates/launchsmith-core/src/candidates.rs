//! # Debugger Candidate Generation
//!
//! Turns a compiler path into an ordered list of debugger paths worth probing.
//!
//! Toolchains usually install their debugger next to their compiler, with a
//! predictable name: `/opt/llvm/bin/clang++` sits beside `/opt/llvm/bin/lldb`,
//! `/mingw64/bin/x86_64-w64-mingw32-g++.exe` beside
//! `/mingw64/bin/x86_64-w64-mingw32-gdb.exe`. Candidates are derived by
//! substituting the compiler token in the path.
//!
//! ## Order
//!
//! 1. `clang` → `lldb-mi` (LLDB), followed by the companion's bundled `lldb-mi`
//! 2. `clang` → `gdb` (GDB)
//! 3. `clang` → `lldb` (LLDB)
//! 4. `c++`/`g++`/`cc`/`gcc` → preferred debugger name (generic fallback)
//!
//! Rows 1-3 live in [`CLANG_DERIVATIONS`] and are applied in table order. A
//! mode override drops every row of the other dialect.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::companion::{bundled_lldb_mi, CompanionLocator};
use crate::fs::FileSystem;
use crate::platform::Platform;
use crate::types::{DebuggerCandidate, MiMode};

/// `clang`, `clang+`, `clang++`, repeated; the `-cl` exclusion is applied by
/// [`substitute_clang`] since `regex` has no lookahead
static CLANG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:clang\+{0,2})+").expect("clang pattern is a valid regex"));

/// GCC-style driver names, matched inside the final path component only
static GNU_DRIVER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[cg]\+\+|g?cc").expect("driver pattern is a valid regex"));

/// Suffix that marks the MSVC-compatible clang driver, which must not be rewritten
const CLANG_CL_SUFFIX: &str = "-cl";

/// One compiler-token substitution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Derivation
{
    /// Text substituted for the clang token
    pub replacement: &'static str,
    /// Dialect of the resulting debugger
    pub mode: MiMode,
    /// Whether the companion's bundled copy follows this candidate
    pub with_bundled: bool,
}

/// Clang-token derivations, in precedence order
pub const CLANG_DERIVATIONS: [Derivation; 3] = [
    Derivation {
        replacement: "lldb-mi",
        mode: MiMode::Lldb,
        with_bundled: true,
    },
    Derivation {
        replacement: "gdb",
        mode: MiMode::Gdb,
        with_bundled: false,
    },
    Derivation {
        replacement: "lldb",
        mode: MiMode::Lldb,
        with_bundled: false,
    },
];

/// Replace every clang token in `path` with `replacement`
///
/// Matching is case-insensitive. A token directly followed by `-cl` (the
/// `clang-cl` driver) is left alone.
///
/// ```rust
/// use launchsmith_core::candidates::substitute_clang;
///
/// assert_eq!(substitute_clang("/usr/bin/clang++-17", "lldb"), "/usr/bin/lldb-17");
/// assert_eq!(substitute_clang("C:/LLVM/bin/clang-cl.exe", "gdb"), "C:/LLVM/bin/clang-cl.exe");
/// ```
pub fn substitute_clang(path: &str, replacement: &str) -> String
{
    let mut out = String::with_capacity(path.len());
    let mut last = 0;

    for m in CLANG_PATTERN.find_iter(path) {
        let followed_by_cl = path[m.end()..]
            .get(..CLANG_CL_SUFFIX.len())
            .is_some_and(|next| next.eq_ignore_ascii_case(CLANG_CL_SUFFIX));
        if followed_by_cl {
            continue;
        }

        out.push_str(&path[last..m.start()]);
        out.push_str(replacement);
        last = m.end();
    }

    out.push_str(&path[last..]);
    out
}

/// Replace GCC-style driver names in the final component of `path`
///
/// Directory components are never touched, so `/opt/gcc/bin/g++` becomes
/// `/opt/gcc/bin/gdb`.
pub fn substitute_driver(platform: Platform, path: &str, replacement: &str) -> String
{
    let (dir, file) = platform.split_file_name(path);
    format!("{dir}{}", GNU_DRIVER_PATTERN.replace_all(file, replacement))
}

/// Produces debugger candidates for a compiler path
pub struct CandidateGenerator<'a>
{
    platform: Platform,
    fs: &'a dyn FileSystem,
    companions: &'a dyn CompanionLocator,
    companion_id: &'a str,
}

impl<'a> CandidateGenerator<'a>
{
    /// Create a generator
    ///
    /// `companion_id` names the extension whose bundled `lldb-mi` is offered
    /// after the compiler-derived one.
    pub fn new(
        platform: Platform,
        fs: &'a dyn FileSystem,
        companions: &'a dyn CompanionLocator,
        companion_id: &'a str,
    ) -> Self
    {
        Self {
            platform,
            fs,
            companions,
            companion_id,
        }
    }

    /// All candidates for `compiler`, in precedence order
    ///
    /// Every call recomputes the list. With `mode_override` set only candidates
    /// of that dialect are produced; `preferred` picks the debugger name used
    /// by the generic fallback.
    pub fn candidates(&self, compiler: &str, preferred: MiMode, mode_override: Option<MiMode>) -> Vec<DebuggerCandidate>
    {
        let allowed = |mode: MiMode| mode_override.is_none_or(|only| only == mode);
        let mut candidates = Vec::new();

        for derivation in CLANG_DERIVATIONS.iter().filter(|d| allowed(d.mode)) {
            let path = substitute_clang(compiler, derivation.replacement);
            if !path.contains(derivation.replacement) {
                continue;
            }
            candidates.push(DebuggerCandidate::new(path, derivation.mode));

            if derivation.with_bundled {
                if let Some(root) = self.companions.install_root(self.companion_id) {
                    candidates.push(DebuggerCandidate::new(
                        bundled_lldb_mi(self.platform, &root),
                        derivation.mode,
                    ));
                }
            }
        }

        if allowed(preferred) {
            candidates.extend(self.generic_fallback(compiler, preferred));
        }

        candidates
    }

    /// Generic fallback derivation for `compiler`
    ///
    /// Substitutes the driver name with the debugger name of `mode`. If that
    /// yields an absolute path that does not exist, the debugger is assumed to
    /// live next to the compiler under its bare name instead. Relative results
    /// are not checked for existence.
    ///
    /// Returns `None` when the resulting file name does not mention the
    /// debugger.
    pub fn generic_fallback(&self, compiler: &str, mode: MiMode) -> Option<DebuggerCandidate>
    {
        let name = mode.debugger_name();
        let mut path = substitute_driver(self.platform, compiler, name);

        if self.platform.is_absolute(&path) && !self.fs.exists(&path) {
            let exe = format!("{name}{}", self.platform.exe_suffix());
            path = self.platform.join(self.platform.dirname(compiler), &exe);
        }

        self.platform
            .file_name(&path)
            .contains(name)
            .then(|| DebuggerCandidate::new(path, mode))
    }
}
