//! # Toolchain Classification
//!
//! Decides, from build-cache evidence, whether a target was built by an
//! MSVC-style toolchain and which compiler produced it.
//!
//! The linker is checked before the compiler. Frontends such as `clang-cl`
//! pair with an MSVC-style linker but do not look like MSVC by compiler name,
//! so the linker is the stronger and earlier signal.

use crate::cache::CacheAccessor;
use crate::platform::Platform;

/// Cache variable holding the linker path
pub const LINKER_KEY: &str = "CMAKE_LINKER";

/// Cache variables probed for the compiler path, in priority order
pub const COMPILER_KEYS: [&str; 3] = ["CMAKE_CXX_COMPILER", "CMAKE_C_COMPILER", "CMAKE_CUDA_COMPILER"];

/// Linker path suffixes that identify an MSVC-style toolchain
const MSVC_LINKER_SUFFIXES: [&str; 2] = ["link.exe", "ld.lld.exe"];

/// File name of the MSVC compiler driver
const MSVC_COMPILER: &str = "cl.exe";

/// Outcome of linker-based classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toolchain
{
    /// MSVC-style linker recorded in the cache
    Msvc,
    /// No linker recorded, or one that says nothing; classify by compiler
    Unknown,
}

/// Classify the toolchain by its linker
///
/// The match is a case-sensitive suffix match, so `lld-link.exe` counts as
/// MSVC-style while `LINK.EXE` does not.
pub fn classify(cache: &dyn CacheAccessor) -> Toolchain
{
    match cache.get(LINKER_KEY) {
        Some(linker) if MSVC_LINKER_SUFFIXES.iter().any(|suffix| linker.value.ends_with(suffix)) => {
            Toolchain::Msvc
        }
        _ => Toolchain::Unknown,
    }
}

/// Find the compiler path recorded in the cache
///
/// Returns the value of the first of [`COMPILER_KEYS`] that is present, or
/// `None` when the cache records no compiler at all.
pub fn find_compiler(cache: &dyn CacheAccessor) -> Option<&str>
{
    COMPILER_KEYS
        .iter()
        .find_map(|key| cache.get(key))
        .map(|entry| entry.value.as_str())
}

/// Whether the compiler at `path` is the MSVC driver (`cl.exe`)
pub fn is_msvc_compiler(platform: Platform, path: &str) -> bool
{
    platform.file_name(path) == MSVC_COMPILER
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::cache::CacheSnapshot;

    fn cache(pairs: &[(&str, &str)]) -> CacheSnapshot
    {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_classify_without_linker()
    {
        assert_eq!(classify(&cache(&[])), Toolchain::Unknown);
    }

    #[test]
    fn test_classify_msvc_linkers()
    {
        for linker in [
            "C:/VS/VC/Tools/MSVC/14.38/bin/Hostx64/x64/link.exe",
            "C:\\LLVM\\bin\\ld.lld.exe",
            "C:\\LLVM\\bin\\lld-link.exe",
        ] {
            assert_eq!(classify(&cache(&[(LINKER_KEY, linker)])), Toolchain::Msvc, "{linker}");
        }
    }

    #[test]
    fn test_classify_is_case_sensitive()
    {
        assert_eq!(classify(&cache(&[(LINKER_KEY, "C:\\VS\\LINK.EXE")])), Toolchain::Unknown);
    }

    #[test]
    fn test_classify_gnu_linker()
    {
        assert_eq!(classify(&cache(&[(LINKER_KEY, "/usr/bin/ld")])), Toolchain::Unknown);
        assert_eq!(classify(&cache(&[(LINKER_KEY, "/usr/bin/ld.lld")])), Toolchain::Unknown);
    }

    #[test]
    fn test_find_compiler_priority()
    {
        let both = cache(&[
            ("CMAKE_C_COMPILER", "/usr/bin/gcc"),
            ("CMAKE_CXX_COMPILER", "/usr/bin/g++"),
            ("CMAKE_CUDA_COMPILER", "/usr/local/cuda/bin/nvcc"),
        ]);
        assert_eq!(find_compiler(&both), Some("/usr/bin/g++"));

        let c_and_cuda = cache(&[
            ("CMAKE_CUDA_COMPILER", "/usr/local/cuda/bin/nvcc"),
            ("CMAKE_C_COMPILER", "/usr/bin/gcc"),
        ]);
        assert_eq!(find_compiler(&c_and_cuda), Some("/usr/bin/gcc"));

        let cuda = cache(&[("CMAKE_CUDA_COMPILER", "/usr/local/cuda/bin/nvcc")]);
        assert_eq!(find_compiler(&cuda), Some("/usr/local/cuda/bin/nvcc"));
    }

    #[test]
    fn test_find_compiler_missing()
    {
        assert_eq!(find_compiler(&cache(&[(LINKER_KEY, "/usr/bin/ld")])), None);
    }

    #[test]
    fn test_is_msvc_compiler()
    {
        assert!(is_msvc_compiler(Platform::Windows, "C:\\VS\\bin\\Hostx64\\x64\\cl.exe"));
        assert!(is_msvc_compiler(Platform::Windows, "C:/VS/bin/cl.exe"));
        assert!(!is_msvc_compiler(Platform::Windows, "C:\\LLVM\\bin\\clang-cl.exe"));
        assert!(!is_msvc_compiler(Platform::Windows, "C:\\VS\\bin\\CL.EXE"));
        assert!(!is_msvc_compiler(Platform::Posix, "/usr/bin/cc"));
    }
}
