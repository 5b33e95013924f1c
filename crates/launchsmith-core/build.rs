//! Build script for launchsmith-core
//!
//! Checks the toolchain before compilation:
//! - Minimum Rust version (1.82.0, for `Option::is_none_or`)

fn main()
{
    const MIN_RUST_VERSION: &str = "1.82.0";

    match (rustc_version::version(), rustc_version::Version::parse(MIN_RUST_VERSION)) {
        (Ok(found), Ok(min)) if found < min => {
            panic!("launchsmith-core requires Rust {min} or newer, found {found}");
        }
        (Ok(_), Ok(_)) => {}
        // If we can't get version (e.g., in some build environments), just warn
        _ => println!("cargo:warning=could not verify Rust version"),
    }
}
