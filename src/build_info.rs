//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Version line printed by `--version`.
pub fn version_line() -> String {
    format!("flappy {} ({}, {})", BUILD_DATE, BUILD_COMMIT, BUILD_PROFILE)
}
