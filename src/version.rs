//! Version string assembly.
//!
//! Dev builds carry the short git commit hash and build date emitted by the
//! build script; builds with the `release` feature show the clean crate
//! version plus build date only.

/// Version string for `--version` output.
///
/// Looks like `0.1.0 (2a1b3c4 2025-11-02)` in dev builds and
/// `0.1.0 (2025-11-02)` in official ones.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let build_date = env!("GRIMOIRE_BUILD_DATE");

    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) if sha != "unknown" => format!("{} ({} {})", version, sha, build_date),
        _ => format!("{} ({})", version, build_date),
    }
}
