//! Embeds the version line pieces into `OUT_DIR/build_info.rs`.

use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn main() -> Result<(), Box<dyn Error>> {
    let commit = env::var("BUILD_COMMIT")
        .ok()
        .or_else(git_short_hash)
        .unwrap_or_else(|| "unknown".into());
    let date = env::var("BUILD_DATE")
        .unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%d").to_string());
    let profile = env::var("PROFILE")?;

    let constants = [
        ("BUILD_COMMIT", commit),
        ("BUILD_DATE", date),
        ("BUILD_PROFILE", profile),
    ];
    let source: String = constants
        .iter()
        .map(|(name, value)| format!("pub const {name}: &str = {value:?};\n"))
        .collect();

    let dest = PathBuf::from(env::var("OUT_DIR")?).join("build_info.rs");
    fs::write(dest, source)?;

    println!("cargo:rerun-if-changed=.git/HEAD");
    for (name, _) in &constants[..2] {
        println!("cargo:rerun-if-env-changed={name}");
    }
    Ok(())
}

/// Seven-character hash of HEAD, if this is a git checkout.
fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?.trim().to_string();
    (!hash.is_empty()).then_some(hash)
}
