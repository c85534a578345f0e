//! Build script for segplay
//!
//! Always emits `SEGPLAY_BUILD_DATE`. Dev builds also get `VERGEN_GIT_SHA`
//! (or `unknown` outside a git checkout); `--features release` builds keep a
//! clean version string.

use std::process::Command;

/// Build date as YYYY-MM-DD, honoring `SOURCE_DATE_EPOCH` for reproducible builds.
fn build_date() -> String {
    let mut date = Command::new("date");
    match std::env::var("SOURCE_DATE_EPOCH") {
        Ok(epoch) => date.args(["-u", "-d", &format!("@{}", epoch), "+%Y-%m-%d"]),
        Err(_) => date.arg("+%Y-%m-%d"),
    };
    match date.output() {
        Ok(output) if output.status.success() => {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        }
        _ => "unknown".to_string(),
    }
}

#[cfg(not(feature = "release"))]
fn emit_git_sha() {
    use vergen_gitcl::{Emitter, GitclBuilder};

    let result = GitclBuilder::default()
        .sha(true)
        .build()
        .map_err(to_message)
        .and_then(|git| {
            Emitter::default()
                .add_instructions(&git)
                .and_then(|emitter| emitter.emit())
                .map_err(to_message)
        });

    if let Err(message) = result {
        println!("cargo:warning=git info unavailable: {}", message);
        println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
    }
}

#[cfg(not(feature = "release"))]
fn to_message(err: impl std::fmt::Display) -> String {
    err.to_string()
}

fn main() {
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");
    println!("cargo:rustc-env=SEGPLAY_BUILD_DATE={}", build_date());

    #[cfg(not(feature = "release"))]
    emit_git_sha();
}
