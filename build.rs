//! Exports the build version from the environment or `git describe`.
#![allow(clippy::print_stdout)]

use std::process::Command;

fn main() {
    // Prefer DREPORT_LINKS_VERSION if set (e.g. by a packaging recipe),
    // otherwise fall back to git describe for local development builds.
    if let Ok(version) = std::env::var("DREPORT_LINKS_VERSION") {
        println!("cargo:rustc-env=DREPORT_LINKS_VERSION={version}");
    } else if let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        && output.status.success()
    {
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !version.is_empty() {
            println!("cargo:rustc-env=DREPORT_LINKS_VERSION={version}");
        }
    }

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
    println!("cargo:rerun-if-env-changed=DREPORT_LINKS_VERSION");
}
