//! dreport plugin link installer.
//!
//! Links diagnostic-report plugin scripts into priority-ordered,
//! per-category directories. Each script declares the dump types it serves
//! with a `config: <codes> <priority>` directive; a `[DumpType]` INI section
//! maps each single-digit code to a category, and the script is linked as
//! `<dreport_dir>/pl_<category>.d/E<priority>_<script>`.
//!
//! The public API is organised into layers:
//!
//! - **[`config`]** — parse the `[DumpType]` mapping
//! - **[`directive`]** — find the `config:` directive in a script
//! - **[`resources`]** — idempotent `check + apply` link primitives
//! - **[`installer`]** — link one script, or a whole plugin directory
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod config;
pub mod directive;
pub mod error;
pub mod installer;
pub mod logging;
pub mod resources;

/// Version string: `DREPORT_LINKS_VERSION` at build time, else the package
/// version.
pub const VERSION: &str = match option_env!("DREPORT_LINKS_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};
