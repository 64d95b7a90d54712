//! Logging infrastructure: tracing subscriber and console formatting.

mod subscriber;

pub use subscriber::init_subscriber;

/// Tracing target for events describing changes a dry run would make.
pub const DRY_RUN_TARGET: &str = "dreport_links::dry_run";
