#![cfg(unix)]
#![allow(clippy::expect_used, clippy::unwrap_used)]
//! Integration tests for the `dreport-links` binary: argument handling,
//! exit status and output streams.

mod common;

use std::process::{Command, Output};

use common::IntegrationTestContext;

fn dreport_links(args: &[&std::ffi::OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dreport-links"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn dreport-links")
}

#[test]
fn two_arguments_print_usage_and_exit_1() {
    let ctx = IntegrationTestContext::new();
    ctx.plugin("p", "# config: 1 30\n");

    let out = dreport_links(&[ctx.dreport_dir().as_os_str(), ctx.plugin_dir().as_os_str()]);

    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(
        stdout.trim_end(),
        "Usage: dreport-links <dreport_dir> <plugin_dir> <conf_file>"
    );
    assert!(!ctx.dreport_dir().exists());
}

#[test]
fn four_arguments_print_usage_and_exit_1() {
    let extra = std::ffi::OsStr::new("x");
    let out = dreport_links(&[extra, extra, extra, extra]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8(out.stdout).unwrap().starts_with("Usage:"));
}

#[test]
fn successful_run_is_silent() {
    let ctx = IntegrationTestContext::new();
    ctx.plugin("myplugin", "# config: 12 30\n");

    let out = dreport_links(&[
        ctx.dreport_dir().as_os_str(),
        ctx.plugin_dir().as_os_str(),
        ctx.conf_file().as_os_str(),
    ]);

    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
    assert!(out.stderr.is_empty());
    assert!(ctx.dreport_dir().join("pl_core.d/E30_myplugin").is_symlink());
    assert!(ctx.dreport_dir().join("pl_network.d/E30_myplugin").is_symlink());
}

#[test]
fn run_without_matches_exits_0() {
    let ctx = IntegrationTestContext::new();
    ctx.plugin("p", "echo nothing to declare\n");

    let out = dreport_links(&[
        ctx.dreport_dir().as_os_str(),
        ctx.plugin_dir().as_os_str(),
        ctx.conf_file().as_os_str(),
    ]);

    assert_eq!(out.status.code(), Some(0));
    assert!(!ctx.dreport_dir().exists());
}

#[test]
fn missing_plugin_dir_fails_on_stderr() {
    let ctx = IntegrationTestContext::new();
    let missing = ctx.root.path().join("absent");

    let out = dreport_links(&[
        ctx.dreport_dir().as_os_str(),
        missing.as_os_str(),
        ctx.conf_file().as_os_str(),
    ]);

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8(out.stderr).unwrap().contains("absent"));
}

#[test]
fn dry_run_flag_reports_without_linking() {
    let ctx = IntegrationTestContext::new();
    ctx.plugin("p", "# config: 1 30\n");

    let out = dreport_links(&[
        std::ffi::OsStr::new("--dry-run"),
        ctx.dreport_dir().as_os_str(),
        ctx.plugin_dir().as_os_str(),
        ctx.conf_file().as_os_str(),
    ]);

    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8(out.stderr).unwrap().contains("would link"));
    assert!(!ctx.dreport_dir().exists());
}
