// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed dreport tree so each integration
// test can set up plugins and configuration without repeating filesystem
// boilerplate.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Configuration used by most tests.
pub const DEFAULT_CONF: &str = "[DumpType]\n1 = core\n2 = network\n";

/// An isolated plugin/dreport tree backed by a [`tempfile::TempDir`].
///
/// Layout:
/// - `dreport/`       — destination for `pl_<category>.d` directories
/// - `plugins.d/`     — plugin scripts
/// - `dreport.conf`   — the `[DumpType]` mapping
pub struct IntegrationTestContext {
    /// Temporary directory containing the tree.
    pub root: tempfile::TempDir,
}

impl IntegrationTestContext {
    /// Create a context with an empty plugin directory and `conf` written
    /// to `dreport.conf`.
    pub fn with_conf(conf: &str) -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir(root.path().join("plugins.d")).expect("create plugins dir");
        std::fs::write(root.path().join("dreport.conf"), conf).expect("write config");
        Self { root }
    }

    /// Create a context using [`DEFAULT_CONF`].
    pub fn new() -> Self {
        Self::with_conf(DEFAULT_CONF)
    }

    /// Destination directory.
    pub fn dreport_dir(&self) -> PathBuf {
        self.root.path().join("dreport")
    }

    /// Plugin directory.
    pub fn plugin_dir(&self) -> PathBuf {
        self.root.path().join("plugins.d")
    }

    /// Configuration file.
    pub fn conf_file(&self) -> PathBuf {
        self.root.path().join("dreport.conf")
    }

    /// Write a plugin script and return its path.
    pub fn plugin(&self, name: &str, content: &str) -> PathBuf {
        let path = self.plugin_dir().join(name);
        std::fs::write(&path, content).expect("write plugin");
        path
    }

    /// Every entry under the dreport directory as
    /// `dir/name -> target` (symlinks) or `dir/name` (anything else), sorted.
    pub fn layout(&self) -> String {
        let dreport = self.dreport_dir();
        if !dreport.exists() {
            return String::new();
        }
        let mut lines = Vec::new();
        collect(&dreport, &dreport, &mut lines);
        lines.sort();
        lines.join("\n")
    }
}

fn collect(base: &Path, dir: &Path, lines: &mut Vec<String>) {
    for entry in std::fs::read_dir(dir).expect("read dir") {
        let path = entry.expect("dir entry").path();
        let rel = path
            .strip_prefix(base)
            .expect("under base")
            .display()
            .to_string();
        let meta = std::fs::symlink_metadata(&path).expect("metadata");
        if meta.is_symlink() {
            let target = std::fs::read_link(&path).expect("read link");
            lines.push(format!("{rel} -> {}", target.display()));
        } else if meta.is_dir() {
            collect(base, &path, lines);
        } else {
            lines.push(rel);
        }
    }
}
