//! Link installation: one plugin script at a time, or a whole plugin
//! directory.
use anyhow::{Context as _, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::config::DumpTypes;
use crate::directive;
use crate::error::PluginError;
use crate::logging::DRY_RUN_TARGET;
use crate::resources::link::PluginLinkResource;
use crate::resources::{Applicable as _, Resource as _, ResourceChange};

/// Outcome for one (script, category) link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOutcome {
    /// Category the link was filed under.
    pub category: String,
    /// Full path of the link.
    pub link: PathBuf,
    /// What happened to it.
    pub change: ResourceChange,
}

/// Links plugin scripts into `<dreport_dir>/pl_<category>.d/`.
#[derive(Debug)]
pub struct Installer<'a> {
    dreport_dir: &'a Path,
    plugin_dir: &'a Path,
    dump_types: &'a DumpTypes,
    dry_run: bool,
}

impl<'a> Installer<'a> {
    /// Create an installer over an already-loaded type mapping.
    #[must_use]
    pub const fn new(
        dreport_dir: &'a Path,
        plugin_dir: &'a Path,
        dump_types: &'a DumpTypes,
    ) -> Self {
        Self {
            dreport_dir,
            plugin_dir,
            dump_types,
            dry_run: false,
        }
    }

    /// Report planned links instead of creating them.
    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Destination directory for `category`.
    #[must_use]
    pub fn category_dir(&self, category: &str) -> PathBuf {
        self.dreport_dir.join(format!("pl_{category}.d"))
    }

    /// Regular files directly inside the plugin directory, in listing order.
    ///
    /// Symlinks to regular files count; subdirectories are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be listed.
    pub fn plugin_scripts(&self) -> Result<Vec<PathBuf>> {
        let list_err = |source| PluginError::ListDir {
            path: self.plugin_dir.display().to_string(),
            source,
        };
        let mut scripts = Vec::new();
        for entry in std::fs::read_dir(self.plugin_dir).map_err(list_err)? {
            let path = entry.map_err(list_err)?.path();
            if path.is_file() {
                scripts.push(path);
            }
        }
        Ok(scripts)
    }

    /// Link one plugin script into every category its directive names.
    ///
    /// Codes without a configured category are skipped. Existing entries
    /// at a link path are never replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the script cannot be read as text, or a
    /// destination directory or link cannot be created.
    pub fn install(&self, script: &Path) -> Result<Vec<LinkOutcome>> {
        let read_err = |source| PluginError::Read {
            path: script.display().to_string(),
            source,
        };
        let file = File::open(script).map_err(read_err)?;
        let Some(found) = directive::find_directive(BufReader::new(file)).map_err(read_err)?
        else {
            tracing::debug!("no directive in {}", script.display());
            return Ok(Vec::new());
        };

        let script_name = script.file_name().unwrap_or_default();
        let link_name = found.link_name(script_name);

        let mut outcomes = Vec::new();
        for code in found.codes() {
            let Some(category) = self.dump_types.category(code) else {
                tracing::debug!(
                    "{}: type {code} not configured, skipping",
                    script_name.display()
                );
                continue;
            };

            let link = self.category_dir(category).join(&link_name);
            let resource = PluginLinkResource::new(script.to_path_buf(), link.clone());
            let change = resource
                .ensure(self.dry_run)
                .with_context(|| format!("link {}", resource.description()))?;

            match &change {
                ResourceChange::Applied => {
                    tracing::debug!("linked {}", resource.description());
                }
                ResourceChange::DryRun => {
                    tracing::info!(target: DRY_RUN_TARGET, "would link {}", resource.description());
                }
                ResourceChange::AlreadyCorrect => {
                    tracing::debug!("ok: {} (already linked)", link.display());
                }
                ResourceChange::Skipped { reason } => {
                    tracing::debug!("{}: {reason}", link.display());
                }
            }

            outcomes.push(LinkOutcome {
                category: category.to_string(),
                link,
                change,
            });
        }
        Ok(outcomes)
    }
}

/// Link every plugin script in `plugin_dir` using the `[DumpType]` mapping
/// in `conf_file`.
///
/// Scripts are processed in directory-listing order. The first error ends
/// the run; links created before it stay in place.
///
/// # Errors
///
/// Returns an error if the configuration cannot be parsed, the plugin
/// directory cannot be listed, or any script fails to install.
pub fn run(dreport_dir: &Path, plugin_dir: &Path, conf_file: &Path, dry_run: bool) -> Result<()> {
    let dump_types = DumpTypes::load(conf_file)?;
    tracing::debug!(
        "{} dump types configured in {}",
        dump_types.len(),
        conf_file.display()
    );

    let installer = Installer::new(dreport_dir, plugin_dir, &dump_types).dry_run(dry_run);
    for script in installer.plugin_scripts()? {
        installer.install(&script)?;
    }
    Ok(())
}
