//! Plugin link resource.
use anyhow::Result;
use std::path::{Path, PathBuf};

use super::error::ResourceError;
use super::helpers::fs::{ensure_parent_dir, entry_exists, relative_path};
use super::{Applicable, Resource, ResourceChange, ResourceState};

/// A relative symlink from a category directory back to a plugin script.
#[derive(Debug, Clone)]
pub struct PluginLinkResource {
    /// The plugin script (what the link points to).
    pub script: PathBuf,
    /// Where the link is created (`<dreport>/pl_<category>.d/E<prio>_<name>`).
    pub link: PathBuf,
}

impl PluginLinkResource {
    /// Create a new plugin link resource.
    #[must_use]
    pub const fn new(script: PathBuf, link: PathBuf) -> Self {
        Self { script, link }
    }

    /// The link target: the script path relative to the link's directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no relative path exists between the two.
    pub fn target(&self) -> Result<PathBuf, ResourceError> {
        let dir = self.link.parent().unwrap_or_else(|| Path::new("."));
        relative_path(&self.script, dir)
    }
}

impl Applicable for PluginLinkResource {
    fn description(&self) -> String {
        format!("{} -> {}", self.link.display(), self.script.display())
    }

    fn apply(&self) -> Result<ResourceChange> {
        let target = self.target()?;
        ensure_parent_dir(&self.link)?;
        create_symlink(&target, &self.link)?;
        Ok(ResourceChange::Applied)
    }
}

impl Resource for PluginLinkResource {
    fn current_state(&self) -> Result<ResourceState> {
        if !entry_exists(&self.link)? {
            return Ok(ResourceState::Missing);
        }

        let Ok(existing) = std::fs::read_link(&self.link) else {
            return Ok(ResourceState::Incorrect {
                current: "not a symlink".to_string(),
            });
        };

        if existing == self.target()? {
            Ok(ResourceState::Correct)
        } else {
            Ok(ResourceState::Incorrect {
                current: format!("points to {}", existing.display()),
            })
        }
    }
}

/// Create a symlink at `link` pointing to `target`.
fn create_symlink(target: &Path, link: &Path) -> Result<(), ResourceError> {
    #[cfg(unix)]
    let result = std::os::unix::fs::symlink(target, link);

    #[cfg(windows)]
    let result = std::os::windows::fs::symlink_file(target, link);

    result.map_err(|source| ResourceError::Symlink {
        link: link.display().to_string(),
        target: target.display().to_string(),
        source,
    })
}

#[cfg(all(test, unix))]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn layout() -> (tempfile::TempDir, PathBuf, PathBuf) {
        let tmp = tempfile::tempdir().unwrap();
        let plugins = tmp.path().join("plugins.d");
        std::fs::create_dir(&plugins).unwrap();
        let script = plugins.join("myplugin");
        std::fs::write(&script, "# config: 1 30\n").unwrap();
        let link = tmp.path().join("pl_core.d").join("E30_myplugin");
        (tmp, script, link)
    }

    #[test]
    fn description_mentions_both_ends() {
        let resource =
            PluginLinkResource::new(PathBuf::from("/plugins/a"), PathBuf::from("/pl.d/E1_a"));
        assert!(resource.description().contains("/plugins/a"));
        assert!(resource.description().contains("/pl.d/E1_a"));
    }

    #[test]
    fn target_is_relative_to_link_directory() {
        let (_tmp, script, link) = layout();
        let resource = PluginLinkResource::new(script, link);
        assert_eq!(resource.target().unwrap(), Path::new("../plugins.d/myplugin"));
    }

    #[test]
    fn missing_then_correct_after_apply() {
        let (_tmp, script, link) = layout();
        let resource = PluginLinkResource::new(script, link.clone());
        assert_eq!(resource.current_state().unwrap(), ResourceState::Missing);

        assert_eq!(resource.apply().unwrap(), ResourceChange::Applied);
        assert_eq!(resource.current_state().unwrap(), ResourceState::Correct);

        let meta = std::fs::symlink_metadata(&link).unwrap();
        assert!(meta.is_symlink());
        assert_eq!(std::fs::read_link(&link).unwrap(), Path::new("../plugins.d/myplugin"));
        assert_eq!(std::fs::read_to_string(&link).unwrap(), "# config: 1 30\n");
    }

    #[test]
    fn regular_file_is_incorrect() {
        let (_tmp, script, link) = layout();
        std::fs::create_dir_all(link.parent().unwrap()).unwrap();
        std::fs::write(&link, "occupied").unwrap();
        let resource = PluginLinkResource::new(script, link);
        assert!(matches!(
            resource.current_state().unwrap(),
            ResourceState::Incorrect { .. }
        ));
    }

    #[test]
    fn foreign_symlink_is_incorrect_and_kept() {
        let (_tmp, script, link) = layout();
        std::fs::create_dir_all(link.parent().unwrap()).unwrap();
        std::os::unix::fs::symlink("/elsewhere", &link).unwrap();
        let resource = PluginLinkResource::new(script, link.clone());
        assert!(matches!(
            resource.ensure(false).unwrap(),
            ResourceChange::Skipped { .. }
        ));
        assert_eq!(std::fs::read_link(&link).unwrap(), Path::new("/elsewhere"));
    }

    #[test]
    fn apply_over_existing_entry_fails() {
        let (_tmp, script, link) = layout();
        std::fs::create_dir_all(link.parent().unwrap()).unwrap();
        std::fs::write(&link, "occupied").unwrap();
        let resource = PluginLinkResource::new(script, link);
        let err = resource.apply().unwrap_err();
        assert!(err.downcast_ref::<ResourceError>().is_some());
    }
}
