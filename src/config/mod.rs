//! Dump-type configuration loading.
pub mod ini;

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::ConfigError;

/// Name of the INI section that maps type codes to categories.
pub const DUMP_TYPE_SECTION: &str = "DumpType";

/// Mapping from single-digit dump type codes to category names.
///
/// Loaded once per run and passed explicitly to the installer.
///
/// # Examples
///
/// ```
/// use dreport_links::config::DumpTypes;
///
/// let types = DumpTypes::from_ini_str("[DumpType]\n1 = core\n2 = network\n").unwrap();
/// assert_eq!(types.category('1'), Some("core"));
/// assert_eq!(types.category('7'), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DumpTypes {
    categories: BTreeMap<String, String>,
}

impl DumpTypes {
    /// Load the `[DumpType]` section of `path`.
    ///
    /// A missing file or a file without the section yields an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let sections = ini::parse_kv_sections(path)?;
        Ok(Self::from_sections(&sections))
    }

    /// Build a mapping from INI content held in memory.
    ///
    /// # Errors
    ///
    /// Returns an error if the content cannot be parsed.
    pub fn from_ini_str(content: &str) -> Result<Self, ConfigError> {
        let sections = ini::parse_kv_sections_from_str(content)?;
        Ok(Self::from_sections(&sections))
    }

    /// Build a mapping from already-parsed sections.
    #[must_use]
    pub fn from_sections(sections: &[ini::KvSection]) -> Self {
        Self {
            categories: ini::section_entries(sections, DUMP_TYPE_SECTION),
        }
    }

    /// Category name for a single type code, if configured.
    #[must_use]
    pub fn category(&self, code: char) -> Option<&str> {
        let mut buf = [0u8; 4];
        self.categories
            .get(&*code.encode_utf8(&mut buf))
            .map(String::as_str)
    }

    /// Number of configured type codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether no type codes are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
