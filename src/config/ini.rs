//! Minimal INI parser for key-value sections.
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use crate::error::ConfigError;

/// Section whose entries back every other section's lookups.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// A key-value section of an INI file.
///
/// # Examples
///
/// ```
/// use dreport_links::config::ini::KvSection;
///
/// let section = KvSection {
///     header: "DumpType".to_string(),
///     entries: vec![("1".to_string(), "core".to_string())],
/// };
/// assert_eq!(section.header, "DumpType");
/// assert_eq!(section.entries[0].1, "core");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KvSection {
    /// The section header exactly as written between the brackets (e.g., `"DumpType"`).
    pub header: String,
    /// Key-value entries in file order. Keys are lowercased.
    pub entries: Vec<(String, String)>,
}

/// Parse an INI file into key-value sections.
///
/// A missing file yields no sections.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file exists but cannot be read, or
/// [`ConfigError::InvalidSyntax`] if it cannot be parsed.
pub fn parse_kv_sections(path: &Path) -> Result<Vec<KvSection>, ConfigError> {
    let Some(content) = read_file(path)? else {
        return Ok(Vec::new());
    };
    parse_kv_sections_from_str(&content).map_err(|e| e.in_file(&path.display().to_string()))
}

/// Parse key-value INI content from a string.
///
/// Format:
/// ```ini
/// # comment
/// ; comment
/// [DumpType]
/// 1 = core
/// 2: network
/// ```
///
/// Keys are split at the first `=` or `:` and lowercased; values are kept
/// verbatim apart from surrounding whitespace.
///
/// # Examples
///
/// ```
/// use dreport_links::config::ini::parse_kv_sections_from_str;
///
/// let sections = parse_kv_sections_from_str("[DumpType]\n1 = core\n2: network\n").unwrap();
/// assert_eq!(sections[0].header, "DumpType");
/// assert_eq!(sections[0].entries[1], ("2".to_string(), "network".to_string()));
/// ```
///
/// # Errors
///
/// Returns [`ConfigError::InvalidSyntax`] if:
/// - An entry appears outside of a section header
/// - A line inside a section has no `=` or `:` separator
/// - A section other than [`DEFAULT_SECTION`] appears twice
/// - A key appears twice in the same section
pub fn parse_kv_sections_from_str(content: &str) -> Result<Vec<KvSection>, ConfigError> {
    let mut sections = Vec::new();
    let mut current: Option<KvSection> = None;
    let mut seen_sections: HashSet<String> = HashSet::new();
    let mut seen_keys: HashSet<(String, String)> = HashSet::new();

    for (line_num, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        if let Some(header) = parse_header(trimmed) {
            if header != DEFAULT_SECTION && !seen_sections.insert(header.clone()) {
                return Err(syntax_error(
                    line_num,
                    &format!("section '{header}' already exists"),
                ));
            }
            if let Some(section) = current.take() {
                sections.push(section);
            }
            current = Some(KvSection {
                header,
                entries: Vec::new(),
            });
        } else if let Some(ref mut section) = current {
            let Some((key, value)) = parse_kv_line(trimmed) else {
                return Err(syntax_error(line_num, "expected 'key = value' or 'key: value'"));
            };
            if !seen_keys.insert((section.header.clone(), key.clone())) {
                return Err(syntax_error(
                    line_num,
                    &format!("option '{key}' in section '{}' already exists", section.header),
                ));
            }
            section.entries.push((key, value));
        } else {
            return Err(syntax_error(line_num, "entry outside of section"));
        }
    }

    if let Some(section) = current {
        sections.push(section);
    }

    Ok(sections)
}

/// Entries visible in section `name`: its own entries on top of those of
/// [`DEFAULT_SECTION`].
///
/// A section that does not exist has no entries, defaults included.
///
/// # Examples
///
/// ```
/// use dreport_links::config::ini::{parse_kv_sections_from_str, section_entries};
///
/// let sections =
///     parse_kv_sections_from_str("[DEFAULT]\nx = 1\ny = 1\n[A]\nx = 3\n[B]\nz = 2\n").unwrap();
/// let entries = section_entries(&sections, "A");
/// assert_eq!(entries.get("x").map(String::as_str), Some("3"));
/// assert_eq!(entries.get("y").map(String::as_str), Some("1"));
/// assert!(!entries.contains_key("z"));
/// assert!(section_entries(&sections, "C").is_empty());
/// ```
#[must_use]
pub fn section_entries(sections: &[KvSection], name: &str) -> BTreeMap<String, String> {
    if name != DEFAULT_SECTION && !sections.iter().any(|s| s.header == name) {
        return BTreeMap::new();
    }
    sections
        .iter()
        .filter(|s| s.header == DEFAULT_SECTION)
        .chain(sections.iter().filter(|s| s.header == name))
        .flat_map(|s| s.entries.iter().cloned())
        .collect()
}

/// Parse a `[header]` line preserving the name exactly, inner spaces included.
fn parse_header(line: &str) -> Option<String> {
    let inner = line.strip_prefix('[')?.strip_suffix(']')?;
    if inner.is_empty() {
        return None;
    }
    Some(inner.to_string())
}

/// Parse a `key = value` or `key: value` line, splitting at whichever
/// separator comes first.
fn parse_kv_line(line: &str) -> Option<(String, String)> {
    let idx = line.find(['=', ':'])?;
    let (key, rest) = line.split_at(idx);
    let value = rest.get(1..)?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_lowercase(), value.trim().to_string()))
}

fn syntax_error(line_num: usize, message: &str) -> ConfigError {
    ConfigError::InvalidSyntax {
        file: "<string>".to_string(),
        line: line_num + 1,
        message: message.to_string(),
    }
}

fn read_file(path: &Path) -> Result<Option<String>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ConfigError::Io {
            path: path.display().to_string(),
            source,
        }),
    }
}
