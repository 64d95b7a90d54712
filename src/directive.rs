//! Grammar for the `config:` directive embedded in plugin scripts.
//!
//! A plugin declares the dump types it serves and its priority on a single
//! line:
//!
//! ```text
//! # config: 023 50
//! ```
//!
//! meaning type codes `0`, `2` and `3` at priority `50`.
use std::ffi::{OsStr, OsString};
use std::io::BufRead;
use std::sync::LazyLock;

use regex::Regex;

/// Marker a line must contain to be considered a directive.
pub const MARKER: &str = "config:";

/// First `<digits><whitespace><digits>` pair on a line.
#[allow(clippy::expect_used)] // constant pattern
static CODES_AND_PRIORITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\s+[0-9]+").expect("directive pattern"));

/// A parsed `config:` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// ASCII digits, one type code per character, leading zeros kept.
    pub type_codes: String,
    /// Priority digits, kept as written.
    pub priority: String,
}

impl Directive {
    /// Iterate the individual type codes in declaration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dreport_links::directive::Directive;
    ///
    /// let d = Directive { type_codes: "023".into(), priority: "50".into() };
    /// assert_eq!(d.codes().collect::<String>(), "023");
    /// ```
    pub fn codes(&self) -> impl Iterator<Item = char> + '_ {
        self.type_codes.chars()
    }

    /// Link name for `script_name` at this directive's priority.
    ///
    /// The script name is carried over byte for byte, whether or not it is
    /// valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::ffi::OsStr;
    /// use dreport_links::directive::Directive;
    ///
    /// let d = Directive { type_codes: "1".into(), priority: "030".into() };
    /// assert_eq!(d.link_name(OsStr::new("myplugin")), "E030_myplugin");
    /// ```
    #[must_use]
    pub fn link_name(&self, script_name: &OsStr) -> OsString {
        let mut name = OsString::from(format!("E{}_", self.priority));
        name.push(script_name);
        name
    }
}

/// Classification of a single script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineScan {
    /// The line does not contain [`MARKER`].
    Unmarked,
    /// The line has the marker but no digit pair.
    NoPair,
    /// The matched pair did not split into exactly two tokens.
    Malformed,
    /// A usable directive.
    Found(Directive),
}

/// Classify one line of a plugin script.
///
/// The digit pair may appear anywhere on a marked line; only the first one
/// counts.
///
/// # Examples
///
/// ```
/// use dreport_links::directive::{scan_line, LineScan};
///
/// assert_eq!(scan_line("echo hello"), LineScan::Unmarked);
/// assert_eq!(scan_line("# config: abc"), LineScan::NoPair);
/// assert!(matches!(scan_line("# config: 12 30"), LineScan::Found(_)));
/// ```
#[must_use]
pub fn scan_line(line: &str) -> LineScan {
    if !line.contains(MARKER) {
        return LineScan::Unmarked;
    }
    let Some(pair) = CODES_AND_PRIORITY.find(line) else {
        return LineScan::NoPair;
    };
    let mut tokens = pair.as_str().split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(types), Some(priority), None) => LineScan::Found(Directive {
            type_codes: types.to_string(),
            priority: priority.to_string(),
        }),
        _ => LineScan::Malformed,
    }
}

/// Scan a script for its directive.
///
/// Lines are read until the first [`LineScan::Found`]; a
/// [`LineScan::Malformed`] line ends the scan without a directive.
///
/// # Errors
///
/// Returns an error if reading fails or the content is not valid UTF-8.
pub fn find_directive<R: BufRead>(reader: R) -> std::io::Result<Option<Directive>> {
    for line in reader.lines() {
        match scan_line(&line?) {
            LineScan::Unmarked | LineScan::NoPair => {}
            LineScan::Malformed => return Ok(None),
            LineScan::Found(directive) => return Ok(Some(directive)),
        }
    }
    Ok(None)
}
