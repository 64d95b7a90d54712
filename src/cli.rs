//! Command-line argument model.
use clap::Parser;
use std::path::PathBuf;

/// Usage line printed when the positional arguments are wrong.
pub const USAGE: &str = "Usage: dreport-links <dreport_dir> <plugin_dir> <conf_file>";

/// Link dreport plugin scripts into per-category, priority-ordered
/// directories.
#[derive(Parser, Debug)]
#[command(
    name = "dreport-links",
    about = "Link dreport plugin scripts into priority-ordered category directories",
    version = crate::VERSION
)]
pub struct Cli {
    /// Directory that receives the pl_<category>.d directories
    pub dreport_dir: PathBuf,

    /// Directory containing the plugin scripts
    pub plugin_dir: PathBuf,

    /// INI file mapping type codes to category names
    pub conf_file: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Preview links without creating them
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

/// How the binary should proceed after argument parsing.
#[derive(Debug)]
pub enum Parsed {
    /// Arguments are valid.
    Run(Cli),
    /// Help or version was requested; clap prints it and exits 0.
    Info(clap::Error),
    /// Wrong arguments: print [`USAGE`] and exit 1.
    Usage,
}

/// Parse `args` (including the program name).
#[must_use]
pub fn parse_from<I, T>(args: I) -> Parsed
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    use clap::error::ErrorKind;

    match Cli::try_parse_from(args) {
        Ok(cli) => Parsed::Run(cli),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Parsed::Info(e)
        }
        Err(_) => Parsed::Usage,
    }
}
