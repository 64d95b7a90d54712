//! Entry point for the `dreport-links` binary.
use std::process::ExitCode;

use dreport_links::{VERSION, cli, installer, logging};

#[allow(clippy::print_stdout)]
fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = match cli::parse_from(std::env::args_os()) {
        cli::Parsed::Run(args) => args,
        cli::Parsed::Info(e) => e.exit(),
        cli::Parsed::Usage => {
            println!("{}", cli::USAGE);
            return ExitCode::from(1);
        }
    };

    logging::init_subscriber(args.verbose, args.dry_run);
    tracing::debug!("dreport-links {VERSION}");

    match installer::run(&args.dreport_dir, &args.plugin_dir, &args.conf_file, args.dry_run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
