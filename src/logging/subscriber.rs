//! Tracing subscriber setup: console formatter and initialisation.
use std::io::IsTerminal as _;

use super::DRY_RUN_TARGET;

/// Extracts the `message` field from a [`tracing::Event`].
#[derive(Default)]
struct MessageExtractor {
    message: String,
}

impl tracing::field::Visit for MessageExtractor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

/// A [`tracing_subscriber::fmt::FormatEvent`] that emits compact,
/// level-tagged console lines.
struct ConsoleFormatter {
    ansi: bool,
}

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for ConsoleFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let mut extractor = MessageExtractor::default();
        event.record(&mut extractor);
        writeln!(
            writer,
            "{}",
            format_line(
                *metadata.level(),
                metadata.target(),
                &extractor.message,
                self.ansi
            )
        )
    }
}

/// Render one console line.
fn format_line(level: tracing::Level, target: &str, msg: &str, ansi: bool) -> String {
    let paint = |code: &str, text: &str| {
        if ansi {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    };
    match level {
        tracing::Level::ERROR => format!("{} {msg}", paint("31", "ERROR")),
        tracing::Level::WARN => format!("{}  {msg}", paint("33", "WARN")),
        tracing::Level::INFO if target == DRY_RUN_TARGET => {
            format!("  {} {msg}", paint("33", "[DRY RUN]"))
        }
        tracing::Level::INFO => format!("  {msg}"),
        _ => format!("  {}", paint("2", msg)),
    }
}

/// Console level used when `RUST_LOG` is not set.
const fn default_level(verbose: bool, dry_run: bool) -> &'static str {
    if verbose {
        "debug"
    } else if dry_run {
        "info"
    } else {
        "warn"
    }
}

/// Initialise the global [`tracing`] subscriber.
///
/// All output goes to stderr so stdout stays free for the usage message.
/// The default level keeps successful runs silent: `warn`, raised to `info`
/// for dry runs and `debug` with `verbose`. `RUST_LOG` overrides it.
/// Must be called once at program startup, before any logging.
pub fn init_subscriber(verbose: bool, dry_run: bool) {
    use tracing_subscriber::{
        EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose, dry_run)));

    let console_layer = fmt::layer()
        .event_format(ConsoleFormatter {
            ansi: std::io::stderr().is_terminal(),
        })
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .init();
}
