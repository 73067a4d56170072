//! Various helper-utilities

use crate::cli::Opts;
use anyhow::{Context, Result};
use flexi_logger::{
    style,
    AdaptiveFormat,
    DeferredNow,
    Level,
    Logger,
    LoggerHandle,
    Record,
    WriteMode,
};
use std::{
    env,
    io::{self, Write},
    panic,
};

/// Environment variable that overrides the log level
const LOG_ENV: &str = "VMON_LOG";

/// Shorter way of testing if the user wants color for the output of `--help`
pub(crate) fn wants_color() -> bool {
    env::var_os("NO_COLOR").is_none()
}

/// The log specification to use: `$VMON_LOG`, else one level per `-v`
fn log_spec(verbose: u8) -> String {
    env::var(LOG_ENV).unwrap_or_else(|_| {
        match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
        .to_owned()
    })
}

/// Initializes logging for this crate
///
/// The returned handle has to be kept alive for as long as messages should be
/// written.
pub(crate) fn initialize_logging(args: &Opts) -> Result<LoggerHandle> {
    /// Customize the format of the log (colored)
    fn colored_format(
        w: &mut dyn Write,
        _now: &mut DeferredNow,
        record: &Record,
    ) -> Result<(), io::Error> {
        let level = record.level();
        write!(
            w,
            "{:<5} [{}:{}]: {}",
            style(level, level),
            style(Level::Trace, record.file().unwrap_or("<unnamed>")),
            record.line().unwrap_or(0),
            &record.args()
        )
    }

    /// Customize the format of the log (uncolored)
    fn uncolored_format(
        w: &mut dyn Write,
        now: &mut DeferredNow,
        record: &Record,
    ) -> Result<(), io::Error> {
        // Messages may carry ansi sequences from `colored`
        write!(
            w,
            "[{:>}] {:<5} [{}:{}]: {}",
            now.now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.file().unwrap_or("<unnamed>"),
            record.line().unwrap_or(0),
            String::from_utf8(strip_ansi_escapes::strip(
                &record.args().to_string().as_bytes()
            )?)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?
        )
    }

    // Python-like backtraces make it easier to see which request to the
    // X-Server was being handled
    if cfg!(debug_assertions) {
        better_panic::install();
        panic::set_hook(Box::new(|panic_info| {
            better_panic::Settings::auto().create_panic_handler()(panic_info);
        }));
    }

    let format = if args.color_when.as_deref() == Some("never") || !wants_color() {
        AdaptiveFormat::Custom(uncolored_format, uncolored_format)
    } else {
        AdaptiveFormat::Custom(uncolored_format, colored_format)
    };

    Logger::try_with_str(log_spec(args.verbose))
        .context("invalid log specification")?
        .write_mode(WriteMode::BufferAndFlush)
        .adaptive_format_for_stderr(format)
        .set_palette(String::from("9;11;14;5;13"))
        .start()
        .context("failed to start the logger")
}
