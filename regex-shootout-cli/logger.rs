// A minimal logger for the `log` crate that writes to stderr. The harness
// only logs progress and engine failures, so levels and a target are all we
// need.

use log::{self, Log};

/// A logger that writes every record it is given to stderr.
///
/// Filtering happens through the global max level of the `log` crate, which
/// `init_from_env` sets from `RUST_LOG`.
#[derive(Debug)]
pub struct Logger(());

const LOGGER: &'static Logger = &Logger(());

impl Logger {
    /// Install this logger as the global logger and set the maximum level
    /// from the `RUST_LOG` environment variable. Logging is off when
    /// `RUST_LOG` is unset or empty.
    pub fn init_from_env() -> anyhow::Result<()> {
        let rustlog = std::env::var("RUST_LOG").unwrap_or_default();
        let level = parse_level(&rustlog)?;
        log::set_logger(LOGGER)?;
        log::set_max_level(level);
        Ok(())
    }
}

fn parse_level(name: &str) -> anyhow::Result<log::LevelFilter> {
    Ok(match name {
        "" | "off" => log::LevelFilter::Off,
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        unk => anyhow::bail!("unrecognized log level '{}'", unk),
    })
}

impl Log for Logger {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        // Source locations are only interesting when debugging.
        let debugging = record.level() >= log::Level::Debug;
        let location = match (record.file(), record.line()) {
            (Some(file), Some(line)) if debugging => {
                format!("|{file}:{line}")
            }
            _ => String::new(),
        };
        eprintln!(
            "{}|{}{}: {}",
            record.level(),
            record.target(),
            location,
            record.args()
        );
    }

    fn flush(&self) {}
}
