use std::{io::Write, time::Duration};

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use indicatif_log_bridge::LogWrapper;
use log::{Level, LevelFilter};
use env_logger::{Builder, Env, fmt::Color};
use once_cell::sync::OnceCell;

/// Environment variable overriding the command line verbosity (e.g. `KIN2PED_LOG=trio_inference=trace`)
pub const LOG_ENV_VAR: &str = "KIN2PED_LOG";

static INSTANCE: OnceCell<Logger> = OnceCell::new();

#[derive(Debug)]
pub struct Logger {
    multi_pg: MultiProgress,
}

impl Logger {

    /// Initialize the global logger, with the given verbosity level (0: Error, 1: Warn, 2: Info, 3: Debug, 4+: Trace)
    /// Calling this more than once only updates the maximum log level.
    pub fn init(verbosity: u8) {
        if INSTANCE.get().is_some() {
            Self::set_level(verbosity);
            return
        }

        let logger = Builder::new().filter_level(Self::u8_to_loglevel(verbosity))
            .format(|buf, record| {
                let is_error = record.level() == Level::Error;
                let traceback = match is_error {
                    true  => format!("(@ {}:{}) ", record.file().unwrap_or("unknown"), record.line().unwrap_or(0)),
                    false => String::new(),
                };

                let mut arg_style = buf.style();
                arg_style.set_intense(is_error);

                let mut level_style = buf.style();
                let color = match record.level() {
                    Level::Error => Color::Red,
                    Level::Warn  => Color::Yellow,
                    Level::Info  => Color::Green,
                    Level::Debug => Color::Blue,
                    Level::Trace => Color::Cyan
                };
                level_style.set_color(color).set_bold(true);

                writeln!(
                    buf,
                    "[{} {: <5} {}] {traceback}{}",
                    chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                    level_style.value(record.level()),
                    record.target(),
                    arg_style.value(record.args())
                )
            })
            .parse_env(Env::default().filter(LOG_ENV_VAR))
            .build();

        // Route log lines through the progress bar handle, so that spinners are not torn.
        let multi_pg = MultiProgress::new();
        if LogWrapper::new(multi_pg.clone(), logger).try_init().is_ok() {
            // Only fails if another thread initialized first. Its handle is kept.
            INSTANCE.set(Self{multi_pg}).ok();
        }
    }

    fn u8_to_loglevel(verbosity: u8) -> LevelFilter {
        match verbosity {
            0            => LevelFilter::Error,
            1            => LevelFilter::Warn,
            2            => LevelFilter::Info,
            3            => LevelFilter::Debug,
            4..= u8::MAX => LevelFilter::Trace
        }
    }

    pub fn set_level(verbosity: u8) {
        log::set_max_level(Self::u8_to_loglevel(verbosity));
    }

    /// Shared progress handle. `None` if the logger was never initialized (e.g. when used as a library)
    pub fn multi() -> Option<&'static MultiProgress> {
        INSTANCE.get().map(|logger| &logger.multi_pg)
    }

    /// Spawn a ticking spinner attached to the logger's progress handle.
    /// Returns a hidden spinner whenever the logger is uninitialized or the log level is below `Info`.
    pub fn spinner(message: &str) -> ProgressBar {
        let Some(multi) = Self::multi().filter(|_| log::max_level() >= LevelFilter::Info) else {
            return ProgressBar::hidden()
        };
        let style = ProgressStyle::with_template("{spinner:.green} [{elapsed}] {msg} ({pos} lines)")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        let spinner = multi.add(ProgressBar::new_spinner().with_style(style));
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(120));
        spinner
    }
}
