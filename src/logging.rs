use std::fmt;
use std::time::Instant;

use log::{Level, LevelFilter};

use crate::FailResult;

/// Send `log` records from every crate to stderr, prefixed with the elapsed time, the
/// target and a colored level.
///
/// Fails if a logger is already installed.
pub fn init_global_logger(level: LevelFilter) -> FailResult<()>
{Ok({
    let start = Instant::now();
    fern::Dispatch::new()
        .format(move |out, message, record| {
            let t = start.elapsed();
            out.finish(format_args!("[{:>4}.{:03}s][{}][{}] {}",
                t.as_secs(),
                t.subsec_millis(),
                record.target(),
                ColorizedLevel(record.level()),
                message))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    debug!("logging at level {}", level);
})}

/// A logger for tests.  Output goes through `println!`, where the test harness can
/// capture it.
///
/// Does nothing if a logger is already installed.
pub fn init_test_logger() {
    let _ = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}][{}] {}", record.target(), record.level(), message))
        })
        .level(LevelFilter::Trace)
        .chain(Box::new(CapturedStdout) as Box<dyn log::Log>)
        .apply();
}

struct CapturedStdout;

impl log::Log for CapturedStdout {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool { true }
    fn log(&self, record: &log::Record<'_>) { println!("{}", record.args()) }
    fn flush(&self) {}
}

#[derive(Debug, Copy, Clone)]
pub struct ColorizedLevel(pub Level);
impl fmt::Display for ColorizedLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = match self.0 {
            Level::Error => ansi_term::Colour::Red.bold(),
            Level::Warn  => ansi_term::Colour::Red.normal(),
            Level::Info  => ansi_term::Colour::Cyan.bold(),
            Level::Debug => ansi_term::Colour::Yellow.dimmed(),
            Level::Trace => ansi_term::Colour::Cyan.normal(),
        };
        write!(f, "{}", style.paint(self.0.to_string()))
    }
}
