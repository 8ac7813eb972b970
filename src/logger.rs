use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

/// Writes everything to stderr - stdout is reserved for the benchmark report
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, _: &Metadata<'_>) -> bool { true }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_record(record.level(), &record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

fn format_record(level: Level, message: &str) -> String {
    match level {
        Level::Error | Level::Warn | Level::Info => message.to_string(),
        _ => format!("Verbose: {}", message),
    }
}

fn max_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Error
    }
}

pub fn init(verbose: bool) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(StderrLogger))
        .map(|()| log::set_max_level(max_level(verbose)))
}
