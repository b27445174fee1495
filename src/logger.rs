//! Diagnostics on stderr. stdout stays reserved for the child and for the
//! one-line error reports `main` prints.

use std::io::Write;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

pub const LOG_ENV: &str = "CFPX_LOG";

struct CfpxLogger {
    filter: LevelFilter,
    start: Instant,
}

impl Log for CfpxLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.filter
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = self.start.elapsed().as_secs_f64();
        let _ = writeln!(
            std::io::stderr().lock(),
            "[{elapsed:.3}s] [{}] cfpx: {}",
            record.level(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// `warn` by default, one level up per `-v`. `CFPX_LOG` wins when it parses.
pub fn level_for(verbose: u8, env: Option<&str>) -> LevelFilter {
    if let Some(level) = env.and_then(|s| s.parse().ok()) {
        return level;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init(verbose: u8) -> Result<(), log::SetLoggerError> {
    let env = std::env::var(LOG_ENV).ok();
    let filter = level_for(verbose, env.as_deref());
    log::set_boxed_logger(Box::new(CfpxLogger {
        filter,
        start: Instant::now(),
    }))?;
    log::set_max_level(filter);
    Ok(())
}
