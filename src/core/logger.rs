use std::fs::OpenOptions;
use std::fs::File;
use std::io::{self, Write};
use std::sync::{Mutex, OnceLock};
use log::{
    LevelFilter,
    Metadata,
    Record
};

static LOG_FILE: OnceLock<Mutex<File>> = OnceLock::new();

static CONSOLE_LOGGER: ConsoleLogger = ConsoleLogger;
struct ConsoleLogger;
impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = format!(
                "[{}] [{}] {}",
                record.target(),
                record.level(),
                record.args()
            );
            println!("{}", line);
            if let Some(fp) = LOG_FILE.get() {
                _ = writeln!(fp.lock().unwrap(), "{}", line);
            }
        }
    }
    fn flush(&self) {
        io::stdout().flush().unwrap();
    }
}

static NULL_LOGGER: NullLogger = NullLogger;
struct NullLogger;
impl log::Log for NullLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        false
    }
    fn log(&self, _: &Record) {}
    fn flush(&self) {}
}

pub(crate) fn setup(level: LevelFilter, file: Option<&str>) {
    if let Some(path) = file {
        let fp = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path);
        if let Ok(fp) = fp {
            _ = LOG_FILE.set(Mutex::new(fp));
        }
    }

    _ = log::set_logger(&CONSOLE_LOGGER);
    _ = log::set_max_level(level);
}

pub(crate) fn teardown() {
    _ = log::set_logger(&NULL_LOGGER);
}
