use chrono::{Local, TimeZone};
use framelog::logger::{BacktraceCallerIdentity, TypeCallerIdentity};
use framelog::{ConsoleSink, FrameClock, FrameStamp, Logger, SinkLevel};
use std::io;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<String>>>);

impl ConsoleSink for Recorder {
    fn write(&self, _level: SinkLevel, line: &str, _trace: Option<&str>) -> io::Result<()> {
        self.0.lock().unwrap().push(line.to_string());
        Ok(())
    }
}

struct FixedClock;

impl FrameClock for FixedClock {
    fn now(&self) -> FrameStamp {
        FrameStamp {
            time: Local.with_ymd_and_hms(2024, 1, 1, 12, 30, 5).unwrap(),
            frame: 9,
        }
    }
}

fn backtrace_logger(records: &Recorder) -> Logger {
    Logger::builder()
        .sink(records.clone())
        .clock(FixedClock)
        .caller(BacktraceCallerIdentity::new())
        .build()
}

struct Spawner {
    logger: Logger,
}

impl Spawner {
    #[inline(never)]
    fn spawn(&self) {
        self.logger.log("spawned").unwrap();
    }
}

#[allow(dead_code)]
struct Inventory<K, V>(K, V);

#[inline(never)]
fn free_function(logger: &Logger) {
    logger.log_warning("from a function").unwrap();
}

#[test]
fn test_backtrace_resolves_calling_type() {
    let records = Recorder::default();
    let spawner = Spawner {
        logger: backtrace_logger(&records),
    };
    spawner.spawn();

    let lines = records.0.lock().unwrap();
    assert_eq!(
        lines[0],
        "<color=#BDC3C7>[Spawner] [Log] (T: 12:30:05 | F: 9) - spawned</color>"
    );
}

#[test]
fn test_backtrace_free_function_reports_module() {
    let records = Recorder::default();
    free_function(&backtrace_logger(&records));

    let lines = records.0.lock().unwrap();
    assert!(lines[0].starts_with("<color=#FFF9D6>[caller_identity] [Warning]"));
}

#[test]
fn test_generic_type_rendering() {
    let records = Recorder::default();
    let logger = Logger::builder()
        .sink(records.clone())
        .clock(FixedClock)
        .caller(TypeCallerIdentity::<Inventory<u32, Option<String>>>::new())
        .build();
    logger.log_error("full").unwrap();

    let lines = records.0.lock().unwrap();
    assert_eq!(
        lines[0],
        "<color=#F5B7B1>[Inventory<u32,Option<String>>] [Error] (T: 12:30:05 | F: 9) - full</color>"
    );
}
