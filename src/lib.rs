//! framelog library
//!
//! Color-tagged, frame-stamped log lines for game engine debug consoles

pub mod logger;
pub mod output;

// Re-export commonly used types
pub use logger::{
    CallerIdentity, ConsoleSink, FrameClock, FrameCounter, FrameStamp, LogError, LogEvent,
    LogText, Logger, LoggerBuilder, Severity, SinkLevel, SystemClock,
};
pub use output::{MarkupMode, OutputConfig, StdConsoleSink, TracingSink};
