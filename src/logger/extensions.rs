use super::severity::SinkLevel;
use super::sink::ConsoleSink;
use std::io;

pub const PLAIN_SUCCESS_COLOR_HEX: &str = "228E22";

/// Write a bare green success line, without class, severity or timestamp
pub fn plain_success(sink: &dyn ConsoleSink, message: Option<&str>) -> io::Result<()> {
    let line = format!(
        "<color=#{PLAIN_SUCCESS_COLOR_HEX}>{}</color>",
        message.unwrap_or_default()
    );
    sink.write(SinkLevel::Info, &line, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Lines(Mutex<Vec<(SinkLevel, String)>>);

    impl ConsoleSink for Lines {
        fn write(&self, level: SinkLevel, line: &str, _trace: Option<&str>) -> io::Result<()> {
            self.0.lock().unwrap().push((level, line.to_string()));
            Ok(())
        }
    }

    #[test]
    fn test_plain_success() {
        let sink = Lines::default();
        plain_success(&sink, Some("saved")).unwrap();
        plain_success(&sink, None).unwrap();

        let lines = sink.0.lock().unwrap();
        assert_eq!(lines[0], (SinkLevel::Info, "<color=#228E22>saved</color>".to_string()));
        assert_eq!(lines[1].1, "<color=#228E22></color>");
    }
}
