//! Logging setup: every record goes to the log file, verbose mode mirrors
//! it to stdout.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Writer duplicating output to a log file and optionally stdout.
pub struct LogSink {
    file: File,
    mirror_stdout: bool,
}

impl LogSink {
    /// Opens `path` for appending, creating it if needed.
    pub fn open<P: AsRef<Path>>(path: P, mirror_stdout: bool) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file, mirror_stdout })
    }
}

impl Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write_all(buf)?;
        if self.mirror_stdout {
            io::stdout().write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()?;
        if self.mirror_stdout {
            io::stdout().flush()?;
        }
        Ok(())
    }
}

pub fn init_logger<P: AsRef<Path>>(verbose: bool, log_file: P) -> io::Result<()> {
    let sink = LogSink::open(log_file, verbose)?;
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .target(env_logger::Target::Pipe(Box::new(sink)))
        .write_style(env_logger::WriteStyle::Never)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_sink_appends() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".logs");

        let mut sink = LogSink::open(&path, false).unwrap();
        sink.write_all(b"first\n").unwrap();
        drop(sink);

        let mut sink = LogSink::open(&path, false).unwrap();
        sink.write_all(b"second\n").unwrap();
        sink.flush().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }
}
