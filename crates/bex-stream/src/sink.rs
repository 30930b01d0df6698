use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};

use crate::STDIO_PATH;
use crate::error::StreamError;

/// Writable byte sink — standard output or a file created in binary mode.
///
/// Counterpart to [`ByteSource`](crate::ByteSource): one `io::Write`
/// implementation over the two concrete handles. Exactly one sink exists
/// per run; dropping it closes the handle on every exit path.
pub enum ByteSink {
    /// The process's standard output stream, locked for the run.
    Stdout(io::StdoutLock<'static>),
    /// A regular file behind a buffered writer.
    File(BufWriter<File>),
}

impl ByteSink {
    /// Create the sink named by `path`.
    ///
    /// The sentinel `-` selects standard output; any other value is
    /// created (truncating an existing file) as a binary file.
    ///
    /// Standard output is refused when it is an interactive terminal:
    /// the record stream is raw binary, and dumping it on a terminal
    /// garbles the display. A redirected or piped stdout passes the
    /// check.
    ///
    /// # Errors
    ///
    /// - [`StreamError::TerminalOutput`] if `-` is requested while
    ///   standard output is a terminal.
    /// - [`StreamError::CreateOutput`] if the file cannot be created.
    pub fn create(path: &str) -> Result<Self, StreamError> {
        if path == STDIO_PATH {
            let stdout = io::stdout();
            if stdout.is_terminal() {
                return Err(StreamError::TerminalOutput);
            }
            return Ok(Self::Stdout(stdout.lock()));
        }

        let file = File::create(path).map_err(|source| StreamError::CreateOutput {
            path: path.to_string(),
            source,
        })?;
        Ok(Self::File(BufWriter::new(file)))
    }

    /// Flush buffered records and consume the sink.
    ///
    /// Dropping the sink also flushes (`BufWriter` flushes on drop), but
    /// drop swallows errors; the success path calls this so that a full
    /// disk still fails the run.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::Io`] if the flush fails.
    pub fn finish(mut self) -> Result<(), StreamError> {
        self.flush()?;
        Ok(())
    }
}

impl Write for ByteSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(handle) => handle.write(buf),
            Self::File(writer) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(handle) => handle.flush(),
            Self::File(writer) => writer.flush(),
        }
    }
}
