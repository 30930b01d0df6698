use std::fs::File;
use std::io::{self, BufReader, Read};

use crate::STDIO_PATH;
use crate::error::StreamError;

/// Readable byte source — standard input or a file opened in binary mode.
///
/// The two concrete handles sit behind one `io::Read` implementation so
/// the pump never branches on where its bytes come from. Exactly one
/// source exists per run; it is owned by the single thread of execution
/// and closed when dropped, on every exit path.
pub enum ByteSource {
    /// The process's standard input stream, locked for the run.
    Stdin(io::StdinLock<'static>),
    /// A regular file behind a buffered reader.
    File(BufReader<File>),
}

impl ByteSource {
    /// Open the source named by `path`.
    ///
    /// The sentinel `-` selects standard input; any other value is opened
    /// as a file. Files are read as raw bytes — there is no text-mode
    /// translation to suppress.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::OpenInput`] if the file cannot be opened.
    pub fn open(path: &str) -> Result<Self, StreamError> {
        if path == STDIO_PATH {
            return Ok(Self::Stdin(io::stdin().lock()));
        }

        let file = File::open(path).map_err(|source| StreamError::OpenInput {
            path: path.to_string(),
            source,
        })?;
        Ok(Self::File(BufReader::new(file)))
    }
}

impl Read for ByteSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Stdin(handle) => handle.read(buf),
            Self::File(reader) => reader.read(buf),
        }
    }
}
