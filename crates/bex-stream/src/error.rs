use std::io;

/// Errors that can occur while wiring a byte stream through the expander.
///
/// Open/create failures carry the offending path; mid-stream read and
/// write failures propagate the underlying `io::Error` unchanged. All of
/// them are fatal: the run aborts at the point of detection, nothing is
/// retried, and no partial-success mode exists.
///
/// Error hierarchy:
///
/// ```text
///   StreamError
///   ├── OpenInput       ← input path could not be opened for reading
///   ├── CreateOutput    ← output path could not be created for writing
///   ├── TerminalOutput  ← refused to write binary records to a terminal
///   └── Io(io::Error)   ← read/write failure mid-stream
/// ```
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// Input source could not be opened.
    #[error("cannot open {path} for reading")]
    OpenInput {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Output sink could not be created.
    #[error("cannot create {path} for writing")]
    CreateOutput {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Standard output is an interactive terminal. The record stream is
    /// raw binary and would garble the display.
    #[error("refusing to write binary records to a terminal (redirect stdout or give a file path)")]
    TerminalOutput,

    /// I/O error during read or write.
    #[error(transparent)]
    Io(#[from] io::Error),
}
