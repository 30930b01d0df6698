#![warn(clippy::pedantic)]

pub mod error;
pub mod pump;
pub mod sink;
pub mod source;

pub use error::StreamError;
pub use pump::expand_stream;
pub use sink::ByteSink;
pub use source::ByteSource;

/// Path argument that selects a standard stream instead of a file.
pub const STDIO_PATH: &str = "-";
