/// Byte expander command-line tool — stream raw bytes in, fixed 3-byte
/// records out.
///
/// ```text
/// bex <INPUT> <OUTPUT>
///
/// Arguments:
///   <INPUT>    File to read, or `-` for standard input
///   <OUTPUT>   File to write, or `-` for standard output
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                       |
/// |------|-----------------------------------------------|
/// | 0    | Success                                       |
/// | 1    | I/O failure or terminal-output safety refusal |
/// | 2    | Usage error (wrong argument count)            |
///
/// On success the tool prints nothing — standard output may be the data
/// sink. All error details go to stderr.
use std::process;

use anyhow::{Context, Result};
use bex_stream::{ByteSink, ByteSource, expand_stream};
use clap::Parser;

/// Expand each input byte into a fixed 3-byte record.
///
/// Every input byte `b` becomes three output bytes: `b` itself, the low
/// nibble of `b` shifted into the high nibble position, and a saturation
/// flag (0xFF for any nonzero `b`). The output stream is headerless and
/// always exactly 3x the input length.
#[derive(Parser)]
#[command(name = "bex", version, about = "Expand a byte stream into 3-byte records")]
struct Cli {
    /// Input file path, or `-` to read standard input.
    input: String,

    /// Output file path, or `-` to write standard output (refused when
    /// standard output is an interactive terminal).
    output: String,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Open both ends, pump the stream, flush.
///
/// The input is opened before the output is created, so a bad input path
/// never leaves behind an empty or truncated output file. Both handles
/// are owned here and dropped (closed) on every exit path; the success
/// path flushes explicitly so buffered-write failures still surface.
fn run(cli: &Cli) -> Result<()> {
    let source = ByteSource::open(&cli.input)?;
    let mut sink = ByteSink::create(&cli.output)?;

    expand_stream(source, &mut sink)
        .with_context(|| format!("expanding {} into {}", cli.input, cli.output))?;

    sink.finish().context("flushing output")?;
    Ok(())
}
