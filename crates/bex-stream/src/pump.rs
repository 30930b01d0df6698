use std::io::{ErrorKind, Read, Write};

use bex_wire::{RECORD_SIZE, Record};

use crate::error::StreamError;

/// Bytes requested from the source per read call.
const CHUNK_SIZE: usize = 64 * 1024;

/// Drive `reader` to exhaustion, expanding every byte into its 3-byte
/// record and writing the records to `writer` in input order.
///
/// Record `i` of the output corresponds to input byte `i`; no byte is
/// reordered, skipped, or held back across iterations. The output is
/// always exactly three times as long as the input — an empty input
/// produces an empty output. Returns the number of input bytes consumed.
///
/// The caller owns flushing: the pump writes, it does not flush, so a
/// `BufWriter`-backed sink decides when bytes hit the OS.
///
/// # Errors
///
/// Returns [`StreamError::Io`] on any read or write failure. The run is
/// not resumable; whatever was written before the failure is unspecified.
pub fn expand_stream<R: Read, W: Write>(
    mut reader: R,
    mut writer: W,
) -> Result<u64, StreamError> {
    let mut input = [0u8; CHUNK_SIZE];
    // Expansion buffer, reused across chunks to avoid repeated allocations.
    let mut output: Vec<u8> = Vec::with_capacity(CHUNK_SIZE * RECORD_SIZE);
    let mut consumed: u64 = 0;

    loop {
        let n = match reader.read(&mut input) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(StreamError::Io(e)),
        };

        output.clear();
        for &byte in &input[..n] {
            output.extend_from_slice(Record::expand(byte).as_bytes());
        }
        writer.write_all(&output)?;
        consumed += n as u64;
    }

    Ok(consumed)
}
