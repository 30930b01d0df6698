//! End-to-end pipeline tests: file in, record stream out.
//!
//! These tests drive the same path the `bex` binary takes — open a
//! [`ByteSource`], create a [`ByteSink`], pump with [`expand_stream`],
//! flush — against real files, and check the properties the tool
//! guarantees:
//!
//! - output length is exactly 3x input length, record `i` matching input
//!   byte `i`, in order;
//! - an empty input file produces an empty output file;
//! - an unreadable input path fails before the output file is created.

use std::fs;
use std::path::PathBuf;

use bex_stream::{ByteSink, ByteSource, StreamError, expand_stream};
use bex_tests::patterned_bytes;
use bex_wire::{RECORD_SIZE, Record};

/// Per-test scratch directory under the system temp dir, removed on drop.
struct Scratch {
    dir: PathBuf,
}

impl Scratch {
    fn new(test_name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("bex-{}-{}", test_name, std::process::id()));
        fs::create_dir_all(&dir).expect("create scratch dir");
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

/// Run the full file pipeline: write `input` to disk, expand it through
/// source/sink handles, read the output file back.
fn expand_file(scratch: &Scratch, input: &[u8]) -> Vec<u8> {
    let input_path = scratch.path("input.bin");
    let output_path = scratch.path("output.bex");
    fs::write(&input_path, input).expect("write input fixture");

    let source = ByteSource::open(input_path.to_str().unwrap()).expect("open input");
    let mut sink = ByteSink::create(output_path.to_str().unwrap()).expect("create output");

    let consumed = expand_stream(source, &mut sink).expect("pump");
    assert_eq!(consumed, input.len() as u64);
    sink.finish().expect("flush output");

    fs::read(&output_path).expect("read output back")
}

// ── Expansion properties ──────────────────────────────────────────────────────

#[test]
fn file_pipeline_expands_known_bytes() {
    let scratch = Scratch::new("known-bytes");
    let out = expand_file(&scratch, &[0x00, 0x01, 0x0A, 0xFF]);

    assert_eq!(
        out,
        [
            0x00, 0x00, 0x00, //
            0x01, 0x10, 0xFF, //
            0x0A, 0xA0, 0xFF, //
            0xFF, 0xF0, 0xFF, //
        ]
    );
}

#[test]
fn file_pipeline_preserves_order_and_length() {
    let scratch = Scratch::new("order-length");
    let input = patterned_bytes(4096);
    let out = expand_file(&scratch, &input);

    assert_eq!(out.len(), input.len() * RECORD_SIZE);
    for (i, &byte) in input.iter().enumerate() {
        let frame = &out[i * RECORD_SIZE..(i + 1) * RECORD_SIZE];
        let record = Record::read_from(frame).expect("frame parses");
        assert_eq!(record, Record::expand(byte), "record {i} mismatched");
    }
}

#[test]
fn empty_file_expands_to_empty_file() {
    let scratch = Scratch::new("empty");
    let out = expand_file(&scratch, &[]);
    assert!(out.is_empty());
}

// ── Failure ordering ──────────────────────────────────────────────────────────

#[test]
fn unreadable_input_fails_before_output_exists() {
    let scratch = Scratch::new("bad-input");
    let missing = scratch.path("does-not-exist.bin");
    let output_path = scratch.path("never-created.bex");

    // Open order matters: the input is opened first, so the output file
    // must not be created (or truncated) when the input is unreadable.
    let result = ByteSource::open(missing.to_str().unwrap());
    assert!(matches!(result, Err(StreamError::OpenInput { .. })));
    assert!(
        !output_path.exists(),
        "output must not exist after an input open failure"
    );
}

#[test]
fn output_file_is_truncated_on_create() {
    let scratch = Scratch::new("truncate");
    let output_path = scratch.path("stale.bex");
    fs::write(&output_path, b"stale bytes from an earlier run").unwrap();

    let mut sink = ByteSink::create(output_path.to_str().unwrap()).expect("create output");
    let consumed = expand_stream(std::io::Cursor::new(&[0x01u8][..]), &mut sink).expect("pump");
    sink.finish().expect("flush");

    // One record, nothing left of the stale content.
    assert_eq!(consumed, 1);
    assert_eq!(
        fs::read(&output_path).unwrap(),
        Record::expand(0x01).as_bytes()
    );
}
