use crate::*;

use pretty_assertions::{assert_eq};
use proptest::prelude::*;
use rstest::*;

use std::io;
use std::io::{Read, Write};

fn rope(text: &str) -> SharedRope<u8> {
    SharedRope::from(text)
}

fn reader_test_ropes() -> Vec<(SharedRope<u8>, &'static str)> {
    vec![
        (rope("abc"), "abc"),
        (rope("abc").concat(&rope("def")), "abcdef"),
        (rope("abc").concat(&rope("123")).concat(&rope("def")), "abc123def"),
        (rope("abc").concat(&rope("123").concat(&rope("def"))), "abc123def"),
        (rope("abc123def").slice(2, 7).concat(&rope("xyz")), "c123dxyz"),
    ]
}

///
/// Reads a rope to the end with a particular buffer size, returning the cells and the number of 'finished' results
///
fn read_to_end<Cell: Clone+Default>(reader: &mut RopeReader<Cell>, buf_size: usize) -> (Vec<Cell>, usize) {
    let mut buf         = vec![Cell::default(); buf_size];
    let mut result      = vec![];
    let mut finished    = 0;

    loop {
        match reader.read(&mut buf) {
            ReadResult::Cells(count) => {
                assert!(count > 0, "Zero-length read");
                assert!(count <= buf_size);
                result.extend_from_slice(&buf[0..count]);
            }

            ReadResult::Finished => {
                finished += 1;
                break;
            }
        }
    }

    (result, finished)
}

#[test]
fn copy_reader_to_vec() {
    for (rope, expected) in reader_test_ropes() {
        let mut out: Vec<u8> = vec![];

        io::copy(&mut rope.reader(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}

#[rstest]
fn short_reads(#[values(1, 2, 3, 4, 7, 64)] buf_size: usize) {
    for (rope, expected) in reader_test_ropes() {
        let mut reader          = rope.reader();
        let (result, finished)  = read_to_end(&mut reader, buf_size);

        assert_eq!(String::from_utf8(result).unwrap(), expected);
        assert_eq!(finished, 1);
        assert!(reader.is_finished());

        // Stays finished
        assert_eq!(reader.read(&mut [0; 4]), ReadResult::Finished);
    }
}

#[test]
fn read_stops_at_leaf_boundaries() {
    let rope        = rope("abc").concat(&rope("def"));
    let mut reader  = rope.reader();
    let mut buf     = [0; 8];

    assert_eq!(reader.read(&mut buf), ReadResult::Cells(3));
    assert_eq!(&buf[0..3], b"abc");
    assert!(!reader.is_finished());

    assert_eq!(reader.read(&mut buf), ReadResult::Cells(3));
    assert_eq!(&buf[0..3], b"def");
    assert!(reader.is_finished());

    assert_eq!(reader.read(&mut buf), ReadResult::Finished);
}

#[test]
fn empty_buffer_reads_nothing() {
    let rope        = rope("abc");
    let mut reader  = rope.reader();

    assert_eq!(reader.read(&mut []), ReadResult::Cells(0));
    assert_eq!(reader.collect::<Vec<_>>(), b"abc".to_vec());
}

#[test]
fn empty_rope_finishes_immediately() {
    let mut reader = SharedRope::<u8>::new().reader();

    assert!(reader.is_finished());
    assert_eq!(reader.read(&mut [0; 4]), ReadResult::Finished);
    assert_eq!(reader.next(), None);
}

#[test]
fn reader_iterates_cells() {
    let rope = SharedRope::from_vec(vec!['a', 'b']).concat(&SharedRope::from_vec(vec!['c']));

    assert_eq!(rope.reader().collect::<String>(), "abc");
}

#[test]
fn reader_outlives_rope() {
    let mut reader = {
        let rope = rope("hello, ").concat(&rope("world"));
        rope.reader()
    };

    let mut text = String::new();
    reader.read_to_string(&mut text).unwrap();

    assert_eq!(text, "hello, world");
}

#[test]
fn read_very_deep_rope() {
    let mut deep_left   = SharedRope::new();
    let mut deep_right  = SharedRope::new();

    for idx in 0..1000u32 {
        deep_left   = deep_left.concat(&SharedRope::from_vec(vec![idx]));
        deep_right  = SharedRope::from_vec(vec![999 - idx]).concat(&deep_right);
    }

    let expected = (0..1000u32).collect::<Vec<_>>();

    assert_eq!(deep_left.depth(), 999);
    assert_eq!(deep_right.depth(), 999);
    assert_eq!(read_to_end(&mut deep_left.reader(), 10).0, expected);
    assert_eq!(read_to_end(&mut deep_right.reader(), 10).0, expected);
}

#[test]
fn concurrent_readers() {
    let rope        = (0..256).map(|idx| SharedRope::from_vec(vec![idx as u8; 3])).collect::<SharedRope<u8>>();
    let expected    = rope.to_vec();

    std::thread::scope(|scope| {
        for buf_size in 1..=4 {
            let rope        = &rope;
            let expected    = &expected;

            scope.spawn(move || {
                let (result, finished) = read_to_end(&mut rope.reader(), buf_size);

                assert_eq!(&result, expected);
                assert_eq!(finished, 1);
            });
        }
    });
}

#[test]
fn write_to_io() {
    let rope    = rope("abc").concat(&rope("123")).concat(&rope("def"));
    let mut out = Vec::<u8>::new();

    let written = rope.write_to_io(&mut out).unwrap();

    assert_eq!(written, 9);
    assert_eq!(out, b"abc123def".to_vec());
}

#[test]
fn io_sink_counts_bytes() {
    let mut sink = IoSink::new(Vec::<u8>::new());

    rope("abc").write_to(&mut sink).unwrap();
    rope("de").concat(&rope("f")).write_to(&mut sink).unwrap();

    assert_eq!(sink.written(), 6);
    assert_eq!(sink.into_inner(), b"abcdef".to_vec());
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_to_io_reports_errors() {
    let result = rope("abc").write_to_io(&mut FailingWriter);

    assert_eq!(result.map_err(|err| err.kind()), Err(io::ErrorKind::BrokenPipe));
}

proptest! {
    #[test]
    fn reader_reproduces_content(pieces in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..6), 0..32), buf_size in 1usize..16, rebalance in any::<bool>()) {
        let mut rope = pieces.iter().fold(SharedRope::new(), |rope, piece| rope.concat(&SharedRope::from_vec(piece.clone())));
        if rebalance {
            rope = rope.rebalance();
        }

        let (result, finished) = read_to_end(&mut rope.reader(), buf_size);

        prop_assert_eq!(result, pieces.concat());
        prop_assert_eq!(finished, 1);
    }
}
