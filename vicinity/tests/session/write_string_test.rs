#[path = "../common/mod.rs"]
mod common;

use vicinity::Error;

use common::{fixtures, helpers};

#[test]
fn empty_text_succeeds_without_touching_the_tag() {
    let (mut tag, shared) = helpers::mock_session(3, 3, vec![]);

    assert!(tag.write_string("").unwrap());
    assert!(tag.write_string_batch("").unwrap());
    tag.write_string_strict("").unwrap();

    // Only the initialization frame ever went out.
    assert_eq!(shared.sent().len(), 1);
}

#[test]
fn clear_then_ascending_data_writes() {
    // 4 blocks of 4: clearing takes 4 writes, "AB" one more.
    let responses = vec![vec![0x00]; 5];
    let (mut tag, shared) = helpers::mock_session(3, 3, responses);

    assert!(tag.write_string("AB").unwrap());

    let sent = shared.sent();
    assert_eq!(sent.len(), 6);

    // Frames 1..=4 zero blocks 0..=3 in order.
    for (i, frame) in sent[1..5].iter().enumerate() {
        let mut expected = fixtures::addressed_header(0x21);
        expected.push(i as u8);
        expected.extend_from_slice(&[0, 0, 0, 0]);
        assert_eq!(frame, &expected);
    }

    // Frame 5 writes the zero-padded text into block 0.
    let mut expected = fixtures::addressed_header(0x21);
    expected.extend_from_slice(&[0x00, b'A', b'B', 0, 0]);
    assert_eq!(sent[5], expected);
}

#[test]
fn oversized_text_is_clamped_to_capacity() {
    let (mut tag, shared) = helpers::emulated_session(2, 4);

    assert!(tag.write_string("ABCDEFGHIJKL").unwrap());
    assert_eq!(shared.emulator().memory(), b"ABCDEFGH");
    // 2 clears + 2 data writes, nothing for the truncated tail.
    assert_eq!(shared.emulator().exchanges, 4);
}

#[test]
fn lenient_write_skips_rejected_blocks() {
    let (mut tag, shared) = helpers::emulated_session(3, 4);
    shared.emulator().reject_writes_at(1);

    assert!(tag.write_string("AAAABBBBCCCC").unwrap());

    assert_eq!(shared.emulator().block(0).unwrap(), b"AAAA");
    assert_eq!(shared.emulator().block(1).unwrap(), b"\0\0\0\0");
    assert_eq!(shared.emulator().block(2).unwrap(), b"CCCC");
}

#[test]
fn strict_write_stops_at_the_first_rejection() {
    let (mut tag, shared) = helpers::emulated_session(3, 4);
    shared.emulator().reject_writes_at(1);

    let err = tag.write_string_strict("AAAABBBBCCCC").unwrap_err();
    assert!(matches!(err, Error::BlockRejected { index: 1, .. }));

    // The strict clear already died at block 1: block 2 was never reached.
    assert_eq!(shared.emulator().exchanges, 2);
}

#[test]
fn strict_write_passes_on_a_clean_tag() {
    let (mut tag, shared) = helpers::emulated_session(3, 4);

    tag.write_string_strict("AAAABBBB").unwrap();
    assert_eq!(shared.emulator().block(0).unwrap(), b"AAAA");
    assert_eq!(shared.emulator().block(1).unwrap(), b"BBBB");
}

#[test]
fn batch_write_is_one_exchange_both_ways() {
    let (mut tag, shared) = helpers::emulated_session(2, 4);

    // Default tag behavior: not supported.
    assert!(!tag.write_string_batch("ABCD").unwrap());
    assert_eq!(shared.emulator().exchanges, 1);

    shared.emulator().allow_batch_writes(true);
    assert!(tag.write_string_batch("ABCDEFG").unwrap());
    assert_eq!(shared.emulator().exchanges, 2);
    assert_eq!(shared.emulator().memory(), b"ABCDEFG\0");
}

#[test]
fn wrong_length_block_write_never_reaches_the_tag() {
    let (mut tag, shared) = helpers::mock_session(3, 3, vec![]);

    let err = tag.write_block(0, &[1, 2, 3, 4, 5]).unwrap_err();
    assert!(matches!(
        err,
        Error::BlockLength {
            expected: 4,
            actual: 5
        }
    ));
    assert_eq!(shared.sent().len(), 1);
}
