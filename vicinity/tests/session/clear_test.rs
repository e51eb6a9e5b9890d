#[path = "../common/mod.rs"]
mod common;

use vicinity::Error;

use common::{fixtures, helpers};

#[test]
fn clear_zeroes_every_block_in_ascending_order() {
    let responses = vec![vec![0x00]; 4];
    let (mut tag, shared) = helpers::mock_session(3, 3, responses);

    assert!(tag.clear_all_blocks().unwrap());

    let sent = shared.sent();
    assert_eq!(sent.len(), 5);
    for (i, frame) in sent[1..].iter().enumerate() {
        let mut expected = fixtures::addressed_header(0x21);
        expected.push(i as u8);
        expected.extend_from_slice(&[0, 0, 0, 0]);
        assert_eq!(frame, &expected);
    }
}

#[test]
fn clear_wipes_previous_contents() {
    let (mut tag, shared) = helpers::emulated_session(3, 2);
    shared.emulator().load_block(0, &[0xFF, 0xFF]);
    shared.emulator().load_block(2, &[0xAA, 0xBB]);

    assert!(tag.clear_all_blocks().unwrap());
    assert_eq!(shared.emulator().memory(), vec![0u8; 6]);
    assert_eq!(shared.emulator().exchanges, 3);
}

#[test]
fn lenient_clear_reports_success_despite_rejections() {
    let (mut tag, shared) = helpers::emulated_session(3, 2);
    shared.emulator().load_block(1, &[0xFF, 0xFF]);
    shared.emulator().reject_writes_at(1);

    assert!(tag.clear_all_blocks().unwrap());

    // The rejected block kept its contents; the loop still covered all 3.
    assert_eq!(shared.emulator().block(1).unwrap(), &[0xFF, 0xFF]);
    assert_eq!(shared.emulator().exchanges, 3);
}

#[test]
fn strict_clear_names_the_rejected_block() {
    let (mut tag, shared) = helpers::emulated_session(4, 2);
    shared.emulator().reject_writes_at(2);

    let err = tag.clear_all_blocks_strict().unwrap_err();
    assert!(matches!(err, Error::BlockRejected { index: 2, .. }));
    assert_eq!(shared.emulator().exchanges, 3);
}

#[test]
fn strict_clear_passes_on_a_willing_tag() {
    let (mut tag, shared) = helpers::emulated_session(4, 2);
    shared.emulator().load_block(3, &[1, 2]);

    tag.clear_all_blocks_strict().unwrap();
    assert_eq!(shared.emulator().memory(), vec![0u8; 8]);
}

#[test]
fn transport_failure_aborts_the_lenient_loop() {
    // Only two write responses queued: the third write times out.
    let responses = vec![vec![0x00], vec![0x00]];
    let (mut tag, _shared) = helpers::mock_session(3, 3, responses);

    assert!(matches!(tag.clear_all_blocks(), Err(Error::Timeout)));
}
