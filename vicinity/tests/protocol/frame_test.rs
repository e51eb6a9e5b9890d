#[path = "../common/mod.rs"]
mod common;

use vicinity::protocol::{CommandCode, FrameBuilder};
use vicinity::Uid;

use common::fixtures;

#[test]
fn standard_uid_puts_payload_at_offset_ten() {
    let frame = FrameBuilder::new(CommandCode::ReadSingleBlock, &fixtures::sample_uid())
        .block_index(0x07)
        .build();

    let mut expected = fixtures::addressed_header(0x20);
    expected.push(0x07);
    assert_eq!(frame, expected);
    assert_eq!(frame[10], 0x07);
}

#[test]
fn offsets_track_identifier_length() {
    let uid = Uid::from_wire(vec![0xAA, 0xBB, 0xCC]).unwrap();
    let frame = FrameBuilder::new(CommandCode::ReadSingleBlock, &uid)
        .block_index(0x01)
        .build();

    assert_eq!(frame.len(), 6);
    assert_eq!(&frame[2..5], &[0xAA, 0xBB, 0xCC]);
    assert_eq!(frame[5], 0x01);
}

#[test]
fn appenders_preserve_wire_order() {
    let frame = FrameBuilder::new(CommandCode::WriteMultipleBlocks, &fixtures::sample_uid())
        .block_index(0x02)
        .block_count(0x03)
        .data(&[0x99, 0x88])
        .build();

    assert_eq!(&frame[10..], &[0x02, 0x03, 0x99, 0x88]);
}

#[test]
fn zero_payload_frame_is_header_only() {
    let frame = FrameBuilder::new(CommandCode::LockAfi, &fixtures::sample_uid()).build();
    assert_eq!(frame, fixtures::addressed_header(0x28));
}
