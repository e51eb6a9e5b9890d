#[path = "../common/mod.rs"]
mod common;

use vicinity::transport::{EmulatedVicinityTag, Transceiver};
use vicinity::Error;

use common::fixtures;

fn tag() -> EmulatedVicinityTag {
    EmulatedVicinityTag::new(&fixtures::sample_uid_bytes(), 4, 4)
}

#[test]
fn answers_only_its_own_identifier() {
    let mut emu = tag();

    let mut foreign = fixtures::addressed_header(0x2B);
    foreign[5] ^= 0x01;
    assert!(matches!(emu.transceive(&foreign), Err(Error::Timeout)));

    let ours = fixtures::addressed_header(0x2B);
    assert!(emu.transceive(&ours).is_ok());
}

#[test]
fn short_or_unaddressed_frames_get_silence() {
    let mut emu = tag();

    assert!(matches!(emu.transceive(&[0x22, 0x2B]), Err(Error::Timeout)));

    // Non-addressed mode flag.
    let mut frame = fixtures::addressed_header(0x2B);
    frame[0] = 0x02;
    assert!(matches!(emu.transceive(&frame), Err(Error::Timeout)));
}

#[test]
fn unknown_command_gets_an_error_response() {
    let mut emu = tag();
    let frame = fixtures::addressed_header(0x3F);

    let resp = emu.transceive(&frame).unwrap();
    assert_eq!(resp[0], 0x01);
}

#[test]
fn geometry_response_matches_construction() {
    let mut emu = EmulatedVicinityTag::new(&fixtures::sample_uid_bytes(), 28, 4);

    let resp = emu.transceive(&fixtures::addressed_header(0x2B)).unwrap();
    assert_eq!(resp[0], 0x00);
    assert_eq!(resp[12], 27);
    assert_eq!(resp[13], 3);
}

#[test]
fn write_read_cycle_through_raw_frames() {
    let mut emu = tag();

    let mut write = fixtures::addressed_header(0x21);
    write.extend_from_slice(&[1, 0xCA, 0xFE, 0x00, 0x01]);
    assert_eq!(emu.transceive(&write).unwrap(), vec![0x00]);

    let mut read = fixtures::addressed_header(0x20);
    read.push(1);
    assert_eq!(
        emu.transceive(&read).unwrap(),
        vec![0x00, 0xCA, 0xFE, 0x00, 0x01]
    );
}

#[test]
fn wrong_sized_write_is_rejected_not_stored() {
    let mut emu = tag();

    let mut write = fixtures::addressed_header(0x21);
    write.extend_from_slice(&[1, 0xCA]);
    assert_eq!(emu.transceive(&write).unwrap()[0], 0x01);
    assert_eq!(emu.block(1).unwrap(), &[0, 0, 0, 0]);
}

#[test]
fn exchange_counter_tracks_answered_frames() {
    let mut emu = tag();

    let _ = emu.transceive(&fixtures::addressed_header(0x2B));
    let mut foreign = fixtures::addressed_header(0x2B);
    foreign[5] ^= 0x01;
    let _ = emu.transceive(&foreign);

    assert_eq!(emu.exchanges, 1);
}
