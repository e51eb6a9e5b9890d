#[path = "../common/mod.rs"]
mod common;

use vicinity::protocol::responses::{batch_read_window, decode_system_info, single_block_data};
use vicinity::Error;

use common::fixtures;

#[test]
fn system_info_fields_at_uid_relative_offsets() {
    let response = fixtures::system_info_response(0x01, 0xC4, 0x1B, 0x03);
    let info = decode_system_info(&response, 8).unwrap();

    assert_eq!(info.uid_echo, fixtures::sample_uid_bytes());
    assert_eq!(info.dsfid, 0x01);
    assert_eq!(info.afi, 0xC4);
    assert_eq!(info.block_count_raw, 0x1B);
    assert_eq!(info.block_size_raw, 0x03);
}

#[test]
fn system_info_requires_six_bytes_past_the_uid() {
    let mut response = fixtures::system_info_response(0x01, 0xC4, 0x1B, 0x03);
    response.pop();

    let err = decode_system_info(&response, 8).unwrap_err();
    assert!(matches!(
        err,
        Error::ResponseTooShort {
            expected: 14,
            actual: 13
        }
    ));
}

#[test]
fn single_block_payload_follows_status() {
    let response = fixtures::ok_response(&[0x11, 0x22, 0x33, 0x44]);
    assert_eq!(
        single_block_data(&response).unwrap(),
        Some(vec![0x11, 0x22, 0x33, 0x44])
    );
}

#[test]
fn single_block_tag_error_is_no_data() {
    let response = fixtures::error_response(0x10);
    assert_eq!(single_block_data(&response).unwrap(), None);
}

#[test]
fn batch_window_is_size_times_count_from_offset_zero() {
    // 3 blocks of 2: the window keeps the status byte and drops the
    // final data byte.
    let response = fixtures::ok_response(&[1, 2, 3, 4, 5, 6]);
    let window = batch_read_window(&response, 2, 3).unwrap().unwrap();

    assert_eq!(window, vec![0x00, 1, 2, 3, 4, 5]);
}

#[test]
fn batch_window_degrades_to_none() {
    // Tag error status.
    assert_eq!(
        batch_read_window(&fixtures::error_response(0x0F), 2, 3).unwrap(),
        None
    );
    // Response shorter than the window.
    assert_eq!(
        batch_read_window(&fixtures::ok_response(&[1, 2]), 2, 3).unwrap(),
        None
    );
}

#[test]
fn empty_response_is_a_protocol_error() {
    assert!(matches!(
        single_block_data(&[]),
        Err(Error::ResponseTooShort { .. })
    ));
    assert!(matches!(
        batch_read_window(&[], 2, 3),
        Err(Error::ResponseTooShort { .. })
    ));
}
