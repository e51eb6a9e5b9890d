// fixtures.rs — commonly used identifiers, frames and responses

use vicinity::constants::UID_LEN;
use vicinity::Uid;

pub fn sample_uid_bytes() -> [u8; UID_LEN] {
    [0xE0, 0x04, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06]
}

pub fn sample_uid() -> Uid {
    Uid::from_wire(sample_uid_bytes().to_vec()).unwrap()
}

/// Addressed frame header for `code`: flags, code, then the sample UID.
pub fn addressed_header(code: u8) -> Vec<u8> {
    let mut f = vec![0x22, code];
    f.extend_from_slice(&sample_uid_bytes());
    f
}

/// Well-formed system-information response for the sample UID.
pub fn system_info_response(dsfid: u8, afi: u8, count_raw: u8, size_raw: u8) -> Vec<u8> {
    let mut r = vec![0x00, 0x07];
    r.extend_from_slice(&sample_uid_bytes());
    r.extend_from_slice(&[dsfid, afi, count_raw, size_raw]);
    r
}

/// Success response carrying `payload` after the status byte.
pub fn ok_response(payload: &[u8]) -> Vec<u8> {
    let mut r = vec![0x00];
    r.extend_from_slice(payload);
    r
}

/// Tag error response: error flag plus the ISO error code.
pub fn error_response(code: u8) -> Vec<u8> {
    vec![0x01, code]
}
