//! Hexadecimal helpers used for identity rendering and debug output.
//!
//! The uppercase compact form is the crate's outward identity rendering:
//! UID, AFI and DSFID values print as uppercase, two digits per byte, no
//! separators. The spaced form only appears in trace logs.

/// Convert a byte slice to an uppercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"DEAD"`
pub fn bytes_to_hex_upper(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        use std::fmt::Write;
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}

/// Convert a byte slice to a lowercase hex string with a single space
/// between each byte, for frame dumps.
///
/// Example: `&[0xde, 0xad]` -> `"de ad"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        use std::fmt::Write;
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}
