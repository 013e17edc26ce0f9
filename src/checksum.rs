//! # Checksum
//!
//! The NMEA 0183 checksum is the XOR of every byte between the `$` start
//! marker and the `*` delimiter, rendered as two uppercase hexadecimal digits.

/// Calculates the NMEA 0183 checksum for the given sentence content.
///
/// The content is the sentence type identifier followed by the data payload,
/// without the leading `$` and without the `*HH` suffix.
///
/// # Examples
///
/// ```rust
/// use nmea0183_sentence::checksum;
///
/// assert_eq!(checksum("CCGPQ,GGA"), 0x2B);
/// assert_eq!(checksum(""), 0);
/// ```
pub fn checksum(content: &str) -> u8 {
    content
        .as_bytes()
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}

/// Formats a checksum value as a two-digit uppercase hexadecimal string.
///
/// # Examples
///
/// ```rust
/// use nmea0183_sentence::format_checksum;
///
/// assert_eq!(format_checksum(0x41), "41");
/// assert_eq!(format_checksum(0x0A), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}
