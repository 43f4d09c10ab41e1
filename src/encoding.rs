//! Character encoding detection and transcoding.
//!
//! Text dumps produced by PDF and OCR tooling are usually UTF-8, but older
//! pipelines emit UTF-16 with a byte order mark or Windows-1252. This module
//! picks an encoding and converts to UTF-8.

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

/// Detect the character encoding of a text dump.
///
/// Checks, in order:
/// 1. A byte order mark (UTF-8, UTF-16LE, UTF-16BE)
/// 2. Valid UTF-8
/// 3. Falls back to Windows-1252
#[must_use]
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    if std::str::from_utf8(bytes).is_ok() {
        UTF_8
    } else {
        WINDOWS_1252
    }
}

/// Transcode a text dump to a UTF-8 string.
///
/// Invalid sequences are replaced with U+FFFD rather than causing errors.
///
/// # Examples
///
/// ```rust
/// use digest_extract::encoding::transcode_to_utf8;
///
/// assert_eq!(transcode_to_utf8(b"Caf\xE9"), "Café");
/// ```
#[must_use]
pub fn transcode_to_utf8(bytes: &[u8]) -> String {
    let (text, _, _) = detect_encoding(bytes).decode(bytes);
    text.into_owned()
}
