//! Byte-to-text decoding using chardetng and `encoding_rs`.

use std::borrow::Cow;

use chardetng::EncodingDetector;
use simdutf8::basic::from_utf8;

/// Check if the given bytes are valid UTF-8.
///
/// Uses SIMD-accelerated validation for performance.
pub fn is_utf8(data: &[u8]) -> bool {
    from_utf8(data).is_ok()
}

/// Check if the data starts with a UTF-8 BOM (EF BB BF).
pub fn has_utf8_bom(data: &[u8]) -> bool {
    data.starts_with(&[0xEF, 0xBB, 0xBF])
}

/// Skip the UTF-8 BOM if present and return the remaining data.
pub fn skip_bom(data: &[u8]) -> &[u8] {
    if has_utf8_bom(data) { &data[3..] } else { data }
}

/// Decode raw bytes into UTF-8 text.
///
/// A UTF-8 BOM is dropped. UTF-16 input is recognised by its BOM; anything
/// else that is not valid UTF-8 is run through chardetng and transcoded with
/// the guessed encoding (Windows-1252, Windows-1251, GBK, Shift_JIS, ...).
/// Valid UTF-8 is borrowed without copying.
pub fn decode_text(data: &[u8]) -> Cow<'_, str> {
    if data.starts_with(&[0xFF, 0xFE]) {
        tracing::trace!("decoding UTF-16LE input");
        let (decoded, _, _) = encoding_rs::UTF_16LE.decode(data);
        return Cow::Owned(decoded.into_owned());
    }
    if data.starts_with(&[0xFE, 0xFF]) {
        tracing::trace!("decoding UTF-16BE input");
        let (decoded, _, _) = encoding_rs::UTF_16BE.decode(data);
        return Cow::Owned(decoded.into_owned());
    }

    let data = skip_bom(data);
    if let Ok(text) = from_utf8(data) {
        return Cow::Borrowed(text);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(data, true);
    let encoding = detector.guess(None, true);
    tracing::trace!(encoding = encoding.name(), "transcoding input to UTF-8");

    // Lossy: invalid sequences become U+FFFD rather than failing the load.
    let (decoded, _, _) = encoding.decode(data);
    Cow::Owned(decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_utf8() {
        assert!(is_utf8(b"Name,Age"));
        assert!(is_utf8("こんにちは".as_bytes()));
        assert!(is_utf8(b""));
        assert!(!is_utf8(&[0x80, 0x81, 0x82]));
    }

    #[test]
    fn test_utf8_bom() {
        let with_bom = [0xEF, 0xBB, 0xBF, b'a', b'b', b'c'];

        assert!(has_utf8_bom(&with_bom));
        assert!(!has_utf8_bom(b"abc"));
        assert_eq!(skip_bom(&with_bom), b"abc");
        assert_eq!(skip_bom(b"abc"), b"abc");
    }

    #[test]
    fn test_decode_utf8_is_borrowed() {
        let text = decode_text(b"Name,Age\nRich,40\n");
        assert!(matches!(text, Cow::Borrowed(_)));
        assert_eq!(text, "Name,Age\nRich,40\n");
    }

    #[test]
    fn test_decode_strips_bom() {
        let data = [0xEF, 0xBB, 0xBF, b'N', b'a', b'm', b'e'];
        assert_eq!(decode_text(&data), "Name");
    }

    #[test]
    fn test_decode_utf16_le() {
        // "Hi" with BOM
        let data: &[u8] = &[0xFF, 0xFE, b'H', 0x00, b'i', 0x00];
        assert_eq!(decode_text(data), "Hi");
    }

    #[test]
    fn test_decode_utf16_be() {
        let data: &[u8] = &[0xFE, 0xFF, 0x00, b'H', 0x00, b'i'];
        assert_eq!(decode_text(data), "Hi");
    }

    #[test]
    fn test_decode_windows1251() {
        // "Привет" in Windows-1251
        let data: &[u8] = &[0xCF, 0xF0, 0xE8, 0xE2, 0xE5, 0xF2];
        let text = decode_text(data);
        assert!(matches!(text, Cow::Owned(_)));
        assert!(is_utf8(text.as_bytes()));
    }
}
