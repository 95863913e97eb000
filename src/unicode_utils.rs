//! Unicode utilities for PDF text rendering
//!
//! The brief uses the standard Helvetica faces with WinAnsiEncoding, so every
//! string drawn into a content stream is first mapped from Unicode to
//! single-byte WinAnsi codes.

/// Byte used for characters WinAnsi cannot represent.
pub const REPLACEMENT: u8 = b'?';

/// Map a single character to its WinAnsiEncoding byte, if it has one.
///
/// WinAnsi agrees with Latin-1 everywhere except 0x80..=0x9F, where it places
/// typographic punctuation instead of C1 control codes.
pub fn winansi_byte(ch: char) -> Option<u8> {
    let code = ch as u32;
    if code <= 0x7F || (0xA0..=0xFF).contains(&code) {
        return Some(code as u8);
    }

    let byte = match ch {
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => return None,
    };
    Some(byte)
}

/// Convert Unicode string to WinAnsiEncoding bytes for PDF text rendering.
///
/// Characters not in WinAnsiEncoding are replaced with '?'.
pub fn unicode_to_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| winansi_byte(ch).unwrap_or(REPLACEMENT))
        .collect()
}

/// Number of characters in `text` that will be replaced when encoded.
pub fn count_unencodable(text: &str) -> usize {
    text.chars().filter(|&ch| winansi_byte(ch).is_none()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii() {
        let text = "Hello World";
        assert_eq!(unicode_to_winansi(text), text.as_bytes());
    }

    #[test]
    fn test_latin1_passes_through() {
        assert_eq!(unicode_to_winansi("café"), vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(unicode_to_winansi("Zürich"), vec![b'Z', 0xFC, b'r', b'i', b'c', b'h']);
    }

    #[test]
    fn test_typographic_punctuation() {
        assert_eq!(unicode_to_winansi("•"), vec![0x95]);
        assert_eq!(unicode_to_winansi("a–b—c"), vec![b'a', 0x96, b'b', 0x97, b'c']);
        assert_eq!(unicode_to_winansi("\u{201C}x\u{201D}"), vec![0x93, b'x', 0x94]);
    }

    #[test]
    fn test_unencodable_replaced() {
        assert_eq!(unicode_to_winansi("ł→"), vec![REPLACEMENT, REPLACEMENT]);
        assert_eq!(count_unencodable("Łódź → 東京"), 5);
        assert_eq!(count_unencodable("plain"), 0);
    }
}
