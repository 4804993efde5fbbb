// src/utils/string_encoding.rs
use encoding_rs::WINDOWS_1252;

/// Decode CP1252 (Windows Western) text as written by Peaksight.
///
/// Every byte value has a mapping in the WHATWG windows-1252 table, so this
/// never fails; undefined code points come through as C1 controls.
pub fn decode_cp1252(bytes: &[u8]) -> String {
    let (text, _had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
    text.into_owned()
}

/// Split a NUL-delimited blob into at most `max` fields.
///
/// The last field keeps any further NUL-separated parts, joined with `\n`.
/// Trailing NUL padding is dropped before splitting.
pub fn split_nul_fields(text: &str, max: usize) -> Vec<String> {
    let trimmed = text.trim_end_matches('\0');
    if trimmed.is_empty() || max == 0 {
        return Vec::new();
    }

    let mut fields: Vec<String> = trimmed
        .splitn(max, '\0')
        .map(|s| s.to_string())
        .collect();

    if let Some(last) = fields.last_mut() {
        *last = last.replace('\0', "\n");
    }
    fields
}
