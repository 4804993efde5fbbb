// src/primitives/strings.rs
use crate::error::Result;
use crate::raw_data::ByteCursor;

/// Read a length-prefixed ("C#") string: `u32` byte count followed by that
/// many CP1252 bytes, no terminator.
pub fn read_csharp_string(cursor: &mut ByteCursor) -> Result<String> {
    let length = cursor.read_u32()? as usize;
    if length == 0 {
        return Ok(String::new());
    }
    cursor.read_cp1252_string(length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SxfError;

    #[test]
    fn test_read_csharp_string() {
        let mut data = 5u32.to_le_bytes().to_vec();
        data.extend_from_slice(b"Mg\xB0Fe");
        data.extend_from_slice(&0u32.to_le_bytes());

        let mut cursor = ByteCursor::new(data);
        assert_eq!(read_csharp_string(&mut cursor).unwrap(), "Mg\u{b0}Fe");
        assert_eq!(read_csharp_string(&mut cursor).unwrap(), "");
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_length_past_end() {
        let mut data = 100u32.to_le_bytes().to_vec();
        data.extend_from_slice(b"short");

        let mut cursor = ByteCursor::new(data);
        match read_csharp_string(&mut cursor) {
            Err(SxfError::UnexpectedEof { offset, requested }) => {
                assert_eq!(offset, 4);
                assert_eq!(requested, 100);
            }
            other => panic!("expected UnexpectedEof, got {:?}", other),
        }
    }
}
