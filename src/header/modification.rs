// src/header/modification.rs
use crate::error::Result;
use crate::primitives::{read_csharp_string, FileTime};
use crate::raw_data::ByteCursor;
use crate::utils::split_nul_fields;

/// One entry of the file's change log.
#[derive(Debug, Clone, PartialEq)]
pub struct FileModification {
    pub timestamp: FileTime,
    /// Attribute blob exactly as stored
    pub attributes: String,
    pub action: String,
    pub description: String,
    pub comment: String,
}

impl FileModification {
    pub fn read(cursor: &mut ByteCursor) -> Result<Self> {
        let timestamp = FileTime::read(cursor)?;
        let attributes = read_csharp_string(cursor)?;

        let mut fields = split_nul_fields(&attributes, 3).into_iter();
        let action = fields.next().unwrap_or_default();
        let description = fields.next().unwrap_or_default();
        let comment = fields.next().unwrap_or_default();

        Ok(FileModification {
            timestamp,
            attributes,
            action,
            description,
            comment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ticks: u64, blob: &[u8]) -> Vec<u8> {
        let mut data = ticks.to_le_bytes().to_vec();
        data.extend_from_slice(&(blob.len() as u32).to_le_bytes());
        data.extend_from_slice(blob);
        data
    }

    #[test]
    fn test_three_fields() {
        let data = record(42, b"Modified\0Quanti setup\0re-peaked Fe\0");
        let mut cursor = ByteCursor::new(data);
        let m = FileModification::read(&mut cursor).unwrap();
        assert_eq!(m.timestamp, FileTime(42));
        assert_eq!(m.action, "Modified");
        assert_eq!(m.description, "Quanti setup");
        assert_eq!(m.comment, "re-peaked Fe");
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let data = record(0, b"Created");
        let mut cursor = ByteCursor::new(data);
        let m = FileModification::read(&mut cursor).unwrap();
        assert_eq!(m.action, "Created");
        assert!(m.description.is_empty());
        assert!(m.comment.is_empty());
    }
}
