// src/header/file_header.rs
use crate::error::{Result, SxfError};
use crate::header::FileModification;
use crate::primitives::read_csharp_string;
use crate::raw_data::ByteCursor;
use crate::types::{enum_from_code, FileTypeCode};
use bytes::Bytes;
use std::ops::RangeInclusive;

/// Fixed header shared by every SXF file type.
#[derive(Debug, Clone)]
pub struct SxfHeader {
    pub file_type: FileTypeCode,
    pub magic: [u8; 3],
    pub sxf_version: u32,
    pub comment: String,
    pub reserved: Bytes,
    /// Present from version 3
    pub reserved_v3: Option<Bytes>,
    /// Present from version 3
    pub modifications: Option<Vec<FileModification>>,
    /// Present from version 4
    pub reserved_v4: Option<Bytes>,
    /// Present from version 5 (one float64 in the vendor layout)
    pub reserved_v5: Option<Bytes>,
}

impl SxfHeader {
    pub const MAGIC: &'static [u8; 3] = b"fxs";
    pub const RESERVED_SIZE: usize = 24;
    pub const SUPPORTED_VERSIONS: RangeInclusive<u32> = 1..=5;

    /// Decode the header from the start of a file.
    ///
    /// The magic is checked before the file type byte is mapped, so any
    /// buffer without `fxs` at bytes 1..4 is reported as [`SxfError::BadMagic`]
    /// rather than as an unknown file type.
    pub fn read(cursor: &mut ByteCursor) -> Result<Self> {
        let type_offset = cursor.position();
        let type_code = cursor.read_u8()?;

        let magic = cursor.read_array::<3>()?;
        if &magic != Self::MAGIC {
            return Err(SxfError::BadMagic { found: magic });
        }
        let file_type: FileTypeCode = enum_from_code(type_code as u32, type_offset)?;

        let sxf_version = cursor.read_u32()?;
        if !Self::SUPPORTED_VERSIONS.contains(&sxf_version) {
            return Err(SxfError::UnsupportedVersion {
                context: "SXF header",
                version: sxf_version,
            });
        }

        let comment = read_csharp_string(cursor)?;
        let reserved = cursor.read_bytes(Self::RESERVED_SIZE)?;

        let mut header = SxfHeader {
            file_type,
            magic,
            sxf_version,
            comment,
            reserved,
            reserved_v3: None,
            modifications: None,
            reserved_v4: None,
            reserved_v5: None,
        };

        if sxf_version >= 3 {
            header.reserved_v3 = Some(cursor.read_bytes(4)?);
            let count = cursor.read_u32()?;
            let mut modifications = Vec::new();
            for _ in 0..count {
                modifications.push(FileModification::read(cursor)?);
            }
            header.modifications = Some(modifications);
        }
        if sxf_version >= 4 {
            header.reserved_v4 = Some(cursor.read_bytes(8)?);
        }
        if sxf_version >= 5 {
            header.reserved_v5 = Some(cursor.read_bytes(8)?);
        }

        log::debug!(
            "SXF header: type {}, version {}, {} modification(s)",
            header.file_type,
            header.sxf_version,
            header.modifications.as_ref().map_or(0, |m| m.len())
        );
        Ok(header)
    }
}

pub fn decode_header(cursor: &mut ByteCursor) -> Result<SxfHeader> {
    SxfHeader::read(cursor)
}
