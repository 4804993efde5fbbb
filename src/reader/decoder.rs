// src/reader/decoder.rs
use crate::dataset::FileTypeContext;
use crate::error::{Result, SxfError};
use crate::header::SxfHeader;
use crate::raw_data::ByteCursor;
use crate::reader::{DecodeOptions, FileBody, MainBody, SxfFile};
use crate::setup::{OverlapTable, SubSetupList, WdsSetup};
use crate::types::{FileTypeCode, SxfEnum};
use bytes::Bytes;
use std::path::Path;

#[cfg(feature = "mmap")]
use memmap2::Mmap;
#[cfg(feature = "mmap")]
use std::fs::File;

/// SXF decoder. Stateless apart from its options; one instance can decode
/// any number of files, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct SxfDecoder {
    options: DecodeOptions,
}

impl SxfDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DecodeOptions) -> Self {
        SxfDecoder { options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decode a complete file held in memory.
    pub fn decode(&self, data: impl Into<Bytes>) -> Result<SxfFile> {
        let mut cursor = ByteCursor::new(data);
        let header = SxfHeader::read(&mut cursor)?;
        let content = self.decode_body(&mut cursor, header.file_type)?;

        if !cursor.is_exhausted() {
            log::debug!(
                "{} trailing byte(s) after {} body at {:#x}",
                cursor.remaining(),
                header.file_type,
                cursor.position()
            );
        }
        Ok(SxfFile { header, content })
    }

    /// Read the whole file into memory and decode it.
    pub fn open(&self, path: impl AsRef<Path>) -> Result<SxfFile> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        log::debug!("decoding {} ({} bytes)", path.display(), data.len());
        self.decode(data)
    }

    /// Memory-map the file and decode it without an intermediate copy.
    #[cfg(feature = "mmap")]
    pub fn open_mmap(&self, path: impl AsRef<Path>) -> Result<SxfFile> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        self.decode(Bytes::from_owner(mmap))
    }

    fn decode_body(&self, cursor: &mut ByteCursor, file_type: FileTypeCode) -> Result<FileBody> {
        log::debug!("dispatching {} body at {:#x}", file_type, cursor.position());

        match file_type {
            FileTypeCode::WdsResults => self.main_body(cursor, FileTypeContext::WdsResults),
            FileTypeCode::ImageMappingResults => {
                self.main_body(cursor, FileTypeContext::ImageMappingResults)
            }
            FileTypeCode::CalibrationResults => {
                self.main_body(cursor, FileTypeContext::CalibrationResults)
            }
            FileTypeCode::QuantiResults => self.main_body(cursor, FileTypeContext::QuantiResults),
            FileTypeCode::WdsSetup => Ok(FileBody::WdsSetup(WdsSetup::read(cursor)?)),
            FileTypeCode::ImageMappingSetup => {
                Ok(FileBody::ImgSetup(SubSetupList::read(cursor, file_type)?))
            }
            FileTypeCode::CalibrationSetup => {
                Ok(FileBody::CalSetup(SubSetupList::read(cursor, file_type)?))
            }
            FileTypeCode::QuantiSetup => {
                Ok(FileBody::QtiSetup(SubSetupList::read(cursor, file_type)?))
            }
            FileTypeCode::OverlapCorrectionTable => {
                Ok(FileBody::OverlapTable(OverlapTable::read(cursor)?))
            }
            FileTypeCode::Reserved => Err(SxfError::NotImplemented(format!(
                "body layout of file type code {}",
                file_type.code()
            ))),
        }
    }

    fn main_body(&self, cursor: &mut ByteCursor, context: FileTypeContext) -> Result<FileBody> {
        Ok(FileBody::Main(MainBody::read(cursor, context, &self.options)?))
    }
}

/// Decode an in-memory SXF file with default options.
pub fn decode(bytes: &[u8]) -> Result<SxfFile> {
    SxfDecoder::new().decode(Bytes::copy_from_slice(bytes))
}

/// Decode an owned buffer with default options, without copying it.
pub fn decode_bytes(bytes: impl Into<Bytes>) -> Result<SxfFile> {
    SxfDecoder::new().decode(bytes)
}

/// Read and decode the file at `path` with default options.
pub fn open_and_decode(path: impl AsRef<Path>) -> Result<SxfFile> {
    SxfDecoder::new().open(path)
}

/// Memory-map and decode the file at `path` with default options.
#[cfg(feature = "mmap")]
pub fn open_and_decode_mmap(path: impl AsRef<Path>) -> Result<SxfFile> {
    SxfDecoder::new().open_mmap(path)
}
