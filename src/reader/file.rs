// src/reader/file.rs
use crate::dataset::{Dataset, FileTypeContext};
use crate::header::SxfHeader;
use crate::reader::MainBody;
use crate::setup::{OverlapTable, SubSetupList, WdsSetup};
use crate::types::FileTypeCode;

/// Decoded body; the variant is fully determined by `header.file_type`.
#[derive(Debug, Clone)]
pub enum FileBody {
    WdsSetup(WdsSetup),
    ImgSetup(SubSetupList),
    CalSetup(SubSetupList),
    QtiSetup(SubSetupList),
    OverlapTable(OverlapTable),
    Main(MainBody),
}

/// A fully decoded SXF file.
#[derive(Debug, Clone)]
pub struct SxfFile {
    pub header: SxfHeader,
    pub content: FileBody,
}

impl SxfFile {
    pub fn file_type(&self) -> FileTypeCode {
        self.header.file_type
    }

    /// Result-file context, `None` for setup and overlap files.
    pub fn context(&self) -> Option<FileTypeContext> {
        FileTypeContext::from_file_type(self.header.file_type)
    }

    /// Datasets of a result file; empty for every other body.
    pub fn datasets(&self) -> &[Dataset] {
        match &self.content {
            FileBody::Main(body) => &body.datasets,
            _ => &[],
        }
    }

    pub fn main_body(&self) -> Option<&MainBody> {
        match &self.content {
            FileBody::Main(body) => Some(body),
            _ => None,
        }
    }
}
