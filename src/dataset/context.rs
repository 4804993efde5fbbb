// src/dataset/context.rs
use crate::types::FileTypeCode;

/// Which result file a dataset belongs to.
///
/// Item payloads are laid out according to the containing file's type, not
/// the item's own signal source, so this is threaded through every dataset
/// and item decode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileTypeContext {
    WdsResults,
    ImageMappingResults,
    CalibrationResults,
    QuantiResults,
}

impl FileTypeContext {
    /// `None` for file types that do not carry datasets.
    pub fn from_file_type(file_type: FileTypeCode) -> Option<Self> {
        match file_type {
            FileTypeCode::WdsResults => Some(FileTypeContext::WdsResults),
            FileTypeCode::ImageMappingResults => Some(FileTypeContext::ImageMappingResults),
            FileTypeCode::CalibrationResults => Some(FileTypeContext::CalibrationResults),
            FileTypeCode::QuantiResults => Some(FileTypeContext::QuantiResults),
            _ => None,
        }
    }

    pub fn file_type(&self) -> FileTypeCode {
        match self {
            FileTypeContext::WdsResults => FileTypeCode::WdsResults,
            FileTypeContext::ImageMappingResults => FileTypeCode::ImageMappingResults,
            FileTypeContext::CalibrationResults => FileTypeCode::CalibrationResults,
            FileTypeContext::QuantiResults => FileTypeCode::QuantiResults,
        }
    }
}
