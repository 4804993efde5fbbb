// src/error.rs
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SxfError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Bytes 1..4 are not `fxs`: the input is not a Cameca SXF container.
    #[error("Not a Cameca SXF file: expected magic \"fxs\", found {found:?}")]
    BadMagic { found: [u8; 3] },

    #[error("Unsupported {context} version {version}")]
    UnsupportedVersion { context: &'static str, version: u32 },

    #[error("Unknown {type_name} code {code} at offset {offset:#x}")]
    UnknownEnumCode {
        type_name: &'static str,
        code: u32,
        offset: usize,
    },

    #[error("Unexpected end of data at offset {offset:#x}: requested {requested} bytes")]
    UnexpectedEof { offset: usize, requested: usize },

    #[error("Overview image nesting exceeds the limit of {limit} levels")]
    RecursionLimitExceeded { limit: usize },

    #[error("Invalid {context} length {length} at offset {offset:#x}")]
    InvalidLength {
        context: &'static str,
        offset: usize,
        length: usize,
    },

    #[error("Not implemented: {0}")]
    NotImplemented(String),
}

impl SxfError {
    /// True for errors caused by the input ending early.
    pub fn is_truncation(&self) -> bool {
        matches!(self, SxfError::UnexpectedEof { .. })
    }
}

pub type Result<T> = std::result::Result<T, SxfError>;
