// src/lib.rs
//! # sxf-rs
//!
//! A Rust decoder for Cameca Peaksight SXF files, the binary container written by
//! Cameca electron-probe microanalysers (EPMA) for WDS scans, quantitative analyses,
//! X-ray maps, calibrations and the setups that produce them.
//!
//! ## Features
//!
//! - **Complete decode**: header, all ten file-type codes, datasets, setups and overlap tables
//! - **Fails loudly**: unknown enumeration codes, bad magic and truncation are distinct errors
//! - **Opaque regions kept**: undeciphered reserved fields are preserved as zero-copy [`bytes::Bytes`]
//! - **Bounded recursion**: nested overview images are decoded under a configurable depth guard
//! - **Stateless**: decoding is a pure function of the input bytes
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sxf_rs::*;
//!
//! fn main() -> Result<()> {
//!     let file = open_and_decode("Fe_scan.wdsDat")?;
//!     println!("{} (SXF v{})", file.file_type(), file.header.sxf_version);
//!
//!     for dataset in file.datasets() {
//!         for item in &dataset.items {
//!             if let (Some(xray), Some(scan)) = (item.xray_header(), item.wds_scan()) {
//!                 println!(
//!                     "{} {} on {}: {} samples",
//!                     xray.element, xray.xray_line, xray.xtal, scan.sample_count()
//!                 );
//!             }
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ### Custom options
//!
//! ```rust,no_run
//! use sxf_rs::*;
//!
//! fn main() -> Result<()> {
//!     let decoder = SxfDecoder::with_options(DecodeOptions::default().with_max_recursion_depth(2));
//!     let bytes = std::fs::read("map.impDat")?;
//!     let file = decoder.decode(bytes)?;
//!     println!("{} dataset(s)", file.datasets().len());
//!     Ok(())
//! }
//! ```

// Modules
pub mod error;
pub mod types;
pub mod raw_data;
pub mod primitives;
pub mod header;
pub mod dataset;
pub mod setup;
pub mod reader;

mod utils;

// Re-export commonly used types at the crate root for convenience
pub use error::{SxfError, Result};

// Enumeration exports
pub use types::{
    SxfEnum,
    FileTypeCode,
    SignalSource,
    XrayLine,
    DatasetType,
    DatasetExtrasType,
};

// Primitive exports
pub use primitives::{
    ElementCode,
    FileTime,
    SpaceTime,
    XtalCode,
};

// Record exports
pub use header::{SxfHeader, FileModification, decode_header};
pub use dataset::{
    Dataset,
    DatasetItem,
    FileTypeContext,
    SignalHeader,
    SignalPayload,
    decode_dataset,
};

// Reader exports
pub use reader::{
    DecodeOptions,
    FileBody,
    MainBody,
    SxfDecoder,
    SxfFile,
    decode,
    decode_bytes,
    open_and_decode,
};

#[cfg(feature = "mmap")]
pub use reader::open_and_decode_mmap;

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use sxf_rs::prelude::*;
    //! ```

    pub use crate::error::{SxfError, Result};
    pub use crate::types::{FileTypeCode, SignalSource, SxfEnum};
    pub use crate::dataset::{Dataset, DatasetItem, SignalHeader, SignalPayload};
    pub use crate::reader::{decode, open_and_decode, FileBody, SxfDecoder, SxfFile};
}

/// Magic bytes at offsets 1..4 of every SXF file
pub const SXF_MAGIC: &[u8; 3] = SxfHeader::MAGIC;

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
