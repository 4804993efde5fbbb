// src/reader/mod.rs
mod config;
mod decoder;
mod file;
mod main_body;

pub use config::DecodeOptions;
#[cfg(feature = "mmap")]
pub use decoder::open_and_decode_mmap;
pub use decoder::{decode, decode_bytes, open_and_decode, SxfDecoder};
pub use file::{FileBody, SxfFile};
pub use main_body::MainBody;
