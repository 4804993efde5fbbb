// src/header/mod.rs
mod file_header;
mod modification;

pub use file_header::{decode_header, SxfHeader};
pub use modification::FileModification;
