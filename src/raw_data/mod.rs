// src/raw_data/mod.rs
//! Low-level byte access for SXF decoding
//!
//! - [`ByteCursor`] - position-tracked little-endian reader over an immutable buffer
//!
//! # Example
//!
//! ```
//! use sxf_rs::raw_data::ByteCursor;
//!
//! let data = vec![2u8, 0, 0, 0, 0, 0, 0x80, 0x3f, 0, 0, 0, 0x40];
//! let mut cursor = ByteCursor::new(data);
//!
//! let count = cursor.read_u32().unwrap() as usize;
//! let values = cursor.read_f32_vec(count).unwrap();
//! assert_eq!(values, vec![1.0, 2.0]);
//! assert_eq!(cursor.remaining(), 0);
//! ```

mod cursor;

pub use cursor::ByteCursor;
