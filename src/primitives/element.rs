// src/primitives/element.rs
use crate::error::Result;
use crate::raw_data::ByteCursor;
use std::fmt;

/// Atomic number as stored in the file. Symbol lookup is left to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementCode(pub u32);

impl ElementCode {
    pub fn read(cursor: &mut ByteCursor) -> Result<Self> {
        Ok(ElementCode(cursor.read_u32()?))
    }

    pub fn atomic_number(&self) -> u32 {
        self.0
    }

    /// Zero marks an unused slot (e.g. a disabled spectrometer).
    pub fn is_unset(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ElementCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Z={}", self.0)
    }
}
