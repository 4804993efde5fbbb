// src/primitives/counter.rs
use crate::error::Result;
use crate::raw_data::ByteCursor;
use crate::types::{decode_enum, PhaMode};

/// Gas counter / pulse height analyser settings of one WDS spectrometer.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterSetting {
    pub bias: u32,
    pub gain: u32,
    /// Dead time in µs
    pub dead_time: u32,
    pub baseline: f32,
    pub window: f32,
    pub mode: PhaMode,
}

impl CounterSetting {
    pub const SIZE: usize = 24;

    pub fn read(cursor: &mut ByteCursor) -> Result<Self> {
        Ok(CounterSetting {
            bias: cursor.read_u32()?,
            gain: cursor.read_u32()?,
            dead_time: cursor.read_u32()?,
            baseline: cursor.read_f32()?,
            window: cursor.read_f32()?,
            mode: decode_enum(cursor)?,
        })
    }
}
