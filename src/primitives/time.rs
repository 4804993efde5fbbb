// src/primitives/time.rs
use crate::error::Result;
use crate::raw_data::ByteCursor;
use chrono::{DateTime, Utc};

/// Windows FILETIME: 100-ns ticks since 1601-01-01 00:00:00 UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FileTime(pub u64);

impl FileTime {
    const TICKS_PER_SECOND: u64 = 10_000_000;
    const EPOCH_OFFSET_SECONDS: i64 = 11_644_473_600; // 1601 to 1970

    pub fn read(cursor: &mut ByteCursor) -> Result<Self> {
        Ok(FileTime(cursor.read_u64()?))
    }

    pub fn ticks(&self) -> u64 {
        self.0
    }

    /// `None` when the tick count falls outside chrono's representable range.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let seconds = (self.0 / Self::TICKS_PER_SECOND) as i64 - Self::EPOCH_OFFSET_SECONDS;
        let nanos = ((self.0 % Self::TICKS_PER_SECOND) * 100) as u32;
        DateTime::from_timestamp(seconds, nanos)
    }

    pub fn from_datetime(time: DateTime<Utc>) -> Option<Self> {
        let seconds = time.timestamp().checked_add(Self::EPOCH_OFFSET_SECONDS)?;
        if seconds < 0 {
            return None;
        }
        let ticks = (seconds as u64)
            .checked_mul(Self::TICKS_PER_SECOND)?
            .checked_add(time.timestamp_subsec_nanos() as u64 / 100)?;
        Some(FileTime(ticks))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StagePosition {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Computed (e.g. monazite) age and its error, in Ma.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Age {
    pub age: f32,
    pub error: f32,
}

/// Acquisition time stamp with optional stage position and computed age.
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceTime {
    pub version: u32,
    pub datetime: FileTime,
    /// Present from version 2
    pub stage: Option<StagePosition>,
    /// Present from version 3
    pub age: Option<Age>,
}

impl SpaceTime {
    pub fn read(cursor: &mut ByteCursor) -> Result<Self> {
        let version = cursor.read_u32()?;
        let datetime = FileTime::read(cursor)?;

        let mut stage = None;
        if version >= 2 {
            stage = Some(StagePosition {
                x: cursor.read_f32()?,
                y: cursor.read_f32()?,
                z: cursor.read_f32()?,
            });
        }

        let mut age = None;
        if version >= 3 {
            age = Some(Age {
                age: cursor.read_f32()?,
                error: cursor.read_f32()?,
            });
        }

        Ok(SpaceTime {
            version,
            datetime,
            stage,
            age,
        })
    }
}
