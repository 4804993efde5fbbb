// src/dataset/overview.rs
use crate::dataset::Dataset;
use crate::error::Result;
use crate::primitives::read_csharp_string;
use crate::raw_data::ByteCursor;
use crate::types::PolygonSelectionMode;
use bytes::Bytes;
use smallvec::SmallVec;

/// Trailing per-item WDS annotation (comment and plot colour).
#[derive(Debug, Clone)]
pub struct WdsItemExtraEnding {
    pub comment: String,
    pub color: u32,
    pub not_re_flags: Bytes,
}

impl WdsItemExtraEnding {
    pub fn read(cursor: &mut ByteCursor) -> Result<Self> {
        Ok(WdsItemExtraEnding {
            comment: read_csharp_string(cursor)?,
            color: cursor.read_u32()?,
            not_re_flags: cursor.read_bytes(16)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonPoint {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone)]
pub struct PolygonSelection {
    pub selection_type: u32,
    pub points: SmallVec<[PolygonPoint; 8]>,
}

impl PolygonSelection {
    pub fn read(cursor: &mut ByteCursor) -> Result<Self> {
        let selection_type = cursor.read_u32()?;
        let count = cursor.read_u32()? as usize;
        cursor.ensure(count.saturating_mul(8))?;

        let mut points = SmallVec::with_capacity(count);
        for _ in 0..count {
            points.push(PolygonPoint {
                x: cursor.read_f32()?,
                y: cursor.read_f32()?,
            });
        }

        Ok(PolygonSelection {
            selection_type,
            points,
        })
    }
}

/// Context image recorded alongside a dataset, with the selection drawn on it.
#[derive(Debug, Clone)]
pub struct OverviewImage {
    pub polygon: PolygonSelection,
    pub dataset: Box<Dataset>,
    pub selection_mode: PolygonSelectionMode,
}
