// src/dataset/extras.rs
use crate::error::Result;
use crate::primitives::{ElementCode, SpaceTime};
use crate::raw_data::ByteCursor;
use crate::types::{decode_enum, DatasetExtrasType, MatrixCorrectionType, XrayLine};
use bytes::Bytes;

/// Footer closing a dataset; layout selected by a `DatasetExtrasType` tag.
#[derive(Debug, Clone)]
pub enum DatasetExtras {
    ImgSec(ImgSecFooter),
    WdsCal(WdsCalFooter),
    QtiV5(QtiFooter),
    QtiV6(QtiFooter),
}

#[derive(Debug, Clone)]
pub struct ImgSecFooter {
    pub space_time: SpaceTime,
    pub reserved: Bytes,
}

#[derive(Debug, Clone)]
pub struct WdsCalFooter {
    pub reserved_wds_ending_1: Bytes,
    pub space_time: SpaceTime,
    pub reserved_wds_ending_2: Bytes,
}

/// Entry of the quanti footer's mean-atomic-correction table.
#[derive(Debug, Clone, PartialEq)]
pub struct MacRecord {
    pub element: ElementCode,
    pub xray_line: XrayLine,
    pub absorber: ElementCode,
    pub mac: f32,
}

#[derive(Debug, Clone)]
pub struct QtiFooter {
    /// One entry per acquisition point
    pub space_times: Vec<SpaceTime>,
    pub mac_table: Vec<MacRecord>,
    pub reserved: Bytes,
    /// v6 only
    pub matrix_correction: Option<MatrixCorrectionType>,
    /// v6 only
    pub reserved_v6: Option<Bytes>,
}

impl DatasetExtras {
    pub fn read(cursor: &mut ByteCursor) -> Result<Self> {
        let extras_type: DatasetExtrasType = decode_enum(cursor)?;
        log::trace!("dataset extras: {}", extras_type);

        match extras_type {
            DatasetExtrasType::ImgSec => Ok(DatasetExtras::ImgSec(ImgSecFooter {
                space_time: SpaceTime::read(cursor)?,
                reserved: cursor.read_bytes(12)?,
            })),
            DatasetExtrasType::WdsCal => Ok(DatasetExtras::WdsCal(WdsCalFooter {
                reserved_wds_ending_1: cursor.read_bytes(12)?,
                space_time: SpaceTime::read(cursor)?,
                reserved_wds_ending_2: cursor.read_bytes(16)?,
            })),
            DatasetExtrasType::QtiV5 => Ok(DatasetExtras::QtiV5(QtiFooter::read(cursor, false)?)),
            DatasetExtrasType::QtiV6 => Ok(DatasetExtras::QtiV6(QtiFooter::read(cursor, true)?)),
        }
    }

    pub fn extras_type(&self) -> DatasetExtrasType {
        match self {
            DatasetExtras::ImgSec(_) => DatasetExtrasType::ImgSec,
            DatasetExtras::WdsCal(_) => DatasetExtrasType::WdsCal,
            DatasetExtras::QtiV5(_) => DatasetExtrasType::QtiV5,
            DatasetExtras::QtiV6(_) => DatasetExtrasType::QtiV6,
        }
    }
}

impl QtiFooter {
    fn read(cursor: &mut ByteCursor, v6: bool) -> Result<Self> {
        let n_space_times = cursor.read_u32()?;
        let mut space_times = Vec::new();
        for _ in 0..n_space_times {
            space_times.push(SpaceTime::read(cursor)?);
        }

        let n_mac = cursor.read_u32()?;
        let mut mac_table = Vec::new();
        for _ in 0..n_mac {
            mac_table.push(MacRecord {
                element: ElementCode::read(cursor)?,
                xray_line: decode_enum(cursor)?,
                absorber: ElementCode::read(cursor)?,
                mac: cursor.read_f32()?,
            });
        }
        let reserved = cursor.read_bytes(8)?;

        let (matrix_correction, reserved_v6) = if v6 {
            (Some(decode_enum(cursor)?), Some(cursor.read_bytes(12)?))
        } else {
            (None, None)
        };

        Ok(QtiFooter {
            space_times,
            mac_table,
            reserved,
            matrix_correction,
            reserved_v6,
        })
    }
}
