// src/setup/mod.rs
//! Setup file bodies: acquisition recipes rather than measured data.

mod measurement;
mod overlap;
mod subsetup;
mod wds;

pub use measurement::{EdsSetup, ImgWdsSpectSetup, QtiWdsMeasurementSetup};
pub use overlap::{OverlapTable, OverlapTableItem};
pub use subsetup::{SubSetup, WdsMeasurement};
pub use wds::{WdsScanSpectSetup, WdsSetup};

use crate::error::Result;
use crate::raw_data::ByteCursor;
use crate::types::FileTypeCode;

/// Body shared by image-mapping, calibration and quanti setup files: a list
/// of sub-setups.
#[derive(Debug, Clone)]
pub struct SubSetupList {
    pub subsetups: Vec<SubSetup>,
}

impl SubSetupList {
    pub fn read(cursor: &mut ByteCursor, file_type: FileTypeCode) -> Result<Self> {
        let count = cursor.read_u32()?;
        log::debug!("{}: {} sub-setup(s)", file_type, count);

        let mut subsetups = Vec::new();
        for _ in 0..count {
            subsetups.push(SubSetup::read(cursor, file_type)?);
        }
        Ok(SubSetupList { subsetups })
    }
}
