// src/setup/wds.rs
use crate::error::Result;
use crate::primitives::{read_csharp_string, CounterSetting, ElementCode, XtalCode};
use crate::raw_data::ByteCursor;
use crate::setup::SubSetup;
use crate::types::{decode_enum, FileTypeCode, WdsScanType, XrayLine};
use bytes::Bytes;

const SPECTROMETERS: usize = 5;

/// Scan configuration of one spectrometer in a WDS setup file.
#[derive(Debug, Clone)]
pub struct WdsScanSpectSetup {
    pub enabled: bool,
    pub scan_type: WdsScanType,
    pub element: ElementCode,
    pub xray_line: XrayLine,
    pub order: u32,
    pub xtal: XtalCode,
    pub two_d: f32,
    pub k: f32,
    pub wds_start_pos: u32,
    pub wds_end_pos: u32,
    pub steps: u32,
    pub step_size: f32,
    pub dwell_time: f32,
    pub beam_size: u32,
    pub counter: CounterSetting,
    pub reserved: Bytes,
    pub comment: String,
}

impl WdsScanSpectSetup {
    pub fn read(cursor: &mut ByteCursor) -> Result<Self> {
        Ok(WdsScanSpectSetup {
            enabled: cursor.read_u32()? != 0,
            scan_type: decode_enum(cursor)?,
            element: ElementCode::read(cursor)?,
            xray_line: decode_enum(cursor)?,
            order: cursor.read_u32()?,
            xtal: XtalCode::read(cursor)?,
            two_d: cursor.read_f32()?,
            k: cursor.read_f32()?,
            wds_start_pos: cursor.read_u32()?,
            wds_end_pos: cursor.read_u32()?,
            steps: cursor.read_u32()?,
            step_size: cursor.read_f32()?,
            dwell_time: cursor.read_f32()?,
            beam_size: cursor.read_u32()?,
            counter: CounterSetting::read(cursor)?,
            reserved: cursor.read_bytes(16)?,
            comment: read_csharp_string(cursor)?,
        })
    }
}

/// Body of a WDS setup file: one scan per spectrometer plus the column setup.
#[derive(Debug, Clone)]
pub struct WdsSetup {
    pub spectrometers: [WdsScanSpectSetup; SPECTROMETERS],
    pub subsetup: SubSetup,
}

impl WdsSetup {
    pub const SPECTROMETERS: usize = SPECTROMETERS;

    pub fn read(cursor: &mut ByteCursor) -> Result<Self> {
        let spectrometers = [
            WdsScanSpectSetup::read(cursor)?,
            WdsScanSpectSetup::read(cursor)?,
            WdsScanSpectSetup::read(cursor)?,
            WdsScanSpectSetup::read(cursor)?,
            WdsScanSpectSetup::read(cursor)?,
        ];
        let subsetup = SubSetup::read(cursor, FileTypeCode::WdsSetup)?;
        Ok(WdsSetup {
            spectrometers,
            subsetup,
        })
    }

    pub fn enabled_spectrometers(&self) -> impl Iterator<Item = &WdsScanSpectSetup> {
        self.spectrometers.iter().filter(|s| s.enabled)
    }
}
