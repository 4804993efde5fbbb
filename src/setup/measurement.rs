// src/setup/measurement.rs
use crate::error::Result;
use crate::primitives::{read_csharp_string, CounterSetting, ElementCode, XtalCode};
use crate::raw_data::ByteCursor;
use crate::types::{decode_enum, BackgroundType, QuantiMode, SubcountingMode, XrayLine};
use bytes::Bytes;

/// EDS acquisition settings nested in a sub-setup.
#[derive(Debug, Clone)]
pub struct EdsSetup {
    pub dwell_time: f32,
    pub n_accumulations: u32,
    pub n_channels: u32,
    /// keV
    pub energy_range: f32,
    pub live_time_mode: u32,
    pub reserved: Bytes,
}

impl EdsSetup {
    pub fn read(cursor: &mut ByteCursor) -> Result<Self> {
        Ok(EdsSetup {
            dwell_time: cursor.read_f32()?,
            n_accumulations: cursor.read_u32()?,
            n_channels: cursor.read_u32()?,
            energy_range: cursor.read_f32()?,
            live_time_mode: cursor.read_u32()?,
            reserved: cursor.read_bytes(16)?,
        })
    }
}

/// Spectrometer configuration for WDS mapping.
#[derive(Debug, Clone)]
pub struct ImgWdsSpectSetup {
    pub element: ElementCode,
    pub xray_line: XrayLine,
    pub order: u32,
    pub spect_no: u32,
    pub xtal: XtalCode,
    pub two_d: f32,
    pub k: f32,
    pub peak_position: u32,
    pub counter: CounterSetting,
    pub enabled: bool,
    pub reserved: Bytes,
}

impl ImgWdsSpectSetup {
    pub fn read(cursor: &mut ByteCursor) -> Result<Self> {
        Ok(ImgWdsSpectSetup {
            element: ElementCode::read(cursor)?,
            xray_line: decode_enum(cursor)?,
            order: cursor.read_u32()?,
            spect_no: cursor.read_u32()?,
            xtal: XtalCode::read(cursor)?,
            two_d: cursor.read_f32()?,
            k: cursor.read_f32()?,
            peak_position: cursor.read_u32()?,
            counter: CounterSetting::read(cursor)?,
            enabled: cursor.read_u32()? != 0,
            reserved: cursor.read_bytes(8)?,
        })
    }
}

/// Peak and background measurement conditions of one quantified element.
#[derive(Debug, Clone)]
pub struct QtiWdsMeasurementSetup {
    pub element: ElementCode,
    pub xray_line: XrayLine,
    pub order: u32,
    pub spect_no: u32,
    pub xtal: XtalCode,
    pub two_d: f32,
    pub k: f32,
    pub peak_position: u32,
    pub peak_time: f32,
    pub bkgd_type: BackgroundType,
    /// Offsets relative to the peak position
    pub bkgd_1_pos: i32,
    pub bkgd_2_pos: i32,
    pub bkgd_time: f32,
    pub bkgd_slope: f32,
    pub subcounting_mode: SubcountingMode,
    pub counter: CounterSetting,
    pub quanti_mode: QuantiMode,
    pub standard_name: String,
    pub reserved: Bytes,
}

impl QtiWdsMeasurementSetup {
    pub fn read(cursor: &mut ByteCursor) -> Result<Self> {
        Ok(QtiWdsMeasurementSetup {
            element: ElementCode::read(cursor)?,
            xray_line: decode_enum(cursor)?,
            order: cursor.read_u32()?,
            spect_no: cursor.read_u32()?,
            xtal: XtalCode::read(cursor)?,
            two_d: cursor.read_f32()?,
            k: cursor.read_f32()?,
            peak_position: cursor.read_u32()?,
            peak_time: cursor.read_f32()?,
            bkgd_type: decode_enum(cursor)?,
            bkgd_1_pos: cursor.read_i32()?,
            bkgd_2_pos: cursor.read_i32()?,
            bkgd_time: cursor.read_f32()?,
            bkgd_slope: cursor.read_f32()?,
            subcounting_mode: decode_enum(cursor)?,
            counter: CounterSetting::read(cursor)?,
            quanti_mode: decode_enum(cursor)?,
            standard_name: read_csharp_string(cursor)?,
            reserved: cursor.read_bytes(12)?,
        })
    }

    pub fn bkgd_1_absolute(&self) -> i64 {
        self.peak_position as i64 + self.bkgd_1_pos as i64
    }

    pub fn bkgd_2_absolute(&self) -> i64 {
        self.peak_position as i64 + self.bkgd_2_pos as i64
    }
}
