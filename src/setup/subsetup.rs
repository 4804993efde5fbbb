// src/setup/subsetup.rs
use crate::error::Result;
use crate::raw_data::ByteCursor;
use crate::setup::{EdsSetup, ImgWdsSpectSetup, QtiWdsMeasurementSetup};
use crate::types::{decode_enum, AnalysisMode, FileTypeCode, SxfEnum, WdsMeasurementStructType};
use bytes::Bytes;

/// WDS measurement table carried by a sub-setup, selected by a
/// `WdsMeasurementStructType` tag read mid-record.
#[derive(Debug, Clone)]
pub enum WdsMeasurement {
    None,
    ImageWds(Vec<ImgWdsSpectSetup>),
    QuantiWds(Vec<QtiWdsMeasurementSetup>),
}

/// Column, gun and beam configuration shared by all setup files.
#[derive(Debug, Clone)]
pub struct SubSetup {
    pub version: u32,
    pub heat: u32,
    /// kV
    pub hv: f32,
    pub i_emission: f32,
    pub xhi: u32,
    pub xlo: u32,
    pub yhi: u32,
    pub ylo: u32,
    pub aperture_x: f32,
    pub aperture_y: f32,
    pub c1: f32,
    pub c2: f32,
    pub not_re_1: Bytes,
    /// nA
    pub current_set: f32,
    pub beam_size: u32,
    pub not_re_2: Bytes,
    pub stigmator_x: f32,
    pub stigmator_y: f32,
    pub analysis_mode: AnalysisMode,
    pub not_re_3: Bytes,
    /// Present from version 2
    pub focus_z: Option<f32>,
    /// Present from version 3
    pub not_re_v3: Option<Bytes>,
    /// Present from version 4
    pub beam_blanking: Option<u32>,
    /// Only in file types after `WdsSetup`
    pub eds_setups: Option<Vec<EdsSetup>>,
    pub wds_measurement: WdsMeasurement,
    /// Present from version 5
    pub not_re_v5: Option<Bytes>,
}

impl SubSetup {
    pub const IMAGE_SPECTROMETERS: usize = 5;

    pub fn read(cursor: &mut ByteCursor, file_type: FileTypeCode) -> Result<Self> {
        let version = cursor.read_u32()?;
        let heat = cursor.read_u32()?;
        let hv = cursor.read_f32()?;
        let i_emission = cursor.read_f32()?;
        let xhi = cursor.read_u32()?;
        let xlo = cursor.read_u32()?;
        let yhi = cursor.read_u32()?;
        let ylo = cursor.read_u32()?;
        let aperture_x = cursor.read_f32()?;
        let aperture_y = cursor.read_f32()?;
        let c1 = cursor.read_f32()?;
        let c2 = cursor.read_f32()?;
        let not_re_1 = cursor.read_bytes(4)?;
        let current_set = cursor.read_f32()?;
        let beam_size = cursor.read_u32()?;
        let not_re_2 = cursor.read_bytes(8)?;
        let stigmator_x = cursor.read_f32()?;
        let stigmator_y = cursor.read_f32()?;
        let analysis_mode = decode_enum(cursor)?;
        let not_re_3 = cursor.read_bytes(12)?;

        let mut focus_z = None;
        if version >= 2 {
            focus_z = Some(cursor.read_f32()?);
        }
        let mut not_re_v3 = None;
        if version >= 3 {
            not_re_v3 = Some(cursor.read_bytes(8)?);
        }
        let mut beam_blanking = None;
        if version >= 4 {
            beam_blanking = Some(cursor.read_u32()?);
        }

        let mut eds_setups = None;
        if file_type.code() > 1 {
            let count = cursor.read_u32()?;
            let mut setups = Vec::new();
            for _ in 0..count {
                setups.push(EdsSetup::read(cursor)?);
            }
            eds_setups = Some(setups);
        }

        let struct_type: WdsMeasurementStructType = decode_enum(cursor)?;
        let wds_measurement = match struct_type {
            WdsMeasurementStructType::None => WdsMeasurement::None,
            WdsMeasurementStructType::ImageWds => {
                let mut spects = Vec::with_capacity(Self::IMAGE_SPECTROMETERS);
                for _ in 0..Self::IMAGE_SPECTROMETERS {
                    spects.push(ImgWdsSpectSetup::read(cursor)?);
                }
                WdsMeasurement::ImageWds(spects)
            }
            WdsMeasurementStructType::QuantiWds => {
                let count = cursor.read_u32()?;
                let mut elements = Vec::new();
                for _ in 0..count {
                    elements.push(QtiWdsMeasurementSetup::read(cursor)?);
                }
                WdsMeasurement::QuantiWds(elements)
            }
        };

        let mut not_re_v5 = None;
        if version >= 5 {
            not_re_v5 = Some(cursor.read_bytes(12)?);
        }

        log::trace!("sub-setup v{}: {} kV, {} nA, {}", version, hv, current_set, struct_type);
        Ok(SubSetup {
            version,
            heat,
            hv,
            i_emission,
            xhi,
            xlo,
            yhi,
            ylo,
            aperture_x,
            aperture_y,
            c1,
            c2,
            not_re_1,
            current_set,
            beam_size,
            not_re_2,
            stigmator_x,
            stigmator_y,
            analysis_mode,
            not_re_3,
            focus_z,
            not_re_v3,
            beam_blanking,
            eds_setups,
            wds_measurement,
            not_re_v5,
        })
    }
}
