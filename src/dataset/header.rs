// src/dataset/header.rs
use crate::error::{Result, SxfError};
use crate::raw_data::ByteCursor;
use crate::types::{decode_enum, DatasetType};
use bytes::Bytes;
use std::ops::RangeInclusive;

/// Geometry and acquisition parameters at the start of every dataset.
#[derive(Debug, Clone)]
pub struct DatasetHeader {
    pub version: u32,
    pub dataset_type: DatasetType,
    pub stage_x: i32,
    pub stage_y: i32,
    pub beam_x: f32,
    pub beam_y: f32,
    pub step_x: f32,
    pub step_y: f32,
    pub n_of_steps: u32,
    pub n_of_lines: u32,
    pub not_re_dataset_flags: Bytes,
    pub n_accumulation: u32,
    pub dwell_time: f32,
    pub not_re_dataset_flag_4: Bytes,
    /// Legacy per-point Z focus table; 49 was the hardware limit.
    pub stage_z: [i32; 49],
    pub not_re_flags_2: Bytes,
    pub beam_measurement_freq: f32,
    pub not_re_flags_3: Bytes,
    pub n_of_elements: u32,
    pub not_re_flags_4: Bytes,
}

impl DatasetHeader {
    pub const SIZE: usize = 300;
    pub const STAGE_Z_SLOTS: usize = 49;
    pub const SUPPORTED_VERSIONS: RangeInclusive<u32> = 11..=19;

    pub fn read(cursor: &mut ByteCursor) -> Result<Self> {
        let version = cursor.read_u32()?;
        if !Self::SUPPORTED_VERSIONS.contains(&version) {
            return Err(SxfError::UnsupportedVersion {
                context: "dataset",
                version,
            });
        }

        let dataset_type = decode_enum(cursor)?;
        let stage_x = cursor.read_i32()?;
        let stage_y = cursor.read_i32()?;
        let beam_x = cursor.read_f32()?;
        let beam_y = cursor.read_f32()?;
        let step_x = cursor.read_f32()?;
        let step_y = cursor.read_f32()?;
        let n_of_steps = cursor.read_u32()?;
        let n_of_lines = cursor.read_u32()?;
        let not_re_dataset_flags = cursor.read_bytes(12)?;
        let n_accumulation = cursor.read_u32()?;
        let dwell_time = cursor.read_f32()?;
        let not_re_dataset_flag_4 = cursor.read_bytes(4)?;

        let mut stage_z = [0i32; Self::STAGE_Z_SLOTS];
        for slot in stage_z.iter_mut() {
            *slot = cursor.read_i32()?;
        }

        let not_re_flags_2 = cursor.read_bytes(8)?;
        let beam_measurement_freq = cursor.read_f32()?;
        let not_re_flags_3 = cursor.read_bytes(8)?;
        let n_of_elements = cursor.read_u32()?;
        let not_re_flags_4 = cursor.read_bytes(16)?;

        Ok(DatasetHeader {
            version,
            dataset_type,
            stage_x,
            stage_y,
            beam_x,
            beam_y,
            step_x,
            step_y,
            n_of_steps,
            n_of_lines,
            not_re_dataset_flags,
            n_accumulation,
            dwell_time,
            not_re_dataset_flag_4,
            stage_z,
            not_re_flags_2,
            beam_measurement_freq,
            not_re_flags_3,
            n_of_elements,
            not_re_flags_4,
        })
    }

    /// Number of acquisition points: steps per line times lines.
    pub fn n_of_points(&self) -> u64 {
        self.n_of_steps as u64 * self.n_of_lines as u64
    }
}
