// src/reader/main_body.rs
use crate::dataset::{Dataset, FileTypeContext};
use crate::error::{Result, SxfError};
use crate::primitives::read_csharp_string;
use crate::raw_data::ByteCursor;
use crate::reader::DecodeOptions;
use bytes::Bytes;
use std::ops::RangeInclusive;

/// Dataset container shared by the four result file types.
///
/// The body carries no tag of its own; which result type it came from is
/// recorded in `context`.
#[derive(Debug, Clone)]
pub struct MainBody {
    pub context: FileTypeContext,
    pub version: u32,
    pub focus_frequency: u32,
    pub verify_xtal_after_flip: u32,
    pub verify_xtal_before_start: u32,
    pub bkgd_measure_every_nth: u32,
    pub decontamination_time: u32,
    pub datasets: Vec<Dataset>,
    pub not_re_global_options: Bytes,
    /// Present from version 12
    pub current_qti_set: Option<String>,
    /// Present from version 12
    pub reserved_v12: Option<Bytes>,
    /// Present from version 13
    pub reserved_v13: Option<Bytes>,
}

impl MainBody {
    pub const SUPPORTED_VERSIONS: RangeInclusive<u32> = 8..=13;

    pub fn read(
        cursor: &mut ByteCursor,
        context: FileTypeContext,
        options: &DecodeOptions,
    ) -> Result<Self> {
        let version = cursor.read_u32()?;
        if !Self::SUPPORTED_VERSIONS.contains(&version) {
            return Err(SxfError::UnsupportedVersion {
                context: "dataset container",
                version,
            });
        }

        let focus_frequency = cursor.read_u32()?;
        let verify_xtal_after_flip = cursor.read_u32()?;
        let verify_xtal_before_start = cursor.read_u32()?;
        let bkgd_measure_every_nth = cursor.read_u32()?;
        let decontamination_time = cursor.read_u32()?;
        let num_datasets = cursor.read_u32()?;
        log::debug!(
            "{} container v{}: {} dataset(s)",
            context.file_type(),
            version,
            num_datasets
        );

        let mut datasets = Vec::new();
        for _ in 0..num_datasets {
            datasets.push(Dataset::read(cursor, context, 0, options)?);
        }

        let not_re_global_options = cursor.read_bytes(12)?;

        let (current_qti_set, reserved_v12) = if version >= 12 {
            (Some(read_csharp_string(cursor)?), Some(cursor.read_bytes(8)?))
        } else {
            (None, None)
        };
        let mut reserved_v13 = None;
        if version >= 13 {
            reserved_v13 = Some(cursor.read_bytes(12)?);
        }

        Ok(MainBody {
            context,
            version,
            focus_frequency,
            verify_xtal_after_flip,
            verify_xtal_before_start,
            bkgd_measure_every_nth,
            decontamination_time,
            datasets,
            not_re_global_options,
            current_qti_set,
            reserved_v12,
            reserved_v13,
        })
    }
}
