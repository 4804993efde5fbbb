// src/dataset/signal.rs
use crate::dataset::FileTypeContext;
use crate::error::{Result, SxfError};
use crate::primitives::{read_csharp_string, ElementCode};
use crate::raw_data::ByteCursor;
use crate::types::{decode_enum, ImageArrayDtype, SubcountingMode, XrayLine};
use bytes::Bytes;

/// Sample data of one dataset item.
#[derive(Debug, Clone)]
pub enum SignalPayload {
    WdsScan(WdsScanSignal),
    ImageProfile(ImageProfileSignal),
    Quanti(QtiSignal),
    Calibration(CalSignal),
}

impl SignalPayload {
    /// Decode the payload variant dictated by the containing file.
    ///
    /// `n_of_points` is only used by quanti files, which store one fixed-size
    /// record per acquisition point.
    pub fn read(cursor: &mut ByteCursor, context: FileTypeContext, n_of_points: u64) -> Result<Self> {
        match context {
            FileTypeContext::WdsResults => Ok(SignalPayload::WdsScan(WdsScanSignal::read(cursor)?)),
            FileTypeContext::ImageMappingResults => {
                Ok(SignalPayload::ImageProfile(ImageProfileSignal::read(cursor)?))
            }
            FileTypeContext::QuantiResults => {
                Ok(SignalPayload::Quanti(QtiSignal::read(cursor, n_of_points)?))
            }
            FileTypeContext::CalibrationResults => {
                Ok(SignalPayload::Calibration(CalSignal::read(cursor)?))
            }
        }
    }
}

/// Number of `width`-byte elements in a declared byte length.
fn element_count(cursor: &ByteCursor, context: &'static str, byte_len: u32, width: usize) -> Result<usize> {
    let byte_len = byte_len as usize;
    if byte_len % width != 0 {
        return Err(SxfError::InvalidLength {
            context,
            offset: cursor.position(),
            length: byte_len,
        });
    }
    Ok(byte_len / width)
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedLine {
    pub element: ElementCode,
    pub xray_line: XrayLine,
    pub order: u32,
    pub position: f32,
    pub visible: bool,
}

/// WDS spectrometer scan: counts per step along the spectrometer axis.
#[derive(Debug, Clone)]
pub struct WdsScanSignal {
    pub version: u32,
    pub wds_start_pos: u32,
    pub steps: u32,
    pub step_size: f32,
    pub dwell_time: f32,
    pub beam_size: u32,
    /// Size of `data` in bytes, as declared in the file
    pub data_array_size: u32,
    pub data: Vec<f32>,
    pub not_re_flag: Bytes,
    pub signal_name: String,
    pub reserved: Bytes,
    pub annotated_lines: Vec<AnnotatedLine>,
}

impl WdsScanSignal {
    pub fn read(cursor: &mut ByteCursor) -> Result<Self> {
        let version = cursor.read_u32()?;
        let wds_start_pos = cursor.read_u32()?;
        let steps = cursor.read_u32()?;
        let step_size = cursor.read_f32()?;
        let dwell_time = cursor.read_f32()?;
        let beam_size = cursor.read_u32()?;
        let data_array_size = cursor.read_u32()?;
        let count = element_count(cursor, "WDS scan data", data_array_size, 4)?;
        let data = cursor.read_f32_vec(count)?;
        let not_re_flag = cursor.read_bytes(4)?;
        let signal_name = read_csharp_string(cursor)?;
        let reserved = cursor.read_bytes(16)?;

        let n_lines = cursor.read_u32()?;
        let mut annotated_lines = Vec::new();
        for _ in 0..n_lines {
            annotated_lines.push(AnnotatedLine {
                element: ElementCode::read(cursor)?,
                xray_line: decode_enum(cursor)?,
                order: cursor.read_u32()?,
                position: cursor.read_f32()?,
                visible: cursor.read_u32()? != 0,
            });
        }

        Ok(WdsScanSignal {
            version,
            wds_start_pos,
            steps,
            step_size,
            dwell_time,
            beam_size,
            data_array_size,
            data,
            not_re_flag,
            signal_name,
            reserved,
            annotated_lines,
        })
    }

    pub fn sample_count(&self) -> usize {
        self.data.len()
    }

    /// Spectrometer position of each sample.
    pub fn positions(&self) -> impl Iterator<Item = f64> + '_ {
        let start = self.wds_start_pos as f64;
        let step = self.step_size as f64;
        (0..self.data.len()).map(move |i| start + i as f64 * step)
    }
}

/// Typed pixel buffer of an image or profile signal.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageData {
    U8(Vec<u8>),
    U16(Vec<u16>),
    U32(Vec<u32>),
    F32(Vec<f32>),
    F64(Vec<f64>),
}

impl ImageData {
    pub fn len(&self) -> usize {
        match self {
            ImageData::U8(v) => v.len(),
            ImageData::U16(v) => v.len(),
            ImageData::U32(v) => v.len(),
            ImageData::F32(v) => v.len(),
            ImageData::F64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_f64_vec(&self) -> Vec<f64> {
        match self {
            ImageData::U8(v) => v.iter().map(|&x| x as f64).collect(),
            ImageData::U16(v) => v.iter().map(|&x| x as f64).collect(),
            ImageData::U32(v) => v.iter().map(|&x| x as f64).collect(),
            ImageData::F32(v) => v.iter().map(|&x| x as f64).collect(),
            ImageData::F64(v) => v.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImageProfileSignal {
    pub version: u32,
    pub data_type: ImageArrayDtype,
    pub width: u32,
    pub height: u32,
    pub n_of_frames: u32,
    /// Size of `data` in bytes, as declared in the file
    pub data_size: u32,
    pub data: ImageData,
    pub reserved: Bytes,
    /// Present from version 5
    pub lut_name: Option<String>,
}

impl ImageProfileSignal {
    pub fn read(cursor: &mut ByteCursor) -> Result<Self> {
        let version = cursor.read_u32()?;
        let data_type: ImageArrayDtype = decode_enum(cursor)?;
        let width = cursor.read_u32()?;
        let height = cursor.read_u32()?;
        let n_of_frames = cursor.read_u32()?;
        let data_size = cursor.read_u32()?;

        let count = element_count(cursor, "image data", data_size, data_type.byte_size())?;
        let data = match data_type {
            ImageArrayDtype::U8 => ImageData::U8(cursor.read_bytes(count)?.to_vec()),
            ImageArrayDtype::U16 => ImageData::U16(cursor.read_u16_vec(count)?),
            ImageArrayDtype::U32 => ImageData::U32(cursor.read_u32_vec(count)?),
            ImageArrayDtype::F32 => ImageData::F32(cursor.read_f32_vec(count)?),
            ImageArrayDtype::F64 => ImageData::F64(cursor.read_f64_vec(count)?),
        };
        let reserved = cursor.read_bytes(16)?;

        let mut lut_name = None;
        if version >= 5 {
            lut_name = Some(read_csharp_string(cursor)?);
        }

        Ok(ImageProfileSignal {
            version,
            data_type,
            width,
            height,
            n_of_frames,
            data_size,
            data,
            reserved,
            lut_name,
        })
    }

    /// Pixel count implied by the geometry (`width * height * frames`).
    pub fn expected_len(&self) -> u64 {
        self.width as u64 * self.height as u64 * self.n_of_frames.max(1) as u64
    }
}

/// Quanti measurement of one element at one point.
#[derive(Debug, Clone)]
pub struct QtiPointRecord {
    pub beam_current: f32,
    pub peak_cps: f32,
    pub peak_time: f32,
    pub bkgd_under_peak_cps: f32,
    pub bkgd_1_cps: f32,
    pub bkgd_1_time: f32,
    pub bkgd_2_cps: f32,
    pub bkgd_2_time: f32,
    pub reserved: Bytes,
}

impl QtiPointRecord {
    pub const SIZE: usize = 44;

    pub fn read(cursor: &mut ByteCursor) -> Result<Self> {
        Ok(QtiPointRecord {
            beam_current: cursor.read_f32()?,
            peak_cps: cursor.read_f32()?,
            peak_time: cursor.read_f32()?,
            bkgd_under_peak_cps: cursor.read_f32()?,
            bkgd_1_cps: cursor.read_f32()?,
            bkgd_1_time: cursor.read_f32()?,
            bkgd_2_cps: cursor.read_f32()?,
            bkgd_2_time: cursor.read_f32()?,
            reserved: cursor.read_bytes(12)?,
        })
    }

    /// Peak minus interpolated background, in cps.
    pub fn net_cps(&self) -> f32 {
        self.peak_cps - self.bkgd_under_peak_cps
    }
}

#[derive(Debug, Clone)]
pub struct QtiSignal {
    pub version: u32,
    pub subcounting_mode: SubcountingMode,
    pub n_subcounts: u32,
    pub points: Vec<QtiPointRecord>,
    pub reserved: Bytes,
}

impl QtiSignal {
    pub fn read(cursor: &mut ByteCursor, n_of_points: u64) -> Result<Self> {
        let version = cursor.read_u32()?;
        let subcounting_mode = decode_enum(cursor)?;
        let n_subcounts = cursor.read_u32()?;

        // refuse to allocate for a point count the buffer cannot hold
        let byte_len = usize::try_from(n_of_points)
            .ok()
            .and_then(|n| n.checked_mul(QtiPointRecord::SIZE))
            .unwrap_or(usize::MAX);
        cursor.ensure(byte_len)?;

        let mut points = Vec::with_capacity(n_of_points as usize);
        for _ in 0..n_of_points {
            points.push(QtiPointRecord::read(cursor)?);
        }
        let reserved = cursor.read_bytes(12)?;

        Ok(QtiSignal {
            version,
            subcounting_mode,
            n_subcounts,
            points,
            reserved,
        })
    }
}

/// Calibration measurement on a standard.
#[derive(Debug, Clone)]
pub struct CalSignal {
    pub version: u32,
    pub standard_name: String,
    pub beam_current: f32,
    pub peak_cps: f32,
    pub bkgd_cps: f32,
    pub curve: Vec<f32>,
    pub reserved: Bytes,
}

impl CalSignal {
    pub fn read(cursor: &mut ByteCursor) -> Result<Self> {
        let version = cursor.read_u32()?;
        let standard_name = read_csharp_string(cursor)?;
        let beam_current = cursor.read_f32()?;
        let peak_cps = cursor.read_f32()?;
        let bkgd_cps = cursor.read_f32()?;
        let n_curve = cursor.read_u32()? as usize;
        let curve = cursor.read_f32_vec(n_curve)?;
        let reserved = cursor.read_bytes(16)?;

        Ok(CalSignal {
            version,
            standard_name,
            beam_current,
            peak_cps,
            bkgd_cps,
            curve,
            reserved,
        })
    }

    /// Net peak intensity normalised to 1 nA.
    pub fn net_cps_per_na(&self) -> Option<f32> {
        if self.beam_current > 0.0 {
            Some((self.peak_cps - self.bkgd_cps) / self.beam_current)
        } else {
            None
        }
    }
}
