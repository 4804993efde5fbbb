// src/dataset/signal_header.rs
use crate::error::Result;
use crate::primitives::{CounterSetting, ElementCode, XtalCode};
use crate::raw_data::ByteCursor;
use crate::types::{decode_enum, SignalSource, VideoSignalType, XrayLine};
use bytes::Bytes;

/// Per-item header, chosen by the item's own signal source.
///
/// All variants occupy exactly [`SignalHeader::SIZE`] bytes in the file.
#[derive(Debug, Clone)]
pub enum SignalHeader {
    Xray(XraySignalHeader),
    Limited(LimitedSignalHeader),
    /// Camera items carry no decoded header fields.
    Camera(Bytes),
    Video(VideoSignalHeader),
}

#[derive(Debug, Clone)]
pub struct XraySignalHeader {
    pub element: ElementCode,
    pub xray_line: XrayLine,
    pub order: u32,
    pub spect_no: u32,
    pub xtal: XtalCode,
    pub two_d: f32,
    pub k: f32,
    pub peak_position: u32,
    pub hv: f32,
    pub beam_current: f32,
    pub counter: CounterSetting,
    pub reserved: Bytes,
}

/// Header of derived quanti channels (difference, stoichiometry, matrix).
#[derive(Debug, Clone)]
pub struct LimitedSignalHeader {
    pub element: ElementCode,
    pub reserved: Bytes,
}

#[derive(Debug, Clone)]
pub struct VideoSignalHeader {
    pub video_signal_type: VideoSignalType,
    pub hv: f32,
    pub beam_current: f32,
    pub channel: u32,
    pub reserved: Bytes,
}

impl SignalHeader {
    pub const SIZE: usize = 68;

    pub fn read(cursor: &mut ByteCursor, source: SignalSource) -> Result<Self> {
        let mut window = cursor.sub_cursor(Self::SIZE)?;

        let header = match source {
            SignalSource::QtiDiff | SignalSource::QtiStoch | SignalSource::QtiMatrix => {
                SignalHeader::Limited(LimitedSignalHeader {
                    element: ElementCode::read(&mut window)?,
                    reserved: window.read_bytes(64)?,
                })
            }
            SignalSource::Camera => SignalHeader::Camera(window.read_bytes(Self::SIZE)?),
            SignalSource::Video => {
                SignalHeader::Video(VideoSignalHeader {
                    video_signal_type: decode_enum(&mut window)?,
                    hv: window.read_f32()?,
                    beam_current: window.read_f32()?,
                    channel: window.read_u32()?,
                    reserved: window.read_bytes(52)?,
                })
            }
            _ => SignalHeader::Xray(XraySignalHeader {
                element: ElementCode::read(&mut window)?,
                xray_line: decode_enum(&mut window)?,
                order: window.read_u32()?,
                spect_no: window.read_u32()?,
                xtal: XtalCode::read(&mut window)?,
                two_d: window.read_f32()?,
                k: window.read_f32()?,
                peak_position: window.read_u32()?,
                hv: window.read_f32()?,
                beam_current: window.read_f32()?,
                counter: CounterSetting::read(&mut window)?,
                reserved: window.read_bytes(4)?,
            }),
        };

        debug_assert!(window.is_exhausted(), "signal header layout must span {} bytes", Self::SIZE);
        Ok(header)
    }

    pub fn element(&self) -> Option<ElementCode> {
        match self {
            SignalHeader::Xray(h) => Some(h.element),
            SignalHeader::Limited(h) => Some(h.element),
            SignalHeader::Camera(_) | SignalHeader::Video(_) => None,
        }
    }
}
