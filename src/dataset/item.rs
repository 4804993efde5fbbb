// src/dataset/item.rs
use crate::dataset::{FileTypeContext, SignalHeader, SignalPayload, WdsScanSignal, XraySignalHeader};
use crate::error::Result;
use crate::raw_data::ByteCursor;
use crate::types::{decode_enum, SignalSource};

/// One signal channel of a dataset.
#[derive(Debug, Clone)]
pub struct DatasetItem {
    pub version: u32,
    pub signal_type: SignalSource,
    pub signal_header: SignalHeader,
    pub signal: SignalPayload,
}

impl DatasetItem {
    pub fn read(cursor: &mut ByteCursor, context: FileTypeContext, n_of_points: u64) -> Result<Self> {
        let version = cursor.read_u32()?;
        let signal_type: SignalSource = decode_enum(cursor)?;
        let signal_header = SignalHeader::read(cursor, signal_type)?;
        let signal = SignalPayload::read(cursor, context, n_of_points)?;

        log::trace!("dataset item: {} (v{})", signal_type, version);
        Ok(DatasetItem {
            version,
            signal_type,
            signal_header,
            signal,
        })
    }

    pub fn xray_header(&self) -> Option<&XraySignalHeader> {
        match &self.signal_header {
            SignalHeader::Xray(h) => Some(h),
            _ => None,
        }
    }

    pub fn wds_scan(&self) -> Option<&WdsScanSignal> {
        match &self.signal {
            SignalPayload::WdsScan(s) => Some(s),
            _ => None,
        }
    }
}
