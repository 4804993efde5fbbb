// src/dataset/mod.rs
//! Dataset records: the measurement units of result files.
//!
//! A dataset is a header, `n_of_elements` items, a comment, optional WDS
//! annotations, an optional overview image (itself a full dataset), a
//! version-gated tail and, from version 13, an extras footer.

mod context;
mod extras;
mod header;
mod item;
mod overview;
mod signal;
mod signal_header;

pub use context::FileTypeContext;
pub use extras::{DatasetExtras, ImgSecFooter, MacRecord, QtiFooter, WdsCalFooter};
pub use header::DatasetHeader;
pub use item::DatasetItem;
pub use overview::{OverviewImage, PolygonPoint, PolygonSelection, WdsItemExtraEnding};
pub use signal::{
    AnnotatedLine, CalSignal, ImageData, ImageProfileSignal, QtiPointRecord, QtiSignal,
    SignalPayload, WdsScanSignal,
};
pub use signal_header::{LimitedSignalHeader, SignalHeader, VideoSignalHeader, XraySignalHeader};

use crate::error::{Result, SxfError};
use crate::primitives::read_csharp_string;
use crate::raw_data::ByteCursor;
use crate::reader::DecodeOptions;
use crate::types::decode_enum;
use bytes::Bytes;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overscan {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone)]
pub struct Dataset {
    pub header: DatasetHeader,
    pub items: Vec<DatasetItem>,
    pub comment: String,
    pub reserved: Bytes,
    pub wds_extra_endings: Vec<WdsItemExtraEnding>,
    pub overview_image: Option<OverviewImage>,
    pub is_video_capture_mode: u32,
    pub reserved_video: Bytes,
    /// Present from version 17
    pub n_of_frames: Option<u32>,
    /// Present from version 18
    pub overscan: Option<Overscan>,
    /// Present from version 19
    pub n_of_integrated_frames: Option<u32>,
    /// Present from version 13
    pub extras: Option<DatasetExtras>,
}

impl Dataset {
    pub const EXTRAS_MIN_VERSION: u32 = 13;

    /// Decode one dataset nested `depth` levels below a top-level dataset.
    pub fn read(
        cursor: &mut ByteCursor,
        context: FileTypeContext,
        depth: usize,
        options: &DecodeOptions,
    ) -> Result<Self> {
        let start = cursor.position();
        let header = DatasetHeader::read(cursor)?;
        let n_of_points = header.n_of_points();
        log::trace!(
            "dataset at {:#x}: v{} {} with {} item(s), {} point(s), depth {}",
            start,
            header.version,
            header.dataset_type,
            header.n_of_elements,
            n_of_points,
            depth
        );

        let mut items = Vec::new();
        for _ in 0..header.n_of_elements {
            items.push(DatasetItem::read(cursor, context, n_of_points)?);
        }

        let comment = read_csharp_string(cursor)?;
        let reserved = cursor.read_bytes(32)?;

        let num_extra_wds_stuff = cursor.read_u32()?;
        let mut wds_extra_endings = Vec::new();
        for _ in 0..num_extra_wds_stuff {
            wds_extra_endings.push(WdsItemExtraEnding::read(cursor)?);
        }

        let has_overview_image = cursor.read_u32()?;
        let overview_image = if has_overview_image == 1 {
            if depth >= options.max_recursion_depth {
                return Err(SxfError::RecursionLimitExceeded {
                    limit: options.max_recursion_depth,
                });
            }
            let polygon = PolygonSelection::read(cursor)?;
            let nested = Dataset::read(cursor, context, depth + 1, options)?;
            let selection_mode = decode_enum(cursor)?;
            Some(OverviewImage {
                polygon,
                dataset: Box::new(nested),
                selection_mode,
            })
        } else {
            None
        };

        let is_video_capture_mode = cursor.read_u32()?;
        let reserved_video = cursor.read_bytes(96)?;

        let version = header.version;
        let mut n_of_frames = None;
        if version >= 17 {
            n_of_frames = Some(cursor.read_u32()?);
        }
        let mut overscan = None;
        if version >= 18 {
            overscan = Some(Overscan {
                x: cursor.read_f32()?,
                y: cursor.read_f32()?,
            });
        }
        let mut n_of_integrated_frames = None;
        if version >= 19 {
            n_of_integrated_frames = Some(cursor.read_u32()?);
        }

        let mut extras = None;
        if version >= Self::EXTRAS_MIN_VERSION {
            extras = Some(DatasetExtras::read(cursor)?);
        }

        Ok(Dataset {
            header,
            items,
            comment,
            reserved,
            wds_extra_endings,
            overview_image,
            is_video_capture_mode,
            reserved_video,
            n_of_frames,
            overscan,
            n_of_integrated_frames,
            extras,
        })
    }

    pub fn n_of_points(&self) -> u64 {
        self.header.n_of_points()
    }

    /// Nesting depth of overview images below this dataset.
    pub fn overview_depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self;
        while let Some(overview) = &current.overview_image {
            depth += 1;
            current = &overview.dataset;
        }
        depth
    }
}

/// Decode a top-level dataset.
pub fn decode_dataset(
    cursor: &mut ByteCursor,
    context: FileTypeContext,
    options: &DecodeOptions,
) -> Result<Dataset> {
    Dataset::read(cursor, context, 0, options)
}
