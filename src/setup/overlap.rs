// src/setup/overlap.rs
use crate::error::Result;
use crate::primitives::{read_csharp_string, ElementCode, XtalCode};
use crate::raw_data::ByteCursor;
use crate::types::{decode_enum, XrayLine};
use bytes::Bytes;

/// Peak interference correction: `interfering_element` contributes
/// `overlap_factor` of its intensity at the measured line's peak position.
#[derive(Debug, Clone)]
pub struct OverlapTableItem {
    pub element: ElementCode,
    pub xray_line: XrayLine,
    pub order: u32,
    pub xtal: XtalCode,
    pub interfering_element: ElementCode,
    pub interfering_line: XrayLine,
    pub interfering_order: u32,
    pub hv: f32,
    pub peak_position: u32,
    pub overlap_factor: f32,
    pub standard_name: String,
    pub reserved: Bytes,
}

impl OverlapTableItem {
    pub fn read(cursor: &mut ByteCursor) -> Result<Self> {
        Ok(OverlapTableItem {
            element: ElementCode::read(cursor)?,
            xray_line: decode_enum(cursor)?,
            order: cursor.read_u32()?,
            xtal: XtalCode::read(cursor)?,
            interfering_element: ElementCode::read(cursor)?,
            interfering_line: decode_enum(cursor)?,
            interfering_order: cursor.read_u32()?,
            hv: cursor.read_f32()?,
            peak_position: cursor.read_u32()?,
            overlap_factor: cursor.read_f32()?,
            standard_name: read_csharp_string(cursor)?,
            reserved: cursor.read_bytes(16)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct OverlapTable {
    pub version: u32,
    pub items: Vec<OverlapTableItem>,
}

impl OverlapTable {
    pub fn read(cursor: &mut ByteCursor) -> Result<Self> {
        let version = cursor.read_u32()?;
        let count = cursor.read_u32()?;
        let mut items = Vec::new();
        for _ in 0..count {
            items.push(OverlapTableItem::read(cursor)?);
        }
        log::debug!("overlap table v{}: {} correction(s)", version, items.len());
        Ok(OverlapTable { version, items })
    }

    /// Corrections that apply to the given measured element.
    pub fn corrections_for(&self, element: ElementCode) -> impl Iterator<Item = &OverlapTableItem> {
        self.items.iter().filter(move |item| item.element == element)
    }
}
