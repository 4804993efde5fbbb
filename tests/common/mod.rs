// tests/common/mod.rs
//! Byte-exact SXF fixture builders shared by the integration tests.
#![allow(dead_code)]

use byteorder::{LittleEndian, WriteBytesExt};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Little-endian record writer.
#[derive(Debug, Default, Clone)]
pub struct Writer {
    pub buf: Vec<u8>,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn u8(&mut self, v: u8) -> &mut Self {
        self.buf.write_u8(v).unwrap();
        self
    }

    pub fn u32(&mut self, v: u32) -> &mut Self {
        self.buf.write_u32::<LittleEndian>(v).unwrap();
        self
    }

    pub fn i32(&mut self, v: i32) -> &mut Self {
        self.buf.write_i32::<LittleEndian>(v).unwrap();
        self
    }

    pub fn u64(&mut self, v: u64) -> &mut Self {
        self.buf.write_u64::<LittleEndian>(v).unwrap();
        self
    }

    pub fn f32(&mut self, v: f32) -> &mut Self {
        self.buf.write_f32::<LittleEndian>(v).unwrap();
        self
    }

    pub fn bytes(&mut self, v: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(v);
        self
    }

    /// Reserved region filled with a recognisable pattern.
    pub fn reserved(&mut self, n: usize) -> &mut Self {
        self.buf.extend(std::iter::repeat(0xA5).take(n));
        self
    }

    pub fn string(&mut self, s: &str) -> &mut Self {
        self.u32(s.len() as u32);
        self.bytes(s.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn finish(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buf)
    }
}

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

pub fn header(file_type: u8, sxf_version: u32, comment: &str, modifications: &[(u64, &str)]) -> Vec<u8> {
    let mut w = Writer::new();
    w.u8(file_type).bytes(b"fxs").u32(sxf_version).string(comment).reserved(24);
    if sxf_version >= 3 {
        w.reserved(4).u32(modifications.len() as u32);
        for (ticks, attributes) in modifications {
            w.u64(*ticks).string(attributes);
        }
    }
    if sxf_version >= 4 {
        w.reserved(8);
    }
    if sxf_version >= 5 {
        w.reserved(8);
    }
    w.finish()
}

pub fn sxf_file(file_type: u8, body: &[u8]) -> Vec<u8> {
    let mut data = header(file_type, 4, "synthetic", &[]);
    data.extend_from_slice(body);
    data
}

// ---------------------------------------------------------------------------
// Primitives
// ---------------------------------------------------------------------------

pub fn counter_setting(w: &mut Writer) {
    w.u32(1650).u32(32).u32(3).f32(0.5).f32(4.5).u32(1);
}

pub fn space_time_v1(w: &mut Writer, ticks: u64) {
    w.u32(1).u64(ticks);
}

// ---------------------------------------------------------------------------
// Dataset items
// ---------------------------------------------------------------------------

pub const SIGNAL_HEADER_SIZE: usize = 68;

/// 68-byte header for X-ray sources (WDS, EDS, image quanti, ...).
pub fn xray_signal_header(element: u32, xray_line: u32, spect_no: u32, xtal: [u8; 4]) -> Vec<u8> {
    let mut w = Writer::new();
    w.u32(element)
        .u32(xray_line)
        .u32(1)
        .u32(spect_no)
        .bytes(&xtal)
        .f32(8.75)
        .f32(0.002)
        .u32(38_500)
        .f32(15.0)
        .f32(20.0);
    counter_setting(&mut w);
    w.reserved(4);
    w.finish()
}

pub fn limited_signal_header(element: u32) -> Vec<u8> {
    let mut w = Writer::new();
    w.u32(element).reserved(64);
    w.finish()
}

pub fn video_signal_header(video_type: u32, channel: u32) -> Vec<u8> {
    let mut w = Writer::new();
    w.u32(video_type).f32(15.0).f32(10.0).u32(channel).reserved(52);
    w.finish()
}

pub fn camera_signal_header() -> Vec<u8> {
    let mut w = Writer::new();
    w.reserved(SIGNAL_HEADER_SIZE);
    w.finish()
}

pub fn item(signal_type: u32, signal_header: &[u8], payload: &[u8]) -> Vec<u8> {
    assert_eq!(signal_header.len(), SIGNAL_HEADER_SIZE);
    let mut w = Writer::new();
    w.u32(3).u32(signal_type).bytes(signal_header).bytes(payload);
    w.finish()
}

/// WDS scan payload: `data_array_size` is written in bytes.
pub fn wds_scan_payload(start: u32, step_size: f32, data: &[f32], name: &str, lines: &[(u32, u32, f32)]) -> Vec<u8> {
    let mut w = Writer::new();
    w.u32(4)
        .u32(start)
        .u32(data.len() as u32)
        .f32(step_size)
        .f32(0.1)
        .u32(5)
        .u32((data.len() * 4) as u32);
    for v in data {
        w.f32(*v);
    }
    w.reserved(4).string(name).reserved(16).u32(lines.len() as u32);
    for (element, xray_line, position) in lines {
        w.u32(*element).u32(*xray_line).u32(1).f32(*position).u32(1);
    }
    w.finish()
}

pub fn image_payload(version: u32, dtype: u32, width: u32, height: u32, data: &[u8], lut: Option<&str>) -> Vec<u8> {
    let mut w = Writer::new();
    w.u32(version)
        .u32(dtype)
        .u32(width)
        .u32(height)
        .u32(1)
        .u32(data.len() as u32)
        .bytes(data)
        .reserved(16);
    if let Some(lut) = lut {
        w.string(lut);
    }
    w.finish()
}

pub fn qti_payload(points: &[(f32, f32)]) -> Vec<u8> {
    let mut w = Writer::new();
    w.u32(2).u32(0).u32(1);
    for (peak_cps, bkgd_cps) in points {
        w.f32(20.0)
            .f32(*peak_cps)
            .f32(10.0)
            .f32(*bkgd_cps)
            .f32(bkgd_cps * 0.9)
            .f32(5.0)
            .f32(bkgd_cps * 1.1)
            .f32(5.0)
            .reserved(12);
    }
    w.reserved(12);
    w.finish()
}

pub fn cal_payload(standard: &str, beam_current: f32, peak_cps: f32, bkgd_cps: f32, curve: &[f32]) -> Vec<u8> {
    let mut w = Writer::new();
    w.u32(1)
        .string(standard)
        .f32(beam_current)
        .f32(peak_cps)
        .f32(bkgd_cps)
        .u32(curve.len() as u32);
    for v in curve {
        w.f32(*v);
    }
    w.reserved(16);
    w.finish()
}

/// WDS item on spectrometer 2 with a TAP crystal.
pub fn wds_item(element: u32, data: &[f32]) -> Vec<u8> {
    item(
        1,
        &xray_signal_header(element, 2, 2, *b"\0PAT"),
        &wds_scan_payload(30_000, 10.0, data, "scan", &[(element, 2, 30_050.0)]),
    )
}

// ---------------------------------------------------------------------------
// Datasets
// ---------------------------------------------------------------------------

pub const DATASET_HEADER_SIZE: usize = 300;

pub fn dataset_header(version: u32, dataset_type: u32, n_of_steps: u32, n_of_lines: u32, n_of_elements: u32) -> Vec<u8> {
    let mut w = Writer::new();
    w.u32(version)
        .u32(dataset_type)
        .i32(-1200)
        .i32(3400)
        .f32(0.0)
        .f32(0.0)
        .f32(1.0)
        .f32(1.0)
        .u32(n_of_steps)
        .u32(n_of_lines)
        .reserved(12)
        .u32(1)
        .f32(0.1)
        .reserved(4);
    for z in 0..49 {
        w.i32(z);
    }
    w.reserved(8).f32(0.0).reserved(8).u32(n_of_elements).reserved(16);
    w.finish()
}

/// Synthetic dataset; encoded exactly as the decoder expects it.
#[derive(Debug, Clone)]
pub struct DatasetFixture {
    pub version: u32,
    pub dataset_type: u32,
    pub n_of_steps: u32,
    pub n_of_lines: u32,
    /// Encoded items; the header's `n_of_elements` follows their count
    pub items: Vec<Vec<u8>>,
    pub comment: String,
    pub extra_endings: Vec<(String, u32)>,
    pub overview: Option<Box<DatasetFixture>>,
    /// Tag plus footer; written when `version >= 13`
    pub extras: Vec<u8>,
}

impl DatasetFixture {
    pub fn new(version: u32, items: Vec<Vec<u8>>) -> Self {
        DatasetFixture {
            version,
            dataset_type: 0,
            n_of_steps: 1,
            n_of_lines: 1,
            items,
            comment: String::new(),
            extra_endings: Vec::new(),
            overview: None,
            extras: wds_cal_extras(132_000_000_000_000_000),
        }
    }

    pub fn with_points(mut self, n_of_steps: u32, n_of_lines: u32) -> Self {
        self.n_of_steps = n_of_steps;
        self.n_of_lines = n_of_lines;
        self
    }

    pub fn with_overview(mut self, overview: DatasetFixture) -> Self {
        self.overview = Some(Box::new(overview));
        self
    }

    pub fn with_extras(mut self, extras: Vec<u8>) -> Self {
        self.extras = extras;
        self
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut w = Writer::new();
        w.bytes(&dataset_header(
            self.version,
            self.dataset_type,
            self.n_of_steps,
            self.n_of_lines,
            self.items.len() as u32,
        ));
        for item in &self.items {
            w.bytes(item);
        }
        w.string(&self.comment).reserved(32).u32(self.extra_endings.len() as u32);
        for (comment, color) in &self.extra_endings {
            w.string(comment).u32(*color).reserved(16);
        }

        match &self.overview {
            Some(nested) => {
                w.u32(1).u32(2).u32(3);
                for (x, y) in [(0.0f32, 0.0f32), (10.0, 0.0), (10.0, 10.0)] {
                    w.f32(x).f32(y);
                }
                w.bytes(&nested.encode()).u32(1);
            }
            None => {
                w.u32(0);
            }
        }

        w.u32(0).reserved(96);
        if self.version >= 17 {
            w.u32(4);
        }
        if self.version >= 18 {
            w.f32(0.25).f32(0.5);
        }
        if self.version >= 19 {
            w.u32(2);
        }
        if self.version >= 13 {
            w.bytes(&self.extras);
        }
        w.finish()
    }
}

pub fn img_sec_extras(ticks: u64) -> Vec<u8> {
    let mut w = Writer::new();
    w.u32(1);
    space_time_v1(&mut w, ticks);
    w.reserved(12);
    w.finish()
}

pub fn wds_cal_extras(ticks: u64) -> Vec<u8> {
    let mut w = Writer::new();
    w.u32(2).reserved(12);
    space_time_v1(&mut w, ticks);
    w.reserved(16);
    w.finish()
}

/// Quanti footer; `v6` adds the matrix correction tag and its reserved tail.
pub fn qti_extras(v6: bool, n_points: usize, macs: &[(u32, u32, u32, f32)]) -> Vec<u8> {
    let mut w = Writer::new();
    w.u32(if v6 { 6 } else { 5 }).u32(n_points as u32);
    for i in 0..n_points {
        space_time_v1(&mut w, 132_000_000_000_000_000 + i as u64);
    }
    w.u32(macs.len() as u32);
    for (element, xray_line, absorber, mac) in macs {
        w.u32(*element).u32(*xray_line).u32(*absorber).f32(*mac);
    }
    w.reserved(8);
    if v6 {
        w.u32(1).reserved(12);
    }
    w.finish()
}

/// Dataset container body of a result file.
pub fn main_body(version: u32, datasets: &[Vec<u8>]) -> Vec<u8> {
    let mut w = Writer::new();
    w.u32(version).u32(1).u32(0).u32(1).u32(3).u32(60).u32(datasets.len() as u32);
    for dataset in datasets {
        w.bytes(dataset);
    }
    w.reserved(12);
    if version >= 12 {
        w.string("Fe-Mg olivine").reserved(8);
    }
    if version >= 13 {
        w.reserved(12);
    }
    w.finish()
}

// ---------------------------------------------------------------------------
// Setups
// ---------------------------------------------------------------------------

pub enum WdsTable {
    None,
    Image,
    Quanti(Vec<(u32, &'static str)>),
}

pub fn subsetup(version: u32, file_type: u8, eds_count: u32, wds: &WdsTable) -> Vec<u8> {
    let mut w = Writer::new();
    w.u32(version)
        .u32(1)
        .f32(15.0)
        .f32(100.0)
        .u32(4)
        .u32(3)
        .u32(2)
        .u32(1)
        .f32(1.5)
        .f32(2.5)
        .f32(0.1)
        .f32(0.2)
        .reserved(4)
        .f32(20.0)
        .u32(0)
        .reserved(8)
        .f32(0.01)
        .f32(-0.01)
        .u32(2)
        .reserved(12);
    if version >= 2 {
        w.f32(10.5);
    }
    if version >= 3 {
        w.reserved(8);
    }
    if version >= 4 {
        w.u32(1);
    }
    if file_type > 1 {
        w.u32(eds_count);
        for _ in 0..eds_count {
            w.f32(0.02).u32(1).u32(2048).f32(20.0).u32(1).reserved(16);
        }
    }
    match wds {
        WdsTable::None => {
            w.u32(0);
        }
        WdsTable::Image => {
            w.u32(1);
            for spect in 1..=5u32 {
                w.u32(26).u32(2).u32(1).u32(spect).bytes(b"FILL").f32(4.027).f32(0.0).u32(48_000);
                counter_setting(&mut w);
                w.u32(spect % 2).reserved(8);
            }
        }
        WdsTable::Quanti(elements) => {
            w.u32(2).u32(elements.len() as u32);
            for (element, standard) in elements {
                w.u32(*element)
                    .u32(2)
                    .u32(1)
                    .u32(3)
                    .bytes(b"TEPL")
                    .f32(8.75)
                    .f32(0.0)
                    .u32(40_000)
                    .f32(20.0)
                    .u32(1)
                    .i32(-500)
                    .i32(700)
                    .f32(10.0)
                    .f32(1.0)
                    .u32(0);
                counter_setting(&mut w);
                w.u32(0).string(standard).reserved(12);
            }
        }
    }
    if version >= 5 {
        w.reserved(12);
    }
    w.finish()
}

pub fn wds_scan_spect_setup(w: &mut Writer, enabled: bool, element: u32, comment: &str) {
    w.u32(enabled as u32)
        .u32(0)
        .u32(element)
        .u32(2)
        .u32(1)
        .bytes(b"\0PAT")
        .f32(25.9)
        .f32(0.0)
        .u32(28_000)
        .u32(32_000)
        .u32(400)
        .f32(10.0)
        .f32(0.2)
        .u32(0);
    counter_setting(w);
    w.reserved(16).string(comment);
}

pub fn overlap_item(w: &mut Writer, element: u32, interfering: u32, factor: f32) {
    w.u32(element)
        .u32(2)
        .u32(1)
        .bytes(b"FILL")
        .u32(interfering)
        .u32(7)
        .u32(1)
        .f32(15.0)
        .u32(48_100)
        .f32(factor)
        .string("Std_Fe2O3")
        .reserved(16);
}
