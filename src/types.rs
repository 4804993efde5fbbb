// src/types.rs
use crate::error::{Result, SxfError};
use crate::raw_data::ByteCursor;
use std::fmt;

/// A closed vendor enumeration: integer codes outside the known set are a
/// hard decode error, never a default.
pub trait SxfEnum: Sized + Copy {
    const TYPE_NAME: &'static str;

    fn from_code(code: u32) -> Option<Self>;

    fn code(self) -> u32;
}

/// Map `code` through the closed table `T`. `offset` is where the code was
/// read and is carried into the error.
pub fn enum_from_code<T: SxfEnum>(code: u32, offset: usize) -> Result<T> {
    T::from_code(code).ok_or(SxfError::UnknownEnumCode {
        type_name: T::TYPE_NAME,
        code,
        offset,
    })
}

/// Read a `u32` code and map it through the closed table `T`.
pub fn decode_enum<T: SxfEnum>(cursor: &mut ByteCursor) -> Result<T> {
    let offset = cursor.position();
    let code = cursor.read_u32()?;
    enum_from_code(code, offset)
}

macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u32)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $code ),+
        }

        impl $name {
            /// Human-readable label
            pub fn name(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }
        }

        impl SxfEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn from_code(code: u32) -> Option<Self> {
                match code {
                    $( $code => Some($name::$variant), )+
                    _ => None,
                }
            }

            fn code(self) -> u32 {
                self as u32
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

closed_enum! {
    /// File type code, stored as the first byte of every SXF file
    FileTypeCode {
        WdsSetup = 1 => "wds_setup",
        ImageMappingSetup = 2 => "image_mapping_setup",
        CalibrationSetup = 3 => "calibration_setup",
        QuantiSetup = 4 => "quanti_setup",
        /// Listed by the vendor; no body layout is known for it.
        Reserved = 5 => "reserved",
        WdsResults = 6 => "wds_results",
        ImageMappingResults = 7 => "image_mapping_results",
        CalibrationResults = 8 => "calibration_results",
        QuantiResults = 9 => "quanti_results",
        OverlapCorrectionTable = 10 => "overlap_correction_table",
    }
}

impl FileTypeCode {
    /// Result files share the dataset container body.
    pub fn is_results(&self) -> bool {
        matches!(
            self,
            FileTypeCode::WdsResults
                | FileTypeCode::ImageMappingResults
                | FileTypeCode::CalibrationResults
                | FileTypeCode::QuantiResults
        )
    }

    pub fn is_setup(&self) -> bool {
        matches!(
            self,
            FileTypeCode::WdsSetup
                | FileTypeCode::ImageMappingSetup
                | FileTypeCode::CalibrationSetup
                | FileTypeCode::QuantiSetup
        )
    }
}

closed_enum! {
    /// Instrument channel a dataset item was recorded from
    SignalSource {
        Wds = 1 => "WDS",
        Eds = 2 => "EDS",
        Video = 3 => "Video",
        Other = 4 => "Other",
        QtiDiff = 5 => "Quanti by difference",
        QtiStoch = 6 => "Quanti by stoichiometry",
        QtiMatrix = 7 => "Quanti matrix",
        ImQtiWdsBkgdMeas = 8 => "Image quanti WDS background measured",
        ImQtiWdsBkgdComputed = 9 => "Image quanti WDS background computed",
        ImQtiWt = 10 => "Image quanti wt%",
        ImQtiAt = 11 => "Image quanti at%",
        ImQtiSum = 12 => "Image quanti sum",
        ImQtiAge = 13 => "Image quanti age",
        ImQtiOxy = 14 => "Image quanti oxygen",
        XonVideo = 15 => "Xon video",
        Camera = 16 => "Camera",
        WdsComputed = 17 => "WDS computed",
        EdsBkgd = 18 => "EDS background",
    }
}

closed_enum! {
    /// Characteristic X-ray line (Siegbahn notation)
    XrayLine {
        Kb = 1 => "Kβ",
        Ka = 2 => "Kα",
        Lg2 = 3 => "Lγ2",
        Lg = 4 => "Lγ",
        Lb3 = 5 => "Lβ3",
        Lb4 = 6 => "Lβ4",
        Lb2 = 7 => "Lβ2",
        Lb = 8 => "Lβ",
        La = 9 => "Lα",
        Ln = 10 => "Lη",
        Ll = 11 => "Ll",
        Mg = 12 => "Mγ",
        Mb = 13 => "Mβ",
        Ma = 14 => "Mα",
        Mz2 = 15 => "Mζ2",
        Mz = 16 => "Mζ",
        M2N4 = 17 => "M2N4",
        M2O4 = 18 => "M2O4",
        M3N4 = 19 => "M3N4",
        M3O4 = 20 => "M3O4",
        M3N5 = 21 => "M3N5",
        M4O2 = 22 => "M4O2",
        Skip = 100 => "skip",
    }
}

closed_enum! {
    /// Acquisition geometry of a dataset
    DatasetType {
        Points = 0 => "points",
        LineStage = 1 => "line (stage)",
        LineBeam = 2 => "line (beam)",
        GridStage = 3 => "grid (stage)",
        GridBeam = 4 => "grid (beam)",
        PolygonMaskedStage = 5 => "polygon masked (stage)",
        PolygonMaskedBeam = 6 => "polygon masked (beam)",
        FreeLines = 7 => "free lines",
    }
}

impl DatasetType {
    pub fn is_beam_scan(&self) -> bool {
        matches!(
            self,
            DatasetType::LineBeam | DatasetType::GridBeam | DatasetType::PolygonMaskedBeam
        )
    }
}

closed_enum! {
    BackgroundType {
        Linear = 1 => "linear",
        Exponential = 2 => "exponential",
        SlopeHigh = 3 => "slope (high)",
        SlopeLow = 4 => "slope (low)",
        Polynomial = 5 => "polynomial",
        Multipoint = 6 => "multipoint",
    }
}

closed_enum! {
    SubcountingMode {
        None = 0 => "none",
        Even = 1 => "even",
        Odd = 2 => "odd",
        EvenAndOdd = 3 => "even and odd",
    }
}

closed_enum! {
    /// Pulse height analyser mode
    PhaMode {
        Integral = 0 => "integral",
        Differential = 1 => "differential",
    }
}

closed_enum! {
    WdsScanType {
        Full = 0 => "full",
        Relative = 1 => "relative",
        Absolute = 2 => "absolute",
    }
}

closed_enum! {
    /// How an element's concentration is obtained in quantification
    QuantiMode {
        Measured = 0 => "measured",
        ByDifference = 1 => "by difference",
        ByStoichiometry = 2 => "by stoichiometry",
        FixedConcentration = 3 => "fixed concentration",
        MatrixDefined = 4 => "matrix defined",
        NotAnalyzed = 5 => "not analyzed",
    }
}

closed_enum! {
    AnalysisMode {
        Wds = 0 => "WDS",
        Eds = 1 => "EDS",
        WdsAndEds = 2 => "WDS+EDS",
    }
}

closed_enum! {
    /// Selects the layout of the footer that closes a dataset
    DatasetExtrasType {
        ImgSec = 1 => "image secondary",
        WdsCal = 2 => "WDS/calibration",
        QtiV5 = 5 => "quanti v5",
        QtiV6 = 6 => "quanti v6",
    }
}

closed_enum! {
    /// Pixel type of an image/profile signal
    ImageArrayDtype {
        U8 = 0 => "uint8",
        U16 = 1 => "uint16",
        U32 = 2 => "uint32",
        F32 = 7 => "float32",
        F64 = 8 => "float64",
    }
}

impl ImageArrayDtype {
    /// Width of one sample in bytes
    pub fn byte_size(&self) -> usize {
        match self {
            ImageArrayDtype::U8 => 1,
            ImageArrayDtype::U16 => 2,
            ImageArrayDtype::U32 | ImageArrayDtype::F32 => 4,
            ImageArrayDtype::F64 => 8,
        }
    }
}

closed_enum! {
    VideoSignalType {
        Se = 0 => "SE",
        Fara = 1 => "Faraday",
        Bse = 2 => "BSE",
        Abs = 3 => "ABS",
        Cl = 4 => "CL",
        BseZ = 5 => "BSE Z (compo)",
        BseT = 6 => "BSE T (topo)",
    }
}

closed_enum! {
    MatrixCorrectionType {
        Pap = 0 => "PAP",
        Zaf = 1 => "ZAF",
        XPhi = 2 => "XPhi",
    }
}

closed_enum! {
    PolygonSelectionMode {
        Off = 0 => "off",
        Inside = 1 => "inside",
        Outside = 2 => "outside",
    }
}

closed_enum! {
    /// Which WDS measurement table a sub-setup carries
    WdsMeasurementStructType {
        None = 0 => "none",
        ImageWds = 1 => "image WDS",
        QuantiWds = 2 => "quanti WDS",
    }
}
