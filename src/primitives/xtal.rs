// src/primitives/xtal.rs
use crate::error::Result;
use crate::raw_data::ByteCursor;
use crate::utils::decode_cp1252;
use std::fmt;

/// Analysing crystal identifier.
///
/// The name is stored reversed in 4 bytes. Three-letter names ("TAP") carry
/// one padding byte, which after reversal lands in front; a non-printable
/// first byte therefore means "skip one byte" before reading the name back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XtalCode {
    pub raw: [u8; 4],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrystalFamily {
    Lif,
    Pet,
    Tap,
    Pc0,
    Pc1,
    Pc2,
    Pc3,
    Other,
}

impl XtalCode {
    pub fn read(cursor: &mut ByteCursor) -> Result<Self> {
        Ok(XtalCode {
            raw: cursor.read_array::<4>()?,
        })
    }

    fn has_padding_byte(&self) -> bool {
        !(0x20..=0x7E).contains(&self.raw[0])
    }

    /// Crystal name as shown by Peaksight, e.g. `LPET` or `TAP`.
    pub fn full_name(&self) -> String {
        let stored = if self.has_padding_byte() {
            &self.raw[1..]
        } else {
            &self.raw[..]
        };
        let forward: Vec<u8> = stored.iter().rev().copied().collect();
        decode_cp1252(&forward).trim_end_matches('\0').to_string()
    }

    /// Large-area variants carry an `L` prefix (`LPET`, `LLIF`).
    pub fn is_large(&self) -> bool {
        let name = self.full_name();
        name.len() == 4 && name.starts_with('L') && Self::family_of(&name[1..]) != CrystalFamily::Other
    }

    pub fn family(&self) -> CrystalFamily {
        let name = self.full_name().to_ascii_uppercase();
        match Self::family_of(&name) {
            CrystalFamily::Other if name.starts_with('L') => Self::family_of(&name[1..]),
            family => family,
        }
    }

    fn family_of(name: &str) -> CrystalFamily {
        match name {
            "LIF" => CrystalFamily::Lif,
            "PET" => CrystalFamily::Pet,
            "TAP" => CrystalFamily::Tap,
            "PC0" => CrystalFamily::Pc0,
            "PC1" => CrystalFamily::Pc1,
            "PC2" => CrystalFamily::Pc2,
            "PC3" => CrystalFamily::Pc3,
            _ => CrystalFamily::Other,
        }
    }
}

impl fmt::Display for XtalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_printable_lead_no_skip() {
        let xtal = XtalCode { raw: *b"TEPL" };
        assert_eq!(xtal.full_name(), "LPET");
        assert_eq!(xtal.family(), CrystalFamily::Pet);
        assert!(xtal.is_large());
    }

    #[test]
    fn test_non_printable_lead_skips_one_byte() {
        let xtal = XtalCode { raw: *b"\x00PAT" };
        assert_eq!(xtal.full_name(), "TAP");
        assert_eq!(xtal.family(), CrystalFamily::Tap);
        assert!(!xtal.is_large());

        // the padding byte is not always zero
        let xtal = XtalCode { raw: [0x01, b'F', b'I', b'L'] };
        assert_eq!(xtal.full_name(), "LIF");
        assert_eq!(xtal.family(), CrystalFamily::Lif);
        assert!(!xtal.is_large());
    }

    #[test]
    fn test_large_lif_and_unknown() {
        assert_eq!(XtalCode { raw: *b"FILL" }.family(), CrystalFamily::Lif);
        assert!(XtalCode { raw: *b"FILL" }.is_large());
        assert_eq!(XtalCode { raw: *b"\x000CP" }.family(), CrystalFamily::Pc0);
        assert_eq!(XtalCode { raw: *b"ZZZZ" }.family(), CrystalFamily::Other);
    }

    proptest! {
        #[test]
        fn prop_reversed_storage_reads_back(name in "[A-Z0-9]{3,4}") {
            let mut raw = [0u8; 4];
            let reversed: Vec<u8> = name.bytes().rev().collect();
            raw[4 - reversed.len()..].copy_from_slice(&reversed);
            prop_assert_eq!(XtalCode { raw }.full_name(), name);
        }
    }
}
