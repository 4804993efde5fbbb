// src/primitives/mod.rs
//! Fixed-layout value types shared by all SXF record families.

mod counter;
mod element;
mod strings;
mod time;
mod xtal;

pub use counter::CounterSetting;
pub use element::ElementCode;
pub use strings::read_csharp_string;
pub use time::{Age, FileTime, SpaceTime, StagePosition};
pub use xtal::{CrystalFamily, XtalCode};
