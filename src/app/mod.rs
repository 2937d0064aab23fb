//! Application shell

mod builder;
mod shell;

pub use builder::{Roadsign, RoadsignBuilder};
pub use shell::{App, DigitScreen, ScanScreen};
