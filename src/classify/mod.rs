//! On-device road-sign classification.

mod scanner;
pub mod selector;

pub use scanner::{MODEL_INPUT_SIZE, ScanOptions, SignScanner, prepare_input};
pub use selector::select;
