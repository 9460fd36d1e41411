//! Loading fee inputs from text: raw form values and batch CSV files.

pub mod coerce;
pub mod loader;

pub use coerce::{parse_fee, parse_input};
pub use loader::{InputLoader, InputLoaderError, LabeledInput};
