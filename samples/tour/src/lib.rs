//! Tour of the `dictionaries` library.
//!
//! Replays the airport dictionary walkthrough step by step and logs the
//! state of the dictionary after each operation.

pub mod config;
pub mod walkthrough;

pub use config::{ConfigError, LogFormat, TourConfig};
pub use walkthrough::{Step, StepOutcome, Tour};
