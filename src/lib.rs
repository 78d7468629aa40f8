#![doc = include_str!("../README.md")]

pub use crate::error::{Error, Result};
pub use crate::parse::{parse, parse_with_units, split_reports};
pub use crate::station::{IngestReport, Notams, ReportFailure};
pub use crate::types::*;

mod error;
pub mod parse;
pub mod service;
mod station;
mod types;
pub mod utils;
