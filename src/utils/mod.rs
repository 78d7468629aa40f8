//! Helpers for getting report text into the decoder

mod text;

pub use self::text::decode_report_bytes;
