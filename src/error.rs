/// Unrecoverable decoding and fetch errors
///
/// The decoding functions only ever produce the two structural variants, and
/// only for the single report being decoded. Unknown codes and malformed
/// optional fields degrade to `None` instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid NOTAM header: {line:?}")]
    HeaderFormat { line: String },

    #[error("Invalid NOTAM qualifier line: {payload:?}")]
    QualifierFormat { payload: String },

    #[error("{report_type} is not a valid report type for {service}")]
    InvalidReportType {
        report_type: String,
        service: &'static str,
    },

    #[error("Unable to fetch reports for {station}: {message}")]
    Fetch { station: String, message: String },
}

impl Error {
    pub(crate) fn header_format(line: impl Into<String>) -> Self {
        Self::HeaderFormat { line: line.into() }
    }

    pub(crate) fn qualifier_format(payload: impl Into<String>) -> Self {
        Self::QualifierFormat {
            payload: payload.into(),
        }
    }

    /// Returns `true` for errors that are fatal to a single report only
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::HeaderFormat { .. } | Self::QualifierFormat { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
