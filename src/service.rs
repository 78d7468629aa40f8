//! Interface for fetching raw report text
//!
//! The decoding core does no I/O itself. Implementors of [`Service`] or
//! [`AsyncService`] retrieve the text for a station and own their timeout
//! and retry policy.

use crate::error::{Error, Result};
use std::time::Duration;

/// Timeout used when a service does not configure one
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Report type handled by [`crate::Notams`]
pub const NOTAM_REPORT_TYPE: &str = "notam";

/// Construction-time settings shared by all services
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub report_type: String,
    pub timeout: Duration,
}

impl ServiceConfig {
    /// Create a config after checking `report_type` against `valid_types`
    pub fn new(
        report_type: impl Into<String>,
        valid_types: &[&str],
        service: &'static str,
    ) -> Result<Self> {
        let report_type = report_type.into();
        validate_report_type(&report_type, valid_types, service)?;

        Ok(Self {
            report_type,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Override the fetch timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Check `report_type` against the types a service can fetch
///
/// An empty `valid_types` list accepts any report type.
pub fn validate_report_type(
    report_type: &str,
    valid_types: &[&str],
    service: &'static str,
) -> Result<()> {
    if valid_types.is_empty() || valid_types.contains(&report_type) {
        return Ok(());
    }

    Err(Error::InvalidReportType {
        report_type: report_type.to_string(),
        service,
    })
}

/// Blocking report source
pub trait Service {
    fn config(&self) -> &ServiceConfig;

    fn report_type(&self) -> &str {
        &self.config().report_type
    }

    /// Fetch the raw report text for a station
    fn fetch(&self, station: &str, timeout: Duration) -> Result<String>;
}

/// Non-blocking report source
#[async_trait::async_trait]
pub trait AsyncService: Send + Sync {
    fn config(&self) -> &ServiceConfig;

    fn report_type(&self) -> &str {
        &self.config().report_type
    }

    /// Fetch the raw report text for a station
    async fn async_fetch(&self, station: &str, timeout: Duration) -> Result<String>;
}
