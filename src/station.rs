use crate::error::{Error, Result};
use crate::parse::{parse_with_units, split_reports};
use crate::service::{AsyncService, NOTAM_REPORT_TYPE, Service};
use crate::types::{NotamData, Units};
use chrono::{DateTime, Utc};
use std::time::Duration;

/// The decoded NOTAMs of a single station
///
/// Every ingest replaces the whole record list. A batch in which no report
/// decodes leaves the previous records and update time untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Notams {
    icao: String,
    units: Units,
    last_updated: Option<DateTime<Utc>>,
    data: Vec<NotamData>,
}

/// Outcome of [`Notams::ingest_with_report`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IngestReport {
    /// Number of reports that decoded and were stored
    pub parsed: usize,
    /// Reports that were skipped, in input order
    pub failures: Vec<ReportFailure>,
}

impl IngestReport {
    /// Check if the ingest replaced the station's records
    pub fn is_updated(&self) -> bool {
        self.parsed > 0
    }
}

/// A report that failed to decode during ingest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFailure {
    /// Position of the report in the ingested batch
    pub index: usize,
    pub error: Error,
}

impl Notams {
    pub fn new(icao: impl Into<String>) -> Self {
        Self::with_units(icao, Units::default())
    }

    pub fn with_units(icao: impl Into<String>, units: Units) -> Self {
        Self {
            icao: icao.into(),
            units,
            last_updated: None,
            data: Vec::new(),
        }
    }

    pub fn icao(&self) -> &str {
        &self.icao
    }

    pub fn units(&self) -> &Units {
        &self.units
    }

    /// Wall-clock time of the last ingest that stored at least one record
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    /// Records of the last successful ingest, in input order
    pub fn data(&self) -> &[NotamData] {
        &self.data
    }

    /// Decode a batch of raw reports and replace the stored records
    ///
    /// Reports that fail to decode are skipped. Returns `true` if at least
    /// one report decoded.
    pub fn ingest<I>(&mut self, reports: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.ingest_with_report(reports).is_updated()
    }

    /// Same as [`Notams::ingest`], but also returns why reports were skipped
    pub fn ingest_with_report<I>(&mut self, reports: I) -> IngestReport
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut data = Vec::new();
        let mut failures = Vec::new();

        for (index, report) in reports.into_iter().enumerate() {
            match parse_with_units(report.as_ref(), &self.units) {
                Ok((notam, residuals)) => {
                    if !residuals.is_empty() {
                        tracing::debug!(
                            station = %self.icao,
                            index,
                            number = %notam.number,
                            ?residuals,
                            "NOTAM has undecoded content"
                        );
                    }
                    data.push(notam);
                }
                Err(error) => {
                    tracing::warn!(station = %self.icao, index, %error, "skipping NOTAM report");
                    failures.push(ReportFailure { index, error });
                }
            }
        }

        let report = IngestReport {
            parsed: data.len(),
            failures,
        };

        if report.is_updated() {
            self.data = data;
            self.last_updated = Some(Utc::now());
        }

        report
    }

    /// Fetch this station's reports from `service` and ingest them
    ///
    /// Uses the service's configured timeout unless `timeout` is given. A
    /// failed fetch leaves the station untouched.
    pub fn update<S>(&mut self, service: &S, timeout: Option<Duration>) -> Result<bool>
    where
        S: Service + ?Sized,
    {
        check_report_type(service.report_type())?;
        let timeout = timeout.unwrap_or(service.config().timeout);
        let text = service.fetch(&self.icao, timeout)?;
        Ok(self.ingest(split_reports(&text)))
    }

    /// Async version of [`Notams::update`]
    pub async fn async_update<S>(&mut self, service: &S, timeout: Option<Duration>) -> Result<bool>
    where
        S: AsyncService + ?Sized,
    {
        check_report_type(service.report_type())?;
        let timeout = timeout.unwrap_or(service.config().timeout);
        let text = service.async_fetch(&self.icao, timeout).await?;
        Ok(self.ingest(split_reports(&text)))
    }
}

fn check_report_type(report_type: &str) -> Result<()> {
    if report_type == NOTAM_REPORT_TYPE {
        return Ok(());
    }

    Err(Error::InvalidReportType {
        report_type: report_type.to_string(),
        service: "Notams",
    })
}
