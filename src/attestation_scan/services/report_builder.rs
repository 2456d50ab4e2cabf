use crate::attestation_scan::domain::{
    is_supported_platform, AttestationRecord, RankedEntry, Report, ReportSummary,
};
use chrono::{DateTime, SecondsFormat, Utc};

/// ReportBuilder - aggregates resolved records into the report artifact
///
/// Ranks are assigned 1-based over the records as given, which is the
/// post-filter order: a package dropped during resolution never occupies
/// a rank. Records are not re-sorted.
pub struct ReportBuilder;

impl ReportBuilder {
    /// Builds a report stamped with the current time.
    pub fn build(records: Vec<AttestationRecord>) -> Report {
        Self::build_at(records, Utc::now())
    }

    /// Builds a report with an explicit generation timestamp.
    pub fn build_at(records: Vec<AttestationRecord>, generated_at: DateTime<Utc>) -> Report {
        let total_packages = records.len();
        let packages_with_attestations =
            records.iter().filter(|r| r.has_attestations()).count();

        let packages: Vec<RankedEntry> = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| RankedEntry {
                rank: index + 1,
                is_supported_platform: is_supported_platform(&record.repository_url),
                package: record.package,
                version: record.version,
                last_uploaded: record.last_uploaded,
                attestations_url: record.attestations_url,
                trusted_publisher_id: record.trusted_publisher_id,
                repository_url: record.repository_url,
            })
            .collect();

        Report {
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            summary: ReportSummary {
                total_packages,
                packages_with_attestations,
                attestation_percentage: Self::percentage(
                    packages_with_attestations,
                    total_packages,
                ),
            },
            packages,
        }
    }

    /// Percentage rounded to one decimal place; an empty report is 0.0
    /// rather than a division by zero.
    fn percentage(count: usize, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        let raw = count as f64 / total as f64 * 100.0;
        (raw * 10.0).round() / 10.0
    }
}
