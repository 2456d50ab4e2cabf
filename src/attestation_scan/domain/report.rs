use serde::Serialize;

/// The report artifact written once per run.
///
/// Field names and types are a stable contract with the static display
/// page, which reads the serialized JSON directly. Do not rename fields
/// without updating the consumer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Generation timestamp, ISO-8601 / RFC 3339
    pub generated_at: String,
    pub summary: ReportSummary,
    pub packages: Vec<RankedEntry>,
}

/// Aggregate statistics over the ranked entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub total_packages: usize,
    pub packages_with_attestations: usize,
    /// Percentage rounded to one decimal place; 0.0 for an empty report
    pub attestation_percentage: f64,
}

/// One package row in the report.
///
/// `rank` is the 1-based position in post-filter order. Packages dropped
/// during resolution never occupy a rank, so numbering can diverge from
/// the raw download rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub package: String,
    pub version: String,
    #[serde(rename = "lastUploaded")]
    pub last_uploaded: String,
    #[serde(rename = "attestationsUrl")]
    pub attestations_url: String,
    #[serde(rename = "trustedPublisherId")]
    pub trusted_publisher_id: String,
    #[serde(rename = "repositoryUrl")]
    pub repository_url: String,
    #[serde(rename = "isSupportedPlatform")]
    pub is_supported_platform: bool,
}
