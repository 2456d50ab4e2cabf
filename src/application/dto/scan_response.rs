use crate::attestation_scan::domain::Report;

/// Output DTO of the attestation scan use case.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResponse {
    pub report: Report,
}
