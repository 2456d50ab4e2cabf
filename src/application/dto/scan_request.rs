/// Input DTO for the attestation scan use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    /// Number of top-ranked packages to scan
    pub limit: usize,
    /// Registry name shown in progress output (e.g. `npmjs.org`)
    pub registry: String,
}

impl ScanRequest {
    pub fn new(limit: usize, registry: impl Into<String>) -> Self {
        Self {
            limit,
            registry: registry.into(),
        }
    }
}
