/// The resolved attestation status of a single package.
///
/// Absent or unknown fields are normalized to the empty string rather than
/// left as `Option`, so the downstream display page can filter on them
/// without null checks. One record per package, never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttestationRecord {
    pub package: String,
    pub version: String,
    pub last_uploaded: String,
    pub attestations_url: String,
    pub trusted_publisher_id: String,
    pub repository_url: String,
}

impl AttestationRecord {
    /// True when the registry served a provenance attestation for this
    /// package's resolved version.
    pub fn has_attestations(&self) -> bool {
        !self.attestations_url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(attestations_url: &str) -> AttestationRecord {
        AttestationRecord {
            package: "sigstore".to_string(),
            version: "3.0.0".to_string(),
            last_uploaded: "2025-01-01T00:00:00.000Z".to_string(),
            attestations_url: attestations_url.to_string(),
            trusted_publisher_id: String::new(),
            repository_url: String::new(),
        }
    }

    #[test]
    fn test_has_attestations_with_url() {
        let rec = record("https://registry.npmjs.org/-/npm/v1/attestations/sigstore@3.0.0");
        assert!(rec.has_attestations());
    }

    #[test]
    fn test_has_attestations_empty() {
        assert!(!record("").has_attestations());
    }
}
