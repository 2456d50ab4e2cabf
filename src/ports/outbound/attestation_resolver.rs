use crate::attestation_scan::domain::{AttestationRecord, PackageRef};
use async_trait::async_trait;

/// AttestationResolver port for resolving one package's attestation status
///
/// Implementations choose what a lookup failure means: the version-scoped
/// strategy degrades to a partial record where it can, while the
/// full-document strategy drops the package. Either way a failure is
/// expressed as `None`, never as an error — a single package must not be
/// able to abort a batch.
#[async_trait]
pub trait AttestationResolver: Send + Sync {
    async fn resolve(&self, package: &PackageRef) -> Option<AttestationRecord>;
}
