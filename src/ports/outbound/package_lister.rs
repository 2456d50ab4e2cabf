use crate::attestation_scan::domain::PackageRef;
use crate::shared::Result;
use async_trait::async_trait;

/// PackageLister port for producing the ranked package list
///
/// Implementations return at most `limit` package references in
/// descending-download order. Failure to produce the list is fatal for
/// the run, so errors propagate.
#[async_trait]
pub trait PackageLister: Send + Sync {
    async fn list_top(&self, limit: usize) -> Result<Vec<PackageRef>>;
}
