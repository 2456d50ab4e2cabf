use crate::application::dto::{ScanRequest, ScanResponse};
use crate::attestation_scan::services::{BatchScheduler, ReportBuilder};
use crate::ports::outbound::{AttestationResolver, PackageLister, ProgressReporter};
use crate::shared::Result;

/// ScanAttestationsUseCase - core use case for report generation
///
/// Orchestrates the pipeline: list the top packages, resolve their
/// attestation status batch by batch, and aggregate the survivors into
/// the report. Infrastructure is injected through the outbound ports.
///
/// # Type Parameters
/// * `L` - PackageLister implementation
/// * `R` - AttestationResolver implementation (the run's strategy)
/// * `P` - ProgressReporter implementation
pub struct ScanAttestationsUseCase<L, R, P> {
    lister: L,
    resolver: R,
    progress_reporter: P,
    scheduler: BatchScheduler,
}

impl<L, R, P> ScanAttestationsUseCase<L, R, P>
where
    L: PackageLister,
    R: AttestationResolver,
    P: ProgressReporter,
{
    /// Creates a new use case with injected dependencies and the default
    /// batch schedule
    pub fn new(lister: L, resolver: R, progress_reporter: P) -> Self {
        Self::with_scheduler(lister, resolver, progress_reporter, BatchScheduler::new())
    }

    /// Creates a new use case with an explicit batch scheduler
    pub fn with_scheduler(
        lister: L,
        resolver: R,
        progress_reporter: P,
        scheduler: BatchScheduler,
    ) -> Self {
        Self {
            lister,
            resolver,
            progress_reporter,
            scheduler,
        }
    }

    /// Executes the scan.
    ///
    /// # Errors
    /// Fails only when the ranked package list cannot be produced; a
    /// per-package resolution failure merely omits that package.
    pub async fn execute(&self, request: ScanRequest) -> Result<ScanResponse> {
        self.progress_reporter.report(&format!(
            "📖 Listing top {} package(s) from {}",
            request.limit, request.registry
        ));

        let packages = self.lister.list_top(request.limit).await?;
        self.progress_reporter
            .report(&format!("✅ Listed {} package(s)", packages.len()));

        let records = self
            .scheduler
            .run(&packages, &self.resolver, &self.progress_reporter)
            .await;

        let dropped = packages.len() - records.len();
        if dropped > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} package(s) could not be resolved and were omitted.",
                dropped
            ));
        }

        let report = ReportBuilder::build(records);
        self.progress_reporter.report_completion(&format!(
            "✅ {} of {} package(s) carry attestations ({}%)",
            report.summary.packages_with_attestations,
            report.summary.total_packages,
            report.summary.attestation_percentage
        ));

        Ok(ScanResponse { report })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attestation_scan::domain::{AttestationRecord, PackageRef};
    use crate::attestation_scan::services::BatchScheduler;
    use crate::ports::outbound::SilentProgressReporter;
    use async_trait::async_trait;
    use std::time::Duration;

    struct FixedLister {
        names: Vec<&'static str>,
    }

    #[async_trait]
    impl PackageLister for FixedLister {
        async fn list_top(&self, limit: usize) -> Result<Vec<PackageRef>> {
            Ok(self
                .names
                .iter()
                .take(limit)
                .map(|name| PackageRef::new(*name))
                .collect())
        }
    }

    struct FailingLister;

    #[async_trait]
    impl PackageLister for FailingLister {
        async fn list_top(&self, _limit: usize) -> Result<Vec<PackageRef>> {
            anyhow::bail!("ranking API exhausted retries")
        }
    }

    /// Attests every package whose name starts with `signed`.
    struct StubResolver;

    #[async_trait]
    impl AttestationResolver for StubResolver {
        async fn resolve(&self, package: &PackageRef) -> Option<AttestationRecord> {
            if package.name == "dropped" {
                return None;
            }
            let attestations_url = if package.name.starts_with("signed") {
                format!("https://registry.test/-/attestations/{}", package.name)
            } else {
                String::new()
            };
            Some(AttestationRecord {
                package: package.name.clone(),
                version: "1.0.0".to_string(),
                last_uploaded: String::new(),
                attestations_url,
                trusted_publisher_id: String::new(),
                repository_url: String::new(),
            })
        }
    }

    fn use_case(
        names: Vec<&'static str>,
    ) -> ScanAttestationsUseCase<FixedLister, StubResolver, SilentProgressReporter> {
        ScanAttestationsUseCase::with_scheduler(
            FixedLister { names },
            StubResolver,
            SilentProgressReporter,
            BatchScheduler::with_settings(10, Duration::ZERO),
        )
    }

    #[tokio::test]
    async fn test_execute_builds_ranked_report() {
        let uc = use_case(vec!["signed-a", "plain-b", "signed-c"]);

        let response = uc.execute(ScanRequest::new(3, "npmjs.org")).await.unwrap();
        let report = response.report;
        assert_eq!(report.summary.total_packages, 3);
        assert_eq!(report.summary.packages_with_attestations, 2);
        assert_eq!(report.summary.attestation_percentage, 66.7);
        assert_eq!(report.packages[0].rank, 1);
        assert_eq!(report.packages[0].package, "signed-a");
        assert_eq!(report.packages[2].rank, 3);
    }

    #[tokio::test]
    async fn test_dropped_packages_shrink_the_report() {
        let uc = use_case(vec!["signed-a", "dropped", "plain-b"]);

        let response = uc.execute(ScanRequest::new(3, "npmjs.org")).await.unwrap();
        let report = response.report;
        assert_eq!(report.summary.total_packages, 2);
        // Ranks renumber over the survivors
        assert_eq!(report.packages[1].package, "plain-b");
        assert_eq!(report.packages[1].rank, 2);
    }

    #[tokio::test]
    async fn test_lister_failure_is_fatal() {
        let uc = ScanAttestationsUseCase::with_scheduler(
            FailingLister,
            StubResolver,
            SilentProgressReporter,
            BatchScheduler::with_settings(10, Duration::ZERO),
        );

        let result = uc.execute(ScanRequest::new(100, "npmjs.org")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_reports_identical_except_timestamp_across_runs() {
        let uc = use_case(vec!["signed-a", "plain-b"]);

        let first = uc.execute(ScanRequest::new(2, "npmjs.org")).await.unwrap().report;
        let second = uc.execute(ScanRequest::new(2, "npmjs.org")).await.unwrap().report;

        assert_eq!(first.summary, second.summary);
        assert_eq!(first.packages, second.packages);
    }
}
