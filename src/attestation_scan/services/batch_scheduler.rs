use crate::attestation_scan::domain::{AttestationRecord, PackageRef};
use crate::ports::outbound::{AttestationResolver, ProgressReporter};
use futures::future::join_all;
use std::time::Duration;

/// BatchScheduler - drives the attestation resolver over the full list
///
/// Partitions the ranked list into consecutive fixed-size batches,
/// preserving order. Within a batch every member resolves concurrently
/// and the scheduler waits for all of them to settle; across batches
/// execution is strictly sequential with an enforced delay, skipped
/// after the final batch. Packages that resolve to `None` are filtered
/// out; the surviving records keep their original relative order. A
/// single member failing never fails its batch.
pub struct BatchScheduler {
    batch_size: usize,
    batch_delay: Duration,
}

impl BatchScheduler {
    const BATCH_SIZE: usize = 10;
    const BATCH_DELAY_MS: u64 = 1000;

    /// Creates a scheduler with the default settings (10 per batch, 1s delay)
    pub fn new() -> Self {
        Self::with_settings(Self::BATCH_SIZE, Duration::from_millis(Self::BATCH_DELAY_MS))
    }

    /// Creates a scheduler with explicit batch size and inter-batch delay
    ///
    /// # Panics
    /// Panics if `batch_size` is zero.
    pub fn with_settings(batch_size: usize, batch_delay: Duration) -> Self {
        assert!(batch_size > 0, "batch size must be at least 1");
        Self {
            batch_size,
            batch_delay,
        }
    }

    /// Resolves every package, batch by batch, reporting progress after
    /// each batch settles.
    pub async fn run<R, P>(
        &self,
        packages: &[PackageRef],
        resolver: &R,
        progress: &P,
    ) -> Vec<AttestationRecord>
    where
        R: AttestationResolver,
        P: ProgressReporter,
    {
        let total = packages.len();
        let batch_count = packages.len().div_ceil(self.batch_size).max(1);
        let mut records: Vec<AttestationRecord> = Vec::with_capacity(total);
        let mut processed = 0;

        for (index, batch) in packages.chunks(self.batch_size).enumerate() {
            let results = join_all(batch.iter().map(|pkg| resolver.resolve(pkg))).await;

            processed += batch.len();
            records.extend(results.into_iter().flatten());
            progress.report_progress(processed, total, Some("checking attestations"));

            if index + 1 < batch_count {
                tokio::time::sleep(self.batch_delay).await;
            }
        }

        records
    }
}

impl Default for BatchScheduler {
    fn default() -> Self {
        Self::new()
    }
}
