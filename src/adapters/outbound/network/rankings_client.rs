use crate::adapters::outbound::network::RetryingFetcher;
use crate::attestation_scan::domain::PackageRef;
use crate::ports::outbound::{HttpTransport, PackageLister};
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// A package summary as returned by the ranking API.
///
/// The ranking API denormalizes a few registry fields into its listing;
/// they are carried on the `PackageRef` so the version-scoped resolver
/// can avoid a second lookup.
#[derive(Debug, Deserialize)]
struct RankedPackage {
    name: String,
    #[serde(default)]
    repository_url: Option<String>,
    #[serde(default)]
    latest_release_number: Option<String>,
    #[serde(default)]
    latest_release_published_at: Option<String>,
}

impl From<RankedPackage> for PackageRef {
    fn from(pkg: RankedPackage) -> Self {
        PackageRef {
            name: pkg.name,
            repository_url: pkg.repository_url,
            latest_version: pkg.latest_release_number,
            published_at: pkg.latest_release_published_at,
        }
    }
}

/// RankingsClient adapter for the package ranking API
///
/// Implements the PackageLister port by paginating the ranking API in
/// fixed-size pages, sorted by downloads descending. Pagination stops
/// early when a page comes back short (end of available data), and a
/// fixed delay between page requests respects the upstream rate limit.
pub struct RankingsClient<T> {
    fetcher: RetryingFetcher<T>,
    base_url: String,
    registry: String,
    page_delay: Duration,
}

impl<T: HttpTransport> RankingsClient<T> {
    const PAGE_SIZE: usize = 100;
    const PAGE_DELAY_MS: u64 = 500;

    pub fn new(fetcher: RetryingFetcher<T>, base_url: String, registry: String) -> Self {
        Self {
            fetcher,
            base_url,
            registry,
            page_delay: Duration::from_millis(Self::PAGE_DELAY_MS),
        }
    }

    fn page_url(&self, page: usize) -> String {
        format!(
            "{}/registries/{}/packages?per_page={}&page={}&order=desc&sort=downloads",
            self.base_url,
            self.registry,
            Self::PAGE_SIZE,
            page
        )
    }
}

#[async_trait]
impl<T: HttpTransport> PackageLister for RankingsClient<T> {
    async fn list_top(&self, limit: usize) -> Result<Vec<PackageRef>> {
        let pages = limit.div_ceil(Self::PAGE_SIZE);
        let mut refs: Vec<PackageRef> = Vec::with_capacity(limit);

        for page in 1..=pages {
            let items: Vec<RankedPackage> = self.fetcher.fetch_json(&self.page_url(page)).await?;
            let short_page = items.len() < Self::PAGE_SIZE;
            refs.extend(items.into_iter().map(PackageRef::from));

            if short_page {
                break;
            }
            if page < pages {
                tokio::time::sleep(self.page_delay).await;
            }
        }

        refs.truncate(limit);
        Ok(refs)
    }
}
