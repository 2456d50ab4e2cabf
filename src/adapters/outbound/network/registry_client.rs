use crate::adapters::outbound::network::RetryingFetcher;
use crate::attestation_scan::domain::{AttestationRecord, PackageRef};
use crate::ports::outbound::{AttestationResolver, HttpTransport};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;

/// Per-version metadata document, also embedded in the full package
/// document's `versions` map.
#[derive(Debug, Deserialize)]
struct VersionDocument {
    #[serde(default)]
    dist: Option<Dist>,
    #[serde(rename = "_npmUser", default)]
    npm_user: Option<NpmUser>,
    #[serde(default)]
    repository: Option<Repository>,
}

#[derive(Debug, Deserialize)]
struct Dist {
    #[serde(default)]
    attestations: Option<Attestations>,
}

#[derive(Debug, Deserialize)]
struct Attestations {
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NpmUser {
    #[serde(rename = "trustedPublisher", default)]
    trusted_publisher: Option<TrustedPublisher>,
}

#[derive(Debug, Deserialize)]
struct TrustedPublisher {
    #[serde(default)]
    id: Option<String>,
}

/// The registry serves `repository` either as a plain URL string or as
/// an object with a `url` field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Repository {
    Url(String),
    Object {
        #[serde(default)]
        url: Option<String>,
    },
}

impl Repository {
    fn into_url(self) -> Option<String> {
        match self {
            Repository::Url(url) => Some(url),
            Repository::Object { url } => url,
        }
    }
}

/// Full package metadata document.
#[derive(Debug, Deserialize)]
struct PackageDocument {
    #[serde(rename = "dist-tags", default)]
    dist_tags: HashMap<String, String>,
    #[serde(default)]
    versions: HashMap<String, VersionDocument>,
    #[serde(default)]
    time: HashMap<String, String>,
}

impl VersionDocument {
    /// Flattens the nested optional metadata into record fields,
    /// normalizing everything absent to the empty string.
    fn into_record(
        self,
        package: &str,
        version: &str,
        last_uploaded: String,
        fallback_repository_url: Option<&str>,
    ) -> AttestationRecord {
        let attestations_url = self
            .dist
            .and_then(|d| d.attestations)
            .and_then(|a| a.url)
            .unwrap_or_default();
        let trusted_publisher_id = self
            .npm_user
            .and_then(|u| u.trusted_publisher)
            .and_then(|p| p.id)
            .unwrap_or_default();
        let repository_url = self
            .repository
            .and_then(Repository::into_url)
            .or_else(|| fallback_repository_url.map(str::to_string))
            .unwrap_or_default();

        AttestationRecord {
            package: package.to_string(),
            version: version.to_string(),
            last_uploaded,
            attestations_url,
            trusted_publisher_id,
            repository_url,
        }
    }
}

/// Package names may be scoped (`@scope/name`); the registry accepts the
/// separator percent-encoded, which also keeps the path unambiguous.
fn encoded_name(name: &str) -> String {
    urlencoding::encode(name).into_owned()
}

/// VersionScopedResolver - resolves attestation status from the
/// per-version metadata document
///
/// Fetches only `{registry}/{name}/{version}`, a much smaller payload
/// than the full package document. When the ranking API supplied no
/// latest version, the package is still recorded — with empty version,
/// attestation and publisher fields but its known publish timestamp and
/// repository URL preserved — rather than paying for the full document.
pub struct VersionScopedResolver<T> {
    fetcher: RetryingFetcher<T>,
    registry_url: String,
}

impl<T: HttpTransport> VersionScopedResolver<T> {
    pub fn new(fetcher: RetryingFetcher<T>, registry_url: String) -> Self {
        Self {
            fetcher,
            registry_url,
        }
    }
}

#[async_trait]
impl<T: HttpTransport> AttestationResolver for VersionScopedResolver<T> {
    async fn resolve(&self, package: &PackageRef) -> Option<AttestationRecord> {
        let last_uploaded = package.published_at.clone().unwrap_or_default();

        let Some(version) = package.latest_version.as_deref() else {
            // No known version: emit a partial record instead of fetching
            // the full document.
            return Some(AttestationRecord {
                package: package.name.clone(),
                version: String::new(),
                last_uploaded,
                attestations_url: String::new(),
                trusted_publisher_id: String::new(),
                repository_url: package.repository_url.clone().unwrap_or_default(),
            });
        };

        let url = format!(
            "{}/{}/{}",
            self.registry_url,
            encoded_name(&package.name),
            urlencoding::encode(version)
        );
        let doc: VersionDocument = self.fetcher.fetch_json(&url).await.ok()?;

        Some(doc.into_record(
            &package.name,
            version,
            last_uploaded,
            package.repository_url.as_deref(),
        ))
    }
}

/// FullDocumentResolver - resolves attestation status from the full
/// package metadata document
///
/// Fetches `{registry}/{name}`, follows the `dist-tags.latest` pointer
/// into the `versions` map and reads the publish timestamp from the
/// `time` map. There is no cheap partial alternative here, so a missing
/// tag or version entry drops the package from the report entirely.
pub struct FullDocumentResolver<T> {
    fetcher: RetryingFetcher<T>,
    registry_url: String,
}

impl<T: HttpTransport> FullDocumentResolver<T> {
    pub fn new(fetcher: RetryingFetcher<T>, registry_url: String) -> Self {
        Self {
            fetcher,
            registry_url,
        }
    }
}

#[async_trait]
impl<T: HttpTransport> AttestationResolver for FullDocumentResolver<T> {
    async fn resolve(&self, package: &PackageRef) -> Option<AttestationRecord> {
        let url = format!("{}/{}", self.registry_url, encoded_name(&package.name));
        let mut doc: PackageDocument = self.fetcher.fetch_json(&url).await.ok()?;

        let latest = doc.dist_tags.remove("latest")?;
        let version_doc = doc.versions.remove(&latest)?;
        let last_uploaded = doc.time.remove(&latest).unwrap_or_default();

        Some(version_doc.into_record(
            &package.name,
            &latest,
            last_uploaded,
            package.repository_url.as_deref(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::HttpResponse;
    use crate::shared::Result;
    use std::sync::{Arc, Mutex};

    /// Transport that records requested URLs and replays canned responses.
    struct CannedTransport {
        responses: Mutex<Vec<HttpResponse>>,
        urls: Arc<Mutex<Vec<String>>>,
    }

    impl CannedTransport {
        fn new(responses: Vec<HttpResponse>) -> (Self, Arc<Mutex<Vec<String>>>) {
            let urls = Arc::new(Mutex::new(Vec::new()));
            let transport = Self {
                responses: Mutex::new(responses),
                urls: Arc::clone(&urls),
            };
            (transport, urls)
        }
    }

    #[async_trait]
    impl HttpTransport for CannedTransport {
        async fn get(&self, url: &str) -> Result<HttpResponse> {
            self.urls.lock().unwrap().push(url.to_string());
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                anyhow::bail!("no canned response left");
            }
            Ok(responses.remove(0))
        }
    }

    const REGISTRY: &str = "https://registry.test";

    fn version_body() -> &'static str {
        r#"{
            "name": "sigstore",
            "version": "3.0.0",
            "dist": {
                "tarball": "https://registry.test/sigstore/-/sigstore-3.0.0.tgz",
                "attestations": {
                    "url": "https://registry.test/-/npm/v1/attestations/sigstore@3.0.0"
                }
            },
            "_npmUser": {
                "name": "npm-ci",
                "trustedPublisher": { "id": "github-actions" }
            },
            "repository": {
                "type": "git",
                "url": "git+https://github.com/sigstore/sigstore-js.git"
            }
        }"#
    }

    fn version_scoped(
        responses: Vec<HttpResponse>,
    ) -> (VersionScopedResolver<CannedTransport>, Arc<Mutex<Vec<String>>>) {
        let (transport, urls) = CannedTransport::new(responses);
        let resolver =
            VersionScopedResolver::new(RetryingFetcher::new(transport), REGISTRY.to_string());
        (resolver, urls)
    }

    fn full_document(responses: Vec<HttpResponse>) -> FullDocumentResolver<CannedTransport> {
        let (transport, _) = CannedTransport::new(responses);
        FullDocumentResolver::new(RetryingFetcher::new(transport), REGISTRY.to_string())
    }

    #[tokio::test]
    async fn test_version_scoped_extracts_all_fields() {
        let (resolver, _) = version_scoped(vec![HttpResponse::new(200, version_body())]);
        let pkg = PackageRef::new("sigstore")
            .with_latest_version("3.0.0")
            .with_published_at("2025-01-15T12:00:00.000Z");

        let record = resolver.resolve(&pkg).await.unwrap();
        assert_eq!(record.package, "sigstore");
        assert_eq!(record.version, "3.0.0");
        assert_eq!(record.last_uploaded, "2025-01-15T12:00:00.000Z");
        assert_eq!(
            record.attestations_url,
            "https://registry.test/-/npm/v1/attestations/sigstore@3.0.0"
        );
        assert_eq!(record.trusted_publisher_id, "github-actions");
        assert_eq!(
            record.repository_url,
            "git+https://github.com/sigstore/sigstore-js.git"
        );
        assert!(record.has_attestations());
    }

    #[tokio::test]
    async fn test_version_scoped_without_known_version_emits_partial_record() {
        let (resolver, urls) = version_scoped(vec![]);
        let pkg = PackageRef::new("legacy-pkg")
            .with_repository_url("https://github.com/legacy/pkg")
            .with_published_at("2019-03-01T00:00:00.000Z");

        let record = resolver.resolve(&pkg).await.unwrap();
        assert_eq!(record.version, "");
        assert_eq!(record.attestations_url, "");
        assert_eq!(record.trusted_publisher_id, "");
        assert_eq!(record.last_uploaded, "2019-03-01T00:00:00.000Z");
        assert_eq!(record.repository_url, "https://github.com/legacy/pkg");
        // And no fetch happened
        assert!(urls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_version_scoped_fetch_error_yields_no_record() {
        let (resolver, _) = version_scoped(vec![HttpResponse::new(404, "")]);
        let pkg = PackageRef::new("ghost").with_latest_version("1.0.0");

        assert!(resolver.resolve(&pkg).await.is_none());
    }

    #[tokio::test]
    async fn test_version_scoped_encodes_scoped_names() {
        let (resolver, urls) = version_scoped(vec![HttpResponse::new(200, "{}")]);
        let pkg = PackageRef::new("@types/node").with_latest_version("22.0.0");

        resolver.resolve(&pkg).await.unwrap();
        assert_eq!(
            urls.lock().unwrap()[0],
            "https://registry.test/%40types%2Fnode/22.0.0"
        );
    }

    #[tokio::test]
    async fn test_version_scoped_missing_fields_normalize_to_empty() {
        let (resolver, _) = version_scoped(vec![HttpResponse::new(200, r#"{"version":"2.0.0"}"#)]);
        let pkg = PackageRef::new("bare").with_latest_version("2.0.0");

        let record = resolver.resolve(&pkg).await.unwrap();
        assert_eq!(record.attestations_url, "");
        assert_eq!(record.trusted_publisher_id, "");
        assert_eq!(record.repository_url, "");
        assert_eq!(record.last_uploaded, "");
    }

    #[tokio::test]
    async fn test_full_document_follows_latest_tag() {
        let body = format!(
            r#"{{
                "name": "sigstore",
                "dist-tags": {{ "latest": "3.0.0", "next": "4.0.0-beta.1" }},
                "versions": {{ "3.0.0": {} }},
                "time": {{
                    "created": "2021-01-01T00:00:00.000Z",
                    "3.0.0": "2025-01-15T12:00:00.000Z"
                }}
            }}"#,
            version_body()
        );
        let resolver = full_document(vec![HttpResponse::new(200, body)]);

        let record = resolver.resolve(&PackageRef::new("sigstore")).await.unwrap();
        assert_eq!(record.version, "3.0.0");
        assert_eq!(record.last_uploaded, "2025-01-15T12:00:00.000Z");
        assert_eq!(record.trusted_publisher_id, "github-actions");
        assert!(record.has_attestations());
    }

    #[tokio::test]
    async fn test_full_document_missing_latest_tag_drops_package() {
        let body = r#"{"dist-tags": {}, "versions": {"1.0.0": {}}, "time": {}}"#;
        let resolver = full_document(vec![HttpResponse::new(200, body)]);

        assert!(resolver.resolve(&PackageRef::new("untagged")).await.is_none());
    }

    #[tokio::test]
    async fn test_full_document_tag_without_version_entry_drops_package() {
        let body = r#"{"dist-tags": {"latest": "2.0.0"}, "versions": {"1.0.0": {}}, "time": {}}"#;
        let resolver = full_document(vec![HttpResponse::new(200, body)]);

        assert!(resolver.resolve(&PackageRef::new("skewed")).await.is_none());
    }

    #[tokio::test]
    async fn test_full_document_malformed_json_drops_package() {
        let resolver = full_document(vec![HttpResponse::new(200, "<html>oops</html>")]);

        assert!(resolver.resolve(&PackageRef::new("broken")).await.is_none());
    }

    #[tokio::test]
    async fn test_repository_as_plain_string() {
        let body = r#"{"version":"1.0.0","repository":"github:foo/bar"}"#;
        let (resolver, _) = version_scoped(vec![HttpResponse::new(200, body)]);
        let pkg = PackageRef::new("shorthand").with_latest_version("1.0.0");

        let record = resolver.resolve(&pkg).await.unwrap();
        assert_eq!(record.repository_url, "github:foo/bar");
    }
}
