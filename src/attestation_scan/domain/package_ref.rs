/// A package as listed by the ranking API, in descending-download order.
///
/// The ranking API denormalizes a few registry fields into its package
/// summaries; when present they let the version-scoped resolver skip the
/// full package document. A `PackageRef` is immutable once listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRef {
    /// Registry package name (may be scoped, e.g. `@types/node`)
    pub name: String,
    /// Repository URL as known to the ranking API, if any
    pub repository_url: Option<String>,
    /// Latest published version number, if the ranking API knew it
    pub latest_version: Option<String>,
    /// Publish timestamp of the latest version, if known
    pub published_at: Option<String>,
}

impl PackageRef {
    /// Creates a bare reference with only a name, no denormalized metadata.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            repository_url: None,
            latest_version: None,
            published_at: None,
        }
    }

    pub fn with_latest_version(mut self, version: impl Into<String>) -> Self {
        self.latest_version = Some(version.into());
        self
    }

    pub fn with_repository_url(mut self, url: impl Into<String>) -> Self {
        self.repository_url = Some(url.into());
        self
    }

    pub fn with_published_at(mut self, timestamp: impl Into<String>) -> Self {
        self.published_at = Some(timestamp.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_ref_has_no_metadata() {
        let pkg = PackageRef::new("express");
        assert_eq!(pkg.name, "express");
        assert!(pkg.repository_url.is_none());
        assert!(pkg.latest_version.is_none());
        assert!(pkg.published_at.is_none());
    }

    #[test]
    fn test_builder_methods() {
        let pkg = PackageRef::new("@types/node")
            .with_latest_version("22.0.0")
            .with_repository_url("https://github.com/DefinitelyTyped/DefinitelyTyped")
            .with_published_at("2025-06-01T00:00:00.000Z");
        assert_eq!(pkg.latest_version.as_deref(), Some("22.0.0"));
        assert_eq!(
            pkg.repository_url.as_deref(),
            Some("https://github.com/DefinitelyTyped/DefinitelyTyped")
        );
        assert_eq!(pkg.published_at.as_deref(), Some("2025-06-01T00:00:00.000Z"));
    }
}
