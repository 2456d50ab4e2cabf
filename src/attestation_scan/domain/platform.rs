/// Platform support rules for the display page.
///
/// The display page can only link build provenance back to source for
/// hosting platforms it understands.

/// Returns true when the repository URL points at a supported hosting
/// platform (GitHub or GitLab).
///
/// Registry repository URLs commonly carry a `git+` scheme prefix and a
/// trailing `.git` suffix; both are stripped before matching.
pub fn is_supported_platform(repository_url: &str) -> bool {
    let normalized = repository_url
        .strip_prefix("git+")
        .unwrap_or(repository_url);
    let normalized = normalized.strip_suffix(".git").unwrap_or(normalized);

    normalized.contains("github.com") || normalized.contains("gitlab.com")
}
