use clap::Parser;

/// Which attestation resolution strategy a run uses.
///
/// Version-scoped fetches only the per-version metadata document (small
/// payload, degrades to a partial record when no version is known);
/// full-document fetches the whole package document and drops packages
/// whose latest tag cannot be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    VersionScoped,
    FullDocument,
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "version-scoped" | "version" => Ok(Strategy::VersionScoped),
            "full-document" | "full" => Ok(Strategy::FullDocument),
            _ => Err(format!(
                "Invalid strategy: {}. Please specify 'version-scoped' or 'full-document'",
                s
            )),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::VersionScoped => write!(f, "version-scoped"),
            Strategy::FullDocument => write!(f, "full-document"),
        }
    }
}

/// Generate an attestation coverage report for the top npm packages
#[derive(Parser, Debug)]
#[command(name = "attest-scan")]
#[command(version)]
#[command(
    about = "Generate an attestation coverage report for the top npm packages",
    long_about = None
)]
pub struct Args {
    /// Number of top-ranked packages to scan (defaults to 500)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Resolution strategy: version-scoped or full-document
    #[arg(short, long)]
    pub strategy: Option<Strategy>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Registry name as known to the ranking API
    #[arg(long)]
    pub registry: Option<String>,

    /// Base URL of the package ranking API
    #[arg(long = "rankings-url")]
    pub rankings_url: Option<String>,

    /// Base URL of the package registry
    #[arg(long = "registry-url")]
    pub registry_url: Option<String>,

    /// Path to a config file (defaults to ./attest-scan.config.yml if present)
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_strategy_from_str_version_scoped() {
        let strategy = Strategy::from_str("version-scoped").unwrap();
        assert_eq!(strategy, Strategy::VersionScoped);
    }

    #[test]
    fn test_strategy_from_str_short_aliases() {
        assert_eq!(Strategy::from_str("version").unwrap(), Strategy::VersionScoped);
        assert_eq!(Strategy::from_str("full").unwrap(), Strategy::FullDocument);
    }

    #[test]
    fn test_strategy_from_str_case_insensitive() {
        assert_eq!(
            Strategy::from_str("Version-Scoped").unwrap(),
            Strategy::VersionScoped
        );
        assert_eq!(
            Strategy::from_str("FULL-DOCUMENT").unwrap(),
            Strategy::FullDocument
        );
    }

    #[test]
    fn test_strategy_from_str_invalid() {
        let result = Strategy::from_str("both");
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.contains("Invalid strategy"));
        assert!(error.contains("version-scoped"));
        assert!(error.contains("full-document"));
    }

    #[test]
    fn test_strategy_from_str_empty() {
        assert!(Strategy::from_str("").is_err());
    }

    #[test]
    fn test_strategy_display_round_trips() {
        for strategy in [Strategy::VersionScoped, Strategy::FullDocument] {
            let parsed = Strategy::from_str(&strategy.to_string()).unwrap();
            assert_eq!(parsed, strategy);
        }
    }
}
