//! attest-scan - attestation coverage reports for the top npm packages
//!
//! This library fetches metadata for the most-downloaded packages on a
//! registry, checks each for a supply-chain provenance attestation, and
//! aggregates the results into a JSON report, following hexagonal
//! architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`attestation_scan`): Pure pipeline logic and domain models
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use attest_scan::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let transport = ReqwestTransport::new()?;
//! let lister = RankingsClient::new(
//!     RetryingFetcher::new(transport.clone()),
//!     "https://packages.ecosyste.ms/api/v1".to_string(),
//!     "npmjs.org".to_string(),
//! );
//! let resolver = VersionScopedResolver::new(
//!     RetryingFetcher::new(transport),
//!     "https://registry.npmjs.org".to_string(),
//! );
//! let use_case = ScanAttestationsUseCase::new(lister, resolver, StderrProgressReporter::new());
//!
//! let response = use_case.execute(ScanRequest::new(500, "npmjs.org")).await?;
//! println!("{}", serde_json::to_string_pretty(&response.report)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod attestation_scan;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileReportWriter, StdoutPresenter};
    pub use crate::adapters::outbound::network::{
        FullDocumentResolver, RankingsClient, ReqwestTransport, RetryPolicy, RetryingFetcher,
        VersionScopedResolver,
    };
    pub use crate::application::dto::{ScanRequest, ScanResponse};
    pub use crate::application::use_cases::ScanAttestationsUseCase;
    pub use crate::attestation_scan::domain::{
        is_supported_platform, AttestationRecord, PackageRef, RankedEntry, Report, ReportSummary,
    };
    pub use crate::attestation_scan::services::{BatchScheduler, ReportBuilder};
    pub use crate::cli::Strategy;
    pub use crate::config::Settings;
    pub use crate::ports::outbound::{
        AttestationResolver, HttpResponse, HttpTransport, PackageLister, ProgressReporter,
        ReportPresenter, SilentProgressReporter,
    };
    pub use crate::shared::Result;
}
