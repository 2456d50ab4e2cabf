pub mod attestation_record;
pub mod package_ref;
pub mod platform;
pub mod report;

pub use attestation_record::AttestationRecord;
pub use package_ref::PackageRef;
pub use platform::is_supported_platform;
pub use report::{RankedEntry, Report, ReportSummary};
