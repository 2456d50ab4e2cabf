/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (network, console, file system).
pub mod attestation_resolver;
pub mod http_transport;
pub mod package_lister;
pub mod progress_reporter;
pub mod report_presenter;

pub use attestation_resolver::AttestationResolver;
pub use http_transport::{HttpResponse, HttpTransport};
pub use package_lister::PackageLister;
pub use progress_reporter::{ProgressReporter, SilentProgressReporter};
pub use report_presenter::ReportPresenter;
