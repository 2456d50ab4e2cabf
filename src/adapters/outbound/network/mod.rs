pub mod rankings_client;
pub mod registry_client;
pub mod retrying_fetcher;
pub mod transport;

pub use rankings_client::RankingsClient;
pub use registry_client::{FullDocumentResolver, VersionScopedResolver};
pub use retrying_fetcher::{RetryPolicy, RetryingFetcher};
pub use transport::ReqwestTransport;
