pub mod scan_request;
pub mod scan_response;

pub use scan_request::ScanRequest;
pub use scan_response::ScanResponse;
