pub mod scan_attestations;

pub use scan_attestations::ScanAttestationsUseCase;
