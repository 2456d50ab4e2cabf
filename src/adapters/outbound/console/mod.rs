pub mod progress_reporter;

pub use progress_reporter::StderrProgressReporter;
