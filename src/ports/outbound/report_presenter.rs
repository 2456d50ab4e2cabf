use crate::shared::Result;

/// ReportPresenter port for writing the serialized report
///
/// This port abstracts the output destination (file or stdout).
pub trait ReportPresenter {
    fn present(&self, content: &str) -> Result<()>;
}
