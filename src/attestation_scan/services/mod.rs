pub mod batch_scheduler;
pub mod report_builder;

pub use batch_scheduler::BatchScheduler;
pub use report_builder::ReportBuilder;
