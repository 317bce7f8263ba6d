pub mod pipeline;
pub mod report;

pub use pipeline::{clean, CleanOutputs, CleanPipeline, CleanResult, CleanedDataset};
pub use report::{format_null_counts, CleaningSummary};
