// Infrastructure implementations of the ports traits.

pub mod concurrency;
pub mod json_loader;
pub mod report_writer;

pub use json_loader::JsonTreeLoader;
pub use report_writer::{JsonReportWriter, TextReportWriter};
