//! Data models and structures for importscan

pub mod extraction;

pub use extraction::{FileExtraction, ScanIssue, ScanResults, ScanSummary};
