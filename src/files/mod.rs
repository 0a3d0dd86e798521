//! Files Module
//!
//! Data file persistence and plain-text report generation.

mod report;
mod service;

pub use report::render_report;
pub use service::FileService;
