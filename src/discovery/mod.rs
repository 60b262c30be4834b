mod pattern;
mod scan;

pub use pattern::NamePattern;
pub use scan::{scan_plans, ScanOutcome};
