mod markdown;
mod record;

pub use markdown::Extractor;
pub use record::PlanRecord;
