pub mod availability;
pub mod record;
pub mod result;

pub use availability::Availability;
pub use record::{LineupRecord, PerformanceRecord};
pub use result::{FormResult, PerformanceEntry};
