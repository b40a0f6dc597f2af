//! Data model: input records, normalized trips, monthly summaries.

mod activity;
mod summary;
mod trip;

pub use activity::{load_activity_records, ActivityDetails, RawActivityRecord, TopCandidate};
pub use summary::MonthlySummary;
pub use trip::{NormalizedTrip, TripPurpose};
