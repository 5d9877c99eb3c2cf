pub mod error;

pub mod answer;
pub mod census;
pub mod ndjson;
pub mod normalize;
pub mod record;

pub use crate::answer::AssessmentAnswer;
pub use crate::normalize::{normalize, CaveatPolicy, Normalizer};
pub use crate::record::{LegacyRecord, NormalizedRecord};
