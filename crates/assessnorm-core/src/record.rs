// crates/assessnorm-core/src/record.rs

use serde::{Deserialize, Serialize};

/// One line of a legacy export: one (platform, API, criterion) assessment
/// with the old free-text answer. Missing and null fields read as `None`;
/// unrecognized fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LegacyRecord {
    pub api_name: Option<String>,
    pub api_domain_name: Option<String>,
    pub platform: Option<String>,
    pub criterion_category: Option<String>,
    pub criterion_name: Option<String>,
    pub assessment_answer: Option<String>,
    pub notes: Option<String>,
    pub is_endorsed: Option<bool>,
}

/// One line of the current schema. Field order is the on-disk order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub api_name: Option<String>,
    pub api_domain_name: Option<String>,
    pub platform: String,
    pub is_endorsed: bool,
    pub criterion_category: Option<String>,
    pub criterion_name: Option<String>,
    pub is_supported: bool,
    pub caveats: String,
    pub notes: String,
}
