// crates/assessnorm-core/src/answer.rs
//
// Closed taxonomy of legacy `assessment_answer` values.
// The list was collected from exported data, never declared upstream, so
// anything outside it lands in `Unknown` with the raw text kept verbatim.

use std::borrow::Cow;

/// Answer a missing `assessment_answer` field is read as.
pub const MISSING_ANSWER: &str = "No";

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AssessmentAnswer {
    Yes,
    YesForUserAccounts,
    YesWithCaveats,
    Partially,
    No,
    NotApplicable,
    NotApplicableIndirectly,
    /// Original, untrimmed value.
    Unknown(String),
}

/// Known variants, in classification table order.
pub const KNOWN_ANSWERS: [AssessmentAnswer; 7] = [
    AssessmentAnswer::Yes,
    AssessmentAnswer::YesForUserAccounts,
    AssessmentAnswer::YesWithCaveats,
    AssessmentAnswer::Partially,
    AssessmentAnswer::No,
    AssessmentAnswer::NotApplicable,
    AssessmentAnswer::NotApplicableIndirectly,
];

impl AssessmentAnswer {
    /// Case-insensitive match after trimming surrounding whitespace.
    /// Never fails: unmatched input becomes `Unknown(raw)`.
    pub fn classify(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "yes" => Self::Yes,
            "yes (for user accounts)" => Self::YesForUserAccounts,
            "yes (with caveats)" => Self::YesWithCaveats,
            "partially" => Self::Partially,
            "no" => Self::No,
            "n/a" => Self::NotApplicable,
            "n/a (indirectly)" => Self::NotApplicableIndirectly,
            _ => Self::Unknown(raw.to_string()),
        }
    }

    /// Classify an optional field; absence is the same as `"No"`.
    pub fn from_field(raw: Option<&str>) -> Self {
        Self::classify(raw.unwrap_or(MISSING_ANSWER))
    }

    pub fn is_supported(&self) -> bool {
        matches!(
            self,
            Self::Yes | Self::YesForUserAccounts | Self::YesWithCaveats | Self::Partially
        )
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }

    /// Fixed caveat phrase for this answer, before notes are composed in.
    pub fn base_caveat(&self) -> Cow<'static, str> {
        match self {
            Self::Yes => Cow::Borrowed(""),
            Self::YesForUserAccounts => Cow::Borrowed("Applicable for user accounts."),
            Self::YesWithCaveats => Cow::Borrowed("Supported with limitations."),
            Self::Partially => Cow::Borrowed("Partially supported."),
            Self::No => Cow::Borrowed("Not supported."),
            Self::NotApplicable => Cow::Borrowed("Not applicable to this API."),
            Self::NotApplicableIndirectly => {
                Cow::Borrowed("Not directly applicable; support is indirect.")
            }
            Self::Unknown(raw) => Cow::Owned(format!("Unknown assessment answer: {raw}.")),
        }
    }

    /// Canonical spelling, used in reports. `Unknown` reports its raw value.
    pub fn label(&self) -> &str {
        match self {
            Self::Yes => "Yes",
            Self::YesForUserAccounts => "Yes (for user accounts)",
            Self::YesWithCaveats => "Yes (with caveats)",
            Self::Partially => "Partially",
            Self::No => "No",
            Self::NotApplicable => "N/A",
            Self::NotApplicableIndirectly => "N/A (indirectly)",
            Self::Unknown(raw) => raw,
        }
    }
}
