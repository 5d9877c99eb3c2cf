// crates/assessnorm-core/src/normalize.rs

use std::str::FromStr;

use crate::answer::AssessmentAnswer;
use crate::record::{LegacyRecord, NormalizedRecord};

const NOTES_REF: &str = " Refer to notes for details: ";

/// How free-text notes are folded into the caveat phrase.
///
/// Two generations of the export transform disagree here; `Current` is the
/// newer one and the default. `Legacy` reproduces the older output so both
/// can be diffed against real data.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CaveatPolicy {
    /// Notes are appended to a non-empty base phrase; an empty base phrase
    /// (plain "yes") is replaced by the notes.
    #[default]
    Current,
    /// Plain "yes" never carries caveats, unknown answers always embed the
    /// notes, `is_endorsed` is reset to false, and `platform` is copied
    /// without case-folding (absent still becomes "").
    Legacy,
}

impl CaveatPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            CaveatPolicy::Current => "current",
            CaveatPolicy::Legacy => "legacy",
        }
    }
}

impl FromStr for CaveatPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "current" => Ok(CaveatPolicy::Current),
            "legacy" => Ok(CaveatPolicy::Legacy),
            other => Err(format!("unknown caveat policy: {other} (expected current|legacy)")),
        }
    }
}

/// Build the final caveats string from the answer's base phrase and notes.
pub fn compose_caveats(policy: CaveatPolicy, answer: &AssessmentAnswer, notes: &str) -> String {
    match policy {
        CaveatPolicy::Current => {
            let base = answer.base_caveat();
            if notes.is_empty() {
                base.into_owned()
            } else if base.is_empty() {
                notes.to_string()
            } else {
                format!("{base}{NOTES_REF}{notes}")
            }
        }
        CaveatPolicy::Legacy => match answer {
            AssessmentAnswer::Yes => String::new(),
            AssessmentAnswer::Unknown(raw) => {
                format!("Unknown assessment answer: {raw}. Original notes: {notes}")
            }
            known => {
                let base = known.base_caveat();
                if notes.is_empty() {
                    base.into_owned()
                } else {
                    format!("{base}{NOTES_REF}{notes}")
                }
            }
        },
    }
}

/// Stateless record normalizer; the policy is its only configuration.
#[derive(Copy, Clone, Debug, Default)]
pub struct Normalizer {
    policy: CaveatPolicy,
}

impl Normalizer {
    pub fn new(policy: CaveatPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> CaveatPolicy {
        self.policy
    }

    pub fn normalize(&self, rec: &LegacyRecord) -> NormalizedRecord {
        let answer = AssessmentAnswer::from_field(rec.assessment_answer.as_deref());
        let notes = rec.notes.clone().unwrap_or_default();
        let caveats = compose_caveats(self.policy, &answer, &notes);

        let platform = rec.platform.clone().unwrap_or_default();
        let (platform, is_endorsed) = match self.policy {
            CaveatPolicy::Current => (platform.to_lowercase(), rec.is_endorsed.unwrap_or(false)),
            CaveatPolicy::Legacy => (platform, false),
        };

        NormalizedRecord {
            api_name: rec.api_name.clone(),
            api_domain_name: rec.api_domain_name.clone(),
            platform,
            is_endorsed,
            criterion_category: rec.criterion_category.clone(),
            criterion_name: rec.criterion_name.clone(),
            is_supported: answer.is_supported(),
            caveats,
            notes,
        }
    }

    /// One output per input, same order.
    pub fn normalize_all<'a, I>(&'a self, records: I) -> impl Iterator<Item = NormalizedRecord> + 'a
    where
        I: IntoIterator<Item = &'a LegacyRecord>,
        I::IntoIter: 'a,
    {
        records.into_iter().map(move |r| self.normalize(r))
    }
}

/// Normalize with the default (`Current`) policy.
pub fn normalize(rec: &LegacyRecord) -> NormalizedRecord {
    Normalizer::default().normalize(rec)
}
