// crates/assessnorm-core/src/census.rs
//
// Distinct raw answers across an export, so unanticipated values show up
// before a transform is run. Raw values are counted as-is (case and
// whitespace preserved).

use std::collections::BTreeMap;

use crate::answer::AssessmentAnswer;
use crate::record::LegacyRecord;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CensusEntry {
    /// `None` when the field was absent or null.
    pub raw: Option<String>,
    pub count: usize,
    pub answer: AssessmentAnswer,
}

#[derive(Clone, Debug, Default)]
pub struct AnswerCensus {
    counts: BTreeMap<Option<String>, usize>,
    total: usize,
}

impl AnswerCensus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a LegacyRecord>,
    {
        let mut c = Self::new();
        for r in records {
            c.observe(r.assessment_answer.as_deref());
        }
        c
    }

    pub fn observe(&mut self, raw: Option<&str>) {
        *self.counts.entry(raw.map(str::to_string)).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Sorted by raw value; the missing bucket sorts first.
    pub fn entries(&self) -> Vec<CensusEntry> {
        self.counts
            .iter()
            .map(|(raw, &count)| CensusEntry {
                raw: raw.clone(),
                count,
                answer: AssessmentAnswer::from_field(raw.as_deref()),
            })
            .collect()
    }

    pub fn unknown(&self) -> Vec<CensusEntry> {
        self.entries()
            .into_iter()
            .filter(|e| e.answer.is_unknown())
            .collect()
    }
}
