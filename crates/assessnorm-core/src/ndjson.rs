// crates/assessnorm-core/src/ndjson.rs
//
// Newline-delimited JSON: one object per line, '\n' terminated.
// Every line must hold exactly one object; blank lines are malformed.
// Only the empty tail after the final '\n' is not a line.

use std::collections::BTreeSet;
use std::io::{BufRead, Write};

use serde::de::Error as _;
use serde_json::Value;

use crate::answer::AssessmentAnswer;
use crate::error::{NormError, Result};
use crate::normalize::Normalizer;
use crate::record::{LegacyRecord, NormalizedRecord};

/// Parse every legacy record. The first malformed line fails the whole batch.
pub fn read_legacy_records<R: BufRead>(reader: R) -> Result<Vec<LegacyRecord>> {
    let mut out = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let rec = parse_line(&line).map_err(|source| NormError::Parse {
            line: idx + 1,
            source,
        })?;
        out.push(rec);
    }
    Ok(out)
}

/// Derived `Deserialize` would also take a JSON array as positional fields,
/// so the top-level shape is checked before decoding.
fn parse_line(line: &str) -> serde_json::Result<LegacyRecord> {
    let kind = match serde_json::from_str::<Value>(line)? {
        v @ Value::Object(_) => return serde_json::from_value(v),
        Value::Array(_) => "array",
        Value::String(_) => "string",
        Value::Number(_) => "number",
        Value::Bool(_) => "boolean",
        Value::Null => "null",
    };
    Err(serde_json::Error::custom(format!(
        "expected a JSON object, found {kind}"
    )))
}

pub fn write_normalized<W: Write>(mut writer: W, records: &[NormalizedRecord]) -> Result<()> {
    for rec in records {
        serde_json::to_writer(&mut writer, rec).map_err(NormError::Encode)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub records_in: usize,
    pub records_out: usize,
    pub supported: usize,
    pub unknown_answers: usize,
    /// Distinct raw values behind `unknown_answers`, sorted.
    pub unknown_distinct: Vec<String>,
}

/// Read all, normalize all, then write all. Nothing is written when the
/// input is malformed.
pub fn transform<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    normalizer: &Normalizer,
) -> Result<BatchStats> {
    let legacy = read_legacy_records(reader)?;
    let normalized: Vec<NormalizedRecord> = normalizer.normalize_all(&legacy).collect();

    let mut unknown_answers = 0;
    let mut unknown_distinct = BTreeSet::new();
    for r in &legacy {
        if let AssessmentAnswer::Unknown(raw) =
            AssessmentAnswer::from_field(r.assessment_answer.as_deref())
        {
            unknown_answers += 1;
            unknown_distinct.insert(raw);
        }
    }

    let stats = BatchStats {
        records_in: legacy.len(),
        records_out: normalized.len(),
        supported: normalized.iter().filter(|r| r.is_supported).count(),
        unknown_answers,
        unknown_distinct: unknown_distinct.into_iter().collect(),
    };

    write_normalized(writer, &normalized)?;
    Ok(stats)
}
