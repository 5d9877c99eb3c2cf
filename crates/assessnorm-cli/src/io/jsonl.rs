// crates/assessnorm-cli/src/io/jsonl.rs

use std::fs::File;
use std::io::BufReader;

use anyhow::Context;
use assessnorm_core::ndjson;
use assessnorm_core::LegacyRecord;

/// Open a legacy export for buffered line reading.
pub fn open_reader(path: &str) -> anyhow::Result<BufReader<File>> {
    let f = File::open(path).with_context(|| format!("open input jsonl: {path}"))?;
    Ok(BufReader::new(f))
}

/// Load every legacy record from a file. Fails on the first malformed line.
pub fn read_legacy_file(path: &str) -> anyhow::Result<Vec<LegacyRecord>> {
    let reader = open_reader(path)?;
    ndjson::read_legacy_records(reader).with_context(|| format!("read legacy jsonl: {path}"))
}

/// Write an already-encoded NDJSON buffer in one go.
/// Returns the BLAKE3 hex digest of the bytes written.
pub fn write_output(path: &str, bytes: &[u8]) -> anyhow::Result<String> {
    std::fs::write(path, bytes).with_context(|| format!("write output jsonl: {path}"))?;
    Ok(blake3::hash(bytes).to_hex().to_string())
}
