// crates/assessnorm-cli/src/cmd/transform.rs

use anyhow::Context;
use assessnorm_core::ndjson::{self, BatchStats};
use assessnorm_core::{CaveatPolicy, Normalizer};
use clap::Args;
use tracing::{debug, info, warn};

use crate::io::jsonl;

#[derive(Args, Debug)]
pub struct TransformArgs {
    /// Legacy export (one JSON object per line)
    #[arg(long)]
    pub r#in: String,

    /// Output path for normalized records (overwritten)
    #[arg(long)]
    pub out: String,

    /// How notes fold into caveats: current | legacy
    #[arg(long, default_value = "current")]
    pub caveat_policy: CaveatPolicy,
}

#[derive(Clone, Debug)]
pub struct TransformReport {
    pub stats: BatchStats,
    pub output_bytes: usize,
    pub output_blake3: String,
}

/// Transform a whole file. The output is only written once every input
/// line has parsed, so a malformed input leaves no output behind.
pub fn transform_file(
    input: &str,
    output: &str,
    normalizer: &Normalizer,
) -> anyhow::Result<TransformReport> {
    let reader = jsonl::open_reader(input)?;

    let mut buf = Vec::new();
    let stats = ndjson::transform(reader, &mut buf, normalizer)
        .with_context(|| format!("transform {input}"))?;
    debug!(bytes = buf.len(), "encoded normalized records");

    let output_blake3 = jsonl::write_output(output, &buf)?;

    info!(
        records = stats.records_out,
        supported = stats.supported,
        policy = normalizer.policy().as_str(),
        "wrote {output}"
    );
    for raw in &stats.unknown_distinct {
        warn!(answer = ?raw, "unrecognized assessment answer");
    }

    Ok(TransformReport {
        stats,
        output_bytes: buf.len(),
        output_blake3,
    })
}

pub fn run(args: TransformArgs) -> anyhow::Result<()> {
    let normalizer = Normalizer::new(args.caveat_policy);
    let rep = transform_file(&args.r#in, &args.out, &normalizer)?;

    eprintln!("--- transform ---");
    eprintln!("input           = {}", args.r#in);
    eprintln!("output          = {}", args.out);
    eprintln!("caveat_policy   = {}", args.caveat_policy.as_str());
    eprintln!("records_in      = {}", rep.stats.records_in);
    eprintln!("records_out     = {}", rep.stats.records_out);
    eprintln!("supported       = {}", rep.stats.supported);
    eprintln!("unknown_answers = {}", rep.stats.unknown_answers);
    eprintln!("output_bytes    = {}", rep.output_bytes);
    eprintln!("output_blake3   = {}", rep.output_blake3);

    Ok(())
}
