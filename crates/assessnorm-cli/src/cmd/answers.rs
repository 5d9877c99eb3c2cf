// crates/assessnorm-cli/src/cmd/answers.rs

use assessnorm_core::census::AnswerCensus;
use clap::Args;
use tracing::warn;

use crate::io::jsonl;

#[derive(Args, Debug)]
pub struct AnswersArgs {
    /// Legacy export (one JSON object per line)
    #[arg(long)]
    pub r#in: String,

    /// Only list answers that fall outside the known taxonomy
    #[arg(long, default_value_t = false)]
    pub unknown_only: bool,
}

pub fn run(args: AnswersArgs) -> anyhow::Result<()> {
    let records = jsonl::read_legacy_file(&args.r#in)?;
    let census = AnswerCensus::from_records(&records);

    let entries = if args.unknown_only {
        census.unknown()
    } else {
        census.entries()
    };

    for e in &entries {
        let raw = match e.raw.as_deref() {
            Some(r) => format!("{r:?}"),
            None => "<missing>".to_string(),
        };
        let class = if e.answer.is_unknown() {
            "UNKNOWN".to_string()
        } else {
            format!("{} (supported={})", e.answer.label(), e.answer.is_supported())
        };
        println!("{:>8}  {}  -> {}", e.count, raw, class);
    }

    let unknown = census.unknown();
    for e in &unknown {
        warn!(answer = ?e.raw, count = e.count, "unrecognized assessment answer");
    }
    eprintln!(
        "records = {}  distinct_answers = {}  unknown_distinct = {}",
        census.total(),
        census.distinct(),
        unknown.len()
    );

    Ok(())
}
