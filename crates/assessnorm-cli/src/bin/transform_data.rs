use anyhow::Result;
use clap::Parser;

use assessnorm_cli::cmd::transform::transform_file;
use assessnorm_cli::logging;
use assessnorm_core::Normalizer;

/// Rewrite a legacy assessment export into the current schema.
#[derive(Parser, Debug)]
#[command(name = "transform-data")]
struct Args {
    /// Legacy export (one JSON object per line)
    input: String,

    /// Output path for normalized records
    output: String,
}

fn main() -> Result<()> {
    logging::init();
    let a = Args::parse();

    transform_file(&a.input, &a.output, &Normalizer::default())?;
    Ok(())
}
