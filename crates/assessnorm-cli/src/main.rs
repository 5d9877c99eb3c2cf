// crates/assessnorm-cli/src/main.rs

use assessnorm_cli::{cmd, logging};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "assessnorm")]
#[command(about = "Normalize legacy API security assessment exports", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert legacy free-text answers into is_supported + caveats records
    Transform(cmd::transform::TransformArgs),

    /// List distinct assessment answers in a legacy export
    Answers(cmd::answers::AnswersArgs),
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Transform(args) => cmd::transform::run(args),
        Commands::Answers(args) => cmd::answers::run(args),
    }
}
