// crates/assessnorm-cli/src/cmd/mod.rs

pub mod answers;
pub mod transform;
