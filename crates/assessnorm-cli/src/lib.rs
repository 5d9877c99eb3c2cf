// crates/assessnorm-cli/src/lib.rs

pub mod cmd;
pub mod io;
pub mod logging;
