use clap::Args;

use super::args::EngineArg;

/// Global arguments that apply to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Codec engine (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub engine: Option<EngineArg>,

    /// Maximum input size in bytes, 0 = unlimited (overrides the config file)
    #[arg(long, global = true, value_name = "BYTES")]
    pub max_size: Option<usize>,

    /// Process input exceeding --max-size
    #[arg(long, global = true)]
    pub force: bool,

    /// Suppress warnings
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}
