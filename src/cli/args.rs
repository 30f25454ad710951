use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Read input from file
    #[arg(short = 'f', long, value_name = "FILE", conflicts_with = "data")]
    pub file: Option<PathBuf>,

    /// Data to encode, joined with single spaces (reads stdin if absent)
    #[arg(value_name = "DATA")]
    pub data: Vec<String>,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Read input from file
    #[arg(short = 'f', long, value_name = "FILE", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Base58 text to decode (reads stdin if absent)
    #[arg(value_name = "BASE58")]
    pub text: Vec<String>,
}

/// Codec engines (CLI enum)
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum EngineArg {
    Pooled,
    Plain,
}

impl From<EngineArg> for base58::Engine {
    fn from(cli: EngineArg) -> Self {
        match cli {
            EngineArg::Pooled => base58::Engine::Pooled,
            EngineArg::Plain => base58::Engine::Plain,
        }
    }
}
