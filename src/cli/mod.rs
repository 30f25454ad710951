mod args;
mod global;
mod handlers;
mod input;

use base58::Config;
use clap::{Parser, Subcommand};

use args::{DecodeArgs, EncodeArgs};
use global::GlobalArgs;
use input::Limits;

#[derive(Parser)]
#[command(name = "base58")]
#[command(version)]
#[command(about = "Base58 encoding and decoding tool", long_about = None)]
#[command(arg_required_else_help = true)]
#[command(after_help = "Examples:
  echo 'Hello World' | base58 encode
  base58 encode 'Hello World'
  base58 encode -f input.txt
  base58 decode JxF12TrwUP45BMd
  echo 'JxF12TrwUP45BMd' | base58 decode")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode data as base58
    Encode(EncodeArgs),
    /// Decode a base58 string
    Decode(DecodeArgs),
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = Config::load_with_overrides()?;
    let settings = &config.settings;

    let engine = cli
        .global
        .engine
        .map(base58::Engine::from)
        .unwrap_or_else(|| settings.engine());
    let limits = Limits {
        max_size: cli.global.max_size.unwrap_or_else(|| settings.max_size()),
        force: cli.global.force,
        quiet: cli.global.quiet,
    };

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, engine, &limits),
        Commands::Decode(args) => handlers::decode::handle(args, engine, &limits),
    }
}
