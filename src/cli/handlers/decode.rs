use crate::cli::{
    args::DecodeArgs,
    input::{self, Limits, Source},
};
use base58::Engine;
use std::io::{self, Write};

pub fn handle(
    args: DecodeArgs,
    engine: Engine,
    limits: &Limits,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = Source::resolve(args.file.as_ref(), &args.text);
    let data = input::read(&source, limits)?;

    let text = String::from_utf8(data).map_err(|_| "Input is not valid UTF-8 text for decoding")?;
    let decoded = engine.decode(text.trim())?;

    // Raw bytes, no trailing newline
    let mut stdout = io::stdout().lock();
    stdout.write_all(&decoded)?;
    stdout.flush()?;
    Ok(())
}
