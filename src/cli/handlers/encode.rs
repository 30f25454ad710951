use crate::cli::{
    args::EncodeArgs,
    input::{self, Limits, Source},
};
use base58::Engine;

pub fn handle(
    args: EncodeArgs,
    engine: Engine,
    limits: &Limits,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = Source::resolve(args.file.as_ref(), &args.data);
    let mut data = input::read(&source, limits)?;

    if matches!(source, Source::Stdin) {
        input::strip_line_ending(&mut data);
    }

    println!("{}", engine.encode(&data));
    Ok(())
}
