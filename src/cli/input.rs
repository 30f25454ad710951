use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Where a subcommand takes its input from.
#[derive(Debug)]
pub enum Source<'a> {
    File(&'a Path),
    Args(&'a [String]),
    Stdin,
}

impl<'a> Source<'a> {
    /// A file wins over positional arguments; with neither, read stdin.
    pub fn resolve(file: Option<&'a PathBuf>, args: &'a [String]) -> Self {
        match file {
            Some(path) => Source::File(path),
            None if !args.is_empty() => Source::Args(args),
            None => Source::Stdin,
        }
    }
}

/// Input size policy resolved from flags and config.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    /// 0 = unlimited
    pub max_size: usize,
    pub force: bool,
    pub quiet: bool,
}

impl Limits {
    fn check(&self, size: usize, what: &str) -> Result<(), Box<dyn std::error::Error>> {
        if self.max_size == 0 || size <= self.max_size {
            return Ok(());
        }

        if self.force {
            if !self.quiet {
                eprintln!(
                    "Warning: Processing large {} ({} bytes, limit: {} bytes)",
                    what, size, self.max_size
                );
            }
            Ok(())
        } else {
            Err(format!(
                "{} size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
                what, size, self.max_size
            )
            .into())
        }
    }
}

/// Reads the whole input. Positional arguments are joined with single spaces.
pub fn read(source: &Source<'_>, limits: &Limits) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    match source {
        Source::File(path) => {
            let metadata = fs::metadata(path)
                .map_err(|e| format!("reading file {}: {}", path.display(), e))?;
            limits.check(metadata.len() as usize, "file")?;
            Ok(fs::read(path).map_err(|e| format!("reading file {}: {}", path.display(), e))?)
        }
        Source::Args(args) => {
            let joined = args.join(" ");
            limits.check(joined.len(), "input")?;
            Ok(joined.into_bytes())
        }
        Source::Stdin => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .map_err(|e| format!("reading stdin: {}", e))?;
            limits.check(buffer.len(), "input")?;
            Ok(buffer)
        }
    }
}

/// Drops one trailing `\n` or `\r\n`, as left by `echo` and friends.
pub fn strip_line_ending(data: &mut Vec<u8>) {
    if data.last() == Some(&b'\n') {
        data.pop();
        if data.last() == Some(&b'\r') {
            data.pop();
        }
    }
}
