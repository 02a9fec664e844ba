use std::path::PathBuf;

use clap::Parser;

/// Generates the token-kind declarations consumed by the lexer: an enum of
/// token types, literal-value macros, and (when SOURCE is given) a name table
/// for runtime introspection.
#[derive(Parser)]
#[command(name = "toktab", version)]
struct Args {
    /// Token specification file, one token per line: NAME ['<char>']
    spec: PathBuf,
    /// Path of the generated C header
    header: PathBuf,
    /// Path of the generated C source defining the name table (extended output)
    source: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    toktab::generate(&args.spec, &args.header, args.source.as_deref())?;
    Ok(())
}
