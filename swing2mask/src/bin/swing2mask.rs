use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use swing2mask::convert_mask_to_config;

#[derive(Parser, Debug)]
#[command(author, version, about = "Swing mask to Inputmask configuration converter", long_about = None)]
struct Args {
    /// Swing-style mask notation, e.g. "####-###-###"
    mask: String,

    /// Restrict input positions to this set of characters
    #[arg(short, long)]
    allowed_chars: Option<String>,

    /// Placeholder shown for unfilled positions
    #[arg(short, long)]
    placeholder: Option<String>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        eprintln!("Compiling mask {:?}", args.mask);
    }

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            convert_mask_to_config(
                &args.mask,
                args.allowed_chars.as_deref(),
                args.placeholder.as_deref(),
                BufWriter::new(file),
            )?;
            if args.verbose {
                eprintln!("Wrote {}", path.display());
            }
        }
        None => {
            convert_mask_to_config(
                &args.mask,
                args.allowed_chars.as_deref(),
                args.placeholder.as_deref(),
                io::stdout().lock(),
            )?;
            println!();
        }
    }

    Ok(())
}
