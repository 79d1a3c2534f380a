use std::path::PathBuf;

use clap::Parser;

use monodither::app::{self, AppOptions};
use monodither::naming;

#[derive(Parser, Debug)]
#[command(version, about = "Dither images down to pure black/white")]
struct Args {
    /// Input image files; each produces a sibling output file
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Explicit output path, only valid with a single input
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Suffix inserted before the extension of derived output names
    #[arg(long, default_value = naming::DEFAULT_SUFFIX)]
    suffix: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp_micros()
        .init();

    let args = Args::parse();
    if args.output.is_some() && args.inputs.len() > 1 {
        anyhow::bail!("--output cannot be combined with multiple input files");
    }

    app::run(&AppOptions {
        inputs: args.inputs,
        output: args.output,
        suffix: args.suffix,
    })
}
