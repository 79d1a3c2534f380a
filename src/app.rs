use std::path::{Path, PathBuf};

use anyhow::Context;
use log::info;

use crate::codec;
use crate::imgproc::{dithering, greyscale};
use crate::naming;

pub struct AppOptions {
    pub inputs: Vec<PathBuf>,
    pub output: Option<PathBuf>,
    pub suffix: String,
}

pub fn run(options: &AppOptions) -> anyhow::Result<()> {
    for input in &options.inputs {
        let output = match &options.output {
            Some(path) => path.clone(),
            None => naming::derive_output_path(input, &options.suffix),
        };
        process_file(input, &output)
            .with_context(|| format!("failed to dither {}", input.display()))?;
    }
    Ok(())
}

fn process_file(input: &Path, output: &Path) -> anyhow::Result<()> {
    let t_start = std::time::Instant::now();

    let src = codec::read_rgba(input)?;
    let grey = greyscale::from_rgba(&src);
    let mono = dithering::stucki_mono(grey);
    let t_dithered = std::time::Instant::now();

    // the pass completed fully in memory; only now touch the output file
    codec::write_rgba(output, &mono)?;

    info!(
        "{} written. Cost: dither: {:?}, write: {:?}",
        output.display(),
        t_dithered - t_start,
        t_dithered.elapsed()
    );
    Ok(())
}
