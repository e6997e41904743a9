use std::io::BufWriter;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, info_span};

use edgegen::generator::{
    self, parse_boundary, GeneratorOptions, DEFAULT_ALPHABET, DEFAULT_BOUNDARY, DEFAULT_LENGTH,
};
use edgegen::{logging, output};

#[derive(Parser, Debug)]
#[command(name = "edgegen")]
#[command(about = "Print every fixed-length string over an alphabet that does not start or end with a boundary character")]
struct Cli {
    /// Characters to draw from, in enumeration order
    #[arg(short, long, default_value = DEFAULT_ALPHABET)]
    alphabet: String,
    /// Width of each generated string
    #[arg(short, long, default_value_t = DEFAULT_LENGTH, allow_negative_numbers = true)]
    length: i64,
    /// Character that may not open or close a string
    #[arg(short, long, default_value_t = DEFAULT_BOUNDARY.to_string())]
    boundary: String,
}

impl Cli {
    fn options(&self) -> Result<GeneratorOptions> {
        let boundary = parse_boundary(&self.boundary)?;
        Ok(GeneratorOptions::new()
            .alphabet(self.alphabet.as_str())
            .length(self.length)
            .boundary(boundary)
            .clone())
    }
}

fn main() -> Result<()> {
    logging::setup_tracing();
    let cli = Cli::parse();
    let opts = cli.options()?;

    let generation = {
        let _span = info_span!("generate", length = opts.length, boundary = %opts.boundary).entered();
        generator::generate(&opts).context("failed to generate combinations")?
    };
    info!(
        candidates = generation.candidates,
        valid = generation.count(),
        "generated combinations"
    );

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    output::write_generation(&mut out, &generation).context("failed to write output")?;
    Ok(())
}
