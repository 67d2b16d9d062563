use anyhow::{Context, Result};
use clap::Parser;
use pdf_delar::{ConsoleReporter, DEFAULT_LOG_FILTER, RunOutcome, SplitConfig, run};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Split a large PDF into parts small enough to upload one by one
#[derive(Parser, Debug)]
#[command(name = "pdf-delar", version, about)]
struct Args {
    /// PDF to split [default: ~/Downloads/samling_av_pdf.pdf]
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Directory for the parts [default: ~/Downloads/gulmaran_pdf_delar]
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Pages per part
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pages_per_chunk: Option<u32>,

    /// Size in MB above which a part is flagged
    #[arg(short, long)]
    max_size_mb: Option<f64>,
}

impl Args {
    /// Fill in every option not given on the command line
    fn into_config(self) -> Result<SplitConfig> {
        let mut config = match (&self.input, &self.output_dir) {
            (Some(input), Some(output_dir)) => SplitConfig::new(input, output_dir),
            _ => {
                let home = dirs::home_dir().context("Could not determine home directory")?;
                SplitConfig::from_home(&home)
            }
        };

        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
        if let Some(pages) = self.pages_per_chunk {
            config = config.pages_per_chunk(pages as usize);
        }
        if let Some(size_mb) = self.max_size_mb {
            config = config.max_size_mb(size_mb);
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Args::parse().into_config()?;

    println!("=== Gulmåran-GPT PDF Splitter ===\n");

    let mut reporter = ConsoleReporter::stdout();
    match run(&config, &mut reporter) {
        RunOutcome::Split(_) => println!("\nThe parts are ready to upload to Gulmåran-GPT!"),
        RunOutcome::Failed(_) => println!("\n✗ Something went wrong while splitting"),
        RunOutcome::InputMissing(_) => {}
    }

    Ok(())
}
