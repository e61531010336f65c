use std::fs::{self, File};
use std::io::{self, BufWriter, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, span, Level, Subscriber};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Registry};

use mgpareto::aligner::{AlignerConfig, ParetoAligner, ParetoFront};
use mgpareto::io::read_sequence;

mod cli;

use cli::{CliArgs, OutputType};

/// Build our tracing subscriber with stderr logging. `RUST_LOG` takes precedence over the
/// verbosity flags.
fn build_subscriber(verbose: u8) -> Result<impl Subscriber + for<'span> LookupSpan<'span>> {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))?;

    let stderr_log = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_filter(filter_layer);

    Ok(Registry::default().with(stderr_log))
}

fn write_front(args: &CliArgs, front: &ParetoFront) -> Result<()> {
    // Determine where to write the front to
    let mut writer: Box<dyn Write> = if let Some(path) = &args.output {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?
        }

        let file = File::create(path)
            .with_context(|| format!("Could not create output file {}", path.display()))?;
        Box::new(BufWriter::new(file))
    } else {
        Box::new(BufWriter::new(io::stdout().lock()))
    };

    match args.output_type {
        OutputType::Text => write!(writer, "{front}")?,
        OutputType::Json => {
            serde_json::to_writer(&mut writer, front)?;
            writeln!(writer)?;
        }
    }

    writer.flush()?;

    Ok(())
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    build_subscriber(args.verbose)?.init();

    let span = span!(Level::INFO, "mgpareto");
    let _enter = span.enter();

    let seq1 = read_sequence(&args.seq1)
        .with_context(|| format!("Could not load first sequence from {}", args.seq1.display()))?;
    let seq2 = read_sequence(&args.seq2)
        .with_context(|| format!("Could not load second sequence from {}", args.seq2.display()))?;

    let config = AlignerConfig::new(args.gap_model.into(), args.max_states());
    let aligner = ParetoAligner::new(config);
    info!(config = ?aligner.config(), "Aligner configured");

    let front = aligner.align(&seq1, &seq2)?;
    info!("Writing {} scores", front.len());

    write_front(&args, &front)
}
