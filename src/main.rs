use anyhow::{Context, Result};
use circ_rotate::fasta::read_first_record;
use circ_rotate::io::{create_writer, open_reader};
use circ_rotate::pipeline;
use circ_rotate::RunConfig;
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

const MAX_THREADS: u64 = 256;

#[derive(Parser)]
#[command(name = "circ-rotate")]
#[command(about = "Shift circular FASTA sequences based on a reference or a position")]
struct Args {
    #[arg(short = 'i', long, help = "Input FASTA file ('-' for stdin, .gz accepted)")]
    input: PathBuf,

    #[arg(short = 'o', long, help = "Output FASTA file (stdout if omitted)")]
    output: Option<PathBuf>,

    #[arg(short = 'r', long = "ref", help = "Reference FASTA file; its first sequence is the anchor")]
    reference: Option<PathBuf>,

    #[arg(short = 'p', long = "pos", help = "1-based position to start each sequence at")]
    position: Option<usize>,

    #[arg(
        short = 'd',
        long,
        help = "Maximum Levenshtein distance for fuzzy matching (required for stdout output, default 3 for file output)"
    )]
    max_dist: Option<usize>,

    #[arg(
        short = 'w',
        long,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..),
        help = "Wrap sequence lines at this width (default: 60 on stdout, unwrapped in files)"
    )]
    line_width: Option<usize>,

    #[arg(
        short = 't',
        long,
        default_value = "1",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..=MAX_THREADS),
        help = "Number of threads"
    )]
    threads: usize,

    #[arg(short = 'v', long, default_value = "false", help = "Verbose output")]
    verbose: bool,
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        RunConfig {
            input: args.input,
            reference: args.reference,
            position: args.position,
            max_dist: args.max_dist,
            output: args.output,
            line_width: args.line_width,
            threads: args.threads,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let config = RunConfig::from(args);
    config.validate()?;

    let reference_seq = match &config.reference {
        Some(path) => {
            let reader = open_reader(path)?;
            let record = read_first_record(reader)
                .with_context(|| format!("failed to parse reference {}", path.display()))?;
            if let Some(record) = &record {
                debug!("reference {} ({} bp)", record.id, record.len());
            }
            record.map(|r| r.sequence)
        }
        None => None,
    };
    let request = config.request(reference_seq.as_deref())?;

    let input = open_reader(&config.input)?;
    let output_path = config.output_file().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("-"));
    let mut output = create_writer(&output_path)?;

    let summary = pipeline::process(input, &mut output, &request, config.layout(), config.threads)
        .with_context(|| format!("failed to process {}", config.input.display()))?;
    output
        .finish()
        .with_context(|| format!("failed to finish writing {}", output_path.display()))?;

    info!("Processing complete!");
    info!("Rotated records: {}", summary.rotated);
    info!("Failed records: {}", summary.failed);
    if let Some(path) = config.output_file() {
        info!("Output file: {}", path.display());
    }

    Ok(())
}
