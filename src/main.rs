// Command-line entry point for Callseq.

use anyhow::{bail, Result};
use callseq::application::EvaluateUsecase;
use callseq::domain::metrics::MetricSuite;
use callseq::domain::paths::{enumerate, expand_prefixes};
use callseq::infrastructure::{concurrency, JsonTreeLoader, JsonReportWriter, TextReportWriter};
use callseq::ports::sequence_exporter::SequenceExporter;
use callseq::ports::{ReportExporter, TreeLoader};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Reference IR tree (JSON file)
    #[arg(short, long)]
    reference: String,

    /// Candidate IR tree (JSON file, can specify multiple)
    #[arg(short, long, required = false)]
    candidate: Vec<String>,

    /// Output file path
    #[arg(short, long)]
    output: String,

    /// Output format (json, text, sequences)
    #[arg(short, long, default_value = "json")]
    format: String,

    /// Label for the evaluation unit in the report
    #[arg(long, default_value = "unit")]
    name: String,

    /// Cap on live traces during sequence enumeration
    #[arg(short, long, default_value_t = 1000)]
    max: usize,

    /// Delimiter between call identifiers in sequence output
    #[arg(long, default_value = ",")]
    delimiter: String,

    /// Also emit deduplicated prefixes of each enumerated sequence
    #[arg(long, default_value_t = false)]
    prefixes: bool,
}

fn run(cli: &Cli) -> Result<()> {
    let loader = JsonTreeLoader;

    if cli.format == "sequences" {
        // Training-data export: enumerate the reference tree only.
        let tree = loader.load(&cli.reference)?;
        let mut sequences = enumerate(&tree, cli.max)?;
        if cli.prefixes {
            sequences = expand_prefixes(&sequences);
        }
        SequenceExporter::export(&sequences, &cli.output, &cli.delimiter)?;
        println!(
            "Enumerated {} sequence(s) within cap {}",
            sequences.len(),
            cli.max
        );
        return Ok(());
    }

    if cli.candidate.is_empty() {
        bail!("Please provide at least one --candidate <file> for scoring");
    }

    concurrency::init_thread_pool()?;

    let json_writer = JsonReportWriter;
    let text_writer = TextReportWriter;
    let exporter: &dyn ReportExporter = match cli.format.as_str() {
        "json" => &json_writer,
        "text" => &text_writer,
        other => bail!("Unknown format: {} (expected json, text, sequences)", other),
    };

    let usecase = EvaluateUsecase {
        loader: &loader,
        exporter,
    };
    let report = usecase.run(
        &cli.name,
        &cli.reference,
        &cli.candidate,
        &MetricSuite::default(),
        &cli.output,
    )?;

    for unit in &report {
        for score in &unit.scores {
            println!("{}: {} = {:.4}", unit.unit, score.metric, score.value);
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(_) => println!(
            "Evaluation completed! Output written to {} (format: {})",
            cli.output, cli.format
        ),
        Err(e) => {
            eprintln!("Error: {:?}", e);
            std::process::exit(1);
        }
    }
}
