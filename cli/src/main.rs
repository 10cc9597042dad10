mod summary;

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use hospgraph_core::{parse_criteria, ChartRenderer, CsvRecordRepository, GraphUseCase};
use log::{debug, error};

#[derive(Parser)]
#[command(name = "hospgraph")]
#[command(about = "Graph weekly hospital admissions for a region and an age bracket", long_about = None)]
struct Cli {
    /// Year to keep, as YYYY (every year when omitted)
    #[arg(long, default_value = "")]
    years: String,
    /// Region code, as RR (e.g. 01)
    #[arg(long, default_value = "")]
    region: String,
    /// Age bracket code, as AA (e.g. 09)
    #[arg(long, default_value = "")]
    age: String,
    /// Input dataset
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,
    /// Output PNG, overwritten if present
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
    /// Print the plotted series as a table
    #[arg(long)]
    table: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Flags are checked before the dataset is touched.
    let criteria = parse_criteria(&cli.years, &cli.region, &cli.age)?;

    let repo = CsvRecordRepository::new(cli.data);
    let renderer = ChartRenderer::new(cli.output);
    debug!(
        "data: {}, graph: {}",
        repo.path().display(),
        renderer.path().display()
    );

    let usecase = GraphUseCase::new(&repo, &renderer);
    let series = usecase.run(&criteria)?;

    println!("Graphiques créés avec succès.");
    if cli.table {
        summary::show_series(&series)?;
    }
    Ok(())
}
