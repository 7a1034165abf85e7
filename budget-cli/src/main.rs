use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use budget_cli::render::describe_target;
use budget_cli::{HoverArg, default_budget, load_budget, logging, render_outcome, render_view};
use budget_core::{BudgetInputs, BudgetReport, BudgetSession};
use budget_data::BudgetCsvLoader;
use clap::Parser;
use tracing::{debug, info};

// --- CLI definition ---

/// Monthly household budget broken down the way the pie chart shows it.
///
/// Without `--config` or `--csv` the built-in sample household is used.
/// Each `--hover` event is applied in order, and the view or tooltip it
/// produces is printed.
#[derive(Debug, Parser)]
#[command(name = "budget", version, about)]
struct Cli {
    /// TOML budget file with [income], [debt] and [utilities] tables.
    #[arg(long, conflicts_with = "csv")]
    config: Option<PathBuf>,

    /// CSV file of budget form rows.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Which CSV row to use, counting from 1.
    #[arg(long, default_value_t = 1, requires = "csv")]
    row: usize,

    /// Print the full text summary before the chart.
    #[arg(long)]
    summary: bool,

    /// Pointer event to replay: a wedge index, `none` for the chart
    /// background, or `outside`. May be repeated.
    #[arg(long = "hover", value_name = "EVENT")]
    hovers: Vec<HoverArg>,

    /// Log filter, e.g. `debug` or `budget_core=trace`. Overrides RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn load_inputs(cli: &Cli) -> Result<BudgetInputs> {
    if let Some(path) = &cli.config {
        return load_budget(path).context("failed to load budget configuration");
    }

    if let Some(path) = &cli.csv {
        let mut rows = BudgetCsvLoader::load_file(path)
            .with_context(|| format!("failed to load budget rows from {}", path.display()))?;
        let count = rows.len();
        if cli.row == 0 || cli.row > count {
            bail!("row {} requested but {} has {count} budget rows", cli.row, path.display());
        }
        return Ok(rows.swap_remove(cli.row - 1));
    }

    debug!("no budget source given, using the built-in household");
    default_budget().context("built-in household is invalid")
}

// --- entry point ---

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging("info");
    if let Some(level) = &cli.log_level {
        logging::set_log_level(level)?;
    }
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    let mut session =
        BudgetSession::new(load_inputs(&cli)?).context("budget figures are out of range")?;
    info!("budget loaded");

    if cli.summary {
        println!("{}", BudgetReport::new(session.chart().budget()));
    }

    print!("{}", render_view(session.chart()));

    for HoverArg(target) in &cli.hovers {
        println!();
        println!("> hover {}", describe_target(*target));
        let outcome = session.hover(*target);
        match render_outcome(session.chart(), &outcome) {
            Some(text) => print!("{text}"),
            None => println!("  (no change)"),
        }
    }

    Ok(())
}
