use std::path::PathBuf;

use anyhow::{Context, Result};
use budget_cli::logging;
use budget_core::calculations::common::format_money;
use budget_core::calculations::{LoanTerms, MonthRecord, compare_schedules, total_interest};
use budget_data::write_schedule_file;
use clap::Parser;
use rust_decimal::Decimal;
use tracing::info;

const WITHOUT_EXTRA_FILE: &str = "Loan_Schedule_Without_Extra_Payments.csv";
const WITH_EXTRA_FILE: &str = "Loan_Schedule_With_Extra_Payments.csv";

/// Amortization schedule of a fixed-rate loan, with and without a fixed
/// extra payment toward principal each month.
#[derive(Parser, Debug)]
#[command(name = "loan-schedule")]
#[command(version, about, long_about = None)]
struct Args {
    /// Amount borrowed
    #[arg(long, default_value = "32000")]
    principal: Decimal,

    /// Annual interest rate as a fraction (e.g., 0.05 for 5%)
    #[arg(long, default_value = "0.05")]
    annual_rate: Decimal,

    /// Loan term in years
    #[arg(long, default_value_t = 5)]
    years: u32,

    /// Extra amount paid toward principal every month
    #[arg(long, default_value = "500")]
    extra_payment: Decimal,

    /// Number of months printed from each schedule
    #[arg(long, default_value_t = 5)]
    head: usize,

    /// Write both schedules as CSV files into this directory
    #[arg(long)]
    csv_dir: Option<PathBuf>,
}

fn print_head(
    title: &str,
    schedule: &[MonthRecord],
    head: usize,
) {
    println!("{title}");
    println!(
        "{:>5} {:>12} {:>18} {:>17} {:>18}",
        "Month", "Payment", "Principal Payment", "Interest Payment", "Remaining Balance"
    );
    for record in schedule.iter().take(head) {
        println!(
            "{:>5} {:>12} {:>18} {:>17} {:>18}",
            record.month,
            format_money(record.payment),
            format_money(record.principal_payment),
            format_money(record.interest_payment),
            format_money(record.remaining_balance),
        );
    }
    println!(
        "({} months, total interest ${})",
        schedule.len(),
        format_money(total_interest(schedule))
    );
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging("warn");

    let terms = LoanTerms {
        principal: args.principal,
        annual_rate: args.annual_rate,
        years: args.years,
        extra_payment: args.extra_payment,
    };
    let comparison = compare_schedules(&terms).context("cannot build amortization schedule")?;

    print_head("Without extra payments", &comparison.baseline, args.head);
    println!();
    print_head("With extra payments", &comparison.accelerated, args.head);
    println!();

    if let Some(dir) = &args.csv_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("cannot create directory {}", dir.display()))?;
        for (name, schedule) in [
            (WITHOUT_EXTRA_FILE, &comparison.baseline),
            (WITH_EXTRA_FILE, &comparison.accelerated),
        ] {
            let path = dir.join(name);
            write_schedule_file(&path, schedule)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        info!(dir = %dir.display(), "wrote schedule files");
        println!("Schedules written to {}", dir.display());
    }

    println!(
        "Paying ${} extra each month saves {} months and ${} in interest.",
        format_money(args.extra_payment),
        comparison.months_saved(),
        format_money(comparison.interest_saved())
    );

    Ok(())
}
