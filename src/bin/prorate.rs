//! Command-line prorated rent calculator.
//!
//! Any value not given as a flag is prompted for interactively.
//!
//! # Usage
//!
//! ```bash
//! # Everything on the command line
//! cargo run --bin prorate -- --rent 1750 --year 2026 --month jan --day 18
//!
//! # Prompt for the rest
//! cargo run --bin prorate -- --rent 1750
//! ```
//!
//! `--month` accepts a number (`1`), a full name (`January`) or a
//! three-letter abbreviation (`jan`).

use prorator::domain::{Month, ProrationResult, calculate_prorated_rent, days_in_month};
use prorator::utils::currency::format_currency;
use prorator::utils::logger::init_cli_logger;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use colored::*;
use dialoguer::{Input, Select};

/// Prorated rent for a partial first month.
#[derive(Parser)]
#[command(name = "prorate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Full monthly rent in dollars
    #[arg(short, long)]
    rent: Option<f64>,

    /// Calendar year of the move-in
    #[arg(short, long)]
    year: Option<i32>,

    /// Month of the move-in (number, name or abbreviation)
    #[arg(short, long)]
    month: Option<Month>,

    /// Move-in day of the month
    #[arg(short, long)]
    day: Option<u32>,
}

fn main() -> Result<()> {
    init_cli_logger();

    let cli = Cli::parse();
    let today = chrono::Local::now().date_naive();

    println!("{}", "Prorated Rent Calculator".bright_blue().bold());
    println!();

    let rent = match cli.rent {
        Some(r) => r,
        None => Input::new()
            .with_prompt("Monthly rent ($)")
            .default(1750.0)
            .interact_text()?,
    };

    let year = match cli.year {
        Some(y) => y,
        None => Input::new()
            .with_prompt("Year")
            .default(today.year())
            .interact_text()?,
    };

    let month = match cli.month {
        Some(m) => m,
        None => {
            let names: Vec<&str> = Month::ALL.iter().map(|m| m.name()).collect();
            let index = Select::new()
                .with_prompt("Month")
                .items(&names)
                .default(today.month0() as usize)
                .interact()?;
            Month::ALL[index]
        }
    };

    let day = match cli.day {
        Some(d) => d,
        None => {
            let max_day = days_in_month(year, month)
                .with_context(|| format!("{year} is outside the supported calendar range"))?;
            Input::new()
                .with_prompt(format!("Move-in day (1-{max_day})"))
                .default(1)
                .interact_text()?
        }
    };

    let result = calculate_prorated_rent(rent, year, month.number(), day)?;
    print_result(&result);

    Ok(())
}

fn print_result(result: &ProrationResult) {
    println!();
    println!("{}", "Results".bright_white().bold());
    println!("  Month:          {}", result.period().cyan());
    println!("  Days in month:  {}", result.days_in_month);
    println!("  Days occupied:  {}", result.days_occupied);
    println!("  Daily rate:     {}", format_currency(result.daily_rate));
    println!();
    println!(
        "  {} {}",
        "Prorated rent owed:".bright_white().bold(),
        format_currency(result.prorated_rent).green().bold()
    );
    println!(
        "  {}",
        format!("Calculation: {}", result.caption()).bright_black()
    );
    println!();
}
