use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use divvy::cli::ConsoleIo;
use divvy::display::render_user_allocation;
use divvy::services::analyze;
use divvy::storage::load_from_file;

#[derive(Parser)]
#[command(
    name = "divvy",
    version,
    about = "Terminal-based family budget allocation calculator",
    long_about = "Divvy loads a YAML family budget, asks for remaining funds \
                  and incomes, and reports how each user's income should be \
                  allocated across their expenditures in priority order."
)]
struct Cli {
    /// Path to the budget document
    #[arg(default_value = "budget.yaml")]
    budget_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let budget = load_from_file(&cli.budget_file)?;

    let mut io = ConsoleIo::new();
    let allocations = analyze(&budget, &mut io)?;

    println!();

    for allocation in &allocations {
        print!("{}", render_user_allocation(allocation));
    }

    Ok(())
}
