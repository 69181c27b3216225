//! Normalize command - check a user-entered identity number.

use clap::Args;
use console::style;

use idscan_core::{format_identity_number, validate_identity_number};

/// Arguments for the normalize command.
#[derive(Args)]
pub struct NormalizeArgs {
    /// Identity number as entered, e.g. "1234-5678-9012"
    number: String,

    /// Print as three groups of four digits
    #[arg(long)]
    grouped: bool,
}

pub async fn run(args: NormalizeArgs) -> anyhow::Result<()> {
    let digits = validate_identity_number(Some(&args.number))?;

    if args.grouped {
        println!("{}", format_identity_number(&digits));
    } else {
        println!("{}", digits);
    }
    eprintln!("{} Valid identity number", style("✓").green());

    Ok(())
}
