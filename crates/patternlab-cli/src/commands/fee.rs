//! Implementation of the `patternlab fee` command.

use chrono::Utc;
use patternlab_core::{
    domain::{Money, ParkingRate, Payment, PaymentMethod},
    error::LabError,
};
use serde::Serialize;

use crate::{
    cli::{FeeArgs, OutputFormat},
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct FeeQuote {
    hours: f64,
    billable_hours: u64,
    fee: String,
    cents: u64,
    method: PaymentMethod,
}

pub fn execute(args: FeeArgs, output: &OutputManager) -> CliResult<()> {
    let quote = quote(args.hours)?;

    match output.format() {
        OutputFormat::Json => output.json(&quote)?,
        OutputFormat::Plain => output.print(&quote.fee)?,
        OutputFormat::Human | OutputFormat::Auto => {
            output.success(&format!(
                "{} hours parked ({} billable): {}",
                quote.hours, quote.billable_hours, quote.fee
            ))?;
            output.print(&format!("  paid by {}", quote.method))?;
        }
    }
    Ok(())
}

fn quote(hours: f64) -> Result<FeeQuote, LabError> {
    let billable_hours = ParkingRate.billable(hours)?;
    let fee: Money = ParkingRate.for_whole_hours(billable_hours);
    let method = Payment::for_fee(fee, Utc::now()).method;

    Ok(FeeQuote {
        hours,
        billable_hours,
        fee: fee.to_string(),
        cents: fee.cents(),
        method,
    })
}
