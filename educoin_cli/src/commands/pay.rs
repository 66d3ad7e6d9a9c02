use anyhow::Result;
use clap::Args;
use educoin_lib::validation;
use educoin_lib::{format_amount_input, format_date, CheckoutForm, EducoinClient, CURRENCY_SUFFIX};

use crate::output::DisplayLocales;

#[derive(Args)]
pub struct PayArgs {
    /// Center ID (see `educoin centers`)
    #[arg(long)]
    pub center: String,

    /// First day of the paid period (YYYY-MM-DD)
    #[arg(long)]
    pub from: String,

    /// Last day of the paid period (YYYY-MM-DD)
    #[arg(long)]
    pub to: String,

    /// Amount in so'm; grouping like "500 000" is accepted
    #[arg(long)]
    pub amount: String,
}

pub async fn run(args: &PayArgs, client: &EducoinClient, locales: &DisplayLocales) -> Result<()> {
    eprintln!("{}", payment_preview(args, locales)?);

    let form = CheckoutForm {
        center_id: args.center.clone(),
        from_date: args.from.clone(),
        to_date: args.to.clone(),
        amount: args.amount.clone(),
    };
    let url = client.checkout(form).await?;

    eprintln!("Open this link to complete the payment:");
    println!("{}", url);

    Ok(())
}

/// Echoes the form back the way the payer typed it, grouped for the locale.
fn payment_preview(args: &PayArgs, locales: &DisplayLocales) -> Result<String> {
    validation::parse_amount_input(&args.amount)?;
    let amount = format_amount_input(&args.amount, locales.amount).unwrap_or_default();

    Ok(format!(
        "Paying {} {} to center {} for {} - {}",
        amount,
        CURRENCY_SUFFIX,
        args.center.trim(),
        format_date(&args.from, locales.date),
        format_date(&args.to, locales.date)
    ))
}
