use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use educoin_lib::validation;
use educoin_lib::{total_pages, EducoinClient, PaginationState, PaymentRecord};
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::output::{
    page_summary, print_json, print_payments_csv, print_payments_markdown, print_payments_table,
    print_payments_xml, DisplayLocales, OutputFormat,
};

#[derive(Args)]
pub struct PaymentsArgs {
    /// Page number
    #[arg(long, default_value = "1")]
    pub page: usize,

    /// Rows per page
    #[arg(long, default_value = "10")]
    pub page_size: usize,

    /// Browse pages from stdin: n(ext), p(rev), r(eload), q(uit)
    #[arg(long)]
    pub interactive: bool,
}

/// A line typed at the interactive prompt.
#[derive(Debug, PartialEq, Eq)]
enum NavCommand<'a> {
    Next,
    Prev,
    Reload,
    Quit,
    Blank,
    Unknown(&'a str),
}

fn parse_nav_command(line: &str) -> NavCommand<'_> {
    match line.trim() {
        "n" | "next" => NavCommand::Next,
        "p" | "prev" => NavCommand::Prev,
        "r" | "reload" => NavCommand::Reload,
        "q" | "quit" => NavCommand::Quit,
        "" => NavCommand::Blank,
        other => NavCommand::Unknown(other),
    }
}

pub async fn run(
    args: &PaymentsArgs,
    client: &EducoinClient,
    format: &OutputFormat,
    locales: &DisplayLocales,
) -> Result<()> {
    let page = validation::validate_page(args.page)?;
    let page_size = validation::validate_page_size(args.page_size)?;

    let mut records = load_records(client).await?;
    let mut state = PaginationState::at_page(page_size, page);
    render(&mut state, &records, format, locales)?;

    if !args.interactive {
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        eprint!("[n]ext [p]rev [r]eload [q]uit > ");
        std::io::stderr().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        match parse_nav_command(&line) {
            NavCommand::Next => state.next(total_pages(records.len(), state.page_size())),
            NavCommand::Prev => state.prev(),
            NavCommand::Reload => {
                records = load_records(client).await?;
                state.reset();
            }
            NavCommand::Quit => break,
            NavCommand::Blank => continue,
            NavCommand::Unknown(other) => {
                eprintln!("Unknown command '{}'", other);
                continue;
            }
        }
        render(&mut state, &records, format, locales)?;
    }

    Ok(())
}

async fn load_records(client: &EducoinClient) -> Result<Vec<PaymentRecord>> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message("Loading...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = client.payment_records().await;
    spinner.finish_and_clear();
    Ok(result?)
}

fn render(
    state: &mut PaginationState,
    records: &[PaymentRecord],
    format: &OutputFormat,
    locales: &DisplayLocales,
) -> Result<()> {
    let page = state.page(records);

    if records.is_empty() {
        eprintln!("No payments found");
    } else if let Some(summary) = page_summary(&page, records.len()) {
        eprintln!("{}", summary);
    }

    match format {
        OutputFormat::Table => print_payments_table(&page, locales),
        OutputFormat::Json => print_json(&page),
        OutputFormat::Csv => print_payments_csv(&page, locales)?,
        OutputFormat::Markdown => print_payments_markdown(&page, locales),
        OutputFormat::Xml => print_payments_xml(&page)?,
    }

    Ok(())
}
