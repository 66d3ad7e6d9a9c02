mod commands;
mod output;
mod xml_output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use educoin_lib::{EducoinClient, Locale};

use crate::output::{DisplayLocales, OutputFormat};

#[derive(Parser)]
#[command(name = "educoin")]
#[command(about = "Browse Educoin payments and pay for education centers")]
struct Cli {
    /// Output format: table, json, csv, markdown, xml
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Locale for amounts: uz-UZ, ru-RU, en-US
    #[arg(long, default_value = "uz-UZ", global = true)]
    amount_locale: String,

    /// Locale for dates: uz-UZ, ru-RU, en-US
    #[arg(long, default_value = "ru-RU", global = true)]
    date_locale: String,

    /// API base URL (defaults to $EDUCOIN_BASE_URL, then the production API)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List payments, one page at a time
    Payments(commands::payments::PaymentsArgs),
    /// List centers that accept payments
    Centers,
    /// Pay for a center and print the payment link
    Pay(commands::pay::PayArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("educoin=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        "xml" => OutputFormat::Xml,
        _ => OutputFormat::Table,
    };

    let locales = DisplayLocales {
        amount: cli.amount_locale.parse::<Locale>()?,
        date: cli.date_locale.parse::<Locale>()?,
    };

    let client = match cli
        .base_url
        .or_else(|| std::env::var("EDUCOIN_BASE_URL").ok())
    {
        Some(url) => EducoinClient::with_base_url(&url),
        None => EducoinClient::new(),
    };

    match &cli.command {
        Commands::Payments(args) => {
            commands::payments::run(args, &client, &format, &locales).await?
        }
        Commands::Centers => commands::centers::run(&client, &format).await?,
        Commands::Pay(args) => commands::pay::run(args, &client, &locales).await?,
    }

    Ok(())
}
