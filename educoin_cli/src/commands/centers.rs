use anyhow::Result;
use educoin_lib::EducoinClient;

use crate::output::{
    print_centers_csv, print_centers_markdown, print_centers_table, print_centers_xml,
    print_json, OutputFormat,
};

pub async fn run(client: &EducoinClient, format: &OutputFormat) -> Result<()> {
    let centers = client.centers().await?;

    eprintln!("{} centers", centers.len());

    match format {
        OutputFormat::Table => print_centers_table(&centers),
        OutputFormat::Json => print_json(&centers),
        OutputFormat::Csv => print_centers_csv(&centers)?,
        OutputFormat::Markdown => print_centers_markdown(&centers),
        OutputFormat::Xml => print_centers_xml(&centers)?,
    }

    Ok(())
}
