use anyhow::Result;
use educoin_lib::types::Center;
use educoin_lib::{format_amount, format_date, Locale, Page, PaymentRecord};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::xml_output;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
    Xml,
}

/// Locales used when rendering amounts and dates.
#[derive(Clone, Copy, Debug)]
pub struct DisplayLocales {
    pub amount: Locale,
    pub date: Locale,
}

#[derive(Tabled, Serialize)]
struct PaymentRow {
    #[tabled(rename = "T/R")]
    #[serde(rename = "T/R")]
    row: usize,
    #[tabled(rename = "Center")]
    #[serde(rename = "Center")]
    center: String,
    #[tabled(rename = "Start")]
    #[serde(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    #[serde(rename = "End")]
    end: String,
    #[tabled(rename = "Paid Via")]
    #[serde(rename = "Paid Via")]
    paid_via: String,
    #[tabled(rename = "Amount")]
    #[serde(rename = "Amount")]
    amount: String,
}

#[derive(Tabled, Serialize)]
struct CenterRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
}

// -- Row builders --

fn build_payment_rows(page: &Page<'_, PaymentRecord>, locales: &DisplayLocales) -> Vec<PaymentRow> {
    page.items
        .iter()
        .enumerate()
        .map(|(i, p)| PaymentRow {
            row: page.row_number(i),
            center: p.center_name.clone(),
            start: format_date(&p.start_date, locales.date),
            end: format_date(&p.end_date, locales.date),
            paid_via: p.paid_via.clone(),
            amount: format_amount(p.amount, locales.amount),
        })
        .collect()
}

fn build_center_rows(centers: &[Center]) -> Vec<CenterRow> {
    centers
        .iter()
        .map(|c| CenterRow {
            id: c.id.to_string(),
            name: c.name.clone(),
        })
        .collect()
}

/// Footer shown under the payments table. Only printed when there is more
/// than one page to move between.
pub fn page_summary(page: &Page<'_, PaymentRecord>, total_items: usize) -> Option<String> {
    if page.total_pages <= 1 {
        return None;
    }
    Some(format!(
        "Page {} of {} ({} payments)",
        page.page_number, page.total_pages, total_items
    ))
}

// -- Table output --

pub fn print_payments_table(page: &Page<'_, PaymentRecord>, locales: &DisplayLocales) {
    println!("{}", Table::new(build_payment_rows(page, locales)));
}

pub fn print_centers_table(centers: &[Center]) {
    println!("{}", Table::new(build_center_rows(centers)));
}

// -- Markdown output --

pub fn print_payments_markdown(page: &Page<'_, PaymentRecord>, locales: &DisplayLocales) {
    let mut table = Table::new(build_payment_rows(page, locales));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_centers_markdown(centers: &[Center]) {
    let mut table = Table::new(build_center_rows(centers));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

fn write_csv<W: std::io::Write, T: Serialize>(writer: W, rows: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_payments_csv(page: &Page<'_, PaymentRecord>, locales: &DisplayLocales) -> Result<()> {
    write_csv(std::io::stdout(), &build_payment_rows(page, locales))
}

pub fn print_centers_csv(centers: &[Center]) -> Result<()> {
    write_csv(std::io::stdout(), &build_center_rows(centers))
}

// -- XML output --

pub fn print_payments_xml(page: &Page<'_, PaymentRecord>) -> Result<()> {
    println!("{}", xml_output::payments_page_to_xml(page)?);
    Ok(())
}

pub fn print_centers_xml(centers: &[Center]) -> Result<()> {
    println!("{}", xml_output::centers_to_xml(centers)?);
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
