use crate::data::{regions, specialties};
use crate::domain::model::{AppointmentListing, ResultSet, SortKey};
use crate::utils::error::{FinderError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

pub const NO_RESULTS_MESSAGE: &str =
    "Nie znaleziono terminów dla wybranych kryteriów. Spróbuj zmienić parametry wyszukiwania.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

/// 相對天數標籤：Dziś / Jutro / Za N dni
pub fn days_until_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        i64::MIN..=0 => "Dziś".to_string(),
        1 => "Jutro".to_string(),
        days => format!("Za {} dni", days),
    }
}

pub fn render(results: &ResultSet, format: OutputFormat, today: NaiveDate) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(results, today)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
        OutputFormat::Csv => render_csv(&results.listings),
    }
}

fn render_text(results: &ResultSet, today: NaiveDate) -> String {
    if results.is_empty() {
        return format!("{}\n", NO_RESULTS_MESSAGE);
    }

    let sort_label = match results.sort_key {
        SortKey::Date => "data",
        SortKey::Distance => "odległość",
    };
    let mut out = format!(
        "Znaleziono {} terminów (sortowanie: {})\n",
        results.len(),
        sort_label
    );

    for (index, listing) in results.listings.iter().enumerate() {
        out.push('\n');
        write_listing(&mut out, index + 1, listing, today);
    }

    out
}

fn write_listing(out: &mut String, position: usize, listing: &AppointmentListing, today: NaiveDate) {
    // 寫入 String 不會失敗
    let _ = writeln!(out, "{}. {}", position, listing.provider_name);
    let _ = writeln!(
        out,
        "   Termin: {} ({})",
        listing.earliest_date.format("%d.%m.%Y"),
        days_until_label(listing.earliest_date, today)
    );

    match &listing.city {
        Some(city) => {
            let _ = writeln!(out, "   Adres: {}, {}", listing.address, city);
        }
        None => {
            let _ = writeln!(out, "   Adres: {}", listing.address);
        }
    }
    if let Some(contact) = &listing.contact {
        let _ = writeln!(out, "   Telefon: {}", contact);
    }
    let _ = writeln!(out, "   Specjalizacja: {}", listing.specialty);

    let features: Vec<_> = listing
        .raw_attributes
        .accessibility()
        .iter()
        .map(|flag| flag.label())
        .collect();
    if !features.is_empty() {
        let _ = writeln!(out, "   Udogodnienia: {}", features.join(", "));
    }

    if let Some(stats) = listing.raw_attributes.provider_data() {
        let awaiting = stats.awaiting.as_ref().map(|v| v.to_string()).unwrap_or_else(|| "-".to_string());
        let period = stats
            .average_period
            .as_ref()
            .map(|v| format!("{} dni", v))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "   Oczekujących: {} | Średni czas oczekiwania: {}",
            awaiting, period
        );
    }
}

fn render_csv(listings: &[AppointmentListing]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "id",
        "provider",
        "address",
        "city",
        "phone",
        "specialty",
        "earliest_date",
        "awaiting",
        "average_period",
    ])?;

    for listing in listings {
        let stats = listing.raw_attributes.provider_data();
        writer.write_record([
            listing.id.clone(),
            listing.provider_name.clone(),
            listing.address.clone(),
            listing.city.clone().unwrap_or_default(),
            listing.contact.clone().unwrap_or_default(),
            listing.specialty.clone(),
            listing.earliest_date.format("%Y-%m-%d").to_string(),
            stats
                .and_then(|s| s.awaiting.as_ref())
                .map(|v| v.to_string())
                .unwrap_or_default(),
            stats
                .and_then(|s| s.average_period.as_ref())
                .map(|v| v.to_string())
                .unwrap_or_default(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| FinderError::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| FinderError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

pub fn render_regions() -> String {
    let mut out = String::new();
    for region in regions::regions() {
        let code = regions::province_code(region.id).unwrap_or("--");
        let _ = writeln!(
            out,
            "{:<20} {} {:<20} sąsiedzi: {}",
            region.id,
            code,
            region.display_name,
            region.neighbor_ids.join(", ")
        );
    }
    out
}

pub fn render_specialties() -> String {
    let mut out = String::new();
    for specialty in specialties::specialties() {
        let _ = writeln!(out, "{:<16} {}", specialty.name, specialty.id);
    }
    out
}
