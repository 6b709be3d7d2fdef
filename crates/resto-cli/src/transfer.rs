//! CSV shapes for `resto import` and `resto export`.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use resto_core::models::Restaurant;

/// One row of an import file: `name,address,city,category,rating`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImportRow {
    pub name: String,
    pub address: String,
    pub city: String,
    /// Category name, created when missing.
    pub category: String,
    /// Empty cells read as no rating (0).
    pub rating: Option<f64>,
}

/// One row of an export: `id,name,address,city,category,rating`.
#[derive(Debug, Serialize)]
pub struct ExportRow<'a> {
    pub id: i32,
    pub name: &'a str,
    pub address: &'a str,
    pub city: &'a str,
    pub category: &'a str,
    pub rating: f64,
}

impl<'a> From<&'a Restaurant> for ExportRow<'a> {
    fn from(r: &'a Restaurant) -> Self {
        Self {
            id: r.id,
            name: &r.name,
            address: &r.address,
            city: &r.city,
            category: &r.category.name,
            rating: r.rating,
        }
    }
}

/// Parse every row, pairing each with the line it starts on (header is line 1).
///
/// Unparseable rows come back as errors so the caller can skip and report them.
pub fn read_rows<R: Read>(input: R) -> Vec<(u64, Result<ImportRow, csv::Error>)> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(input);
    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(e) => return vec![(1, Err(e))],
    };

    reader
        .records()
        .map(|record| match record {
            Ok(record) => {
                let line = record.position().map_or(0, csv::Position::line);
                (line, record.deserialize(Some(&headers)))
            }
            Err(e) => (e.position().map_or(0, csv::Position::line), Err(e)),
        })
        .collect()
}

pub fn write_rows<W: Write>(output: W, restaurants: &[Restaurant]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(output);
    for restaurant in restaurants {
        writer.serialize(ExportRow::from(restaurant))?;
    }
    writer.flush()?;
    Ok(())
}
