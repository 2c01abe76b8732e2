//! Package pricing table.

use std::fmt;

use rust_decimal::Decimal;
use travel_core::{TourPackage, calculations::common::format_amount, final_price};

use crate::utils::escape_html;

pub const COLUMN_HEADERS: [&str; 6] = [
    "ID",
    "Destination",
    "Duration (days)",
    "Base Price (USD)",
    "Season",
    "Final Price (USD)",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRow {
    pub package: TourPackage,
    pub final_price: Decimal,
}

impl PackageRow {
    /// Cell text in column order, prices formatted as `$x.xx`.
    fn cells(&self) -> [String; 6] {
        [
            self.package.id.to_string(),
            self.package.destination.clone(),
            self.package.duration_days.to_string(),
            format!("${}", format_amount(self.package.base_price)),
            self.package.season.label(),
            format!("${}", format_amount(self.final_price)),
        ]
    }
}

/// The package table with final prices already computed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageTable {
    rows: Vec<PackageRow>,
}

impl PackageTable {
    pub fn new(packages: Vec<TourPackage>) -> Self {
        let rows = packages
            .into_iter()
            .map(|package| PackageRow {
                final_price: final_price(&package),
                package,
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[PackageRow] {
        &self.rows
    }

    /// Renders the `<table class="package-table">` markup that replaces the
    /// static package grid.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<table class=\"package-table\">\n  <thead>\n    <tr>");
        for header in COLUMN_HEADERS {
            html.push_str(&format!("<th>{header}</th>"));
        }
        html.push_str("</tr>\n  </thead>\n  <tbody>\n");

        for row in &self.rows {
            let [id, destination, duration, base, season, total] = row.cells();
            html.push_str(&format!(
                "    <tr><td>{id}</td><td>{}</td><td>{duration}</td><td>{base}</td>\
                 <td>{}</td><td><strong>{total}</strong></td></tr>\n",
                escape_html(&destination),
                escape_html(&season),
            ));
        }

        html.push_str("  </tbody>\n</table>\n");
        html
    }
}

/// Plain-text rendering with aligned columns.
impl fmt::Display for PackageTable {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let cells: Vec<[String; 6]> = self.rows.iter().map(PackageRow::cells).collect();

        let mut widths = COLUMN_HEADERS.map(|h| h.chars().count());
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let header: Vec<String> = COLUMN_HEADERS.iter().map(|h| h.to_string()).collect();
        write_text_row(f, &header, &widths)?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        write_text_row(f, &rule, &widths)?;
        for row in &cells {
            write_text_row(f, row, &widths)?;
        }
        Ok(())
    }
}

fn write_text_row(
    f: &mut fmt::Formatter<'_>,
    cells: &[String],
    widths: &[usize; 6],
) -> fmt::Result {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    writeln!(f, "{}", line.join("  ").trim_end())
}
