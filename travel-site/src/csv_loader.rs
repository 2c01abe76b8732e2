//! CSV loader for the package pricing table.
//!
//! ## CSV Format
//!
//! Column order does **not** matter (headers are matched by name). Header
//! names are case-sensitive.
//!
//! | Column          | Required | Type    | Notes                                   |
//! |-----------------|----------|---------|-----------------------------------------|
//! | `id`            | yes      | integer | Shown in the first table column         |
//! | `destination`   | yes      | string  | e.g. `Tokyo, Japan` (quote it)          |
//! | `duration_days` | yes      | integer | 6 or more adds the weekend surcharge    |
//! | `base_price`    | yes      | decimal | Positive, at most 1,000,000,000         |
//! | `season`        | yes      | string  | `peak`, `shoulder`, `off`; other = base |
//!
//! Known season names are matched case-insensitively and always display in
//! their canonical spelling (`PEAK` shows as `Peak`). Unknown names keep
//! their own spelling with the first letter upper-cased.
//!
//! ### Example
//!
//! ```csv
//! id,destination,duration_days,base_price,season
//! 1,"Bali, Indonesia",7,1200,peak
//! 4,"Tokyo, Japan",8,1700,peak
//! ```
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use travel_core::{MAX_PRICE, Season, TourPackage};

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    id: u32,
    destination: String,
    duration_days: u32,
    base_price: Decimal,
    season: String,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading or converting CSV data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The file could not be read.
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The underlying CSV deserialisation failed (bad structure, missing
    /// column, type mismatch, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A `base_price` cell was zero or negative. `row` is 1-based
    /// (header = row 0).
    #[error("base price {price} on row {row} must be positive")]
    InvalidBasePrice { price: Decimal, row: usize },

    /// A `base_price` cell was above [`MAX_PRICE`].
    #[error("base price {price} on row {row} exceeds {}", MAX_PRICE)]
    BasePriceTooLarge { price: Decimal, row: usize },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// Convert a single CSV row into a TourPackage.
fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<TourPackage, CsvLoadError> {
    if row.base_price <= Decimal::ZERO {
        return Err(CsvLoadError::InvalidBasePrice {
            price: row.base_price,
            row: row_number,
        });
    }
    if row.base_price > MAX_PRICE {
        return Err(CsvLoadError::BasePriceTooLarge {
            price: row.base_price,
            row: row_number,
        });
    }

    Ok(TourPackage {
        id: row.id,
        destination: row.destination,
        duration_days: row.duration_days,
        base_price: row.base_price,
        season: Season::parse(&row.season),
    })
}

/// Parse CSV text and return the packages in file order.
///
/// # Errors
///
/// * [CsvLoadError::Parse] – if the CSV is structurally invalid or a
///   field cannot be deserialised.
/// * [CsvLoadError::InvalidBasePrice] – if any row has a non-positive price.
/// * [CsvLoadError::BasePriceTooLarge] – if any row's price exceeds [`MAX_PRICE`].
pub fn load_from_str(input: &str) -> Result<Vec<TourPackage>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    let packages = reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1)
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(count = packages.len(), "loaded packages from CSV");
    Ok(packages)
}

/// Read a file from disk and delegate to [load_from_str].
pub fn load_from_file(path: &Path) -> Result<Vec<TourPackage>, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&contents)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
