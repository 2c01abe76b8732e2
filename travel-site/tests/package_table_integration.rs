//! Integration tests that load the package CSV fixture from disk and render
//! the pricing table.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use travel_core::Season;
use travel_site::{components::PackageTable, csv_loader};

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("packages.csv")
}

#[test]
fn test_load_fixture_file_succeeds() {
    let packages =
        csv_loader::load_from_file(&fixture_path()).expect("fixture file should load");

    assert_eq!(packages.len(), 5);
}

#[test]
fn test_fixture_unknown_season_is_kept() {
    let packages = csv_loader::load_from_file(&fixture_path()).unwrap();
    let cape_town = &packages[4];

    assert_eq!(cape_town.destination, "Cape Town, South Africa");
    assert_eq!(cape_town.season, Season::Other("winter".to_string()));
    assert_eq!(cape_town.base_price, dec!(1350));
}

#[test]
fn test_fixture_final_prices() {
    let packages = csv_loader::load_from_file(&fixture_path()).unwrap();
    let table = PackageTable::new(packages);

    let prices: Vec<_> = table.rows().iter().map(|r| r.final_price).collect();
    // Cape Town: 1350 × 1.0 × 1.05
    assert_eq!(
        prices,
        vec![
            dec!(1575.00),
            dec!(1650.00),
            dec!(1039.50),
            dec!(2231.25),
            dec!(1417.50)
        ]
    );
}

#[test]
fn test_fixture_html_table() {
    let packages = csv_loader::load_from_file(&fixture_path()).unwrap();
    let html = PackageTable::new(packages).to_html();

    assert!(html.contains(
        "<tr><td>5</td><td>Cape Town, South Africa</td><td>10</td><td>$1350.00</td>\
         <td>Winter</td><td><strong>$1417.50</strong></td></tr>"
    ));
}
