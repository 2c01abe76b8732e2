use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use travel_core::FormField;
use travel_site::{
    SiteConfig,
    components::{BookingPage, PackageTable},
    csv_loader, logging,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// TravelBuddy site tools: package pricing table and booking estimates.
#[derive(Debug, Parser)]
#[command(name = "travel-buddy", version, about, long_about = None)]
struct Cli {
    /// Site configuration file (TOML). Built-in prices are used when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level regardless of the configured level.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the package pricing table.
    Packages {
        /// Read packages from this CSV file instead of the configuration.
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print the HTML table instead of plain text.
        #[arg(long, default_value_t = false)]
        html: bool,
    },

    /// Estimate a booking and report whether the form could be submitted.
    Estimate(EstimateArgs),
}

/// Booking form values, given as the text a visitor would type.
#[derive(Debug, Args)]
struct EstimateArgs {
    /// Check-in date (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    check_in: String,

    /// Check-out date (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    check_out: String,

    #[arg(long, default_value = "1")]
    guests: String,

    #[arg(long, default_value = "")]
    promo: String,

    /// Package name, e.g. "Romantic Getaway"
    #[arg(long, default_value = "")]
    package: String,

    /// Destination, e.g. "Tokyo, Japan"
    #[arg(long, default_value = "")]
    destination: String,

    #[arg(long, default_value = "")]
    name: String,

    #[arg(long, default_value = "")]
    email: String,
}

impl EstimateArgs {
    fn into_field_values(self) -> Vec<(FormField, String)> {
        vec![
            (FormField::CheckIn, self.check_in),
            (FormField::CheckOut, self.check_out),
            (FormField::Guests, self.guests),
            (FormField::PromoCode, self.promo),
            (FormField::Package, self.package),
            (FormField::Destination, self.destination),
            (FormField::Name, self.name),
            (FormField::Email, self.email),
        ]
    }
}

// ─── commands ────────────────────────────────────────────────────────────────

fn print_packages(
    config: &SiteConfig,
    file: Option<&Path>,
    html: bool,
) -> Result<()> {
    let packages = match file {
        Some(path) => csv_loader::load_from_file(path)
            .with_context(|| format!("Failed to load packages from: {}", path.display()))?,
        None => config.packages.clone(),
    };
    info!(count = packages.len(), "rendering package table");

    let table = PackageTable::new(packages);
    if html {
        print!("{}", table.to_html());
    } else {
        print!("{table}");
    }
    Ok(())
}

fn print_estimate(
    config: &SiteConfig,
    args: EstimateArgs,
) -> Result<()> {
    let page = BookingPage::with_values(config.pricing.clone(), args.into_field_values());

    println!("{}", page.estimate_text());

    if page.is_submit_disabled() {
        let invalid: Vec<&str> = page
            .invalid_fields()
            .iter()
            .map(|field| field.as_str())
            .collect();
        println!("Booking cannot be submitted; check: {}", invalid.join(", "));
    } else {
        println!("Booking is ready to submit.");
    }
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = SiteConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load site configuration")?;

    logging::init_logging(&config.log_level);
    if cli.verbose {
        logging::set_log_level("debug")?;
    }
    if let Some(log_file) = &config.log_file {
        logging::enable_file_logging(log_file)?;
    }
    debug!(config = ?cli.config, "configuration loaded");

    match cli.command {
        Command::Packages { file, html } => print_packages(&config, file.as_deref(), html),
        Command::Estimate(args) => print_estimate(&config, args),
    }
}
