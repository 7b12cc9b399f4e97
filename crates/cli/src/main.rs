use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use partscope_catalog::{CatalogSnapshot, DESCRIPTION_MAX_CHARS, load_snapshot};
use partscope_core::{SearchConfig, Threshold};
use partscope_search::{BrowseView, CatalogBrowser, FilterIntent};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Search and filter a product catalog.
#[derive(Debug, Parser)]
#[command(name = "partscope", version, about)]
struct Cli {
    /// Catalog file (JSON array of products); `-` reads stdin.
    #[arg(short, long, value_name = "PATH")]
    catalog: PathBuf,

    /// Free-text query matched approximately against partNumber, type, OEM and compatibleWith.
    #[arg(short, long, default_value = "")]
    query: String,

    /// Product type to filter by (repeatable, case-insensitive; products of any listed type are shown).
    #[arg(short, long = "filter", value_name = "TYPE")]
    filters: Vec<String>,

    /// Fuzziness threshold between 0 (exact) and 1 (very fuzzy); overrides PARTSCOPE_THRESHOLD.
    #[arg(short, long)]
    threshold: Option<Threshold>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Only print the available product types.
    #[arg(long)]
    list_types: bool,
}

fn main() -> Result<()> {
    partscope_observability::init();
    let cli = Cli::parse();

    let mut config = SearchConfig::from_env().context("invalid search configuration")?;
    if let Some(threshold) = cli.threshold {
        config = config.with_threshold(threshold);
    }

    let snapshot = read_snapshot(&cli.catalog)?;
    tracing::info!(
        snapshot = %snapshot.id(),
        products = snapshot.len(),
        threshold = %config.threshold,
        "catalog loaded"
    );

    let mut browser = CatalogBrowser::with_catalog(config, snapshot);
    activate_filters(&mut browser, &cli.filters);
    browser.dispatch(&FilterIntent::SetQuery(cli.query.clone()));

    let view = browser.view();
    tracing::info!(results = view.results.len(), "resolved");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match (cli.format, cli.list_types) {
        (OutputFormat::Json, true) => {
            serde_json::to_writer_pretty(&mut out, &view.types)?;
            writeln!(out)?;
        }
        (OutputFormat::Json, false) => {
            serde_json::to_writer_pretty(&mut out, &view)?;
            writeln!(out)?;
        }
        (OutputFormat::Text, true) => print_types(&mut out, &view)?,
        (OutputFormat::Text, false) => print_results(&mut out, &view)?,
    }

    Ok(())
}

/// Turn on every listed type. Flags naming the same type in any casing
/// collapse to one token, so repeating a flag never switches it back off.
fn activate_filters(browser: &mut CatalogBrowser, filters: &[String]) {
    let tokens: BTreeSet<String> = filters.iter().map(|f| f.trim().to_lowercase()).collect();
    for token in tokens {
        if !token.is_empty() && !browser.state().is_active(&token) {
            browser.dispatch(&FilterIntent::Toggle(token));
        }
    }
}

fn read_snapshot(path: &Path) -> Result<CatalogSnapshot> {
    if path.as_os_str() == "-" {
        return load_snapshot(io::stdin().lock()).context("failed to load catalog from stdin");
    }

    let file = File::open(path)
        .with_context(|| format!("failed to open catalog {}", path.display()))?;
    load_snapshot(BufReader::new(file))
        .with_context(|| format!("failed to load catalog {}", path.display()))
}

fn print_types(out: &mut impl Write, view: &BrowseView) -> io::Result<()> {
    for toggle in &view.types {
        let marker = if toggle.pressed { "[x]" } else { "[ ]" };
        writeln!(out, "{marker} {}", toggle.label)?;
    }
    Ok(())
}

fn print_results(out: &mut impl Write, view: &BrowseView) -> io::Result<()> {
    if view.results.is_empty() {
        writeln!(out, "no matching products")?;
        return Ok(());
    }

    for item in &view.results {
        let product = &item.product;
        match item.score {
            Some(score) => write!(out, "{:<20} {:>5.3}", product.part_number, score)?,
            None => write!(out, "{:<20}", product.part_number)?,
        }
        writeln!(
            out,
            "  {:<12} {:<16} {}",
            product.product_type.to_uppercase(),
            product.oem,
            product.name
        )?;

        let description = product.short_description(DESCRIPTION_MAX_CHARS);
        if !description.is_empty() {
            writeln!(out, "    {description}")?;
        }
    }

    writeln!(out, "{} result(s)", view.results.len())?;
    Ok(())
}
