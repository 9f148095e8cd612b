use std::env;

use tracing::{info, warn};

use fixture_scraper::roster::Roster;
use fixture_scraper::scraper::Scraper;

/// Built-in demonstration input, used when the caller supplies no arguments.
const SAMPLE_TEXT: &str = "\
18:00Newell'sNewell's Old Boys  Unión Santa FeUnión
Marcelo Bielsa
18:00PlatensePlatense  SarmientoSarmiento
Ciudad de Vicente López
18:00RiverRiver Plate  Gimnasia La PlataGimnasia LP
Mâs Monumental
18:00San LorenzoSan Lorenzo  Deportivo RiestraDep. Riestra
Nuevo Gasómetro
18:00VélezVélez Sarsfield  Talleres de CórdobaTalleres
José Amalfitani
";

const SAMPLE_DATE: &str = "2025-11-02";

/// CLI entry point: argv[1] is the raw schedule text, argv[2] the reference
/// date in `YYYY-MM-DD` form. The record array goes to stdout as pretty JSON;
/// logging and per-block warnings go to stderr.
fn main() -> Result<(), String> {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .try_init();

    let mut args = env::args().skip(1);
    let (raw_text, date) = match (args.next(), args.next()) {
        (Some(text), Some(date)) => (text, date),
        _ => {
            warn!("Running without command-line arguments; using built-in sample data");
            (SAMPLE_TEXT.to_string(), SAMPLE_DATE.to_string())
        }
    };

    let scraper = Scraper::new(Roster::default())?;
    // Per-block failures are already logged as warnings during the parse.
    let (records, _diagnostics) = scraper.parse(&raw_text, &date);
    info!(records = records.len(), date = %date, "Extraction complete");

    let json = serde_json::to_string_pretty(&records)
        .map_err(|e| format!("Failed to encode records as JSON: {}", e))?;
    println!("{}", json);
    Ok(())
}
