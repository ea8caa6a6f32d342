//! Smoke test for the calculator flow.
//!
//! Loads the catalog, opens a session for one instrument, applies answers
//! given as `criterion=value` pairs and prints the recap. With `--favorite`
//! the instrument is toggled in the favorites file.
//!
//! Usage:
//!   cargo run -p scorexpress-app --example calculator_smoke -- crb65 confusion=yes age=yes
//!   cargo run -p scorexpress-app --example calculator_smoke -- sofa liver_bilirubin=3 --favorite

use scorexpress_app::config::{self, AppConfig};
use scorexpress_app::favorites::FavoritesStore;
use scorexpress_app::session::CalculatorSession;
use scorexpress_app::telemetry;
use scorexpress_export::styles::DocumentStyles;
use scorexpress_instruments::catalog::{Catalog, CatalogSource};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let config = if config::has_config() {
        config::load_config()?
    } else {
        AppConfig::default()
    };
    telemetry::init_tracing(&config)?;

    let mut args = std::env::args().skip(1);
    let instrument_id = args.next().unwrap_or_else(|| "crb65".to_string());
    let mut toggle_favorite = false;
    let mut answers = Vec::new();
    for arg in args {
        if arg == "--favorite" {
            toggle_favorite = true;
            continue;
        }
        let (criterion_id, raw) = arg
            .split_once('=')
            .ok_or_else(|| eyre::eyre!("expected criterion=value, got '{arg}'"))?;
        answers.push((criterion_id.to_string(), raw.to_string()));
    }

    let catalog = Catalog::load(&CatalogSource::builtin()).await;
    let instrument = catalog.require(&instrument_id)?;
    let mut session = CalculatorSession::new(instrument);

    for (criterion_id, raw) in &answers {
        session.set_raw(criterion_id, raw)?;
    }
    for problem in session.validation() {
        tracing::warn!(criterion_id = %problem.criterion_id, "{problem}");
    }

    println!("{}", session.recap()?);

    let today = jiff::Zoned::now().date();
    let exported = session.export(config.export_format, &DocumentStyles::default(), today)?;
    println!("→ would save {} ({} bytes)", exported.filename, exported.bytes.len());

    let mut favorites = FavoritesStore::open(config.resolved_favorites_path()?);
    if toggle_favorite {
        let now_favorite = favorites.toggle(&instrument_id)?;
        println!("{instrument_id} favorite: {now_favorite}");
    }
    let names: Vec<String> = favorites
        .resolve(&catalog)
        .iter()
        .map(|i| i.short_name.clone())
        .collect();
    println!("favorites: [{}]", names.join(", "));

    Ok(())
}
