//! Study viewer entry point
//!
//! Usage:
//! - `study <catalog.ron> [script.ron]` opens a catalog and replays a script
//! - `study browse <library.ron> [term] [category]` searches the model library

use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::Arc;

use study_core::{ALL_CATEGORIES, Catalog, CatalogDescriber, ModelLibrary};
use study_viewer::{
    AppConfig, HttpPartDescriber, SessionDescriber, StudySession, create_shared_config, script,
};

const USAGE: &str =
    "Usage: study <catalog.ron> [script.ron] | study browse <library.ron> [term] [category]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "study_viewer=debug,study_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    let result = match args.first().map(|a| a.to_str()) {
        None => {
            tracing::error!("{}", USAGE);
            std::process::exit(2);
        }
        Some(Some("browse")) => browse(&args[1..]),
        Some(_) => study(&args),
    };

    if let Err(e) = &result {
        tracing::error!("{}", e);
    }
    result
}

fn load_config() -> AppConfig {
    let shared = create_shared_config();
    let manager = shared.read();
    tracing::info!("Using config {:?}", manager.config_file_path());
    manager.config().clone()
}

fn study(args: &[OsString]) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = args.iter().map(PathBuf::from);
    let Some(catalog_path) = args.next() else {
        tracing::error!("{}", USAGE);
        std::process::exit(2);
    };
    let script_path = args.next();

    tracing::info!("Starting study viewer");
    let config = load_config();

    let catalog = Arc::new(Catalog::load(&catalog_path)?);
    let local = CatalogDescriber::new(Arc::clone(&catalog));
    let describer: SessionDescriber = if config.metadata.enabled {
        Box::new(HttpPartDescriber::new(&config.metadata, local))
    } else {
        Box::new(local)
    };

    let mut session = StudySession::with_describer(catalog, &config.viewer, describer);

    if let Some(path) = script_path {
        let steps = script::load_script(&path)?;
        let summary = script::replay(&mut session, steps, config.viewer.frame_duration());
        tracing::info!(
            "Replayed {} actions ({} rejected) over {} frames",
            summary.applied,
            summary.rejected,
            summary.frames
        );
    }

    let frame = session.render_frame();
    tracing::info!(
        "Frame: {} visible parts, explosion {:.0}%",
        frame.instances.len(),
        session.view().explosion_ratio() * 100.0
    );
    if let Some(part) = session.view().selected_part() {
        let description = session
            .selected_description()
            .map(|d| d.text_or("No description available").to_string())
            .unwrap_or_default();
        tracing::info!("Selected '{}': {}", part.id, description);
    }
    let checked = session.view().checked_group_names();
    if !checked.is_empty() {
        tracing::info!("Checked for analysis: {}", checked.join(", "));
    }
    for exchange in session.assistant().transcript() {
        tracing::info!("Q: {}\nA: {}", exchange.question, exchange.answer);
    }

    println!("{}", serde_json::to_string_pretty(&frame)?);
    Ok(())
}

fn browse(args: &[OsString]) -> Result<(), Box<dyn std::error::Error>> {
    let Some(library_path) = args.first() else {
        tracing::error!("{}", USAGE);
        std::process::exit(2);
    };
    let term = args.get(1).map(|a| a.to_string_lossy()).unwrap_or_default();
    let category = args
        .get(2)
        .map(|a| a.to_string_lossy())
        .unwrap_or(ALL_CATEGORIES.into());

    let library = ModelLibrary::load(PathBuf::from(library_path))?;
    tracing::info!("Categories: {}", library.categories().join(", "));
    for favorite in library.favorites() {
        tracing::info!("Favorite: {} ({})", favorite.name, favorite.category);
    }

    let results = library.search(&term, &category);
    tracing::info!(
        "{} of {} models match '{}' in {}",
        results.len(),
        library.models().len(),
        term,
        category
    );

    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
