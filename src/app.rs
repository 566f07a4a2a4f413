use std::io::{stdout, BufWriter, Write};

use tracing::{info, warn};

use crate::{
    common::{
        config::{Config, ExportFormat},
        error::AppError,
    },
    io::{
        catalog_source::{load_catalog, FileCatalogSource},
        reader, render,
        store::LedgerStore,
        writer,
    },
    worker::processor::{Outcome, Processor, Session},
};

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let config = Config::from_args(args)?;
    let stdout = stdout();
    let out = BufWriter::new(stdout.lock());
    run_with(&config, out)
}

/// Runs one session against `config`, writing the rendered page and the
/// exported summary to `out`.
pub fn run_with<W: Write>(config: &Config, mut out: W) -> Result<(), AppError> {
    // Nothing below works without the catalog.
    let mut source = FileCatalogSource::new(&config.catalog_path);
    let catalog = load_catalog(&mut source, &config.retry)?;

    let store = config.state_path.as_ref().map(LedgerStore::new);
    let mut ledger = store.as_ref().map(LedgerStore::load).unwrap_or_default();
    let dropped = ledger.retain_known(&catalog);
    if !dropped.is_empty() {
        warn!(?dropped, "discarded saved items missing from the catalog");
    }

    let mut session = Session::new(&catalog, ledger);
    let mut processor = Processor::new();

    if let Some(path) = &config.intents_path {
        let file = std::fs::File::open(path)?;
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(file);

        let mut applied = 0usize;
        for intent in reader::read_intents(&mut rdr) {
            let intent = intent.map_err(AppError::Parse)?;
            if processor.process(&mut session, intent) != Outcome::Ignored {
                applied += 1;
            }
        }
        info!(applied, "intent script processed");
    }

    out.write_all(render::render_page(&catalog, &session.ledger, &session.view).as_bytes())?;

    if let Some(copied) = &session.view.clipboard {
        writeln!(out, "\n--- copied ---\n{copied}")?;
    }

    if config.export == ExportFormat::Csv {
        writeln!(out)?;
        writer::write_summary(&mut out, &session.ledger.summary_lines(&catalog))?;
    }
    out.flush()?;

    if let Some(store) = &store {
        // Losing the saved order is not worth failing the session over.
        if let Err(err) = store.save(&session.ledger) {
            warn!(path = %store.path().display(), error = %err, "could not save order");
        }
    }

    Ok(())
}
