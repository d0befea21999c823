//! Master control: ingest, shift, alphabetize, emit.

use std::io::{self, Write};

use crate::config::RunConfig;
use crate::emit;
use crate::error::{KwicError, Result};
use crate::ingest;
use crate::text::{AddressableText, ShiftView, SortedView};

/// Write the KWIC index of `text` (all circular shifts, alphabetized) to `out`
pub fn write_index<T, W>(text: &T, out: W) -> Result<()>
where
    T: AddressableText + ?Sized,
    W: Write,
{
    let shifted = ShiftView::new(text);
    let sorted = SortedView::new(&shifted);
    emit::write_text(&sorted, out)
}

/// The KWIC index of `text` as bytes
pub fn index_bytes<T: AddressableText + ?Sized>(text: &T) -> Vec<u8> {
    let shifted = ShiftView::new(text);
    let sorted = SortedView::new(&shifted);
    emit::to_bytes(&sorted)
}

/// Index the configured input file onto stdout
#[tracing::instrument(name = "kwic", skip_all, fields(input = %config.input.display()))]
pub fn run(config: &RunConfig) -> Result<()> {
    tracing::info!("Indexing");
    let store = ingest::read_file(&config.input)?;
    let stdout = io::stdout();
    write_index(&store, stdout.lock())?;
    tracing::info!(words = store.total_words(), "Index written");
    Ok(())
}

/// Attach context to a failed [`run`] naming the stage that failed
pub fn report(err: KwicError, config: &RunConfig) -> anyhow::Error {
    match err {
        KwicError::Write(_) => anyhow::Error::new(err).context("Error writing index"),
        _ => {
            let context = format!("Error in input({})", config.input.display());
            anyhow::Error::new(err).context(context)
        }
    }
}
