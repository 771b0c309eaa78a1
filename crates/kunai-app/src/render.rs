//! Renders card documents through a vCard writer.

use kunai_core::config::WriterConfig;
use kunai_rfc::rfc::vcard::{SequencedWriter, Sink, VCardWrite, VCardWriter};

use crate::card::CardDocument;
use crate::error::AppResult;

/// Writes one card: envelope, then its properties in document order.
///
/// ## Errors
/// Returns an error if a line is malformed, the writer rejects the sequence,
/// or the sink fails.
#[tracing::instrument(skip_all, fields(properties = card.properties.len()))]
pub fn render_card<W: VCardWrite + ?Sized>(
    writer: &mut W,
    card: &CardDocument,
    default_version: &str,
) -> AppResult<()> {
    writer.start_vcard(&card.version_or(default_version))?;

    for property in &card.properties {
        writer.print_content_line(&property.to_content_line())?;
    }

    writer.end_vcard()?;
    Ok(())
}

/// Writes every card to `sink` using the configured writer.
///
/// ## Errors
/// Stops at the first card that fails; earlier cards stay written.
pub fn render_all<S: Sink + ?Sized>(
    sink: &mut S,
    cards: &[CardDocument],
    config: &WriterConfig,
) -> AppResult<()> {
    let mut writer = VCardWriter::new(sink);

    if config.sequenced {
        render_each(&mut SequencedWriter::new(writer), cards, &config.version)
    } else {
        render_each(&mut writer, cards, &config.version)
    }
}

fn render_each<W: VCardWrite>(
    writer: &mut W,
    cards: &[CardDocument],
    default_version: &str,
) -> AppResult<()> {
    for card in cards {
        render_card(writer, card, default_version)?;
    }

    tracing::info!(cards = cards.len(), "Rendered vCards");
    Ok(())
}
