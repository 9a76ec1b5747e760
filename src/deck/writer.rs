//! The document writer seam.
use crate::common::Result;
use crate::deck::model::Deck;
use std::path::Path;

/// Serializes a finished deck and persists it at `destination`.
///
/// Implementations must not leave a partial file at `destination` when they
/// fail.
pub trait DocumentWriter {
    fn write(&self, deck: &Deck, destination: &Path) -> Result<()>;
}

impl<W: DocumentWriter + ?Sized> DocumentWriter for &W {
    fn write(&self, deck: &Deck, destination: &Path) -> Result<()> {
        (**self).write(deck, destination)
    }
}
