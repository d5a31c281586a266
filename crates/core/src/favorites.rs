//! Pure operations over the ordered favorites collection.
//!
//! The collection is a plain `Vec<Volume>` keyed by volume id: insertion
//! order is the only defined ordering, and no duplicate id may be added
//! through [`add`]. Persistence and change notification live in the shell.

use crate::book::Volume;

/// Append `volume` unless an entry with the same id is already present.
///
/// Returns whether the collection changed. An existing entry is never
/// replaced or updated.
pub fn add(books: &mut Vec<Volume>, volume: Volume) -> bool {
    if books.iter().any(|b| b.id == volume.id) {
        return false;
    }

    books.push(volume);
    true
}

/// Remove every entry matching `id`. Returns whether the collection changed.
pub fn remove(books: &mut Vec<Volume>, id: &str) -> bool {
    let before = books.len();
    books.retain(|b| b.id != id);
    books.len() != before
}

/// Whether an entry with `id` is in the collection.
pub fn contains(books: &[Volume], id: &str) -> bool {
    books.iter().any(|b| b.id == id)
}
