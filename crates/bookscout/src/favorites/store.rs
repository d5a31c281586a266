use crate::prelude::*;
use bookscout_core::book::Volume;
use bookscout_core::favorites;
use std::fs;
use std::path::PathBuf;

/// Listener invoked synchronously with the current list after every
/// mutation that changed it.
pub type Listener = Box<dyn Fn(&[Volume])>;

/// Resolve the default storage location under the user data directory.
pub fn default_store_path() -> Result<PathBuf> {
    let data_dir = dirs_next::data_dir()
        .ok_or_else(|| eyre!("Unable to determine data directory"))?
        .join("bookscout");

    fs::create_dir_all(&data_dir).map_err(|e| eyre!("Failed to create data directory: {}", e))?;

    Ok(data_dir.join("favorites.json"))
}

/// Persistent favorites list.
///
/// The collection lives in memory and is mirrored to a JSON file after
/// every mutation that changed it. Storage failures degrade to an
/// in-memory-only session with a logged diagnostic; they never surface to
/// callers of the mutation or query operations.
pub struct FavoritesStore {
    path: PathBuf,
    books: Vec<Volume>,
    listeners: Vec<Listener>,
}

impl FavoritesStore {
    /// Open a store backed by `path`, loading any previously saved list.
    ///
    /// Never fails: a missing file yields an empty list, and unreadable or
    /// malformed content logs a warning and yields an empty list. Saved
    /// entries are taken verbatim, duplicates included.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let books = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Vec<Volume>>(&contents) {
                Ok(books) => books,
                Err(e) => {
                    log::warn!(
                        "Ignoring malformed favorites file {}: {}",
                        path.display(),
                        e
                    );
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                log::warn!("Failed to read favorites file {}: {}", path.display(), e);
                Vec::new()
            }
        };

        Self {
            path,
            books,
            listeners: Vec::new(),
        }
    }

    /// Add a book to the favorites. A book whose id is already present is
    /// left untouched; nothing is written and no listener fires.
    pub fn add(&mut self, volume: Volume) {
        if favorites::add(&mut self.books, volume) {
            self.persist();
            self.notify();
        }
    }

    /// Remove the book with `id`, if present. Missing ids are a no-op.
    pub fn remove(&mut self, id: &str) {
        if favorites::remove(&mut self.books, id) {
            self.persist();
            self.notify();
        }
    }

    /// Whether the book with `id` is currently favorited.
    pub fn is_favorite(&self, id: &str) -> bool {
        favorites::contains(&self.books, id)
    }

    /// Current list in insertion order. Callers treat this as a snapshot;
    /// the store is the sole mutator.
    pub fn favorites(&self) -> &[Volume] {
        &self.books
    }

    /// Register a listener for mutation notifications. Listeners run in
    /// registration order.
    pub fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener(&self.books);
        }
    }

    /// Serialize the full current list over the storage file. Failures are
    /// logged and do not roll back the in-memory mutation.
    fn persist(&self) {
        let result = serde_json::to_string(&self.books)
            .map_err(|e| Error::Persistence(e.to_string()))
            .and_then(|json| {
                fs::write(&self.path, json).map_err(|e| Error::Persistence(e.to_string()))
            });

        if let Err(e) = result {
            log::warn!("Failed to save favorites to {}: {}", self.path.display(), e);
        }
    }
}
