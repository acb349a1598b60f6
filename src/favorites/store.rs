use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::{error, info, instrument};

/// Persistent key-value capability backing the favorites set. The
/// production implementation is a file; tests swap in memory.
pub trait FavoritesStorage {
    fn read(&self) -> io::Result<String>;
    fn write(&self, contents: &str) -> io::Result<()>;
}

pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl FavoritesStorage for FileStorage {
    fn read(&self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        fs::write(&self.path, contents)
    }
}

/// De-duplicated set of favorited titles, persisted as a JSON array.
///
/// Favorites key purely on the title string, so favoriting an artist
/// favorites that name everywhere it recurs. The set outlives schedule
/// reloads; every toggle persists the full set immediately.
pub struct FavoritesStore {
    storage: Box<dyn FavoritesStorage>,
    titles: HashSet<String>,
}

impl FavoritesStore {
    /// Loads saved favorites, degrading to an empty set on a missing
    /// entry or unreadable JSON.
    pub fn load(storage: Box<dyn FavoritesStorage>) -> Self {
        let titles = match storage.read() {
            Ok(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(saved) => {
                    info!("Loaded favorites: {} artists", saved.len());
                    saved.into_iter().collect()
                }
                Err(err) => {
                    error!("Could not parse saved favorites: {}", err);
                    HashSet::new()
                }
            },
            Err(err) => {
                info!("No saved favorites found ({})", err);
                HashSet::new()
            }
        };

        Self { storage, titles }
    }

    pub fn is_favorite(&self, title: &str) -> bool {
        self.titles.contains(title)
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Flips membership for a title and persists the whole set.
    /// Returns the new state. A failed write is logged and leaves the
    /// in-memory set as toggled.
    #[instrument(skip(self))]
    pub fn toggle(&mut self, title: &str) -> bool {
        let favorited = if self.titles.remove(title) {
            info!("Removed from favorites: {}", title);
            false
        } else {
            self.titles.insert(title.to_string());
            info!("Added to favorites: {}", title);
            true
        };

        self.save();
        favorited
    }

    fn save(&self) {
        let titles: Vec<&String> = self.titles.iter().collect();

        match serde_json::to_string(&titles) {
            Ok(json) => {
                if let Err(err) = self.storage.write(&json) {
                    error!("Could not save favorites: {}", err);
                }
            }
            Err(err) => error!("Could not encode favorites: {}", err),
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Shared in-memory storage so tests can inspect what was
    /// persisted.
    #[derive(Clone, Default)]
    pub struct MemoryStorage {
        pub saved: Rc<RefCell<Option<String>>>,
        pub fail_writes: bool,
    }

    impl FavoritesStorage for MemoryStorage {
        fn read(&self) -> io::Result<String> {
            self.saved
                .borrow()
                .clone()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no saved favorites"))
        }

        fn write(&self, contents: &str) -> io::Result<()> {
            if self.fail_writes {
                return Err(io::Error::new(io::ErrorKind::Other, "quota exceeded"));
            }

            *self.saved.borrow_mut() = Some(contents.to_string());
            Ok(())
        }
    }

    pub fn memory_store(titles: &[&str]) -> FavoritesStore {
        let storage = MemoryStorage::default();
        let json = serde_json::to_string(titles).unwrap();

        storage.write(&json).unwrap();
        FavoritesStore::load(Box::new(storage))
    }
}

#[cfg(test)]
mod tests {
    use super::testing::MemoryStorage;
    use super::*;

    #[test_log::test]
    fn should_start_empty_when_nothing_is_saved() {
        let store = FavoritesStore::load(Box::new(MemoryStorage::default()));

        assert!(store.is_empty());
    }

    #[test_log::test]
    fn should_start_empty_when_saved_data_is_corrupt() {
        let storage = MemoryStorage::default();
        *storage.saved.borrow_mut() = Some("not json".to_string());

        let store = FavoritesStore::load(Box::new(storage));

        assert!(store.is_empty());
    }

    #[test_log::test]
    fn should_persist_the_full_set_on_every_toggle() {
        let storage = MemoryStorage::default();
        let saved = storage.saved.clone();
        let mut store = FavoritesStore::load(Box::new(storage));

        assert!(store.toggle("The Electric Storm"));

        let persisted: Vec<String> =
            serde_json::from_str(&saved.borrow().clone().unwrap()).unwrap();
        assert_eq!(persisted, vec!["The Electric Storm"]);
    }

    #[test_log::test]
    fn should_restore_prior_state_after_an_even_number_of_toggles() {
        let storage = MemoryStorage::default();
        let saved = storage.saved.clone();
        let mut store = FavoritesStore::load(Box::new(storage));

        store.toggle("A");
        let before = saved.borrow().clone();

        assert!(store.toggle("B"));
        assert!(!store.toggle("B"));

        assert_eq!(saved.borrow().clone(), before);
        assert!(store.is_favorite("A"));
        assert!(!store.is_favorite("B"));
    }

    #[test_log::test]
    fn should_reproduce_membership_regardless_of_saved_array_order() {
        let storage = MemoryStorage::default();
        *storage.saved.borrow_mut() = Some(r#"["B","A","B"]"#.to_string());

        let store = FavoritesStore::load(Box::new(storage));

        assert_eq!(store.len(), 2);
        assert!(store.is_favorite("A"));
        assert!(store.is_favorite("B"));
    }

    #[test_log::test]
    fn should_keep_the_in_memory_state_when_a_write_fails() {
        let storage = MemoryStorage {
            fail_writes: true,
            ..Default::default()
        };
        let mut store = FavoritesStore::load(Box::new(storage));

        assert!(store.toggle("A"));
        assert!(store.is_favorite("A"));
    }
}
