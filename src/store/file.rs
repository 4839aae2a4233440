//! JSON file store: one document per tournament.
//!
//! The file is only held open for the duration of a single operation. Every operation holds an
//! advisory lock on a sibling `.lock` file: shared for reads, exclusive for
//! [`JsonFileStore::transaction`]. A transaction loads the document, changes it, writes and syncs
//! a sibling `.tmp` file and renames it over the original. If the change fails nothing is written.

use crate::models::{PlayerId, TournamentError};
use crate::store::{Ledger, Snapshot, Store, StoreError};
use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// On-disk layout.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Document {
    /// Time of the last committed change; absent until the first one.
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    ledger: Ledger,
}

/// Store backed by a JSON file. A missing file reads as an empty tournament.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Time of the last committed change, if any.
    pub fn updated_at(&self) -> Result<Option<DateTime<Utc>>, StoreError> {
        let _lock = self.lock(Access::Shared)?;
        Ok(self.load()?.updated_at)
    }

    /// `<path><suffix>`, next to the store file.
    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name: OsString = self.path.clone().into_os_string();
        name.push(suffix);
        PathBuf::from(name)
    }

    /// Block until the `.lock` file is held. The lock is released when the handle drops.
    fn lock(&self, access: Access) -> Result<File, StoreError> {
        let lock_path = self.sibling(".lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .read(true)
            .write(true)
            .open(&lock_path)
            .map_err(io_error(&lock_path))?;
        match access {
            Access::Shared => FileExt::lock_shared(&lock_file),
            Access::Exclusive => FileExt::lock_exclusive(&lock_file),
        }
        .map_err(io_error(&lock_path))?;
        Ok(lock_file)
    }

    fn load(&self) -> Result<Document, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("{} does not exist yet, starting empty", self.path.display());
                return Ok(Document::default());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_reader(BufReader::new(file)).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn commit(&self, document: &Document) -> Result<(), StoreError> {
        let tmp = self.sibling(".tmp");

        let file = File::create(&tmp).map_err(io_error(&tmp))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, document).map_err(|source| StoreError::Json {
            path: tmp.clone(),
            source,
        })?;
        writer.flush().map_err(io_error(&tmp))?;
        writer.get_ref().sync_all().map_err(io_error(&tmp))?;
        drop(writer);
        fs::rename(&tmp, &self.path).map_err(io_error(&self.path))?;
        Ok(())
    }

    /// Load the ledger, apply `f`, and commit only if `f` succeeds.
    pub fn transaction<T>(
        &mut self,
        f: impl FnOnce(&mut Ledger) -> Result<T, TournamentError>,
    ) -> Result<T, TournamentError> {
        let _lock = self.lock(Access::Exclusive)?;
        let mut document = self.load()?;
        let out = f(&mut document.ledger)?;
        document.updated_at = Some(Utc::now());
        self.commit(&document)?;
        Ok(out)
    }
}

#[derive(Clone, Copy)]
enum Access {
    Shared,
    Exclusive,
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError {
    let path = path.to_path_buf();
    move |source| StoreError::Io { path, source }
}

impl Store for JsonFileStore {
    fn register_player(&mut self, name: &str) -> Result<PlayerId, TournamentError> {
        self.transaction(|ledger| ledger.register_player(name))
    }

    fn record_match(&mut self, winner: PlayerId, loser: PlayerId) -> Result<(), TournamentError> {
        self.transaction(|ledger| Ok(ledger.record_match(winner, loser)?))
    }

    fn snapshot(&self) -> Result<Snapshot, TournamentError> {
        let _lock = self.lock(Access::Shared)?;
        let document = self.load()?;
        Ok(Snapshot::from(&document.ledger))
    }

    fn delete_matches(&mut self) -> Result<(), TournamentError> {
        self.transaction(|ledger| {
            ledger.clear_matches();
            Ok(())
        })
    }

    fn delete_players(&mut self) -> Result<(), TournamentError> {
        self.transaction(|ledger| {
            ledger.clear_players();
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InvalidMatch, MatchRecord};

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("t.json"));
        assert_eq!(store.snapshot().unwrap(), Snapshot::default());
        assert_eq!(store.updated_at().unwrap(), None);
    }

    #[test]
    fn changes_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.json");
        let mut store = JsonFileStore::new(&path);
        let a = store.register_player("A").unwrap();
        let b = store.register_player("B").unwrap();
        store.record_match(a, b).unwrap();

        let reopened = JsonFileStore::new(&path);
        let snapshot = reopened.snapshot().unwrap();
        assert_eq!(snapshot.players.len(), 2);
        assert_eq!(snapshot.matches, vec![MatchRecord::new(a, b)]);
        assert!(reopened.updated_at().unwrap().is_some());
        assert!(!dir.path().join("t.json.tmp").exists());
    }

    #[test]
    fn rejected_match_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.json");
        let mut store = JsonFileStore::new(&path);
        let a = store.register_player("A").unwrap();
        let before = fs::read_to_string(&path).unwrap();

        let err = store.record_match(a, 42).unwrap_err();
        assert!(matches!(
            err,
            TournamentError::InvalidMatch(InvalidMatch::UnknownPlayer(42))
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.json");
        fs::write(&path, "not json").unwrap();
        let store = JsonFileStore::new(&path);
        assert!(matches!(
            store.snapshot(),
            Err(TournamentError::Store(StoreError::Json { .. }))
        ));
    }

    #[test]
    fn id_counter_survives_player_reset() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("t.json"));
        store.register_player("A").unwrap();
        store.delete_players().unwrap();
        assert_eq!(store.count_players().unwrap(), 0);
        assert_eq!(store.register_player("B").unwrap(), 2);
    }

    #[test]
    fn concurrent_handles_keep_every_acknowledged_write() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 25;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.json");

        let registered: Vec<PlayerId> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|t| {
                    let path = path.clone();
                    scope.spawn(move || {
                        let mut store = JsonFileStore::new(path);
                        (0..PER_THREAD)
                            .map(|i| store.register_player(&format!("T{t}-{i}")).unwrap())
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles.into_iter().flat_map(|h| h.join().unwrap()).collect()
        });

        let mut ids = registered.clone();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), THREADS * PER_THREAD);

        let on_disk = JsonFileStore::new(&path).snapshot().unwrap();
        assert_eq!(on_disk.players.len(), THREADS * PER_THREAD);
        for id in &registered {
            assert!(on_disk.players.iter().any(|p| p.id == *id), "player {id} lost");
        }

        std::thread::scope(|scope| {
            for chunk in registered.chunks(2 * PER_THREAD) {
                let path = path.clone();
                scope.spawn(move || {
                    let mut store = JsonFileStore::new(path);
                    for pair in chunk.chunks_exact(2) {
                        store.record_match(pair[0], pair[1]).unwrap();
                    }
                });
            }
        });

        let on_disk = JsonFileStore::new(&path).snapshot().unwrap();
        assert_eq!(on_disk.matches.len(), registered.len() / 2);
        for pair in registered.chunks_exact(2) {
            assert!(on_disk.matches.contains(&MatchRecord::new(pair[0], pair[1])));
        }
    }
}
