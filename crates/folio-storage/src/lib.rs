use anyhow::{Context, Result};
use async_trait::async_trait;
use folio_api_types::{ContactMessage, ContactSubmission};
use rocksdb::{DB, Direction, IteratorMode, Options};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::RwLock;

/// Append-only home of accepted contact messages.
///
/// `save` is the only operation: it assigns an id strictly greater than every
/// id handed out before (starting at 1) and stores the record atomically.
#[async_trait]
pub trait MessageStore: Send + Sync {
    async fn save(&self, submission: ContactSubmission) -> Result<ContactMessage>;
}

#[derive(Default)]
pub struct InMemoryMessageStore {
    messages: RwLock<Vec<ContactMessage>>,
}

impl InMemoryMessageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn save(&self, submission: ContactSubmission) -> Result<ContactMessage> {
        let created_at_epoch_ms = epoch_ms()?;
        let mut guard = self.messages.write().await;
        let id = guard.len() as u64 + 1;
        let record = ContactMessage::from_submission(id, submission, created_at_epoch_ms);
        guard.push(record.clone());
        Ok(record)
    }
}

const MESSAGE_KEY_PREFIX: &str = "contact-message:";

pub struct RocksDbMessageStore {
    db: Arc<DB>,
    last_id: Mutex<u64>,
}

impl RocksDbMessageStore {
    pub fn open_default(path: &str) -> Result<Self> {
        let mut options = Options::default();
        options.create_if_missing(true);
        let db = DB::open(&options, path).with_context(|| format!("failed to open RocksDB at {path}"))?;
        let last_id = Self::highest_stored_id(&db)?;
        Ok(Self {
            db: Arc::new(db),
            last_id: Mutex::new(last_id),
        })
    }

    // Ids are zero-padded so lexicographic key order matches numeric order.
    fn key_for_message(id: u64) -> String {
        format!("{MESSAGE_KEY_PREFIX}{id:020}")
    }

    fn highest_stored_id(db: &DB) -> Result<u64> {
        let upper = format!("{MESSAGE_KEY_PREFIX}{}", "9".repeat(21));
        let iter = db.iterator(IteratorMode::From(upper.as_bytes(), Direction::Reverse));

        for item in iter {
            let (key, _) = item?;
            let Some(suffix) = key.strip_prefix(MESSAGE_KEY_PREFIX.as_bytes()) else {
                break;
            };
            let id = std::str::from_utf8(suffix)?
                .parse::<u64>()
                .context("malformed contact message key")?;
            return Ok(id);
        }

        Ok(0)
    }

    pub fn load_message(&self, id: u64) -> Result<Option<ContactMessage>> {
        let key = Self::key_for_message(id);
        let value = self.db.get(key.as_bytes())?;
        match value {
            Some(raw) => Ok(Some(serde_json::from_slice::<ContactMessage>(&raw)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl MessageStore for RocksDbMessageStore {
    async fn save(&self, submission: ContactSubmission) -> Result<ContactMessage> {
        let created_at_epoch_ms = epoch_ms()?;
        let mut last_id = self
            .last_id
            .lock()
            .map_err(|_| anyhow::anyhow!("message id counter lock poisoned"))?;

        let id = *last_id + 1;
        let record = ContactMessage::from_submission(id, submission, created_at_epoch_ms);
        let value = serde_json::to_vec(&record)?;
        self.db
            .put(Self::key_for_message(id).as_bytes(), value)
            .context("failed to write contact message")?;

        *last_id = id;
        Ok(record)
    }
}

fn epoch_ms() -> Result<u128> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.to_owned(),
            email: "a@b.co".to_owned(),
            subject: "Hi there".to_owned(),
            message: "1234567890".to_owned(),
        }
    }

    #[tokio::test]
    async fn in_memory_assigns_sequential_ids_from_one() -> Result<()> {
        let store = InMemoryMessageStore::new();

        let mut ids = Vec::new();
        for i in 0..5 {
            let saved = store.save(submission(&format!("sender-{i}"))).await?;
            assert_eq!(saved.name, format!("sender-{i}"));
            ids.push(saved.id);
        }

        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(store.messages.read().await.len(), 5);
        Ok(())
    }

    #[tokio::test]
    async fn identical_submissions_become_distinct_records() -> Result<()> {
        let store = InMemoryMessageStore::new();

        let first = store.save(submission("Jo")).await?;
        let second = store.save(submission("Jo")).await?;

        assert_ne!(first.id, second.id);
        assert!(second.id > first.id);
        Ok(())
    }

    #[tokio::test]
    async fn concurrent_saves_never_reuse_an_id() -> Result<()> {
        let store = Arc::new(InMemoryMessageStore::new());

        let mut handles = Vec::new();
        for i in 0..32 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move { store.save(submission(&format!("c{i}"))).await }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await??.id);
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=32).collect::<Vec<u64>>());
        Ok(())
    }

    #[tokio::test]
    async fn rocksdb_resumes_ids_after_reopen() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("messages");
        let path = path.to_str().expect("temp path is utf-8");

        {
            let store = RocksDbMessageStore::open_default(path)?;
            assert_eq!(store.save(submission("first")).await?.id, 1);
            assert_eq!(store.save(submission("second")).await?.id, 2);
        }

        let store = RocksDbMessageStore::open_default(path)?;
        let third = store.save(submission("third")).await?;
        assert_eq!(third.id, 3);

        let loaded = store.load_message(2)?.expect("message 2 should be persisted");
        assert_eq!(loaded.name, "second");
        assert!(store.load_message(4)?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn rocksdb_ids_sort_numerically_past_nine() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("messages");
        let path = path.to_str().expect("temp path is utf-8");

        {
            let store = RocksDbMessageStore::open_default(path)?;
            for i in 0..12 {
                store.save(submission(&format!("n{i}"))).await?;
            }
        }

        let store = RocksDbMessageStore::open_default(path)?;
        assert_eq!(store.save(submission("next")).await?.id, 13);
        Ok(())
    }
}
