//! Loads the task list from the database and writes it back
//!
//! Each command opens a session, mutates the list in memory, and saves the
//! whole snapshot if anything changed.

use anyhow::{Context, Result};
use db::Database;
use tasks::{snapshot, TaskList, STORAGE_KEY};
use tracing::info;

pub struct Session<'a> {
    db: &'a Database,
    list: TaskList,
}

impl<'a> Session<'a> {
    /// Read the stored list, seeding and saving demo tasks on first use
    pub async fn open(db: &'a Database) -> Result<Self> {
        let raw = db.get_item(STORAGE_KEY).await?;
        let restored = snapshot::restore(raw.as_deref());

        let session = Self {
            db,
            list: restored.list,
        };

        if restored.seeded {
            info!("Seeded task list with demo tasks");
            session.save().await?;
        }

        Ok(session)
    }

    pub fn list(&self) -> &TaskList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut TaskList {
        &mut self.list
    }

    /// Write the current list under the storage key
    pub async fn save(&self) -> Result<()> {
        let encoded = snapshot::encode(&self.list).context("Failed to encode task list")?;
        self.db.set_item(STORAGE_KEY, &encoded).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_open_seeds_and_persists() {
        let db = Database::memory().await.unwrap();

        let session = Session::open(&db).await.unwrap();
        assert_eq!(session.list().len(), 3);

        let stored = db.get_item(STORAGE_KEY).await.unwrap().unwrap();
        let reopened = Session::open(&db).await.unwrap();
        assert_eq!(reopened.list(), session.list());
        assert_eq!(snapshot::encode(reopened.list()).unwrap(), stored);
    }

    #[tokio::test]
    async fn test_emptied_list_stays_empty() {
        let db = Database::memory().await.unwrap();
        db.set_item(STORAGE_KEY, "[]").await.unwrap();

        let session = Session::open(&db).await.unwrap();
        assert!(session.list().is_empty());
    }

    #[tokio::test]
    async fn test_loosely_typed_list_is_kept() {
        let db = Database::memory().await.unwrap();
        let raw = r#"[{"id":42,"title":"keep me"},{"id":"b","title":"and me","done":true}]"#;
        db.set_item(STORAGE_KEY, raw).await.unwrap();

        let session = Session::open(&db).await.unwrap();
        let titles: Vec<_> = session.list().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["keep me", "and me"]);
        assert_eq!(session.list().remaining(), 1);
        assert_eq!(db.get_item(STORAGE_KEY).await.unwrap().unwrap(), raw);
    }

    #[tokio::test]
    async fn test_corrupt_value_is_replaced() {
        let db = Database::memory().await.unwrap();
        db.set_item(STORAGE_KEY, "{{{").await.unwrap();

        let session = Session::open(&db).await.unwrap();
        assert_eq!(session.list().len(), 3);
        assert_ne!(db.get_item(STORAGE_KEY).await.unwrap().unwrap(), "{{{");
    }

    #[tokio::test]
    async fn test_save_round_trips() {
        let db = Database::memory().await.unwrap();
        db.set_item(STORAGE_KEY, "[]").await.unwrap();

        let mut session = Session::open(&db).await.unwrap();
        session.list_mut().add("persist me");
        session.save().await.unwrap();

        let reopened = Session::open(&db).await.unwrap();
        assert_eq!(reopened.list().len(), 1);
        assert_eq!(reopened.list().as_slice()[0].title, "persist me");
    }
}
