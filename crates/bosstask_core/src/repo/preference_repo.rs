//! Preference store contracts with in-memory and SQLite implementations.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Preference key holding the selected UI language code.
pub const APP_LANGUAGE_KEY: &str = "appLanguage";

pub type PreferenceResult<T> = Result<T, PreferenceError>;

#[derive(Debug)]
pub enum PreferenceError {
    InvalidKey(String),
    Db(DbError),
}

impl Display for PreferenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidKey(key) => write!(f, "invalid preference key: `{key}`"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PreferenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidKey(_) => None,
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for PreferenceError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for PreferenceError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// String key-value store backing user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> PreferenceResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> PreferenceResult<()>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> PreferenceResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> PreferenceResult<()> {
        (**self).set(key, value)
    }
}

/// Process-local store; contents are lost on restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one entry.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> PreferenceResult<Option<String>> {
        let key = validate_key(key)?;
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> PreferenceResult<()> {
        let key = validate_key(key)?;
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// SQLite-backed store over the `preferences` table.
///
/// Takes ownership of a connection opened by [`crate::db::open_db`] or
/// [`crate::db::open_db_in_memory`], so migrations are already applied.
pub struct SqlitePreferenceStore {
    conn: Connection,
}

impl SqlitePreferenceStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Opens the store at `path`, creating and migrating the file if needed.
    pub fn open(path: impl AsRef<std::path::Path>) -> PreferenceResult<Self> {
        Ok(Self::new(crate::db::open_db(path)?))
    }

    pub fn open_in_memory() -> PreferenceResult<Self> {
        Ok(Self::new(crate::db::open_db_in_memory()?))
    }
}

impl PreferenceStore for SqlitePreferenceStore {
    fn get(&self, key: &str) -> PreferenceResult<Option<String>> {
        let key = validate_key(key)?;
        let value = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1;",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> PreferenceResult<()> {
        let key = validate_key(key)?;
        self.conn.execute(
            "INSERT INTO preferences (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value, chrono::Utc::now().timestamp_millis()],
        )?;
        Ok(())
    }
}

fn validate_key(key: &str) -> PreferenceResult<&str> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(PreferenceError::InvalidKey(key.to_string()));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::{
        MemoryPreferenceStore, PreferenceError, PreferenceStore, SqlitePreferenceStore,
        APP_LANGUAGE_KEY,
    };

    #[test]
    fn memory_store_overwrites_values() {
        let mut store = MemoryPreferenceStore::new();
        assert_eq!(store.get(APP_LANGUAGE_KEY).unwrap(), None);

        store.set(APP_LANGUAGE_KEY, "fr-CA").unwrap();
        store.set(APP_LANGUAGE_KEY, "zh-HK").unwrap();
        assert_eq!(store.get(APP_LANGUAGE_KEY).unwrap().as_deref(), Some("zh-HK"));
    }

    #[test]
    fn blank_keys_are_rejected() {
        let mut store = MemoryPreferenceStore::new();
        let err = store.set("  ", "en").unwrap_err();
        assert!(matches!(err, PreferenceError::InvalidKey(_)));
    }

    #[test]
    fn sqlite_store_upserts_and_keeps_arbitrary_values() {
        let mut store = SqlitePreferenceStore::open_in_memory().unwrap();
        store.set(APP_LANGUAGE_KEY, "ar").unwrap();
        store.set(APP_LANGUAGE_KEY, "klingon").unwrap();

        assert_eq!(
            store.get(APP_LANGUAGE_KEY).unwrap().as_deref(),
            Some("klingon")
        );
        assert_eq!(store.get("missing").unwrap(), None);
    }
}
