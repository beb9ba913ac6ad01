use crate::errors::AppError;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::{error, warn};

pub const CHECKLIST_KEY: &str = "checklist";
pub const HISTORY_KEY: &str = "history";
pub const LAST_SAVED_KEY: &str = "lastSaved";

pub const SCHEMA_VERSION: u64 = 1;

#[derive(Serialize)]
struct Envelope<'a, T> {
    version: u64,
    data: &'a T,
}

/// String key/value map mirrored to one JSON file; every `set` rewrites it.
#[derive(Debug, Default)]
pub struct Store {
    path: Option<PathBuf>,
    entries: BTreeMap<String, String>,
}

impl Store {
    /// A store that never touches the disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub async fn open(path: &Path) -> Self {
        let entries = match fs::read(path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(entries) => entries,
                Err(err) => {
                    error!("failed to parse store file: {err}");
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                error!("failed to read store file: {err}");
                BTreeMap::new()
            }
        };

        Self {
            path: Some(path.to_path_buf()),
            entries,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// The new value is only visible once the file write succeeded.
    pub async fn set(&mut self, key: &str, value: impl Into<String>) -> Result<(), AppError> {
        let mut entries = self.entries.clone();
        entries.insert(key.to_string(), value.into());
        self.flush(&entries).await?;
        self.entries = entries;
        Ok(())
    }

    /// Reads a structured value. Returns `None` when the key is missing or
    /// the stored text does not decode.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get(key)?;
        match decode(raw) {
            Ok(value) => Some(value),
            Err(reason) => {
                warn!("ignoring stored {key}: {reason}");
                None
            }
        }
    }

    pub async fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), AppError> {
        let payload = serde_json::to_string(&Envelope {
            version: SCHEMA_VERSION,
            data: value,
        })?;
        self.set(key, payload).await
    }

    async fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), AppError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let payload = serde_json::to_vec_pretty(entries)?;
        fs::write(path, payload).await?;
        Ok(())
    }
}

// Accepts the current envelope or a bare array written before versioning.
fn decode<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    let value: Value = serde_json::from_str(raw).map_err(|err| err.to_string())?;
    match value {
        Value::Object(mut map) => {
            let version = map.get("version").and_then(Value::as_u64);
            if version != Some(SCHEMA_VERSION) {
                return Err(format!("unsupported schema version {version:?}"));
            }
            let data = map
                .remove("data")
                .ok_or_else(|| "envelope has no data".to_string())?;
            serde_json::from_value(data).map_err(|err| err.to_string())
        }
        Value::Array(_) => serde_json::from_value(value).map_err(|err| err.to_string()),
        _ => Err("expected an envelope or an array".to_string()),
    }
}
