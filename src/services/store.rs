use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::AlarmError;
use crate::models::Alarm;

/// Durable alarm collection backed by a single JSON file.
///
/// Every mutation is a read-modify-write of the whole collection behind
/// one lock; `load_all` takes no lock and reads the latest durable state.
#[derive(Clone)]
pub struct AlarmStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl AlarmStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// A missing, unreadable, or corrupt file is an empty collection,
    /// never an error.
    pub async fn load_all(&self) -> Vec<Alarm> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
            Err(_) => Vec::new(),
        }
    }

    /// Replaces durable state with `alarms` in one atomic step.
    pub async fn save_all(&self, alarms: &[Alarm]) -> Result<(), AlarmError> {
        let _guard = self.write_lock.lock().await;
        self.write_file(alarms).await
    }

    pub async fn add(&self, alarm: Alarm) -> Result<(), AlarmError> {
        let _guard = self.write_lock.lock().await;
        let mut alarms = self.load_all().await;
        alarms.push(alarm);
        self.write_file(&alarms).await
    }

    /// Removes every alarm matching `pred`; returns how many went away.
    /// Nothing is written when nothing matched.
    pub async fn remove_where<F>(&self, pred: F) -> Result<usize, AlarmError>
    where
        F: Fn(&Alarm) -> bool,
    {
        let _guard = self.write_lock.lock().await;
        let mut alarms = self.load_all().await;
        let before = alarms.len();
        alarms.retain(|a| !pred(a));
        let removed = before - alarms.len();
        if removed > 0 {
            self.write_file(&alarms).await?;
        }
        Ok(removed)
    }

    // Write to a sibling temp file first so a concurrent reader never
    // sees a torn file.
    async fn write_file(&self, alarms: &[Alarm]) -> Result<(), AlarmError> {
        let json = serde_json::to_vec_pretty(alarms)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}
