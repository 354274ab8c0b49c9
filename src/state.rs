use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// Shared handler state. The lock serializes load-modify-persist cycles
/// within this process; there is deliberately no cross-process locking, so
/// two processes writing the same identity's file are last-writer-wins.
#[derive(Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub write_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            write_lock: Arc::new(Mutex::new(())),
        }
    }
}
