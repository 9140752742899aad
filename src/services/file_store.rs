//! JSON File Store
//!
//! Reference store backing the bootstrap binary. Writes run on the smol
//! executor so `save` returns immediately; each write attempt ends with one
//! snapshot broadcast.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crossbeam_channel::{Receiver, Sender};
use tracing::{error, info};

use super::store::{ConfigStore, Persistence, broadcast};
use crate::domain::{ConfigDocument, factory_document};
use crate::error::Result;

#[derive(Debug, Default)]
struct Shared {
    current: Mutex<ConfigDocument>,
    subscribers: Mutex<Vec<Sender<ConfigDocument>>>,
}

impl Shared {
    fn current(&self) -> ConfigDocument {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn publish(&self, doc: ConfigDocument) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = doc;
        self.republish();
    }

    fn republish(&self) {
        let doc = self.current();
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        broadcast(&mut subscribers, &doc);
    }
}

/// Document persisted as pretty-printed JSON
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    shared: Arc<Shared>,
}

impl FileStore {
    /// Open the document at `path`, seeding it with factory defaults when
    /// the file does not exist yet
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let doc = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            ConfigDocument::from_json(&content)?
        } else {
            let doc = factory_document();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, doc.to_json_pretty()?)?;
            info!("Seeded config document: {}", path.display());
            doc
        };

        Ok(Self {
            path,
            shared: Arc::new(Shared {
                current: Mutex::new(doc),
                subscribers: Mutex::new(Vec::new()),
            }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Document as last read or written
    pub fn current(&self) -> ConfigDocument {
        self.shared.current()
    }
}

/// Parse, then replace the file through a temporary sibling. Each write
/// gets its own sibling so overlapping saves never share one.
async fn write_document(path: &Path, serialized: &str) -> Result<ConfigDocument> {
    let doc = ConfigDocument::from_json(serialized)?;
    let tmp = path.with_extension(format!("json.{}.tmp", uuid::Uuid::new_v4()));
    smol::fs::write(&tmp, doc.to_json_pretty()?).await?;
    smol::fs::rename(&tmp, path).await?;
    Ok(doc)
}

impl Persistence for FileStore {
    fn save(&self, serialized: String) {
        let path = self.path.clone();
        let shared = Arc::clone(&self.shared);

        smol::spawn(async move {
            match write_document(&path, &serialized).await {
                Ok(doc) => {
                    info!("Config document written: {}", path.display());
                    shared.publish(doc);
                }
                Err(e) => {
                    error!("Failed to write config document: {e}");
                    shared.republish();
                }
            }
        })
        .detach();
    }
}

impl ConfigStore for FileStore {
    fn subscribe(&self) -> Receiver<ConfigDocument> {
        let (tx, rx) = crossbeam_channel::unbounded();
        let _ = tx.send(self.shared.current());
        self.shared
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(tx);
        rx
    }
}
