//! Config Store Contract
//!
//! The persisted document lives behind two collaborator seams: a snapshot
//! subscription (inbound) and a fire-and-forget `save` (outbound). Every save
//! attempt is answered by exactly one snapshot emission: the written document
//! on success, the unchanged persisted document on failure.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, warn};

use crate::domain::ConfigDocument;

/// Outbound half: accepts a whole serialized document
pub trait Persistence {
    /// Hand the document over and return immediately. The outcome is only
    /// observable through the next snapshot.
    fn save(&self, serialized: String);
}

/// Inbound half plus persistence
pub trait ConfigStore: Persistence {
    /// Subscribe to snapshots; the current document is delivered right away.
    fn subscribe(&self) -> Receiver<ConfigDocument>;
}

impl<P: Persistence + ?Sized> Persistence for Rc<P> {
    fn save(&self, serialized: String) {
        (**self).save(serialized)
    }
}

impl<P: Persistence + ?Sized> Persistence for Arc<P> {
    fn save(&self, serialized: String) {
        (**self).save(serialized)
    }
}

impl<S: ConfigStore + ?Sized> ConfigStore for Rc<S> {
    fn subscribe(&self) -> Receiver<ConfigDocument> {
        (**self).subscribe()
    }
}

impl<S: ConfigStore + ?Sized> ConfigStore for Arc<S> {
    fn subscribe(&self) -> Receiver<ConfigDocument> {
        (**self).subscribe()
    }
}

/// Send a snapshot to every live subscriber, dropping disconnected ones
pub(crate) fn broadcast(subscribers: &mut Vec<Sender<ConfigDocument>>, doc: &ConfigDocument) {
    subscribers.retain(|tx| tx.send(doc.clone()).is_ok());
}

/// How [`MemoryStore`] answers a save
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Accept the write and echo the new document
    #[default]
    Echo,
    /// Refuse the write and re-emit the persisted document
    Reject,
    /// Record the write without answering
    Hold,
}

/// In-memory store for tests and demos. Single-threaded.
#[derive(Debug, Default)]
pub struct MemoryStore {
    current: RefCell<ConfigDocument>,
    subscribers: RefCell<Vec<Sender<ConfigDocument>>>,
    saves: RefCell<Vec<String>>,
    mode: Cell<WriteMode>,
}

impl MemoryStore {
    pub fn new(initial: ConfigDocument) -> Self {
        Self {
            current: RefCell::new(initial),
            ..Self::default()
        }
    }

    pub fn set_mode(&self, mode: WriteMode) {
        self.mode.set(mode);
    }

    /// Document currently persisted
    pub fn current(&self) -> ConfigDocument {
        self.current.borrow().clone()
    }

    /// Every payload passed to `save`, oldest first
    pub fn saves(&self) -> Vec<String> {
        self.saves.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.borrow().len()
    }

    /// Replace the persisted document from outside the editor
    pub fn emit(&self, doc: ConfigDocument) {
        *self.current.borrow_mut() = doc;
        self.republish();
    }

    /// Re-emit the persisted document unchanged
    pub fn republish(&self) {
        let doc = self.current.borrow().clone();
        broadcast(&mut self.subscribers.borrow_mut(), &doc);
    }
}

impl Persistence for MemoryStore {
    fn save(&self, serialized: String) {
        self.saves.borrow_mut().push(serialized.clone());

        match self.mode.get() {
            WriteMode::Echo => match ConfigDocument::from_json(&serialized) {
                Ok(doc) => {
                    debug!("memory store accepted write");
                    self.emit(doc);
                }
                Err(e) => {
                    warn!("memory store got an unreadable document: {e}");
                    self.republish();
                }
            },
            WriteMode::Reject => self.republish(),
            WriteMode::Hold => {}
        }
    }
}

impl ConfigStore for MemoryStore {
    fn subscribe(&self) -> Receiver<ConfigDocument> {
        let (tx, rx) = crossbeam_channel::unbounded();
        // The receiver is still held locally, so this send cannot fail
        let _ = tx.send(self.current.borrow().clone());
        self.subscribers.borrow_mut().push(tx);
        rx
    }
}
