//! ConfigController - Draft / Snapshot Reconciliation
//!
//! Owns the last persisted snapshot and the staged draft. Sections are
//! replaced one at a time; the dirty flag and validation issues are
//! recomputed after every change. Commit serializes the whole draft and
//! hands it to the persistence collaborator without waiting; success is
//! only observed when a later snapshot matches.

use chrono::{DateTime, Local};
use crossbeam_channel::Receiver;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::dirty::{changed_sections, is_dirty};
use crate::domain::{ConfigDocument, Section, SectionKey};
use crate::error::Result;
use crate::features::SectionEditor;
use crate::services::Persistence;
use crate::settings::CommitPolicy;
use crate::validation::{FieldIssue, validate_document};

/// A commit handed to persistence and not yet answered by a snapshot
#[derive(Debug, Clone)]
pub struct CommitTicket {
    pub id: Uuid,
    pub issued_at: DateTime<Local>,
    pub document: ConfigDocument,
}

impl CommitTicket {
    /// Time since the payload was handed to persistence
    pub fn age(&self) -> chrono::Duration {
        Local::now().signed_duration_since(self.issued_at)
    }
}

/// What a commit request did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Payload handed to persistence
    Sent { id: Uuid },
    /// Draft equals the snapshot; nothing to save
    Clean,
    /// Previous commit still unanswered
    InFlight { id: Uuid },
    /// Draft has failing fields
    Invalid(Vec<FieldIssue>),
}

/// How an incoming snapshot was applied to the draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotOutcome {
    /// Draft replaced by the snapshot; `discarded` lists sections that held
    /// unsaved edits
    Reseeded { discarded: Vec<SectionKey> },
    /// Draft left as is; `unsaved` lists sections still differing
    DraftKept { unsaved: Vec<SectionKey> },
}

pub struct ConfigController<P: Persistence> {
    persistence: P,
    policy: CommitPolicy,
    snapshot: ConfigDocument,
    draft: ConfigDocument,
    dirty: bool,
    issues: Vec<FieldIssue>,
    in_flight: Option<CommitTicket>,
}

impl<P: Persistence> ConfigController<P> {
    /// Start a session from the store's first snapshot
    pub fn new(persistence: P, policy: CommitPolicy, snapshot: ConfigDocument) -> Self {
        let mut controller = Self {
            persistence,
            policy,
            draft: snapshot.clone(),
            snapshot,
            dirty: false,
            issues: Vec::new(),
            in_flight: None,
        };
        controller.recompute();
        controller
    }

    // ==================== Getters ====================

    pub fn snapshot(&self) -> &ConfigDocument {
        &self.snapshot
    }

    pub fn draft(&self) -> &ConfigDocument {
        &self.draft
    }

    /// Draft slice for one section
    pub fn section<S: Section>(&self) -> &S {
        self.draft.section::<S>()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn in_flight(&self) -> Option<&CommitTicket> {
        self.in_flight.as_ref()
    }

    pub fn policy(&self) -> CommitPolicy {
        self.policy
    }

    pub fn changed_sections(&self) -> Vec<SectionKey> {
        changed_sections(&self.draft, &self.snapshot)
    }

    /// Whether the save control should be enabled
    pub fn can_commit(&self) -> bool {
        self.dirty
            && !(self.policy.block_invalid_commits && !self.is_valid())
            && !(self.policy.serialize_commits && self.in_flight.is_some())
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    // ==================== Events ====================

    fn recompute(&mut self) {
        self.dirty = is_dirty(&self.draft, &self.snapshot);
        self.issues = validate_document(&self.draft);
    }

    /// A new persisted snapshot arrived from the store
    pub fn on_snapshot_received(&mut self, snapshot: ConfigDocument) -> SnapshotOutcome {
        let answered = self.in_flight.take();
        let unsaved = changed_sections(&self.draft, &snapshot);

        // A snapshot answering a commit that it does not reflect is a failed write;
        // the draft still holds the edits the operator tried to save.
        let rejected = match &answered {
            Some(ticket) if ticket.document == snapshot => {
                info!(
                    "Commit {} confirmed by store after {} ms",
                    ticket.id,
                    ticket.age().num_milliseconds()
                );
                false
            }
            Some(ticket) => {
                warn!(
                    "Commit {} was not applied by the store ({} ms)",
                    ticket.id,
                    ticket.age().num_milliseconds()
                );
                true
            }
            None => false,
        };

        self.snapshot = snapshot;

        let keep = !unsaved.is_empty() && (rejected || self.policy.keep_unsaved_on_snapshot);
        let outcome = if keep {
            info!("Snapshot received; keeping draft with unsaved {unsaved:?}");
            SnapshotOutcome::DraftKept { unsaved }
        } else {
            if !unsaved.is_empty() {
                warn!("Snapshot received; discarding unsaved edits in {unsaved:?}");
            }
            self.draft = self.snapshot.clone();
            SnapshotOutcome::Reseeded { discarded: unsaved }
        };

        self.recompute();
        outcome
    }

    /// Drain every snapshot waiting on the subscription
    pub fn pump(&mut self, snapshots: &Receiver<ConfigDocument>) -> usize {
        let mut applied = 0;
        for snapshot in snapshots.try_iter() {
            self.on_snapshot_received(snapshot);
            applied += 1;
        }
        applied
    }

    /// Replace one section of the draft. Returns whether the draft changed.
    pub fn on_section_change<S: Section>(&mut self, value: S) -> bool {
        if self.draft.section::<S>() == &value {
            return false;
        }
        debug!("Section {} replaced", S::KEY);
        self.draft.replace_section(value);
        self.recompute();
        true
    }

    /// Route one field edit through a section editor
    pub fn edit<E: SectionEditor>(&mut self, editor: &mut E, edit: E::Edit) -> bool {
        let next = editor.apply(self.draft.section::<E::Section>(), edit);
        self.on_section_change(next)
    }

    /// Throw the draft away and start again from the snapshot
    pub fn reset(&mut self) {
        if self.dirty {
            info!("Discarding draft changes in {:?}", self.changed_sections());
        }
        self.draft = self.snapshot.clone();
        self.recompute();
    }

    /// Send the whole draft to persistence
    pub fn commit(&mut self) -> Result<CommitOutcome> {
        if !self.dirty {
            debug!("Commit skipped: draft is clean");
            return Ok(CommitOutcome::Clean);
        }
        if self.policy.serialize_commits
            && let Some(ticket) = &self.in_flight
        {
            warn!(
                "Commit refused: {} still in flight for {} ms",
                ticket.id,
                ticket.age().num_milliseconds()
            );
            return Ok(CommitOutcome::InFlight { id: ticket.id });
        }
        if self.policy.block_invalid_commits && !self.is_valid() {
            warn!("Commit refused: {} invalid field(s)", self.issues.len());
            return Ok(CommitOutcome::Invalid(self.issues.clone()));
        }

        let serialized = self.draft.to_json()?;
        let ticket = CommitTicket {
            id: Uuid::now_v7(),
            issued_at: Local::now(),
            document: self.draft.clone(),
        };
        info!(
            "Committing {} ({:?})",
            ticket.id,
            self.changed_sections()
        );

        self.persistence.save(serialized);
        let id = ticket.id;
        self.in_flight = Some(ticket);
        Ok(CommitOutcome::Sent { id })
    }
}
