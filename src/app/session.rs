//! Editor Session
//!
//! Binds a store subscription, the controller and the section editors.
//! Snapshots are pumped before every command so the page always reflects
//! the latest persisted state.

use crossbeam_channel::Receiver;
use tracing::debug;

use super::command::{Command, HELP};
use super::page::PageModel;
use crate::domain::{ConfigDocument, GeneralConfig};
use crate::error::{Error, Result};
use crate::features::{CatchEditor, DiscordEditor, GeneralEditor, ShopEditor, StatsEditor};
use crate::services::ConfigStore;
use crate::settings::CommitPolicy;
use crate::state::{CommitOutcome, ConfigController};

/// Editor-local state for every section
#[derive(Debug, Clone)]
pub struct Editors {
    pub general: GeneralEditor,
    pub shop: ShopEditor,
    pub catch: CatchEditor,
    pub stats: StatsEditor,
    pub discord: DiscordEditor,
}

impl Editors {
    pub fn new(doc: &ConfigDocument) -> Self {
        Self {
            general: GeneralEditor::new(&doc.general),
            shop: ShopEditor::new(&doc.shop),
            catch: CatchEditor::new(&doc.catch),
            stats: StatsEditor::new(&doc.stats_balls),
            discord: DiscordEditor::new(),
        }
    }

    /// Re-derive validity flags after the draft was replaced wholesale.
    /// Panel state survives.
    pub fn resync(&mut self, doc: &ConfigDocument) {
        let expanded = self.discord.clone();
        *self = Self::new(doc);
        self.discord = expanded;
    }
}

/// What the shell should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Print(String),
    Exit,
}

pub struct EditorSession<S: ConfigStore> {
    controller: ConfigController<S>,
    snapshots: Receiver<ConfigDocument>,
    editors: Editors,
}

impl<S: ConfigStore> EditorSession<S> {
    /// Subscribe and seed the draft from the first snapshot
    pub fn open(store: S, policy: CommitPolicy) -> Result<Self> {
        let snapshots = store.subscribe();
        let first = snapshots.try_recv().map_err(|_| Error::Invalid {
            message: "store did not deliver an initial snapshot".to_string(),
        })?;
        let editors = Editors::new(&first);
        let controller = ConfigController::new(store, policy, first);
        let mut session = Self {
            controller,
            snapshots,
            editors,
        };
        // Anything queued behind the first snapshot is newer
        session.sync();
        Ok(session)
    }

    pub fn controller(&self) -> &ConfigController<S> {
        &self.controller
    }

    pub fn editors(&self) -> &Editors {
        &self.editors
    }

    pub fn page(&self) -> PageModel {
        PageModel::build(&self.controller, &self.editors)
    }

    /// Apply pending snapshots. Returns how many arrived.
    pub fn sync(&mut self) -> usize {
        let applied = self.controller.pump(&self.snapshots);
        if applied > 0 {
            debug!("Applied {applied} snapshot(s)");
            self.editors.resync(self.controller.draft());
        }
        applied
    }

    /// Block until the store answers the commit in flight, if any
    pub fn wait_for_store(&mut self, timeout: std::time::Duration) -> bool {
        if self.controller.in_flight().is_none() {
            return true;
        }
        match self.snapshots.recv_timeout(timeout) {
            Ok(snapshot) => {
                self.controller.on_snapshot_received(snapshot);
                self.editors.resync(self.controller.draft());
                true
            }
            Err(_) => false,
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<Reply> {
        let changed = match command {
            Command::Quit => return Ok(Reply::Exit),
            Command::Help => return Ok(Reply::Print(HELP.to_string())),
            Command::Show => return Ok(Reply::Print(self.controller.draft().to_json_pretty()?)),
            Command::Status => return Ok(Reply::Print(self.page().render())),
            Command::Save => return Ok(Reply::Print(self.save()?)),
            Command::Reset => {
                self.controller.reset();
                self.editors.resync(self.controller.draft());
                return Ok(Reply::Print("draft reset to the last saved document".to_string()));
            }
            Command::BlurChannel => {
                let general: &GeneralConfig = self.controller.section();
                let valid = self.editors.general.on_channel_blur(general);
                return Ok(Reply::Print(format!("channel valid: {valid}")));
            }
            Command::ToggleDiscordPanel => {
                let expanded = self.editors.discord.toggle_expanded();
                return Ok(Reply::Print(format!("discord panel expanded: {expanded}")));
            }
            Command::General(edit) => self.controller.edit(&mut self.editors.general, edit),
            Command::Shop(edit) => self.controller.edit(&mut self.editors.shop, edit),
            Command::Catch(edit) => self.controller.edit(&mut self.editors.catch, edit),
            Command::Stats(edit) => self.controller.edit(&mut self.editors.stats, edit),
            Command::Discord(edit) => self.controller.edit(&mut self.editors.discord, edit),
        };

        let page = self.page();
        let mut reply = if changed {
            "updated".to_string()
        } else {
            "no change".to_string()
        };
        if page.dirty {
            reply.push_str(&format!(" ({})", page.unsaved_label));
        }
        if !page.issues.is_empty() {
            reply.push_str(&format!("; {} invalid field(s)", page.issues.len()));
        }
        Ok(Reply::Print(reply))
    }

    fn save(&mut self) -> Result<String> {
        let reply = match self.controller.commit()? {
            CommitOutcome::Sent { id } => format!("commit {id} sent"),
            CommitOutcome::Clean => "nothing to save".to_string(),
            CommitOutcome::InFlight { id } => format!("commit {id} still waiting for the store"),
            CommitOutcome::Invalid(issues) => {
                let mut reply = "fix these fields first:".to_string();
                for issue in issues {
                    reply.push_str(&format!("\n  {issue}"));
                }
                reply
            }
        };
        Ok(reply)
    }
}
