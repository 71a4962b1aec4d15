//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as
//! the single entry point for all trove operations, regardless of the UI
//! being used.
//!
//! The facade dispatches to the appropriate command function and returns
//! structured types (`Result<CmdResult>`). It contains no business logic,
//! performs no I/O formatting, and never writes to stdout or stderr.
//!
//! `TroveApi<S: StoreAdapter>` is generic over the storage backend:
//! production uses `TroveApi<FileStore>`, tests use
//! `TroveApi<InMemoryStore>`.

use crate::commands;
use crate::error::Result;
use crate::model::Record;
use crate::repo::Repository;
use crate::store::StoreAdapter;
use std::path::PathBuf;

/// The main API facade for trove operations.
///
/// All UI clients (CLI, web, etc.) should interact through this API.
pub struct TroveApi<S: StoreAdapter> {
    repo: Repository<S>,
    data_dir: PathBuf,
}

impl<S: StoreAdapter> TroveApi<S> {
    pub fn new(repo: Repository<S>, data_dir: PathBuf) -> Self {
        Self { repo, data_dir }
    }

    pub fn create_record(&mut self, title: &str, description: &str) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.repo, title, description)
    }

    pub fn list_records(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.repo)
    }

    pub fn view_record(&self, id: u64) -> Result<commands::CmdResult> {
        commands::view::run(&self.repo, id)
    }

    pub fn update_record(
        &mut self,
        id: u64,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.repo, id, title, description)
    }

    pub fn delete_record(&mut self, id: u64) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.repo, id)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.data_dir)
    }

    /// Read accessor for the current collection, newest first.
    pub fn records(&self) -> &[Record] {
        self.repo.records()
    }

    /// Marks a record as selected for editing, or clears the selection.
    pub fn select_for_edit(&mut self, id: Option<u64>) {
        self.repo.select_for_edit(id)
    }

    /// The record currently selected for editing, if any.
    pub fn editing_record(&self) -> Option<&Record> {
        self.repo.editing()
    }

    /// Warning from the last store load, if stored state was discarded.
    pub fn load_warning(&self) -> Option<&str> {
        self.repo.load_warning()
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
