//! The editing-session boundary around the rendering core.
//!
//! A session owns the mutable record and formatting state.  Every render takes a snapshot of
//! both, so the core never observes later edits.

use log::warn;

use crate::document::{self, ResumeDocument};
use crate::error::ResumeError;
use crate::export::{self, Artifact};
use crate::fonts::FontLibrary;
use crate::record::ResumeRecord;
use crate::style::FormattingConfig;

/// State of the PDF download control.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportStatus {
    #[default]
    Idle,
    /// The artifact is being prepared.
    Pending,
    Ready(Artifact),
}

/// Mutable session state owned by the editing layer.
#[derive(Clone, Debug, Default)]
pub struct ResumeSession {
    pub record: ResumeRecord,
    pub formatting: FormattingConfig,
    status: ExportStatus,
}

impl ResumeSession {
    /// Starts a session with an empty record and the editor's default formatting.
    pub fn new() -> Self {
        Self {
            formatting: FormattingConfig::editor_defaults(),
            ..Self::default()
        }
    }

    /// Replaces the record with uploaded JSON.
    ///
    /// On failure the current record is kept unchanged.
    pub fn load_upload(&mut self, text: &str) -> Result<(), ResumeError> {
        match ResumeRecord::from_json_str(text) {
            Ok(record) => {
                self.record = record;
                Ok(())
            }
            Err(err) => {
                warn!("Invalid JSON uploaded: {err}");
                Err(err)
            }
        }
    }

    /// Lays out the current record with the current formatting.
    pub fn document(&self) -> ResumeDocument {
        document::assemble(&self.record, &self.formatting)
    }

    pub fn status(&self) -> &ExportStatus {
        &self.status
    }

    /// Prepares the PDF artifact, moving the status through pending to ready.
    ///
    /// A later call replaces the artifact of an earlier one.
    pub fn export_pdf(&mut self, fonts: &FontLibrary) -> Result<Artifact, ResumeError> {
        self.status = ExportStatus::Pending;
        match export::export_pdf(&self.document(), fonts) {
            Ok(artifact) => {
                self.status = ExportStatus::Ready(artifact.clone());
                Ok(artifact)
            }
            Err(err) => {
                self.status = ExportStatus::Idle;
                Err(err)
            }
        }
    }

    pub fn export_json(&self) -> Result<Artifact, ResumeError> {
        export::export_json(&self.record)
    }
}
