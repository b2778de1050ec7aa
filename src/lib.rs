//! Core entry point for the resume_pdf crate.
//!
//! A [`ResumeRecord`] and a [`FormattingConfig`] go in; [`document::assemble`] lays them out
//! as a [`ResumeDocument`] and the [`export`] adapters turn that into a PDF or JSON artifact.

pub mod builder;
pub mod document;
pub mod elements;
pub mod error;
pub mod export;
pub mod fonts;
pub mod model;
pub mod record;
pub mod richtext;
pub mod sections;
pub mod session;
pub mod style;

pub use document::{assemble, ResumeDocument};
pub use error::ResumeError;
pub use export::{export_json, export_pdf, file_stem, Artifact};
pub use fonts::FontLibrary;
pub use record::ResumeRecord;
pub use style::{resolve, FormattingConfig, ResolvedStyle};
