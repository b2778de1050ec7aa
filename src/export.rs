//! Export adapters producing downloadable artifacts.
//!
//! [`export_pdf`] renders an assembled [`ResumeDocument`]; [`export_json`] serializes the
//! raw [`ResumeRecord`].  Both artifacts share a file stem derived from the candidate name.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::builder::DocumentBuilder;
use crate::document::ResumeDocument;
use crate::elements::block_element;
use crate::error::ResumeError;
use crate::fonts::FontLibrary;
use crate::record::ResumeRecord;

pub const PDF_MIME_TYPE: &str = "application/pdf";
pub const JSON_MIME_TYPE: &str = "application/json";

const FALLBACK_STEM: &str = "resume";

/// Derives a file stem from a name: whitespace runs become `_`, empty names become `resume`.
pub fn file_stem(name: &str) -> String {
    let stem = name.split_whitespace().collect::<Vec<_>>().join("_");
    if stem.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        stem
    }
}

/// A rendered file ready to be offered for download or written to disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// Writes the artifact into `directory` under its file name and returns the full path.
    pub fn write_to_dir(&self, directory: impl AsRef<Path>) -> Result<PathBuf, ResumeError> {
        let path = directory.as_ref().join(&self.file_name);
        fs::write(&path, &self.bytes)?;
        info!("wrote {} ({} bytes)", path.display(), self.bytes.len());
        Ok(path)
    }
}

/// Renders `document` to PDF bytes using fonts from `fonts`.
pub fn export_pdf(document: &ResumeDocument, fonts: &FontLibrary) -> Result<Artifact, ResumeError> {
    let style = document.style();
    let family = fonts.family(&style.font).map_err(ResumeError::FontLoad)?;

    let mut pdf = DocumentBuilder::new()
        .with_title(document.title())
        .with_page_setup(document.page())
        .with_font_size(style.font_size)
        .with_line_spacing(style.line_height)
        .build(family);

    for block in document.blocks() {
        pdf.push(block_element(block, style));
    }

    let mut bytes = Vec::new();
    pdf.render(&mut bytes).map_err(ResumeError::Render)?;

    let artifact = Artifact {
        file_name: format!("{}.pdf", file_stem(document.title())),
        mime_type: PDF_MIME_TYPE,
        bytes,
    };
    info!("prepared {} ({} bytes)", artifact.file_name, artifact.bytes.len());
    Ok(artifact)
}

/// Serializes `record` as pretty-printed JSON.
pub fn export_json(record: &ResumeRecord) -> Result<Artifact, ResumeError> {
    let json = record.to_json_pretty()?;
    Ok(Artifact {
        file_name: format!("{}.json", file_stem(&record.name)),
        mime_type: JSON_MIME_TYPE,
        bytes: json.into_bytes(),
    })
}
