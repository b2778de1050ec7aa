//! Assembly of section output into a single flowing document.

use log::debug;

use crate::model::{Block, Section};
use crate::record::ResumeRecord;
use crate::sections;
use crate::style::{self, FormattingConfig, ResolvedStyle};

/// A4 width in millimetres.
pub const A4_WIDTH_MM: f64 = 210.0;
/// A4 height in millimetres.
pub const A4_HEIGHT_MM: f64 = 297.0;
/// Padding applied on every side of each page, in points.
pub const PAGE_PADDING_PT: f64 = 30.0;

/// Physical page geometry.  Page breaking is left to the rendering surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageSetup {
    pub width_mm: f64,
    pub height_mm: f64,
    pub padding_pt: f64,
}

impl Default for PageSetup {
    fn default() -> Self {
        Self {
            width_mm: A4_WIDTH_MM,
            height_mm: A4_HEIGHT_MM,
            padding_pt: PAGE_PADDING_PT,
        }
    }
}

/// A fully laid-out resume, ready for export.
#[derive(Clone, Debug, PartialEq)]
pub struct ResumeDocument {
    title: String,
    page: PageSetup,
    style: ResolvedStyle,
    sections: Vec<Section>,
}

/// Builds the document for a snapshot of the record and formatting configuration.
///
/// Sections are flowed back to back with no extra spacing between them.
pub fn assemble(record: &ResumeRecord, config: &FormattingConfig) -> ResumeDocument {
    let style = style::resolve(config);
    let sections = sections::render_all(record);
    debug!(
        "assembled resume document: {} sections, {} blocks, font '{}' at {}pt",
        sections.len(),
        sections.iter().map(|s| s.blocks().len()).sum::<usize>(),
        style.font,
        style.font_size
    );

    ResumeDocument {
        title: record.name.clone(),
        page: PageSetup::default(),
        style,
        sections,
    }
}

impl ResumeDocument {
    /// The candidate's name, used as the PDF title.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn page(&self) -> &PageSetup {
        &self.page
    }

    pub fn style(&self) -> &ResolvedStyle {
        &self.style
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// All blocks in flow order, from the header through the projects.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.sections.iter().flat_map(|section| section.blocks())
    }

    /// Renders a plain text outline of the document, one block per line.
    ///
    /// Sub-headings are upper-cased and bullets prefixed with `• `, mirroring the PDF.
    pub fn to_plain_text(&self) -> String {
        self.blocks()
            .map(|block| {
                let text = block.paragraph().text();
                match block {
                    Block::Heading(_) | Block::Text(_) => format!("{text}\n"),
                    Block::Subheading(_) => format!("{}\n", text.to_uppercase()),
                    Block::Bullet(_) => format!("\u{2022} {text}\n"),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SectionKind;

    #[test]
    fn empty_collections_render_only_subheadings() {
        let record = ResumeRecord {
            name: "Jane".into(),
            summary: "Builder of things.".into(),
            ..ResumeRecord::default()
        };
        let document = assemble(&record, &FormattingConfig::default());

        for section in document.sections() {
            match section.kind() {
                SectionKind::Header => assert_eq!(section.body().len(), 2),
                SectionKind::Summary => assert_eq!(section.body().len(), 1),
                _ => {
                    assert_eq!(section.blocks().len(), 1);
                    assert!(section.body().is_empty());
                }
            }
        }
    }

    #[test]
    fn plain_text_outline() {
        let record = ResumeRecord {
            name: "Jane".into(),
            summary: "Hi".into(),
            skills: vec!["**Rust**".into()],
            ..ResumeRecord::default()
        };
        let text = assemble(&record, &FormattingConfig::default()).to_plain_text();
        assert_eq!(
            text,
            "Jane\n |  |  |  | \nSUMMARY\nHi\nSKILLS\n\u{2022} Rust\nEDUCATION\nEXPERIENCE\nPROJECTS\n"
        );
    }

    #[test]
    fn document_uses_a4_with_padding() {
        let document = assemble(&ResumeRecord::default(), &FormattingConfig::default());
        assert_eq!(document.page().width_mm, 210.0);
        assert_eq!(document.page().padding_pt, 30.0);
        assert_eq!(document.style().font_size, 10);
    }

    #[test]
    fn assembly_does_not_mutate_inputs() {
        let record = ResumeRecord {
            skills: vec!["*x*".into()],
            ..ResumeRecord::default()
        };
        let config = FormattingConfig::editor_defaults();
        let (before_record, before_config) = (record.clone(), config.clone());
        let _ = assemble(&record, &config);
        assert_eq!(record, before_record);
        assert_eq!(config, before_config);
    }
}
