//! Data structures describing the laid-out content of a resume document.
//!
//! The section renderers produce these values and the PDF surface consumes them.  They do
//! not reference `genpdf` so the output of the rendering core can be inspected and tested
//! without loading any fonts.

use crate::richtext::{self, Span};

/// Horizontal placement of a block's text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
}

/// Rich text paragraph carrying inline styling information and alignment metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RichParagraph {
    spans: Vec<Span>,
    alignment: HorizontalAlignment,
}

impl RichParagraph {
    /// Creates a paragraph from the provided spans using left alignment.
    pub fn new(spans: impl Into<Vec<Span>>) -> Self {
        Self {
            spans: spans.into(),
            ..Self::default()
        }
    }

    /// Returns the spans that make up the paragraph.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Returns the configured alignment.
    pub fn alignment(&self) -> HorizontalAlignment {
        self.alignment
    }

    /// Sets the alignment and returns the updated paragraph.
    pub fn with_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// The paragraph's text without any style information.
    pub fn text(&self) -> String {
        richtext::plain_text(&self.spans)
    }
}

/// One layout unit flowed onto the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    /// The candidate's name, bold at heading size.
    Heading(RichParagraph),
    /// A section title, bold and upper-cased at sub-heading size.
    Subheading(RichParagraph),
    /// A regular line of text at the base size.
    Text(RichParagraph),
    /// An indented line preceded by a bullet marker.
    Bullet(RichParagraph),
}

impl Block {
    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading(
            RichParagraph::new(vec![Span::new(text)]).with_alignment(HorizontalAlignment::Center),
        )
    }

    pub fn subheading(text: impl Into<String>) -> Self {
        Self::Subheading(RichParagraph::new(vec![Span::new(text)]))
    }

    pub fn text(spans: impl Into<Vec<Span>>) -> Self {
        Self::Text(RichParagraph::new(spans))
    }

    pub fn bullet(spans: impl Into<Vec<Span>>) -> Self {
        Self::Bullet(RichParagraph::new(spans))
    }

    /// Returns the paragraph wrapped by this block.
    pub fn paragraph(&self) -> &RichParagraph {
        match self {
            Self::Heading(p) | Self::Subheading(p) | Self::Text(p) | Self::Bullet(p) => p,
        }
    }
}

/// The fixed set of resume sections, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Header,
    Summary,
    Skills,
    Education,
    Experience,
    Projects,
}

impl SectionKind {
    /// All sections in the order they are flowed onto the page.
    pub const ORDER: [SectionKind; 6] = [
        SectionKind::Header,
        SectionKind::Summary,
        SectionKind::Skills,
        SectionKind::Education,
        SectionKind::Experience,
        SectionKind::Projects,
    ];

    /// Sub-heading shown above the section, if it has one.
    pub fn title(self) -> Option<&'static str> {
        match self {
            SectionKind::Header => None,
            SectionKind::Summary => Some("Summary"),
            SectionKind::Skills => Some("Skills"),
            SectionKind::Education => Some("Education"),
            SectionKind::Experience => Some("Experience"),
            SectionKind::Projects => Some("Projects"),
        }
    }
}

/// Logical representation of a rendered resume section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    kind: SectionKind,
    blocks: Vec<Block>,
}

impl Section {
    /// Creates a section, starting with its sub-heading when it has one.
    pub fn new(kind: SectionKind) -> Self {
        let blocks = kind.title().map(Block::subheading).into_iter().collect();
        Self { kind, blocks }
    }

    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    /// Returns the blocks contained in the section, sub-heading included.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Returns the blocks following the sub-heading.
    pub fn body(&self) -> &[Block] {
        match self.blocks.first() {
            Some(Block::Subheading(_)) => &self.blocks[1..],
            _ => &self.blocks,
        }
    }

    /// Appends a block and returns the updated section.
    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    /// Extends the section with additional blocks and returns the updated instance.
    pub fn with_blocks<I>(mut self, blocks: I) -> Self
    where
        I: IntoIterator<Item = Block>,
    {
        self.blocks.extend(blocks);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titled_sections_start_with_subheading() {
        let section = Section::new(SectionKind::Skills);
        assert_eq!(section.blocks(), &[Block::subheading("Skills")]);
        assert!(section.body().is_empty());
    }

    #[test]
    fn header_section_has_no_subheading() {
        let section = Section::new(SectionKind::Header).with_block(Block::heading("Jane"));
        assert_eq!(section.body().len(), 1);
    }

    #[test]
    fn heading_is_centered() {
        assert_eq!(
            Block::heading("Jane").paragraph().alignment(),
            HorizontalAlignment::Center
        );
    }
}
