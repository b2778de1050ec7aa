//! Conversion of layout blocks into `genpdf` elements.

use genpdf::elements::{PaddedElement, Paragraph};
use genpdf::style::{Style, StyledString};
use genpdf::{Alignment, Element, Margins};

use crate::builder::mm_from_pt;
use crate::model::{Block, HorizontalAlignment};
use crate::style::ResolvedStyle;

/// Left indent of bullet lines, in points.
const BULLET_INDENT_PT: f64 = 10.0;
const BULLET_MARKER: &str = "\u{2022} ";

fn alignment(alignment: HorizontalAlignment) -> Alignment {
    match alignment {
        HorizontalAlignment::Left => Alignment::Left,
        HorizontalAlignment::Center => Alignment::Center,
    }
}

/// Returns the styled runs of `block`, including the bullet marker.
///
/// Headings and sub-headings carry their resolved sizes; text and bullet runs leave the size
/// unset so they inherit the document's base font size and line spacing.
pub fn block_strings(block: &Block, style: &ResolvedStyle) -> Vec<StyledString> {
    let (base, prefix, upper) = match block {
        Block::Heading(_) => (Style::new().bold().with_font_size(style.heading_size), None, false),
        Block::Subheading(_) => (
            Style::new().bold().with_font_size(style.subheading_size),
            None,
            true,
        ),
        Block::Text(_) => (Style::new(), None, false),
        Block::Bullet(_) => (Style::new(), Some(BULLET_MARKER), false),
    };

    let spans = block.paragraph().spans().iter().map(|span| {
        if upper {
            span.to_uppercase().to_styled_string(base)
        } else {
            span.to_styled_string(base)
        }
    });
    prefix
        .map(|prefix| StyledString::new(prefix, base))
        .into_iter()
        .chain(spans)
        .collect()
}

/// Returns the padding applied around `block`: bullets are indented, everything else is flush.
pub fn block_padding(block: &Block) -> Margins {
    match block {
        Block::Bullet(_) => Margins::trbl(0, 0, 0, mm_from_pt(BULLET_INDENT_PT)),
        _ => Margins::all(0),
    }
}

/// Builds the element for `block` using the sizes of `style`.
pub fn block_element(block: &Block, style: &ResolvedStyle) -> PaddedElement<Paragraph> {
    let mut paragraph: Paragraph = block_strings(block, style).into_iter().collect();
    paragraph.set_alignment(alignment(block.paragraph().alignment()));
    paragraph.padded(block_padding(block))
}
