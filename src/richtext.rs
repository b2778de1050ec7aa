//! Utilities for working with styled text fragments.
//!
//! Skill lines and bullets may carry a tiny markdown-like markup: `**bold**` and `*italic*`.
//! [`parse_markup`] turns such a string into a flat list of [`Span`]s which are later mapped
//! onto [`genpdf`][genpdf] styled strings.  Styles never nest, so a span is bold or italic
//! but never both.
//!
//! [genpdf]: https://docs.rs/genpdf/

use genpdf::style::{Style, StyledString};

/// A slice of text together with inline style attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Span {
    text: String,
    bold: bool,
    italic: bool,
}

impl Span {
    /// Creates a new span with the provided text and no styles applied.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Returns the raw text contained in this span.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether the span should be rendered in bold.
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Returns whether the span should be rendered in italic.
    pub fn is_italic(&self) -> bool {
        self.italic
    }

    /// Returns whether the span carries no style at all.
    pub fn is_plain(&self) -> bool {
        !self.bold && !self.italic
    }

    /// Sets the bold flag and returns the updated span.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Sets the italic flag and returns the updated span.
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Convenience shorthand that marks the span as bold.
    pub fn bold(self) -> Self {
        self.with_bold(true)
    }

    /// Convenience shorthand that marks the span as italic.
    pub fn italic(self) -> Self {
        self.with_italic(true)
    }

    /// Returns a copy of the span with its text upper-cased.
    pub fn to_uppercase(&self) -> Self {
        Self {
            text: self.text.to_uppercase(),
            bold: self.bold,
            italic: self.italic,
        }
    }

    fn to_style(&self) -> Style {
        let mut style = Style::new();
        if self.bold {
            style.set_bold();
        }
        if self.italic {
            style.set_italic();
        }
        style
    }

    /// Converts the span to a [`StyledString`] layered on top of `base`.
    pub fn to_styled_string(&self, base: Style) -> StyledString {
        StyledString::new(self.text.clone(), base.and(self.to_style()))
    }
}

/// Concatenates the text of all spans, dropping the style information.
pub fn plain_text(spans: &[Span]) -> String {
    spans.iter().map(Span::text).collect()
}

/// Parses `**bold**` and `*italic*` markup into a list of [`Span`]s.
///
/// The input is scanned left to right.  At each position a bold span is tried first, then an
/// italic span, then plain text; the first alternative that matches wins and the scan resumes
/// right after it.  A delimited span needs at least one character between its delimiters and
/// may not contain `*` itself.  A `*` that opens neither kind of span is kept as literal text,
/// so the parser never fails and never drops characters other than the delimiters it consumed.
pub fn parse_markup(input: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut rest = input;

    while !rest.is_empty() {
        if let Some((inner, after)) = delimited(rest, "**") {
            flush_plain(&mut plain, &mut spans);
            spans.push(Span::new(inner).bold());
            rest = after;
        } else if let Some((inner, after)) = delimited(rest, "*") {
            flush_plain(&mut plain, &mut spans);
            spans.push(Span::new(inner).italic());
            rest = after;
        } else if let Some(stripped) = rest.strip_prefix('*') {
            plain.push('*');
            rest = stripped;
        } else {
            let end = rest.find('*').unwrap_or(rest.len());
            plain.push_str(&rest[..end]);
            rest = &rest[end..];
        }
    }

    flush_plain(&mut plain, &mut spans);
    spans
}

/// Matches `delimiter`, one or more non-`*` characters, then `delimiter` again.
///
/// Returns the enclosed text and the remainder of the input after the closing delimiter.
fn delimited<'a>(input: &'a str, delimiter: &str) -> Option<(&'a str, &'a str)> {
    let body = input.strip_prefix(delimiter)?;
    let len = body.find('*').unwrap_or(body.len());
    if len == 0 {
        return None;
    }
    let after = body[len..].strip_prefix(delimiter)?;
    Some((&body[..len], after))
}

fn flush_plain(buffer: &mut String, spans: &mut Vec<Span>) {
    if buffer.is_empty() {
        return;
    }
    spans.push(Span::new(std::mem::take(buffer)));
}
