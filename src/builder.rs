//! Document construction helpers for the `resume_pdf` crate.

use genpdf::fonts::{FontData, FontFamily};
use genpdf::{Margins, Mm, SimplePageDecorator, Size};

use crate::document::PageSetup;

/// Converts a length in PDF points to genpdf millimetres.
pub(crate) fn mm_from_pt(points: f64) -> Mm {
    Mm::from(printpdf::Mm::from(printpdf::Pt(points)))
}

fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

/// Builder for `genpdf::Document` instances configured from a page setup.
#[derive(Default)]
pub struct DocumentBuilder {
    title: Option<String>,
    paper_size: Option<Size>,
    margins: Option<Margins>,
    font_size: Option<u8>,
    line_spacing: Option<f64>,
}

impl DocumentBuilder {
    /// Creates a new builder instance with genpdf's defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the paper size and padding of `page`.
    pub fn with_page_setup(self, page: &PageSetup) -> Self {
        self.with_paper_size(Size::new(
            mm_from_f64(page.width_mm),
            mm_from_f64(page.height_mm),
        ))
        .with_margins(Margins::all(mm_from_pt(page.padding_pt)))
    }

    /// Sets the document title stored in the PDF metadata.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the paper size used for newly created documents.
    pub fn with_paper_size(mut self, paper_size: impl Into<Size>) -> Self {
        self.paper_size = Some(paper_size.into());
        self
    }

    /// Sets the margins applied through the page decorator.
    pub fn with_margins(mut self, margins: impl Into<Margins>) -> Self {
        self.margins = Some(margins.into());
        self
    }

    /// Sets the default font size in points.
    pub fn with_font_size(mut self, font_size: u8) -> Self {
        self.font_size = Some(font_size);
        self
    }

    /// Sets the default line-height multiplier.
    pub fn with_line_spacing(mut self, line_spacing: f64) -> Self {
        self.line_spacing = Some(line_spacing);
        self
    }

    /// Builds a configured `genpdf::Document` using `font_family` as its default font.
    pub fn build(self, font_family: FontFamily<FontData>) -> genpdf::Document {
        let mut document = genpdf::Document::new(font_family);

        if let Some(title) = self.title {
            document.set_title(title);
        }
        if let Some(paper_size) = self.paper_size {
            document.set_paper_size(paper_size);
        }
        if let Some(font_size) = self.font_size {
            document.set_font_size(font_size);
        }
        if let Some(line_spacing) = self.line_spacing {
            document.set_line_spacing(line_spacing);
        }

        let mut decorator = SimplePageDecorator::new();
        if let Some(margins) = self.margins {
            decorator.set_margins(margins);
        }
        document.set_page_decorator(decorator);

        document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_padding_converts_to_millimetres() {
        let padding: printpdf::Mm = mm_from_pt(30.0).into();
        assert!((padding.0 - 10.583).abs() < 0.01);
    }
}
