//! One renderer per resume section.
//!
//! Each function maps its slice of the [`ResumeRecord`] onto a [`Section`] of layout blocks.
//! Missing values render as empty segments; none of these functions can fail.

use crate::model::{Block, Section, SectionKind};
use crate::record::{EducationEntry, ExperienceEntry, ProjectEntry, ResumeRecord};
use crate::richtext::{parse_markup, Span};

const CONTACT_SEPARATOR: &str = " | ";
const EM_DASH_SEPARATOR: &str = " \u{2014} ";

/// Renders every section of `record` in document order.
pub fn render_all(record: &ResumeRecord) -> Vec<Section> {
    SectionKind::ORDER
        .iter()
        .map(|kind| render_section(*kind, record))
        .collect()
}

/// Renders a single section of `record`.
pub fn render_section(kind: SectionKind, record: &ResumeRecord) -> Section {
    match kind {
        SectionKind::Header => header(record),
        SectionKind::Summary => summary(&record.summary),
        SectionKind::Skills => skills(&record.skills),
        SectionKind::Education => education(&record.education),
        SectionKind::Experience => experience(&record.experience),
        SectionKind::Projects => projects(&record.projects),
    }
}

/// Name heading followed by a single contact line.
///
/// Empty contact fields are kept as empty segments between separators.
pub fn header(record: &ResumeRecord) -> Section {
    let contact = [
        record.phone.as_str(),
        record.email.as_str(),
        record.linkedin.as_str(),
        record.github.as_str(),
        record.website.as_str(),
    ]
    .join(CONTACT_SEPARATOR);

    Section::new(SectionKind::Header)
        .with_block(Block::heading(record.name.as_str()))
        .with_block(Block::text(vec![Span::new(contact)]))
}

/// The summary is printed verbatim, without markup parsing.
pub fn summary(summary: &str) -> Section {
    Section::new(SectionKind::Summary).with_block(Block::text(vec![Span::new(summary)]))
}

pub fn skills(skills: &[String]) -> Section {
    Section::new(SectionKind::Skills).with_blocks(bullets(skills))
}

pub fn education(entries: &[EducationEntry]) -> Section {
    let blocks = entries.iter().flat_map(|entry| {
        let mut blocks = vec![
            Block::text(vec![
                Span::new(entry.university.as_str()).bold(),
                Span::new(format!("{EM_DASH_SEPARATOR}{}", entry.degree)),
            ]),
            Block::text(vec![Span::new(format!(
                "GPA: {} | Graduation: {}",
                entry.gpa, entry.grad
            ))]),
        ];
        if let Some(awards) = entry.awards.as_deref().filter(|a| !a.is_empty()) {
            blocks.push(Block::text(vec![Span::new(format!("Awards: {awards}"))]));
        }
        blocks
    });

    Section::new(SectionKind::Education).with_blocks(blocks)
}

/// Formats the date range of an experience entry, e.g. `2020-01 - Present`.
pub fn experience_duration(entry: &ExperienceEntry) -> String {
    let end = if entry.ongoing {
        "Present"
    } else {
        entry.end_date.as_str()
    };
    format!("{} - {}", entry.start_date, end)
}

pub fn experience(entries: &[ExperienceEntry]) -> Section {
    let blocks = entries.iter().flat_map(|entry| {
        let header = Block::text(vec![
            Span::new(entry.title.as_str()).bold(),
            Span::new(CONTACT_SEPARATOR),
            Span::new(entry.company.as_str()).italic(),
            Span::new(format!("{CONTACT_SEPARATOR}{}", experience_duration(entry))),
        ]);
        std::iter::once(header).chain(bullets(&entry.bullets))
    });

    Section::new(SectionKind::Experience).with_blocks(blocks)
}

pub fn projects(entries: &[ProjectEntry]) -> Section {
    let blocks = entries.iter().flat_map(|entry| {
        let header = Block::text(vec![
            Span::new(entry.title.as_str()).bold(),
            Span::new(format!("{EM_DASH_SEPARATOR}{}", entry.stack)),
        ]);
        std::iter::once(header).chain(bullets(&entry.bullets))
    });

    Section::new(SectionKind::Projects).with_blocks(blocks)
}

fn bullets(lines: &[String]) -> impl Iterator<Item = Block> + '_ {
    lines.iter().map(|line| Block::bullet(parse_markup(line)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(section: &Section) -> Vec<String> {
        section
            .body()
            .iter()
            .map(|block| block.paragraph().text())
            .collect()
    }

    #[test]
    fn contact_line_keeps_empty_segments() {
        let record = ResumeRecord {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            github: "janedoe".into(),
            ..ResumeRecord::default()
        };
        let section = header(&record);
        assert_eq!(
            texts(&section),
            vec!["Jane Doe", " | jane@example.com |  | janedoe | "]
        );
        assert!(matches!(section.blocks()[0], Block::Heading(_)));
    }

    #[test]
    fn summary_is_not_markup_parsed() {
        let section = summary("I like **Rust**");
        let spans = section.body()[0].paragraph().spans();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text(), "I like **Rust**");
        assert!(spans[0].is_plain());
    }

    #[test]
    fn skills_are_markup_parsed_bullets() {
        let section = skills(&["**Rust**, Go".to_string(), "*SQL*".to_string()]);
        assert_eq!(section.body().len(), 2);
        assert!(section.body().iter().all(|b| matches!(b, Block::Bullet(_))));
        let first = section.body()[0].paragraph().spans();
        assert!(first[0].is_bold());
        assert_eq!(first[0].text(), "Rust");
    }

    #[test]
    fn education_awards_only_when_present() {
        let with_awards = EducationEntry {
            university: "MIT".into(),
            degree: "BSc".into(),
            gpa: "3.9".into(),
            grad: "2020".into(),
            awards: Some("Dean's List".into()),
            ..EducationEntry::default()
        };
        let empty_awards = EducationEntry {
            awards: Some(String::new()),
            ..with_awards.clone()
        };

        let section = education(&[with_awards, empty_awards]);
        assert_eq!(
            texts(&section),
            vec![
                "MIT \u{2014} BSc",
                "GPA: 3.9 | Graduation: 2020",
                "Awards: Dean's List",
                "MIT \u{2014} BSc",
                "GPA: 3.9 | Graduation: 2020",
            ]
        );
        assert!(section.body()[0].paragraph().spans()[0].is_bold());
    }

    #[test]
    fn ongoing_experience_ends_at_present() {
        let entry = ExperienceEntry {
            start_date: "2020-01".into(),
            end_date: "2020-06".into(),
            ongoing: true,
            ..ExperienceEntry::default()
        };
        assert_eq!(experience_duration(&entry), "2020-01 - Present");
    }

    #[test]
    fn empty_dates_render_as_empty_segments() {
        assert_eq!(experience_duration(&ExperienceEntry::default()), " - ");
    }

    #[test]
    fn experience_header_and_bullets() {
        let entry = ExperienceEntry {
            title: "Engineer".into(),
            company: "Acme".into(),
            start_date: "2019-03".into(),
            end_date: "2021-08".into(),
            bullets: vec!["Shipped **v2**".into()],
            ..ExperienceEntry::default()
        };
        let section = experience(&[entry]);
        let header = section.body()[0].paragraph().spans();
        assert!(header[0].is_bold());
        assert!(header[2].is_italic());
        assert_eq!(
            section.body()[0].paragraph().text(),
            "Engineer | Acme | 2019-03 - 2021-08"
        );
        assert!(matches!(section.body()[1], Block::Bullet(_)));
        assert_eq!(section.body()[1].paragraph().text(), "Shipped v2");
    }

    #[test]
    fn project_header_uses_em_dash() {
        let entry = ProjectEntry {
            title: "Forge".into(),
            stack: "Rust, genpdf".into(),
            bullets: vec!["*Fast*".into(), "Small".into()],
            ..ProjectEntry::default()
        };
        let section = projects(&[entry]);
        assert_eq!(
            texts(&section),
            vec!["Forge \u{2014} Rust, genpdf", "Fast", "Small"]
        );
    }

    #[test]
    fn sections_follow_fixed_order() {
        let kinds: Vec<_> = render_all(&ResumeRecord::default())
            .iter()
            .map(Section::kind)
            .collect();
        assert_eq!(kinds, SectionKind::ORDER);
    }
}
