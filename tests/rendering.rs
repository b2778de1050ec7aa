use resume_pdf::fonts::{self, FontLibrary};
use resume_pdf::record::{ExperienceEntry, ResumeRecord};
use resume_pdf::style::FormattingConfig;
use resume_pdf::{assemble, export_pdf};
use sha2::{Digest, Sha256};

fn sample_record() -> ResumeRecord {
    ResumeRecord {
        name: "Jane Doe".into(),
        email: "jane@example.com".into(),
        phone: "555-0100".into(),
        summary: "Systems engineer focused on **reliable** tooling.".into(),
        skills: vec!["**Rust**, Go, *SQL*".into()],
        experience: vec![ExperienceEntry {
            title: "Engineer".into(),
            company: "Acme".into(),
            start_date: "2020-01".into(),
            ongoing: true,
            bullets: vec!["Cut build times by **40%**".into()],
            ..ExperienceEntry::new()
        }],
        ..ResumeRecord::default()
    }
}

fn render_sample_pdf(config: &FormattingConfig) -> Option<Vec<u8>> {
    if !fonts::default_fonts_available() {
        return None;
    }

    let library = FontLibrary::locate().expect("locate fonts");
    let document = assemble(&sample_record(), config);
    let artifact = export_pdf(&document, &library).expect("render sample pdf");
    assert_eq!(artifact.file_name, "Jane_Doe.pdf");
    assert_eq!(artifact.mime_type, "application/pdf");
    Some(artifact.bytes)
}

fn scrub_pdf(bytes: &[u8]) -> Vec<u8> {
    fn scrub_segment(data: &mut [u8], tag: &[u8], terminator: u8) {
        let mut index = 0;
        while index + tag.len() < data.len() {
            if data[index..].starts_with(tag) {
                let mut cursor = index + tag.len();
                while cursor < data.len() {
                    let byte = data[cursor];
                    if byte == terminator {
                        break;
                    }
                    if terminator == b')' {
                        data[cursor] = b'0';
                    } else if !matches!(byte, b'<' | b'>' | b' ' | b'\n' | b'\r' | b'\t') {
                        data[cursor] = b'0';
                    }
                    cursor += 1;
                }
                index = cursor;
            } else {
                index += 1;
            }
        }
    }

    fn scrub_xml(data: &mut [u8], start: &[u8], end: &[u8]) {
        let mut offset = 0;
        while offset + start.len() < data.len() {
            let Some(start_pos) = data[offset..]
                .windows(start.len())
                .position(|window| window == start)
            else {
                break;
            };
            let start_index = offset + start_pos + start.len();
            let Some(end_pos) = data[start_index..]
                .windows(end.len())
                .position(|window| window == end)
            else {
                break;
            };
            for byte in &mut data[start_index..start_index + end_pos] {
                if !matches!(*byte, b'<' | b'>' | b'/' | b' ' | b'\n' | b'\r' | b'\t') {
                    *byte = b'0';
                }
            }
            offset = start_index + end_pos + end.len();
        }
    }

    let mut normalized = bytes.to_vec();
    scrub_segment(&mut normalized, b"/CreationDate(", b')');
    scrub_segment(&mut normalized, b"/ModDate(", b')');
    scrub_segment(&mut normalized, b"/ID[", b']');
    scrub_segment(&mut normalized, b"/Producer(", b')');
    for tag in [
        "xmp:CreateDate",
        "xmp:ModifyDate",
        "xmp:MetadataDate",
        "xmpMM:DocumentID",
        "xmpMM:InstanceID",
        "xmpMM:VersionID",
    ] {
        let start = format!("<{tag}>");
        let end = format!("</{tag}>");
        scrub_xml(&mut normalized, start.as_bytes(), end.as_bytes());
    }
    normalized
}

fn normalized_hash(bytes: &[u8]) -> [u8; 32] {
    Sha256::digest(scrub_pdf(bytes)).into()
}

fn skip(test: &str) {
    eprintln!(
        "Skipping {test}: fonts missing. Set RESUME_PDF_FONTS_DIR or copy the Liberation fonts to assets/fonts."
    );
}

#[test]
fn renders_parseable_pdf() {
    let Some(bytes) = render_sample_pdf(&FormattingConfig::editor_defaults()) else {
        return skip("renders_parseable_pdf");
    };
    assert!(bytes.starts_with(b"%PDF"));

    let document = lopdf::Document::load_mem(&bytes).expect("rendered PDF parses");
    assert_eq!(document.get_pages().len(), 1);
}

#[test]
fn long_resumes_flow_onto_more_pages() {
    if !fonts::default_fonts_available() {
        return skip("long_resumes_flow_onto_more_pages");
    }

    let mut record = sample_record();
    record.skills = (0..200).map(|i| format!("Skill number **{i}**")).collect();
    let document = assemble(&record, &FormattingConfig::editor_defaults());
    let library = FontLibrary::locate().expect("locate fonts");
    let bytes = export_pdf(&document, &library).expect("render").bytes;

    let parsed = lopdf::Document::load_mem(&bytes).expect("rendered PDF parses");
    assert!(parsed.get_pages().len() > 1);
}

#[test]
fn unknown_font_falls_back_to_default_family() {
    let config = FormattingConfig::default().with_font("No Such Font");
    let Some(bytes) = render_sample_pdf(&config) else {
        return skip("unknown_font_falls_back_to_default_family");
    };
    assert!(!bytes.is_empty());
}

#[test]
fn rendering_is_deterministic() {
    let config = FormattingConfig::default().with_font("Helvetica");
    let Some(bytes_a) = render_sample_pdf(&config) else {
        return skip("rendering_is_deterministic");
    };
    let Some(bytes_b) = render_sample_pdf(&config) else {
        return skip("rendering_is_deterministic");
    };

    assert_eq!(bytes_a.len(), bytes_b.len(), "PDF sizes should match");
    assert_eq!(
        normalized_hash(&bytes_a),
        normalized_hash(&bytes_b),
        "PDF renders must be deterministic after metadata normalization"
    );
}

#[test]
fn renders_text_outside_latin1() {
    if !fonts::default_fonts_available() {
        return skip("renders_text_outside_latin1");
    }

    let record = ResumeRecord {
        name: "Łukasz Nowak".into(),
        summary: "Przemysł → software".into(),
        skills: vec!["**日本語**, Rust → Go".into()],
        ..ResumeRecord::default()
    };
    let library = FontLibrary::locate().expect("locate fonts");
    for config in [
        FormattingConfig::default(),
        FormattingConfig::editor_defaults(),
    ] {
        let artifact = export_pdf(&assemble(&record, &config), &library)
            .expect("non Latin-1 text renders");
        assert_eq!(artifact.file_name, "Łukasz_Nowak.pdf");
        lopdf::Document::load_mem(&artifact.bytes).expect("rendered PDF parses");
    }
}
