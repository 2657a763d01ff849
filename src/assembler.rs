use crate::config::LayoutConfig;
use crate::document::Document;
use crate::font::Font;
use crate::layout::Composer;
use crate::record::LabRecord;
use crate::style::ContentKind;
use crate::PDFError;
use log::debug;

const SUBMITTED_BY: &str = "Submitted by:";

/// Section titles of the content pages, in order
pub const SECTION_AIM: &str = "Aim";
pub const SECTION_THEORY: &str = "Theory / Apparatus";
pub const SECTION_CODE: &str = "Code / Procedure";
pub const SECTION_OUTPUT: &str = "Output / Observations";
pub const SECTION_CONCLUSION: &str = "Conclusion";

/// Lay out a lab record: a title page followed by the five sections on content
/// pages, with a header and page-numbered footer on every page after the title page.
pub fn assemble(record: &LabRecord, config: &LayoutConfig) -> Result<Document, PDFError> {
    let mut document = Document::default();
    document.set_info(record.info());

    let fonts = config
        .fonts
        .try_map(|source| Font::from_source(source).map(|font| document.add_font(font)))?;

    let mut composer = Composer::new(&mut document, config, fonts);

    debug!("laying out title page");
    let title_page = &config.title_page;
    composer.title(&record.college_name, title_page.college_y)?;
    composer.title(&record.subject, title_page.subject_y)?;
    let aim_limit = title_page.submitted_by_y - config.styles.heading1.line_height * 2.0;
    composer.wrapped_heading(
        &format!("Aim: {}", record.aim),
        title_page.aim_y,
        aim_limit,
    )?;
    composer.label(
        SUBMITTED_BY,
        title_page.signature_x,
        title_page.submitted_by_y,
        ContentKind::Heading2,
    );
    composer.label(
        &record.student_name,
        title_page.signature_x,
        title_page.student_name_y,
        ContentKind::Body,
    );
    composer.label(
        &record.roll_number,
        title_page.signature_x,
        title_page.roll_number_y,
        ContentKind::Body,
    );

    composer.reset_cursor();
    composer.add_page();

    debug!("laying out sections");
    composer.section_heading(SECTION_AIM)?;
    composer.body(&record.aim)?;
    composer.section_heading(SECTION_THEORY)?;
    composer.body(&record.theory)?;
    composer.section_heading(SECTION_CODE)?;
    composer.code_block(&record.code)?;
    composer.section_heading(SECTION_OUTPUT)?;
    composer.code_block(&record.output)?;
    composer.section_heading(SECTION_CONCLUSION)?;
    composer.body(&record.conclusion)?;

    composer.running_heads(&format!("{} | {}", record.student_name, record.subject));

    debug!("laid out {} pages", document.page_count());
    Ok(document)
}

/// Lay out a lab record and serialize it to PDF bytes
pub fn generate(record: &LabRecord, config: &LayoutConfig) -> Result<Vec<u8>, PDFError> {
    let document = assemble(record, config)?;
    document.to_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Page;
    use pretty_assertions::assert_eq;

    fn texts(page: &Page) -> Vec<&str> {
        page.spans().map(|span| span.text.as_str()).collect()
    }

    #[test]
    fn title_page_has_the_record_details_and_no_running_heads() {
        let record = LabRecord {
            student_name: "Ada".to_string(),
            roll_number: "42".to_string(),
            subject: "Physics".to_string(),
            college_name: "CBIT".to_string(),
            aim: "Measure g".to_string(),
            ..LabRecord::default()
        };
        let doc = assemble(&record, &LayoutConfig::default()).expect("lays out");
        let title = doc.page(0).expect("title page");
        assert_eq!(
            texts(title),
            vec!["CBIT", "Physics", "Aim: Measure g", "Submitted by:", "Ada", "42"]
        );
    }

    #[test]
    fn sections_follow_in_order_on_content_pages() {
        let record = LabRecord {
            student_name: "Ada".to_string(),
            subject: "Physics".to_string(),
            aim: "Measure g".to_string(),
            conclusion: "g is 9.8".to_string(),
            ..LabRecord::default()
        };
        let doc = assemble(&record, &LayoutConfig::default()).expect("lays out");
        assert_eq!(doc.page_count(), 2);
        assert_eq!(
            texts(doc.page(1).expect("content page")),
            vec![
                "Aim",
                "Measure g",
                "Theory / Apparatus",
                "Code / Procedure",
                "Output / Observations",
                "Conclusion",
                "g is 9.8",
                "Ada | Physics",
                "Page 2 of 2",
            ]
        );
        let bookmarks: Vec<&str> = doc
            .outline
            .entries
            .iter()
            .map(|entry| entry.title.as_str())
            .collect();
        assert_eq!(
            bookmarks,
            vec![SECTION_AIM, SECTION_THEORY, SECTION_CODE, SECTION_OUTPUT, SECTION_CONCLUSION]
        );
    }

    #[test]
    fn records_produce_pdf_bytes() {
        let bytes = generate(&LabRecord::default(), &LayoutConfig::default()).expect("generates");
        assert!(bytes.starts_with(b"%PDF-"));
    }
}
