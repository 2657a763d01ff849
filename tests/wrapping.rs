use lab_record_gen::layout::{width_of_text, wrap_text};
use lab_record_gen::{Document, Font, Pt, SpanFont, StandardFont};
use proptest::prelude::*;

fn helvetica() -> (Document, SpanFont) {
    let mut doc = Document::default();
    let id = doc.add_font(Font::from(StandardFont::Helvetica));
    (doc, SpanFont { id, size: Pt(12.0) })
}

proptest! {
    #[test]
    fn lines_fit_when_every_word_does(
        text in "[a-zA-Z]{1,12}( [a-zA-Z]{1,12}){0,40}",
        max_width in 130.0f32..500.0,
    ) {
        let (doc, font) = helvetica();
        let face = &doc.fonts[font.id];
        let widest = text
            .split(' ')
            .map(|word| width_of_text(word, face, font.size).expect("measures"))
            .fold(Pt(0.0), Pt::max);
        prop_assume!(widest <= Pt(max_width));

        let lines = wrap_text(&doc, &text, Pt(max_width), font).expect("wraps");
        prop_assert!(!lines.is_empty());
        for line in &lines {
            prop_assert!(width_of_text(&line.text, face, font.size).expect("measures") <= Pt(max_width));
        }
    }

    #[test]
    fn wrapping_wrapped_lines_changes_nothing(
        text in "[a-z]{1,10}( [a-z]{1,10}){0,40}(\n[a-z]{1,10}( [a-z]{1,10}){0,10}){0,3}",
        max_width in 100.0f32..400.0,
    ) {
        let (doc, font) = helvetica();
        let lines = wrap_text(&doc, &text, Pt(max_width), font).expect("wraps");
        let rejoined = lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<&str>>()
            .join("\n");
        let again = wrap_text(&doc, &rejoined, Pt(max_width), font).expect("wraps");
        prop_assert_eq!(lines, again);
    }

    #[test]
    fn rejoining_lines_within_paragraphs_rewraps_identically(
        paragraphs in prop::collection::vec("[a-z]{1,10}( [a-z]{1,10}){0,30}", 1..5),
        max_width in 60.0f32..400.0,
    ) {
        let (doc, font) = helvetica();
        let text = paragraphs.join("\n");
        let lines = wrap_text(&doc, &text, Pt(max_width), font).expect("wraps");

        let mut rejoined = Vec::new();
        for paragraph in &paragraphs {
            let wrapped = wrap_text(&doc, paragraph, Pt(max_width), font).expect("wraps");
            let texts: Vec<&str> = wrapped.iter().map(|line| line.text.as_str()).collect();
            rejoined.push(texts.join(" "));
        }
        let again = wrap_text(&doc, &rejoined.join("\n"), Pt(max_width), font).expect("wraps");
        prop_assert_eq!(lines, again);
    }

    #[test]
    fn words_are_never_lost_or_broken(
        text in "[a-z]{1,30}( [a-z]{1,30}){0,30}",
        max_width in 10.0f32..300.0,
    ) {
        let (doc, font) = helvetica();
        let lines = wrap_text(&doc, &text, Pt(max_width), font).expect("wraps");
        let words: Vec<&str> = lines.iter().flat_map(|line| line.text.split(' ')).collect();
        prop_assert_eq!(words, text.split(' ').collect::<Vec<&str>>());
    }
}
