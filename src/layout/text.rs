use crate::document::Document;
use crate::font::Font;
use crate::page::SpanFont;
use crate::units::Pt;
use crate::PDFError;

const TABSIZE: usize = 4;

/// Calculate the width of a given string of text given the font and font size.
/// Fails if the font cannot encode one of the characters.
pub fn width_of_text(text: &str, font: &Font, size: Pt) -> Result<Pt, PDFError> {
    text.chars().map(|ch| font.advance(ch, size)).sum()
}

/// A single wrapped line of text and the font it is to be drawn in
#[derive(Clone, PartialEq, Debug)]
pub struct Line {
    pub text: String,
    pub font: SpanFont,
}

/// Splits text into lines no wider than `max_width` when set in `font`.
///
/// Paragraphs (separated by newlines) are wrapped independently and each one yields
/// at least one line, so blank lines in the source survive as empty lines. Within a
/// paragraph, words (separated by single spaces) are packed greedily. A word is never
/// broken: one that is wider than `max_width` on its own gets a line to itself and
/// overruns it.
///
/// Empty text produces no lines at all. Tabs are expanded to spaces and carriage
/// returns are treated as newlines.
pub fn wrap_text(
    document: &Document,
    text: &str,
    max_width: Pt,
    font: SpanFont,
) -> Result<Vec<Line>, PDFError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let face = &document.fonts[font.id];

    // replace tabs with spaces
    let text = text.replace('\t', &" ".repeat(TABSIZE));
    // normalize newlines
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut lines: Vec<Line> = Vec::new();
    for paragraph in text.split('\n') {
        let mut words = paragraph.split(' ');
        // split always yields at least one (possibly empty) word
        let mut current = words.next().unwrap_or_default().to_string();
        // whether `current` was started by a wrap rather than by the paragraph
        let mut wrapped = false;

        for word in words {
            // spaces that a wrap lands on are not carried onto the next line
            if wrapped && current.is_empty() {
                current.push_str(word);
                continue;
            }

            let kept = current.len();
            current.push(' ');
            current.push_str(word);

            if width_of_text(&current, face, font.size)? > max_width {
                current.truncate(kept);
                let finished = std::mem::replace(&mut current, word.to_string());
                lines.push(Line {
                    text: finished,
                    font,
                });
                wrapped = true;
            }
        }

        if !(wrapped && current.is_empty()) {
            lines.push(Line {
                text: current,
                font,
            });
        }
    }

    Ok(lines)
}
