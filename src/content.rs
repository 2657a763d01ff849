//! Conversion of page draw instructions into PDF content stream operators.

use crate::colour::Colour;
use crate::font::{EncodedText, Font};
use crate::page::{FillLayout, PageContents, SpanLayout};
use crate::units::Pt;
use crate::PDFError;
use id_arena::Arena;
use std::io::Write;

/// Renders page contents to a PDF content stream, flipping the top-down layout
/// coordinates into PDF's bottom-up space using the page height.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(
    contents: &[PageContents],
    page_height: Pt,
    fonts: &Arena<Font>,
) -> Result<Vec<u8>, PDFError> {
    let mut content: Vec<u8> = Vec::default();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(span) => render_span(&mut content, span, page_height, fonts)?,
            PageContents::Fill(fill) => render_fill(&mut content, fill, page_height)?,
        }
    }

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn render_span(
    content: &mut Vec<u8>,
    span: &SpanLayout,
    page_height: Pt,
    fonts: &Arena<Font>,
) -> Result<(), PDFError> {
    let font = &fonts[span.font.id];
    let encoded = font.encode(&span.text)?;

    write!(content, "q\n")?;
    write_colour(content, span.colour)?;
    write!(content, "BT\n")?;
    write!(content, "/F{} {} Tf\n", span.font.id.index(), span.font.size)?;
    write!(content, "{} {} Td\n", span.coords.0, page_height - span.coords.1)?;
    match encoded {
        EncodedText::Bytes(bytes) => write_literal(content, &bytes)?,
        EncodedText::Glyphs(glyphs) => {
            write!(content, "<")?;
            for gid in glyphs {
                write!(content, "{gid:04x}")?;
            }
            write!(content, ">")?;
        }
    }
    write!(content, " Tj\n")?;
    write!(content, "ET\n")?;
    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn render_fill(content: &mut Vec<u8>, fill: &FillLayout, page_height: Pt) -> Result<(), PDFError> {
    let bottom = page_height - fill.top - fill.height;
    write!(content, "q\n")?;
    write_colour(content, fill.colour)?;
    write!(
        content,
        "{} {} {} {} re\n",
        fill.x, bottom, fill.width, fill.height
    )?;
    write!(content, "f\n")?;
    write!(content, "Q\n")?;
    Ok(())
}

/// Write bytes as a PDF literal string, escaping delimiters and anything that isn't
/// printable ASCII
fn write_literal(content: &mut Vec<u8>, bytes: &[u8]) -> Result<(), std::io::Error> {
    content.push(b'(');
    for &byte in bytes {
        match byte {
            b'(' | b')' | b'\\' => content.extend_from_slice(&[b'\\', byte]),
            0x20..=0x7e => content.push(byte),
            _ => write!(content, "\\{byte:03o}")?,
        }
    }
    content.push(b')');
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn write_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
        Colour::CMYK { c, m, y, k } => write!(content, "{c} {m} {y} {k} k\n"),
        Colour::Grey { g } => write!(content, "{g} g\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::font::StandardFont;
    use crate::page::SpanFont;

    fn helvetica() -> (Arena<Font>, SpanFont) {
        let mut fonts = Arena::new();
        let id = fonts.alloc(Font::from(StandardFont::Helvetica));
        (fonts, SpanFont { id, size: Pt(10.0) })
    }

    #[test]
    fn text_is_flipped_into_pdf_space() {
        let (fonts, font) = helvetica();
        let contents = vec![PageContents::Text(SpanLayout {
            text: "Page 2 of 2".to_string(),
            font,
            colour: colours::GREY,
            coords: (Pt(72.0), Pt(36.0)),
        })];
        let rendered = render_contents(&contents, Pt(792.0), &fonts).expect("renders");
        let rendered = String::from_utf8(rendered).expect("ascii content");
        assert!(rendered.contains("72 756 Td\n(Page 2 of 2) Tj\n"));
        assert!(rendered.contains("/F0 10 Tf\n"));
        assert!(rendered.contains("0.5 0.5 0.5 rg\n"));
    }

    #[test]
    fn fills_are_positioned_by_their_bottom_edge() {
        let (fonts, _) = helvetica();
        let contents = vec![PageContents::Fill(FillLayout {
            x: Pt(77.0),
            top: Pt(100.0),
            width: Pt(458.0),
            height: Pt(150.0),
            colour: colours::SHADE,
        })];
        let rendered = render_contents(&contents, Pt(792.0), &fonts).expect("renders");
        let rendered = String::from_utf8(rendered).expect("ascii content");
        assert!(rendered.contains("0 0 0 0.05 k\n77 542 458 150 re\nf\n"));
    }

    #[test]
    fn literal_strings_escape_delimiters_and_high_bytes() {
        let mut out = Vec::new();
        write_literal(&mut out, b"f(x) \\ \xe9").expect("writes");
        assert_eq!(out, b"(f\\(x\\) \\\\ \\351)".to_vec());
    }
}
