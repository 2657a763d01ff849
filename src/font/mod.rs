//! Fonts, their metrics, and how text set in them is encoded.
//!
//! A [Font] is either one of the PDF standard fonts, which every reader ships
//! and which therefore need no embedded data, or a TrueType / OpenType font that
//! is embedded into the document. Both measure text the same way, so layout code
//! never needs to know which kind it is working with.

mod embedded;
mod standard;

pub use embedded::EmbeddedFont;
pub use standard::StandardFont;

use crate::{
    refs::{ObjectReferences, RefType},
    units::Pt,
    PDFError,
};
use pdf_writer::{Name, Pdf};

/// A font that text can be measured and set in. Fonts are stored "globally" in a
/// [Document](crate::Document) and referred to by their id.
pub enum Font {
    Standard(StandardFont),
    Embedded(EmbeddedFont),
}

/// Where the font for one of the style sheet's families comes from
#[derive(Clone, Debug, PartialEq)]
pub enum FontSource {
    /// One of the fonts built into every PDF reader
    Standard(StandardFont),
    /// Raw TrueType / OpenType file contents, to be parsed and embedded
    TrueType(Vec<u8>),
}

/// Text encoded for a content stream
pub(crate) enum EncodedText {
    /// Single-byte codes, written as a literal string
    Bytes(Vec<u8>),
    /// Two-byte glyph ids, written as a hex string
    Glyphs(Vec<u16>),
}

impl Font {
    /// Load a font from raw TrueType / OpenType bytes, returning an error if the
    /// font could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, PDFError> {
        Ok(Font::Embedded(EmbeddedFont::parse(bytes)?))
    }

    pub fn from_source(source: &FontSource) -> Result<Font, PDFError> {
        match source {
            FontSource::Standard(font) => Ok(Font::Standard(*font)),
            FontSource::TrueType(bytes) => Font::load(bytes.clone()),
        }
    }

    /// The name used in error messages and as the base font name
    pub fn name(&self) -> String {
        match self {
            Font::Standard(font) => font.base_name().to_string(),
            Font::Embedded(font) => font.name(),
        }
    }

    /// Horizontal advance of a single character at the given size. Fails only for
    /// standard fonts, when the character has no WinAnsi encoding.
    pub fn advance(&self, ch: char, size: Pt) -> Result<Pt, PDFError> {
        match self {
            Font::Standard(font) => font.advance(ch, size).ok_or_else(|| PDFError::Unencodable {
                ch,
                font: self.name(),
            }),
            Font::Embedded(font) => Ok(font.advance(ch, size)),
        }
    }

    pub(crate) fn encode(&self, text: &str) -> Result<EncodedText, PDFError> {
        match self {
            Font::Standard(_) => text
                .chars()
                .map(|ch| {
                    standard::encode_win_ansi(ch).ok_or_else(|| PDFError::Unencodable {
                        ch,
                        font: self.name(),
                    })
                })
                .collect::<Result<Vec<u8>, PDFError>>()
                .map(EncodedText::Bytes),
            Font::Embedded(font) => Ok(EncodedText::Glyphs(
                text.chars().map(|ch| font.glyph_id(ch)).collect(),
            )),
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, index: usize, writer: &mut Pdf) {
        match self {
            Font::Standard(font) => {
                let id = refs.gen(RefType::Font(index));
                writer
                    .type1_font(id)
                    .base_font(Name(font.base_name().as_bytes()))
                    .encoding_predefined(Name(b"WinAnsiEncoding"));
            }
            Font::Embedded(font) => font.write(refs, index, writer),
        }
    }
}

impl From<StandardFont> for Font {
    fn from(font: StandardFont) -> Self {
        Font::Standard(font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_fonts_reject_characters_outside_win_ansi() {
        let font = Font::from(StandardFont::Helvetica);
        let err = font.advance('漢', Pt(12.0)).unwrap_err();
        assert!(matches!(err, PDFError::Unencodable { ch: '漢', .. }));
        assert!(font.encode("naïve “quotes”").is_ok());
        assert!(font.encode("tab\there").is_err());
    }

    #[test]
    fn garbage_bytes_are_not_a_font() {
        let err = Font::load(b"definitely not a font".to_vec()).err();
        assert!(matches!(err, Some(PDFError::FaceParsingError(_))));
    }

    #[test]
    fn standard_source_resolves_without_parsing() {
        let font = Font::from_source(&FontSource::Standard(StandardFont::Courier))
            .expect("standard fonts always load");
        assert_eq!(font.name(), "Courier");
    }
}
