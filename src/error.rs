use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error("font `{font}` cannot encode the character {ch:?}")]
    /// Text contained a character that the font has no encoding for
    Unencodable { ch: char, font: String },

    #[error("page is missing from the document")]
    /// A page id in the page order does not refer to a page in the document
    PageMissing,
}
