//! Laying out lab record content onto pages.
//!
//! Layout happens in top-down coordinates: `y` is always the distance from the top
//! edge of the page, and the [Page](crate::Page) converts to PDF coordinates when the
//! document is written.
//!
//! - [`wrap_text`] splits text into lines that fit a width
//! - [`PageCursor`] tracks the active page and decides when to break to a new one
//! - [`Composer`] places each kind of block (titles, headings, body text, code)
//!
//! # Example
//!
//! ```
//! use lab_record_gen::layout::Composer;
//! use lab_record_gen::{Document, Font, LayoutConfig};
//!
//! let config = LayoutConfig::default();
//! let mut doc = Document::default();
//! let fonts = config
//!     .fonts
//!     .try_map(|source| Font::from_source(source).map(|font| doc.add_font(font)))
//!     .expect("standard fonts load");
//!
//! let mut composer = Composer::new(&mut doc, &config, fonts);
//! composer.section_heading("Aim").expect("heading fits");
//! composer.body("To measure the speed of sound.").expect("body fits");
//! assert_eq!(doc.page_count(), 1);
//! ```

mod blocks;
mod cursor;
mod margins;
mod text;

pub use blocks::*;
pub use cursor::*;
pub use margins::*;
pub use text::*;
