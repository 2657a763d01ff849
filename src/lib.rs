//! Generate paginated PDF lab records.
//!
//! A [LabRecord] is laid out as a title page followed by content pages holding
//! its five sections (aim, theory, code, output and conclusion). Body text and code
//! are wrapped to the page width and flow onto as many pages as they need. Every page
//! after the title page carries a header and a "Page X of Y" footer.
//!
//! ```
//! use lab_record_gen::{generate, LabRecord, LayoutConfig};
//!
//! let record = LabRecord {
//!     student_name: "Ada".to_string(),
//!     subject: "Physics".to_string(),
//!     aim: "To measure the acceleration due to gravity.".to_string(),
//!     ..LabRecord::default()
//! };
//! let pdf = generate(&record, &LayoutConfig::default()).expect("record renders");
//! assert!(pdf.starts_with(b"%PDF-"));
//! ```

mod assembler;
pub use assembler::*;

mod colour;
pub use colour::*;

mod config;
pub use config::*;

mod content;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

/// Wrapping text and placing blocks of content on pages
pub mod layout;

mod outline;
pub use outline::*;

mod page;
pub use page::*;

pub mod pagesize;

mod record;
pub use record::*;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod style;
pub use style::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
