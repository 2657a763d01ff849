//! Page geometry and styling for a lab record. The defaults reproduce the
//! classic one-inch-margin US Letter layout.

use crate::colour::{colours, Colour};
use crate::font::FontSource;
use crate::layout::Margins;
use crate::pagesize::{self, PageSize};
use crate::style::{Families, StyleSheet};
use crate::units::{In, Pt};

/// Geometry of the shaded box behind code blocks
#[derive(Clone, PartialEq, Debug)]
pub struct CodeBox {
    /// Horizontal inset of code text from each content margin
    pub inset: Pt,
    /// Space between the top of the block and the first baseline
    pub padding_top: Pt,
    /// Space left below the block after the last line
    pub padding_bottom: Pt,
    /// Height the background box adds to its lines; half of it sits above the block
    pub box_padding: Pt,
    pub background: Colour,
}

impl Default for CodeBox {
    fn default() -> Self {
        CodeBox {
            inset: Pt(10.0),
            padding_top: Pt(10.0),
            padding_bottom: Pt(5.0),
            box_padding: Pt(10.0),
            background: colours::SHADE,
        }
    }
}

/// Absolute positions on the title page, all measured from the top of the page
#[derive(Clone, PartialEq, Debug)]
pub struct TitlePage {
    pub college_y: Pt,
    pub subject_y: Pt,
    pub aim_y: Pt,
    /// Left edge of the "Submitted by" block
    pub signature_x: Pt,
    pub submitted_by_y: Pt,
    pub student_name_y: Pt,
    pub roll_number_y: Pt,
}

impl Default for TitlePage {
    fn default() -> Self {
        TitlePage {
            college_y: Pt(250.0),
            subject_y: Pt(300.0),
            aim_y: Pt(350.0),
            signature_x: Pt(40.0),
            submitted_by_y: Pt(680.0),
            student_name_y: Pt(700.0),
            roll_number_y: Pt(720.0),
        }
    }
}

/// Where headers and footers sit on content pages
#[derive(Clone, PartialEq, Debug)]
pub struct RunningHeads {
    /// Header baseline position, from the top-left corner of the page
    pub header: (Pt, Pt),
    /// Footer start position, from the bottom-right corner of the page
    pub footer: (Pt, Pt),
}

impl Default for RunningHeads {
    fn default() -> Self {
        RunningHeads {
            header: (Pt(72.0), Pt(36.0)),
            footer: (Pt(112.0), Pt(36.0)),
        }
    }
}

/// Everything the assembler needs besides the record itself
#[derive(Clone, PartialEq, Debug)]
pub struct LayoutConfig {
    pub page_size: PageSize,
    pub margins: Margins,
    pub styles: StyleSheet,
    pub code_box: CodeBox,
    pub title_page: TitlePage,
    pub running_heads: RunningHeads,
    pub fonts: Families<FontSource>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            page_size: pagesize::LETTER,
            margins: Margins::all(In(1.0)),
            styles: StyleSheet::default(),
            code_box: CodeBox::default(),
            title_page: TitlePage::default(),
            running_heads: RunningHeads::default(),
            fonts: Families::default(),
        }
    }
}

impl LayoutConfig {
    /// Width between the left and right margins
    pub fn content_width(&self) -> Pt {
        self.margins.content_width(self.page_size.0)
    }
}
