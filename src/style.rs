//! The style table every block renderer draws from.

use crate::colour::{colours, Colour};
use crate::font::{FontSource, StandardFont};
use crate::units::Pt;

/// The kinds of content a lab record is made of
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ContentKind {
    /// Centred title page lines (college, subject)
    Title,
    /// The wrapped aim statement on the title page
    Heading1,
    /// Section headings on content pages
    Heading2,
    /// Paragraph text
    Body,
    /// Monospaced listings and program output
    Code,
    /// Page headers and footers
    RunningHead,
}

/// The three font families a style can be set in
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum FontFamily {
    Regular,
    Bold,
    Mono,
}

/// One value per font family
#[derive(Clone, Debug, PartialEq)]
pub struct Families<T> {
    pub regular: T,
    pub bold: T,
    pub mono: T,
}

impl<T> Families<T> {
    pub fn get(&self, family: FontFamily) -> &T {
        match family {
            FontFamily::Regular => &self.regular,
            FontFamily::Bold => &self.bold,
            FontFamily::Mono => &self.mono,
        }
    }

    /// Convert every family's value, stopping at the first error
    pub fn try_map<U, E>(&self, mut f: impl FnMut(&T) -> Result<U, E>) -> Result<Families<U>, E> {
        Ok(Families {
            regular: f(&self.regular)?,
            bold: f(&self.bold)?,
            mono: f(&self.mono)?,
        })
    }
}

impl Default for Families<FontSource> {
    fn default() -> Self {
        Families {
            regular: FontSource::Standard(StandardFont::Helvetica),
            bold: FontSource::Standard(StandardFont::HelveticaBold),
            mono: FontSource::Standard(StandardFont::Courier),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct TextStyle {
    pub family: FontFamily,
    pub size: Pt,
    pub colour: Colour,
    /// Distance between the baselines of consecutive lines
    pub line_height: Pt,
}

/// Text styles keyed by [ContentKind]
#[derive(Clone, PartialEq, Debug)]
pub struct StyleSheet {
    pub title: TextStyle,
    pub heading1: TextStyle,
    pub heading2: TextStyle,
    pub body: TextStyle,
    pub code: TextStyle,
    pub running_head: TextStyle,
}

impl StyleSheet {
    pub fn get(&self, kind: ContentKind) -> &TextStyle {
        match kind {
            ContentKind::Title => &self.title,
            ContentKind::Heading1 => &self.heading1,
            ContentKind::Heading2 => &self.heading2,
            ContentKind::Body => &self.body,
            ContentKind::Code => &self.code,
            ContentKind::RunningHead => &self.running_head,
        }
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        StyleSheet {
            title: TextStyle {
                family: FontFamily::Bold,
                size: Pt(24.0),
                colour: colours::BLACK,
                line_height: Pt(24.0),
            },
            heading1: TextStyle {
                family: FontFamily::Regular,
                size: Pt(18.0),
                colour: colours::NAVY,
                line_height: Pt(24.0),
            },
            heading2: TextStyle {
                family: FontFamily::Bold,
                size: Pt(14.0),
                colour: colours::NAVY,
                line_height: Pt(24.0),
            },
            body: TextStyle {
                family: FontFamily::Regular,
                size: Pt(12.0),
                colour: colours::INK,
                line_height: Pt(18.0),
            },
            code: TextStyle {
                family: FontFamily::Mono,
                size: Pt(10.0),
                colour: colours::BLACK,
                line_height: Pt(14.0),
            },
            running_head: TextStyle {
                family: FontFamily::Regular,
                size: Pt(10.0),
                colour: colours::GREY,
                line_height: Pt(12.0),
            },
        }
    }
}
