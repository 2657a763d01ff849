use crate::colour::Colour;
use crate::content::render_contents;
use crate::font::Font;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use crate::PDFError;
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Name, Pdf};

/// A font at a size, as referenced by a span of text
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Font>,
    pub size: Pt,
}

/// A run of text placed on a page.
///
/// `coords` are `(x, y)` where `x` is measured from the left edge of the page and
/// `y` is the distance from the top edge of the page down to the text baseline.
/// The page converts these into PDF's bottom-up coordinate space when it is written.
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

/// A filled rectangle, positioned by its top-left corner measured from the top-left
/// of the page
#[derive(Clone, PartialEq, Debug)]
pub struct FillLayout {
    pub x: Pt,
    pub top: Pt,
    pub width: Pt,
    pub height: Pt,
    pub colour: Colour,
}

/// A single draw instruction
#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(SpanLayout),
    Fill(FillLayout),
}

/// A page of the document, holding its draw instructions in paint order
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// The laid out contents, painted in order
    pub contents: Vec<PageContents>,
}

impl Page {
    /// Create a new page of the given size. The margins only determine the content box;
    /// nothing stops content from being placed outside of it.
    pub fn new(size: PageSize, margins: Option<Margins>) -> Page {
        let (width, height) = size;
        let margins = margins.unwrap_or_else(Margins::empty);
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width,
                y2: height,
            },
            content_box: Rect {
                x1: margins.left,
                y1: margins.bottom,
                x2: width - margins.right,
                y2: height - margins.top,
            },
            contents: Vec::default(),
        }
    }

    pub fn width(&self) -> Pt {
        self.media_box.width()
    }

    pub fn height(&self) -> Pt {
        self.media_box.height()
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.contents.push(PageContents::Text(span));
    }

    pub fn fill_rect(&mut self, fill: FillLayout) {
        self.contents.push(PageContents::Fill(fill));
    }

    /// All text spans on the page, in paint order
    pub fn spans(&self) -> impl Iterator<Item = &SpanLayout> {
        self.contents.iter().filter_map(|content| match content {
            PageContents::Text(span) => Some(span),
            PageContents::Fill(_) => None,
        })
    }

    /// All filled rectangles on the page, in paint order
    pub fn fills(&self) -> impl Iterator<Item = &FillLayout> {
        self.contents.iter().filter_map(|content| match content {
            PageContents::Fill(fill) => Some(fill),
            PageContents::Text(_) => None,
        })
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &Arena<Font>,
        writer: &mut Pdf,
    ) -> Result<(), PDFError> {
        let id = refs.get(RefType::Page(page_index)).ok_or(PDFError::PageMissing)?;
        let parent = refs.get(RefType::PageTree).ok_or(PDFError::PageMissing)?;
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(parent);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (font_id, _) in fonts.iter() {
            if let Some(font_ref) = refs.get(RefType::Font(font_id.index())) {
                resource_fonts.pair(Name(format!("F{}", font_id.index()).as_bytes()), font_ref);
            }
        }
        resource_fonts.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        let rendered = render_contents(&self.contents, self.height(), fonts)?;
        writer.stream(content_id, rendered.as_slice());
        Ok(())
    }
}
