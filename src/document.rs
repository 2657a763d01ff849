use crate::{
    font::Font,
    info::Info,
    outline::Outline,
    page::Page,
    refs::{ObjectReferences, RefType},
    PDFError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Pdf, Ref};
use std::io::Write;

#[derive(Default)]
/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    pub fonts: Arena<Font>,
    pub outline: Outline,
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its id
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    /// The number of pages in the document
    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    /// Get the 0-based index of a page given its ID
    pub fn index_of_page(&self, page: Id<Page>) -> Option<usize> {
        self.page_order.iter().position(|&p| p == page)
    }

    /// The page at the given 0-based index, in document order
    pub fn page(&self, page_index: usize) -> Option<&Page> {
        self.page_order
            .get(page_index)
            .and_then(|&id| self.pages.get(id))
    }

    /// Iterate over the pages in document order
    pub fn iter_pages(&self) -> impl Iterator<Item = &Page> {
        self.page_order.iter().filter_map(|&id| self.pages.get(id))
    }

    /// Add a font to the document structure. Fonts are stored "globally" within the
    /// document, such that any page can refer to them by the returned id.
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        self.fonts.alloc(font)
    }

    /// Add a bookmark in the document outline pointing to the page with the given index
    pub fn add_bookmark<S: ToString>(&mut self, title: S, page_index: usize) {
        self.outline.add_bookmark(page_index, title.to_string());
    }

    /// Write the entire document to the writer. The whole document is rendered in
    /// memory first, then written out in one go.
    ///
    /// Writing consumes the document: once a document has been serialized it can no
    /// longer be changed.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), PDFError> {
        let Document {
            info,
            pages,
            page_order,
            fonts,
            outline,
        } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        // page refs are keyed by position in the page order so that bookmarks can
        // refer to pages by index
        let page_refs: Vec<Ref> = (0..page_order.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for (id, font) in fonts.iter() {
            font.write(&mut refs, id.index(), &mut writer);
        }

        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages.get(*id).ok_or(PDFError::PageMissing)?;
            page.write(&mut refs, page_index, &fonts, &mut writer)?;
        }

        let outlines_id = outline.write(&mut refs, &mut writer);

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        if let Some(outlines_id) = outlines_id {
            catalog.outlines(outlines_id);
        }
        catalog.finish();

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }

    /// Serialize the document into a new byte buffer
    pub fn to_bytes(self) -> Result<Vec<u8>, PDFError> {
        let mut bytes = Vec::new();
        self.write(&mut bytes)?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pagesize, StandardFont};

    #[test]
    fn pages_are_addressed_in_insertion_order() {
        let mut doc = Document::default();
        let first = doc.add_page(Page::new(pagesize::LETTER, None));
        let second = doc.add_page(Page::new(pagesize::A4, None));

        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.index_of_page(first), Some(0));
        assert_eq!(doc.index_of_page(second), Some(1));
        assert_eq!(doc.page(1).map(|p| p.width()), Some(pagesize::A4.0));
        assert!(doc.page(2).is_none());
    }

    #[test]
    fn writes_a_pdf_header_and_trailer() {
        let mut doc = Document::default();
        doc.add_font(Font::from(StandardFont::Helvetica));
        doc.add_page(Page::new(pagesize::LETTER, None));
        doc.add_bookmark("Start", 0);

        let bytes = doc.to_bytes().expect("document serializes");
        assert!(bytes.starts_with(b"%PDF-"));
        let tail = String::from_utf8_lossy(&bytes[bytes.len() - 16..]).to_string();
        assert!(tail.contains("%%EOF"));
    }
}
