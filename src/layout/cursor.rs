use crate::document::Document;
use crate::layout::Margins;
use crate::page::Page;
use crate::pagesize::PageSize;
use crate::units::Pt;
use id_arena::Id;
use log::debug;

/// Tracks the page currently being written to and how far down it writing has
/// progressed. `y` is the distance from the top edge of the page.
///
/// Exactly one page is active at a time. Once the cursor moves on to a new page
/// it never returns to an earlier one.
#[derive(Debug, Clone)]
pub struct PageCursor {
    page: Id<Page>,
    y: Pt,
    size: PageSize,
    margins: Margins,
    /// Whether nothing has been laid out on the active page yet
    fresh: bool,
}

impl PageCursor {
    /// Start a cursor at the top margin of a new page appended to the document
    pub fn new(document: &mut Document, size: PageSize, margins: Margins) -> PageCursor {
        let page = document.add_page(Page::new(size, Some(margins.clone())));
        debug!("started page {}", document.page_count());
        PageCursor {
            page,
            y: margins.top,
            size,
            margins,
            fresh: true,
        }
    }

    /// The active page
    pub fn page(&self) -> Id<Page> {
        self.page
    }

    pub fn y(&self) -> Pt {
        self.y
    }

    /// The lowest point content may reach on a page
    pub fn bottom_limit(&self) -> Pt {
        self.size.1 - self.margins.bottom
    }

    /// Append a new page to the document, make it active, and move to its top margin
    pub fn add_page(&mut self, document: &mut Document) -> Id<Page> {
        self.page = document.add_page(Page::new(self.size, Some(self.margins.clone())));
        self.y = self.margins.top;
        self.fresh = true;
        debug!("started page {}", document.page_count());
        self.page
    }

    /// Whether content of the given height fits between the cursor and the bottom margin
    pub fn fits(&self, height: Pt) -> bool {
        self.y + height <= self.bottom_limit()
    }

    /// Start a new page if content of the given height would run past the bottom
    /// margin. Returns whether a page was added.
    ///
    /// A page that nothing has been laid out on yet is never abandoned: content too
    /// tall for it would be too tall for the next page as well.
    pub fn check_overflow(&mut self, document: &mut Document, height: Pt) -> bool {
        if self.fits(height) || self.fresh {
            return false;
        }
        self.add_page(document);
        true
    }

    /// Move the cursor down the page
    pub fn advance(&mut self, amount: Pt) {
        self.y += amount;
        if amount > Pt(0.0) {
            self.fresh = false;
        }
    }

    /// Forget the vertical position without starting a new page, so that the next
    /// page break starts from a clean top margin
    pub fn reset_unmeasured(&mut self) {
        self.y = Pt(0.0);
        self.fresh = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize;

    fn letter(doc: &mut Document) -> PageCursor {
        PageCursor::new(doc, pagesize::LETTER, Margins::all(Pt(72.0)))
    }

    #[test]
    fn starts_at_the_top_margin_of_a_new_page() {
        let mut doc = Document::default();
        let cursor = letter(&mut doc);
        assert_eq!(doc.page_count(), 1);
        assert_eq!(cursor.y(), Pt(72.0));
        assert_eq!(cursor.bottom_limit(), Pt(720.0));
        assert_eq!(doc.index_of_page(cursor.page()), Some(0));
    }

    #[test]
    fn overflow_starts_a_new_page_at_the_top_margin() {
        let mut doc = Document::default();
        let mut cursor = letter(&mut doc);
        cursor.advance(Pt(600.0));

        assert!(!cursor.check_overflow(&mut doc, Pt(48.0)));
        assert_eq!(doc.page_count(), 1);

        assert!(cursor.check_overflow(&mut doc, Pt(49.0)));
        assert_eq!(doc.page_count(), 2);
        assert_eq!(cursor.y(), Pt(72.0));
        assert_eq!(doc.index_of_page(cursor.page()), Some(1));
    }

    #[test]
    fn a_fresh_page_is_never_abandoned() {
        let mut doc = Document::default();
        let mut cursor = letter(&mut doc);
        assert!(!cursor.check_overflow(&mut doc, Pt(5000.0)));
        assert_eq!(doc.page_count(), 1);

        cursor.advance(Pt(10.0));
        assert!(cursor.check_overflow(&mut doc, Pt(5000.0)));
        assert_eq!(doc.page_count(), 2);
        assert!(!cursor.check_overflow(&mut doc, Pt(5000.0)));
        assert_eq!(doc.page_count(), 2);
    }

    #[test]
    fn reset_forgets_position_without_adding_a_page() {
        let mut doc = Document::default();
        let mut cursor = letter(&mut doc);
        cursor.advance(Pt(300.0));
        cursor.reset_unmeasured();
        assert_eq!(cursor.y(), Pt(0.0));
        assert_eq!(doc.page_count(), 1);

        cursor.add_page(&mut doc);
        assert_eq!(cursor.y(), Pt(72.0));
        assert_eq!(doc.page_count(), 2);
    }
}
