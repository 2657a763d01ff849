use crate::config::LayoutConfig;
use crate::document::Document;
use crate::font::Font;
use crate::layout::{wrap_text, width_of_text, Line, PageCursor};
use crate::page::{FillLayout, Page, SpanFont, SpanLayout};
use crate::style::{ContentKind, Families, TextStyle};
use crate::units::Pt;
use crate::PDFError;
use id_arena::Id;
use log::{trace, warn};

const ELLIPSIS: &str = "...";

/// Lays out blocks of content onto the pages of a document.
///
/// The composer owns the [PageCursor] and is the only thing that moves it, so every
/// block is placed below the one before it and page breaks only ever happen inside
/// [PageCursor::check_overflow].
pub struct Composer<'a> {
    document: &'a mut Document,
    config: &'a LayoutConfig,
    fonts: Families<Id<Font>>,
    cursor: PageCursor,
}

impl<'a> Composer<'a> {
    /// Start composing onto a fresh page appended to the document. `fonts` must refer
    /// to fonts already added to `document`.
    pub fn new(
        document: &'a mut Document,
        config: &'a LayoutConfig,
        fonts: Families<Id<Font>>,
    ) -> Composer<'a> {
        let cursor = PageCursor::new(document, config.page_size, config.margins.clone());
        Composer {
            document,
            config,
            fonts,
            cursor,
        }
    }

    pub fn cursor(&self) -> &PageCursor {
        &self.cursor
    }

    /// Break to a new page unconditionally
    pub fn add_page(&mut self) -> Id<Page> {
        self.cursor.add_page(self.document)
    }

    /// Forget the vertical position on the current page, see
    /// [PageCursor::reset_unmeasured]
    pub fn reset_cursor(&mut self) {
        self.cursor.reset_unmeasured();
    }

    pub fn content_width(&self) -> Pt {
        self.config.content_width()
    }

    fn span_font(&self, style: &TextStyle) -> SpanFont {
        SpanFont {
            id: *self.fonts.get(style.family),
            size: style.size,
        }
    }

    fn measure(&self, text: &str, font: SpanFont) -> Result<Pt, PDFError> {
        width_of_text(text, &self.document.fonts[font.id], font.size)
    }

    fn wrap(&self, text: &str, max_width: Pt, font: SpanFont) -> Result<Vec<Line>, PDFError> {
        wrap_text(self.document, text, max_width, font)
    }

    fn place(&mut self, page: Id<Page>, text: String, style: &TextStyle, x: Pt, y: Pt) {
        // empty spans would only bloat the content stream
        if text.is_empty() {
            return;
        }
        let font = self.span_font(style);
        self.document.pages[page].add_span(SpanLayout {
            text,
            font,
            colour: style.colour,
            coords: (x, y),
        });
    }

    /// A single line in the title style, centred horizontally on the page at the
    /// absolute position `y`. The cursor is not consulted or moved.
    pub fn title(&mut self, text: &str, y: Pt) -> Result<(), PDFError> {
        let style = self.config.styles.title;
        let width = self.measure(text, self.span_font(&style))?;
        let x = (self.config.page_size.0 - width) / 2.0;
        self.place(self.cursor.page(), text.to_string(), &style, x, y);
        Ok(())
    }

    /// Heading-1 text wrapped to the content width, each line centred on the page,
    /// starting at the absolute position `y`. The cursor is not consulted or moved.
    ///
    /// Lines whose baseline would fall below `limit` are dropped and the last line
    /// that is kept is ended with an ellipsis. Returns the position just below the
    /// last line.
    pub fn wrapped_heading(&mut self, text: &str, y: Pt, limit: Pt) -> Result<Pt, PDFError> {
        let style = self.config.styles.heading1;
        let font = self.span_font(&style);
        let max_width = self.content_width();
        let mut lines = self.wrap(text, max_width, font)?;

        let capacity = if limit < y {
            0
        } else {
            ((limit - y).0 / style.line_height.0).floor() as usize + 1
        };
        if lines.len() > capacity {
            warn!(
                "heading needs {} lines but only {} fit above {}, truncating",
                lines.len(),
                capacity,
                limit
            );
            lines.truncate(capacity);
            if let Some(last) = lines.last_mut() {
                last.text = self.ellipsize(&last.text, font, max_width)?;
            }
        }

        let page = self.cursor.page();
        let page_width = self.config.page_size.0;
        let mut y = y;
        for line in lines {
            let width = self.measure(&line.text, font)?;
            self.place(page, line.text, &style, (page_width - width) / 2.0, y);
            y += style.line_height;
        }
        Ok(y)
    }

    /// Drop trailing words until the line plus an ellipsis fits; a lone word keeps
    /// its ellipsis even if that overruns
    fn ellipsize(&self, line: &str, font: SpanFont, max_width: Pt) -> Result<String, PDFError> {
        let mut words: Vec<&str> = line.split(' ').collect();
        loop {
            let candidate = format!("{}{ELLIPSIS}", words.join(" "));
            if words.len() <= 1 || self.measure(&candidate, font)? <= max_width {
                return Ok(candidate);
            }
            words.pop();
        }
    }

    /// A left-aligned heading-2 line flowing with the cursor, with space reserved above
    /// it. Each heading is also recorded as a bookmark in the document outline.
    pub fn section_heading(&mut self, text: &str) -> Result<(), PDFError> {
        if text.is_empty() {
            return Ok(());
        }
        trace!("section heading {text:?}");

        let style = self.config.styles.heading2;
        let line_height = style.line_height;
        self.cursor.check_overflow(self.document, line_height * 2.0);
        self.cursor.advance(line_height * 1.5);

        let page = self.cursor.page();
        let (x, y) = (self.config.margins.left, self.cursor.y());
        self.place(page, text.to_string(), &style, x, y);

        let page_index = self
            .document
            .index_of_page(page)
            .ok_or(PDFError::PageMissing)?;
        self.document.add_bookmark(text, page_index);

        self.cursor.advance(self.config.styles.body.line_height);
        Ok(())
    }

    /// Body text wrapped to the content width, flowing onto new pages line by line
    pub fn body(&mut self, text: &str) -> Result<(), PDFError> {
        let style = self.config.styles.body;
        let lines = self.wrap(text, self.content_width(), self.span_font(&style))?;
        trace!("body paragraph of {} lines", lines.len());

        let x = self.config.margins.left;
        for line in lines {
            self.cursor.check_overflow(self.document, style.line_height);
            self.place(self.cursor.page(), line.text, &style, x, self.cursor.y());
            self.cursor.advance(style.line_height);
        }
        Ok(())
    }

    /// Monospaced text on a shaded background, wrapped inside the content width less
    /// the box inset on each side.
    ///
    /// The whole block is moved to a new page if it does not fit on the current one.
    /// A block too tall for any page is split line by line into fragments, one per
    /// page, and every fragment gets its own background sized to its own lines.
    pub fn code_block(&mut self, text: &str) -> Result<(), PDFError> {
        let config = self.config;
        let style = config.styles.code;
        let code_box = &config.code_box;
        let max_width = self.content_width() - code_box.inset * 2.0;
        let lines = self.wrap(text, max_width, self.span_font(&style))?;
        if lines.is_empty() {
            return Ok(());
        }
        trace!("code block of {} lines", lines.len());

        let line_height = style.line_height;
        let block_height = line_height * lines.len() as f32 + code_box.box_padding;
        self.cursor.check_overflow(self.document, block_height);

        // the background box starts above the top padding of the first fragment only
        let mut box_top = self.cursor.y() - code_box.box_padding / 2.0;
        self.cursor.advance(code_box.padding_top);

        let mut fragment: Vec<(String, Pt)> = Vec::new();
        let mut fragments = 1;
        for line in lines {
            let page = self.cursor.page();
            if self.cursor.check_overflow(self.document, line_height) {
                self.flush_code(page, box_top, std::mem::take(&mut fragment));
                box_top = self.cursor.y() - code_box.padding_top - code_box.box_padding / 2.0;
                fragments += 1;
            }
            fragment.push((line.text, self.cursor.y()));
            self.cursor.advance(line_height);
        }
        self.flush_code(self.cursor.page(), box_top, fragment);
        self.cursor.advance(code_box.padding_bottom);

        if fragments > 1 {
            warn!("code block is taller than a page, split across {fragments} pages");
        }
        Ok(())
    }

    /// Paint one fragment of a code block: its background first, then its lines
    fn flush_code(&mut self, page: Id<Page>, top: Pt, lines: Vec<(String, Pt)>) {
        if lines.is_empty() {
            return;
        }
        let config = self.config;
        let style = config.styles.code;
        let code_box = &config.code_box;
        let left = config.margins.left;
        let width = self.content_width() - code_box.inset;

        self.document.pages[page].fill_rect(FillLayout {
            x: left + code_box.inset / 2.0,
            top,
            width,
            height: style.line_height * lines.len() as f32 + code_box.box_padding,
            colour: code_box.background,
        });
        for (text, y) in lines {
            self.place(page, text, &style, left + code_box.inset, y);
        }
    }

    /// A single unwrapped line at an absolute position on the current page
    pub fn label(&mut self, text: &str, x: Pt, y: Pt, kind: ContentKind) {
        let style = *self.config.styles.get(kind);
        self.place(self.cursor.page(), text.to_string(), &style, x, y);
    }

    /// Stamp every page but the first with a header and a "Page X of Y" footer. This
    /// must run after all content has been laid out so that the total is final.
    pub fn running_heads(&mut self, header: &str) {
        let config = self.config;
        let style = config.styles.running_head;
        let (page_width, page_height) = config.page_size;
        let heads = &config.running_heads;
        let header_at = heads.header;
        let footer_at = (page_width - heads.footer.0, page_height - heads.footer.1);

        let count = self.document.page_count();
        let pages: Vec<Id<Page>> = self.document.page_order.iter().skip(1).copied().collect();
        for (i, page) in pages.into_iter().enumerate() {
            self.place(page, header.to_string(), &style, header_at.0, header_at.1);
            let footer = format!("Page {} of {}", i + 2, count);
            self.place(page, footer, &style, footer_at.0, footer_at.1);
        }
    }
}
