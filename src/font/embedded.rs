use crate::{
    refs::{ObjectReferences, RefType},
    units::Pt,
    PDFError,
};
use owned_ttf_parser::{name_id, AsFaceRef, Face, GlyphId, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Filter, Finish, Name, Pdf, Ref, Str,
};
use std::collections::BTreeMap;

/// A TrueType / OpenType font that gets embedded, in its entirety, into the generated
/// PDF. Text set in an embedded font is encoded as glyph ids (Identity-H), so any
/// character the font has a glyph for can be used.
pub struct EmbeddedFont {
    face: OwnedFace,
}

impl EmbeddedFont {
    /// Parse font bytes, returning an error if the font could not be parsed
    pub fn parse(bytes: Vec<u8>) -> Result<EmbeddedFont, PDFError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        Ok(EmbeddedFont { face })
    }

    fn face(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    fn lookup_name(&self, id: u16) -> Option<String> {
        self.face()
            .names()
            .into_iter()
            .find(|name| name.name_id == id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// The full name of the font, or a placeholder if the font doesn't carry one
    pub fn name(&self) -> String {
        self.lookup_name(name_id::FULL_NAME)
            .unwrap_or_else(|| "EmbeddedFont".to_string())
    }

    /// Glyph for a character, falling back to the replacement character, then `?`,
    /// then `.notdef`
    pub fn glyph_id(&self, ch: char) -> u16 {
        let face = self.face();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
            .map(|gid| gid.0)
            .unwrap_or(0)
    }

    pub fn advance(&self, ch: char, size: Pt) -> Pt {
        let face = self.face();
        let advance = face
            .glyph_hor_advance(GlyphId(self.glyph_id(ch)))
            .unwrap_or_default();
        Pt(size.0 * advance as f32 / face.units_per_em() as f32)
    }

    /// Scale from font units to the 1/1000 em glyph space PDF uses
    fn glyph_space(&self) -> f32 {
        1000.0 / self.face().units_per_em() as f32
    }

    /// Every glyph reachable through a unicode cmap subtable, with the first
    /// character that maps onto it
    fn glyph_chars(&self) -> BTreeMap<u16, char> {
        let mut map: BTreeMap<u16, char> = BTreeMap::new();
        let Some(cmap) = self.face().tables().cmap else {
            return map;
        };

        for subtable in cmap.subtables.into_iter().filter(|table| table.is_unicode()) {
            subtable.codepoints(|codepoint: u32| {
                let Ok(ch) = char::try_from(codepoint) else {
                    return;
                };
                if let Some(gid) = subtable.glyph_index(codepoint).filter(|gid| gid.0 > 0) {
                    map.entry(gid.0).or_insert(ch);
                }
            });
        }

        map
    }

    fn write_font_data(&self, refs: &mut ObjectReferences, index: usize, writer: &mut Pdf) -> Ref {
        let id = refs.gen(RefType::FontData(index));
        let data = self.face.as_slice();
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            data,
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );

        let mut stream = writer.stream(id, compressed.as_slice());
        stream.filter(Filter::FlateDecode);
        stream.pair(Name(b"Length1"), data.len() as i32);
        id
    }

    fn write_descriptor(
        &self,
        refs: &mut ObjectReferences,
        index: usize,
        base_font: &str,
        writer: &mut Pdf,
    ) -> Ref {
        let font_data = self.write_font_data(refs, index, writer);
        let face = self.face();
        let scale = self.glyph_space();
        let bbox = face.global_bounding_box();

        let id = refs.gen(RefType::FontDescriptor(index));
        let mut descriptor = writer.font_descriptor(id);
        descriptor.name(Name(base_font.as_bytes()));
        if let Some(family) = self.lookup_name(name_id::FAMILY) {
            descriptor.family(Str(family.as_bytes()));
        }

        let mut flags = FontFlags::SYMBOLIC;
        if face.is_monospaced() {
            flags.insert(FontFlags::FIXED_PITCH);
        }
        if face.is_italic() {
            flags.insert(FontFlags::ITALIC);
        }
        descriptor.flags(flags);

        descriptor.bbox(pdf_writer::Rect {
            x1: bbox.x_min as f32 * scale,
            y1: bbox.y_min as f32 * scale,
            x2: bbox.x_max as f32 * scale,
            y2: bbox.y_max as f32 * scale,
        });
        descriptor.italic_angle(if face.is_italic() { -12.0 } else { 0.0 });
        descriptor.ascent(face.ascender() as f32 * scale);
        descriptor.descent(face.descender() as f32 * scale);
        descriptor.cap_height(
            face.capital_height()
                .map(|h| h as f32 * scale)
                .unwrap_or(face.ascender() as f32 * scale),
        );
        // not recorded in TrueType files
        descriptor.stem_v(80.0);
        descriptor.font_file2(font_data);

        id
    }

    fn write_cid(
        &self,
        refs: &mut ObjectReferences,
        index: usize,
        base_font: &str,
        glyphs: &BTreeMap<u16, char>,
        writer: &mut Pdf,
    ) -> Ref {
        let descriptor = self.write_descriptor(refs, index, base_font, writer);
        let scale = self.glyph_space();
        let face = self.face();

        let id = refs.gen(RefType::CidFont(index));
        let mut cid_font = writer.cid_font(id);
        cid_font.subtype(CidFontType::Type2);
        cid_font.base_font(Name(base_font.as_bytes()));
        cid_font.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid_font.font_descriptor(descriptor);
        cid_font.default_width(1000.0);

        // group runs of consecutive glyph ids into single width arrays
        let mut widths = cid_font.widths();
        let mut run: Option<(u16, Vec<f32>)> = None;
        for &gid in glyphs.keys() {
            let width = face.glyph_hor_advance(GlyphId(gid)).unwrap_or_default() as f32 * scale;
            match run.as_mut() {
                Some((start, run_widths)) if *start as usize + run_widths.len() == gid as usize => {
                    run_widths.push(width);
                }
                _ => {
                    if let Some((start, run_widths)) = run.take() {
                        widths.consecutive(start, run_widths);
                    }
                    run = Some((gid, vec![width]));
                }
            }
        }
        if let Some((start, run_widths)) = run {
            widths.consecutive(start, run_widths);
        }
        widths.finish();

        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));
        id
    }

    fn write_to_unicode(
        &self,
        refs: &mut ObjectReferences,
        index: usize,
        glyphs: &BTreeMap<u16, char>,
        writer: &mut Pdf,
    ) -> Ref {
        let id = refs.gen(RefType::ToUnicode(index));

        let mut cmap = String::from(
            "/CIDInit /ProcSet findresource begin\n\
             12 dict begin\n\
             begincmap\n\
             /CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n\
             /CMapName /Adobe-Identity-UCS def\n\
             /CMapType 2 def\n\
             1 begincodespacerange\n\
             <0000> <FFFF>\n\
             endcodespacerange\n",
        );

        // bfchar sections hold at most 100 entries each
        let entries: Vec<(u16, char)> = glyphs.iter().map(|(&gid, &ch)| (gid, ch)).collect();
        for block in entries.chunks(100) {
            cmap.push_str(&format!("{} beginbfchar\n", block.len()));
            for &(gid, ch) in block {
                let mut utf16 = [0u16; 2];
                let units: String = ch
                    .encode_utf16(&mut utf16)
                    .iter()
                    .map(|unit| format!("{unit:04x}"))
                    .collect();
                cmap.push_str(&format!("<{gid:04x}> <{units}>\n"));
            }
            cmap.push_str("endbfchar\n");
        }
        cmap.push_str("endcmap CMapName currentdict /CMap defineresource pop end end\n");

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            cmap.as_bytes(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        let mut stream = writer.stream(id, compressed.as_slice());
        stream.filter(Filter::FlateDecode);

        id
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, index: usize, writer: &mut Pdf) {
        let font_id = refs.gen(RefType::Font(index));
        let base_font: String = self.name().chars().filter(|ch| !ch.is_whitespace()).collect();
        let glyphs = self.glyph_chars();

        let cid_font = self.write_cid(refs, index, &base_font, &glyphs, writer);
        let to_unicode = self.write_to_unicode(refs, index, &glyphs, writer);

        let mut font = writer.type0_font(font_id);
        font.base_font(Name(base_font.as_bytes()));
        font.encoding_predefined(Name(b"Identity-H"));
        font.descendant_font(cid_font);
        font.to_unicode(to_unicode);
    }
}
