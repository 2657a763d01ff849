//! Metrics and encoding for the PDF standard fonts the default style sheet uses.
//!
//! Widths are the Adobe AFM advance widths in 1/1000 em for the printable ASCII
//! range. Characters outside that range that WinAnsiEncoding can still represent
//! fall back to a per-font default width.

use crate::units::Pt;

/// The built-in PDF fonts available without embedding any font data
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    Courier,
}

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

impl StandardFont {
    /// The PostScript name the PDF reader resolves the font by
    pub fn base_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::Courier => "Courier",
        }
    }

    fn default_width(&self) -> u16 {
        match self {
            StandardFont::Helvetica => 556,
            StandardFont::HelveticaBold => 611,
            StandardFont::Courier => 600,
        }
    }

    /// Width of a WinAnsi code in 1/1000 em
    fn code_width(&self, code: u8) -> u16 {
        let table = match self {
            StandardFont::Helvetica => &HELVETICA,
            StandardFont::HelveticaBold => &HELVETICA_BOLD,
            StandardFont::Courier => return 600,
        };
        match code {
            0x20..=0x7e => table[(code - 0x20) as usize],
            _ => self.default_width(),
        }
    }

    /// Horizontal advance of a character at the given size, or [None] when the
    /// character has no WinAnsi encoding
    pub fn advance(&self, ch: char, size: Pt) -> Option<Pt> {
        encode_win_ansi(ch).map(|code| Pt(size.0 * self.code_width(code) as f32 / 1000.0))
    }
}

/// Map a character onto its WinAnsiEncoding byte
pub(crate) fn encode_win_ansi(ch: char) -> Option<u8> {
    let code = match ch {
        '\u{20}'..='\u{7e}' | '\u{a0}'..='\u{ff}' => ch as u32 as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8a,
        '‹' => 0x8b,
        'Œ' => 0x8c,
        'Ž' => 0x8e,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201c}' => 0x93,
        '\u{201d}' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9a,
        '›' => 0x9b,
        'œ' => 0x9c,
        'ž' => 0x9e,
        'Ÿ' => 0x9f,
        _ => return None,
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn courier_is_monospaced() {
        let size = Pt(10.0);
        assert_eq!(StandardFont::Courier.advance('i', size), Some(Pt(6.0)));
        assert_eq!(StandardFont::Courier.advance('W', size), Some(Pt(6.0)));
        assert_eq!(StandardFont::Courier.advance('é', size), Some(Pt(6.0)));
    }

    #[test]
    fn helvetica_widths_follow_the_afm() {
        let size = Pt(1000.0);
        assert_eq!(StandardFont::Helvetica.advance(' ', size), Some(Pt(278.0)));
        assert_eq!(StandardFont::Helvetica.advance('@', size), Some(Pt(1015.0)));
        assert_eq!(StandardFont::Helvetica.advance('~', size), Some(Pt(584.0)));
        assert_eq!(StandardFont::HelveticaBold.advance('m', size), Some(Pt(889.0)));
        assert_eq!(StandardFont::HelveticaBold.advance('z', size), Some(Pt(500.0)));
    }

    #[test]
    fn win_ansi_covers_latin1_and_typographic_quotes() {
        assert_eq!(encode_win_ansi('A'), Some(b'A'));
        assert_eq!(encode_win_ansi('é'), Some(0xe9));
        assert_eq!(encode_win_ansi('\u{201c}'), Some(0x93));
        assert_eq!(encode_win_ansi('—'), Some(0x97));
        assert_eq!(encode_win_ansi('\t'), None);
        assert_eq!(encode_win_ansi('漢'), None);
    }
}
