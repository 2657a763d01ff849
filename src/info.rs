use crate::refs::{ObjectReferences, RefType};
use chrono::{DateTime, Datelike, Local, Offset, Timelike};
use pdf_writer::{Date as PDate, Pdf, TextStr};

/// The document information dictionary: what readers show as the title, author and
/// subject of the file
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Info {
    pub title: String,
    pub author: String,
    pub subject: String,
}

impl Info {
    /// Create an info block with every entry empty
    pub fn new() -> Info {
        Info::default()
    }

    pub fn with_title<S: ToString>(mut self, title: S) -> Info {
        self.title = title.to_string();
        self
    }

    pub fn with_author<S: ToString>(mut self, author: S) -> Info {
        self.author = author.to_string();
        self
    }

    pub fn with_subject<S: ToString>(mut self, subject: S) -> Info {
        self.subject = subject.to_string();
        self
    }

    /// Writes the dictionary, leaving out empty entries. The creator and creation date
    /// are always filled in.
    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Info);
        let mut info = writer.document_info(id);

        if !self.title.is_empty() {
            info.title(TextStr(&self.title));
        }
        if !self.author.is_empty() {
            info.author(TextStr(&self.author));
        }
        if !self.subject.is_empty() {
            info.subject(TextStr(&self.subject));
        }
        info.creator(TextStr(concat!(
            env!("CARGO_PKG_NAME"),
            " v",
            env!("CARGO_PKG_VERSION")
        )));
        info.creation_date(pdf_date(Local::now()));
    }
}

fn pdf_date(at: DateTime<Local>) -> PDate {
    let offset = at.offset().fix().local_minus_utc();
    let offset_hours = offset / (60 * 60);
    let offset_minutes = ((offset % (60 * 60)) / 60).abs();
    PDate::new(at.year() as u16)
        .month(at.month() as u8)
        .day(at.day() as u8)
        .hour(at.hour() as u8)
        .minute(at.minute() as u8)
        .second(at.second() as u8)
        .utc_offset_hour(offset_hours as i8)
        .utc_offset_minute(offset_minutes as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(info: &Info) -> String {
        let mut writer = Pdf::new();
        info.write(&mut ObjectReferences::new(), &mut writer);
        String::from_utf8_lossy(&writer.finish()).to_string()
    }

    #[test]
    fn empty_entries_are_left_out() {
        let pdf = written(&Info::new().with_title("Physics Lab Record"));
        assert!(pdf.contains("/Title (Physics Lab Record)"));
        assert!(!pdf.contains("/Author"));
        assert!(!pdf.contains("/Subject"));
        assert!(pdf.contains("/Creator (lab-record-gen v"));
        assert!(pdf.contains("/CreationDate (D:"));
    }
}
