use crate::info::Info;
use serde::{Deserialize, Serialize};

/// The contents of a single lab record, as submitted by the student.
///
/// Every field is free text and may be empty; empty fields simply produce empty
/// sections. Deserializes from the camelCase keys used by the submission form, with
/// missing keys treated as empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LabRecord {
    pub student_name: String,
    pub roll_number: String,
    pub subject: String,
    pub college_name: String,
    pub aim: String,
    pub theory: String,
    pub code: String,
    pub output: String,
    pub conclusion: String,
}

impl LabRecord {
    /// Document metadata describing this record
    pub fn info(&self) -> Info {
        Info::new()
            .with_title(format!("{} Lab Record", self.subject))
            .with_author(&self.student_name)
            .with_subject(&self.aim)
    }

    /// The file name to offer when the record is downloaded
    pub fn suggested_filename(&self) -> String {
        suggested_filename(&self.subject)
    }
}

/// Turn a subject into a file name, e.g. `"Data Structures"` becomes
/// `"Data_Structures_Lab_Record.pdf"`. Every run of characters that are not ASCII
/// letters or digits collapses into a single underscore.
pub fn suggested_filename(subject: &str) -> String {
    let mut stem = String::with_capacity(subject.len());
    let mut in_gap = false;
    for ch in subject.chars() {
        if ch.is_ascii_alphanumeric() {
            stem.push(ch);
            in_gap = false;
        } else if !in_gap {
            stem.push('_');
            in_gap = true;
        }
    }

    if stem.is_empty() {
        "Lab_Record.pdf".to_string()
    } else {
        format!("{stem}_Lab_Record.pdf")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_keys_deserialize_as_empty() {
        let record: LabRecord =
            serde_json::from_str(r#"{"studentName": "Ada", "rollNumber": "42"}"#)
                .expect("record parses");
        assert_eq!(
            record,
            LabRecord {
                student_name: "Ada".to_string(),
                roll_number: "42".to_string(),
                ..LabRecord::default()
            }
        );
    }

    #[test]
    fn form_keys_are_camel_case() {
        let record = LabRecord {
            college_name: "CBIT".to_string(),
            ..LabRecord::default()
        };
        let json = serde_json::to_value(&record).expect("record serializes");
        assert_eq!(json["collegeName"], "CBIT");
        assert_eq!(json["studentName"], "");
    }

    #[test]
    fn document_info_describes_the_record() {
        let record = LabRecord {
            student_name: "Ada".to_string(),
            subject: "Physics".to_string(),
            aim: "Measure g".to_string(),
            ..LabRecord::default()
        };
        assert_eq!(
            record.info(),
            Info::new()
                .with_title("Physics Lab Record")
                .with_author("Ada")
                .with_subject("Measure g")
        );
    }

    #[test]
    fn file_names_replace_runs_of_punctuation() {
        assert_eq!(
            suggested_filename("Data Structures"),
            "Data_Structures_Lab_Record.pdf"
        );
        assert_eq!(
            suggested_filename("C++ / OOP  Lab"),
            "C_OOP_Lab_Lab_Record.pdf"
        );
        assert_eq!(suggested_filename(""), "Lab_Record.pdf");
    }
}
