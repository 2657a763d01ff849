use lab_record_gen::{generate, FontSource, LabRecord, LayoutConfig};

fn main() {
    // set RUST_LOG=debug to watch pages being laid out
    env_logger::init();

    let record = LabRecord {
        student_name: "Ada Lovelace".to_string(),
        roll_number: "1601-22-733-042".to_string(),
        subject: "Numerical Methods".to_string(),
        college_name: "CBIT".to_string(),
        aim: "To compute Bernoulli numbers using the difference engine".to_string(),
        theory: format!("{}\n\n{}", lipsum::lipsum(120), lipsum::lipsum(80)),
        code: (1..=80)
            .map(|n| format!("t{n} = t{} * {n} / {}", n - 1, n + 1))
            .collect::<Vec<String>>()
            .join("\n"),
        output: "B1 = -1/2\nB2 = 1/6\nB4 = -1/30\nB6 = 1/42".to_string(),
        conclusion: lipsum::lipsum(40),
    };

    // optionally set the body text in a TrueType font given on the command line,
    // which will be embedded into the document
    let mut config = LayoutConfig::default();
    if let Some(path) = std::env::args().nth(1) {
        let bytes = std::fs::read(&path).expect("can read font file");
        config.fonts.regular = FontSource::TrueType(bytes);
    }

    let pdf = generate(&record, &config).expect("can render the record");

    // save it under the name a browser download would get
    let filename = record.suggested_filename();
    std::fs::write(&filename, pdf).expect("can write the pdf");
    println!("wrote {filename}");
}
