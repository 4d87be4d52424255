use lifeboat::{PassengerForm, PassengerRecord};
use std::io::Cursor;

fn collect(lines: &str) -> Option<PassengerRecord> {
    let form = PassengerForm::new();
    let mut input = Cursor::new(lines.to_string());
    let mut output = Vec::new();
    form.collect(&mut input, &mut output).unwrap()
}

#[test]
fn test_blank_lines_keep_all_defaults() {
    let record = collect("\n\n\n\n\n\n").unwrap();
    assert_eq!(record, PassengerRecord::new(3, "male", 25, 0, 0, 7.25));
}

#[test]
fn test_full_custom_input() {
    let record = collect("1\nfemale\n5\n1\n2\n150.0\n").unwrap();
    assert_eq!(record, PassengerRecord::new(1, "female", 5, 1, 2, 150.0));
}

#[test]
fn test_domain_endpoints_accepted() {
    let record = collect("1\nfemale\n0\n10\n10\n0.0\n").unwrap();
    assert_eq!(record, PassengerRecord::new(1, "female", 0, 10, 10, 0.0));

    let record = collect("3\nmale\n80\n10\n10\n600.0\n").unwrap();
    assert_eq!(record, PassengerRecord::new(3, "male", 80, 10, 10, 600.0));
}

#[test]
fn test_rejected_line_is_reprompted() {
    // Age 99 is out of range; the control rejects it and accepts the retry.
    let record = collect("3\nmale\n99\n42\n\n\n\n\n").unwrap();
    assert_eq!(record.age, 42);

    let form = PassengerForm::new();
    let mut input = Cursor::new("3\nmale\n99\n42\n\n\n\n\n".to_string());
    let mut output = Vec::new();
    form.collect(&mut input, &mut output).unwrap();
    let transcript = String::from_utf8(output).unwrap();
    assert!(transcript.contains("Out of range"));
}

#[test]
fn test_quit_mid_form() {
    assert!(collect("3\nq\n").is_none());
}

#[test]
fn test_end_of_input_quits() {
    assert!(collect("3\nmale\n").is_none());
}
