// crates/infra/tests/csv_source.rs
use std::{fs, path::PathBuf};

use mailtally_infra::CsvColumnSource;
use mailtally_ports::source::{ColumnRequest, ColumnSource};
use mailtally_shared_kernel::{InfrastructureError, MailtallyError};
use tempfile::TempDir;

const HEADER: &str = "first_name,last_name,email,gender,ip_address\n";

fn write_csv(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("customers.csv");
    fs::write(&path, contents).expect("write fixture");
    path
}

fn extract(path: PathBuf, column: usize) -> Result<Vec<String>, MailtallyError> {
    CsvColumnSource::new().extract_column(&ColumnRequest::new(path, column))
}

#[test]
fn extracts_requested_column_in_row_order() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        &format!(
            "{HEADER}Mildred,Hernandez,mhernandez0@github.io,Female,38.194.51.128\n\
             Bonnie,Ortiz,bortiz1@cyberchimps.com,Female,197.54.209.129\n"
        ),
    );

    assert_eq!(extract(path.clone(), 2).unwrap(), vec!["mhernandez0@github.io", "bortiz1@cyberchimps.com"]);
    assert_eq!(extract(path, 1).unwrap(), vec!["Hernandez", "Ortiz"]);
}

#[test]
fn last_row_without_trailing_newline_is_read() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, &format!("{HEADER}Mildred,Hernandez,mhernandez0@github.io,Female,38.194.51.128"));

    assert_eq!(extract(path, 2).unwrap(), vec!["mhernandez0@github.io"]);
}

#[test]
fn quoted_fields_may_contain_delimiters() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, &format!("{HEADER}\"Smith, Jr.\",Doe,\"john@example.com\",Male,10.0.0.1\n"));

    assert_eq!(extract(path.clone(), 0).unwrap(), vec!["Smith, Jr."]);
    assert_eq!(extract(path, 2).unwrap(), vec!["john@example.com"]);
}

#[test]
fn header_only_yields_empty_column() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, HEADER);

    assert!(extract(path, 2).unwrap().is_empty());
}

#[test]
fn empty_file_is_missing_header() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "");

    let err = extract(path, 0).expect_err("no header");
    assert!(err.is_malformed_input());
    assert!(err.to_string().contains("missing header row"));
}

#[test]
fn missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let err = extract(dir.path().join("nope.csv"), 0).expect_err("missing file");

    assert!(err.is_not_found());
    match err {
        MailtallyError::Infrastructure(InfrastructureError::NotFound { path, source }) => {
            assert!(path.ends_with("nope.csv"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn ragged_row_is_malformed() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, &format!("{HEADER}a,b,c@d.com,e,f\nshort,row\n"));

    let err = extract(path, 2).expect_err("ragged row");
    assert!(err.is_malformed_input());
    match err {
        MailtallyError::Infrastructure(InfrastructureError::MalformedInput { line, reason, .. }) => {
            assert_eq!(line, Some(3));
            assert!(reason.contains("found 2 fields, expected 5"), "{reason}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn column_out_of_range_is_malformed() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, &format!("{HEADER}a,b,c@d.com,e,f\n"));

    let err = extract(path, 7).expect_err("column out of range");
    assert!(err.is_malformed_input());
    assert!(err.to_string().contains("column 7 requested"));
}

#[test]
fn invalid_utf8_is_malformed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("customers.csv");
    let mut bytes = HEADER.as_bytes().to_vec();
    bytes.extend_from_slice(b"a,b,\xff\xfe@x.com,e,f\n");
    fs::write(&path, bytes).unwrap();

    let err = extract(path, 2).expect_err("bad utf-8");
    assert!(err.is_malformed_input());
}

#[test]
fn streaming_visits_each_value_once() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, &format!("{HEADER}a,b,one@x.com,e,f\na,b,two@y.com,e,f\n"));

    let mut seen = Vec::new();
    CsvColumnSource::new()
        .for_each_value(&ColumnRequest::new(path, 2), &mut |v| seen.push(v.to_string()))
        .unwrap();
    assert_eq!(seen, vec!["one@x.com", "two@y.com"]);
}

fn malformed_parts(err: MailtallyError) -> (Option<u64>, String) {
    match err {
        MailtallyError::Infrastructure(InfrastructureError::MalformedInput { line, reason, .. }) => (line, reason),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unterminated_last_field_is_malformed() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, &format!("{HEADER}a,b,x@y.com,e,\"f"));

    let (line, reason) = malformed_parts(extract(path, 2).expect_err("unterminated quote"));
    assert_eq!(line, Some(2));
    assert!(reason.contains("unterminated quoted field"), "{reason}");
}

#[test]
fn unterminated_email_field_does_not_swallow_later_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "first,email\na,\"x@y.com\nb,z@w.com\n");

    let mut seen = Vec::new();
    let err = CsvColumnSource::new()
        .for_each_value(&ColumnRequest::new(path, 1), &mut |v| seen.push(v.to_string()))
        .expect_err("unterminated quote");
    assert!(err.is_malformed_input());
    assert!(seen.is_empty(), "{seen:?}");
    assert_eq!(malformed_parts(err).0, Some(2));
}

#[test]
fn bare_quote_inside_field_is_malformed() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, &format!("{HEADER}a,b,c@d.com,e,f\na,b,x\"y@z.com,e,f\n"));

    let (line, reason) = malformed_parts(extract(path, 2).expect_err("bare quote"));
    assert_eq!(line, Some(3));
    assert!(reason.contains("bare quote"), "{reason}");
}

#[test]
fn text_after_closing_quote_is_malformed() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, &format!("{HEADER}\"Ann\"x,b,c@d.com,e,f\n"));

    assert!(extract(path, 2).expect_err("extraneous quote").is_malformed_input());
}

#[test]
fn escaped_quotes_and_embedded_newlines_are_accepted() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, &format!("{HEADER}\"say \"\"hi\"\"\",\"two\nlines\",ann@x.com,e,f\r\n"));

    assert_eq!(extract(path.clone(), 0).unwrap(), vec!["say \"hi\""]);
    assert_eq!(extract(path.clone(), 1).unwrap(), vec!["two\nlines"]);
    assert_eq!(extract(path, 2).unwrap(), vec!["ann@x.com"]);
}
