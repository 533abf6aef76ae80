//! Integration tests for csv-cursor

use csv_cursor::{Error, Format, Loader, Table};
use std::io::Cursor;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_basic_parse() {
    let mut csv = Table::from_path(fixture("testcase-1.csv"), None, 1).unwrap();
    let mut expectations = vec![
        ("Rich", "40"),
        ("Fred", "1000"),
        ("Wilma", "0"),
        ("", "56"),
        ("Bam Bam", ""),
    ]
    .into_iter();

    let mut i = 0;
    csv.rewind();
    while csv.valid() {
        let (name, age) = expectations.next().unwrap();
        let row = csv.current();
        assert_eq!(row.get("Name").unwrap(), name);
        assert_eq!(row.get("Age").unwrap(), age);
        i += 1;
        csv.advance();
    }
    assert_eq!(i, 5, "Expected 5 records, got {i}");
    assert_eq!(csv.headers(), vec!["Name", "Age"]);
}

#[test]
fn test_random_access() {
    let mut csv = Table::from_path(fixture("testcase-1.csv"), None, 1).unwrap();

    assert_eq!(csv.get("Name").unwrap(), "Rich");
    assert_eq!(csv.cell(0, None).unwrap(), "Rich");
    assert_eq!(csv.cell(0, Some(1)).unwrap(), "Rich");
    assert_eq!(csv.cell(0, Some(2)).unwrap(), "Fred");

    // Random access moves the cursor.
    assert_eq!(csv.row_number(), Some(2));
    assert_eq!(csv.get("Age").unwrap(), "1000");
}

#[test]
fn test_multi_line() {
    let csv = Table::from_path(fixture("testcase-2.csv"), None, 1).unwrap();
    let rows: Vec<(&str, &str)> = csv
        .iter()
        .map(|row| (row.get("Name").unwrap(), row.get("Address").unwrap()))
        .collect();

    assert_eq!(
        rows,
        vec![("Fred", "The Cave\nHovelshire"), ("Betty", "Elsewhere")]
    );
}

#[test]
fn test_dodgy_headers() {
    let err = Table::from_path(fixture("testcase-3-dodgy-headers.csv"), None, 1).unwrap_err();
    assert!(matches!(&err, Error::DuplicateHeader(name) if name == "Name"));
    assert_eq!(err.to_string(), "Duplicate header name: Name");
}

#[test]
fn test_tsv_has_no_multiline_fields() {
    let csv = Table::from_tsv_path(fixture("testcase-4.tsv"), None, 1).unwrap();

    // Each line is its own record, so the second address line is a row.
    assert_eq!(csv.count(), 3);
    assert_eq!(csv.row(1).unwrap().get("Address").unwrap(), "The Cave");
    assert_eq!(csv.row(2).unwrap().fields(), &["Hovelshire".to_string()]);
    assert_eq!(csv.row(2).unwrap().get("Address").unwrap(), "");

    let row = csv.row(3).unwrap();
    assert_eq!(row.get("Name").unwrap(), "");
    assert_eq!(row.get("Address").unwrap(), "Betty");
    assert_eq!(row.cell(2).unwrap(), "Elsewhere");
}

#[test]
fn test_blank_lines_are_rows() {
    let csv = Loader::new().header_row(2).load_bytes(b"\nName\nFred\n").unwrap();
    assert_eq!(csv.headers(), vec!["Name"]);
    assert_eq!(csv.count(), 1);
    assert_eq!(csv.get("Name").unwrap(), "Fred");

    let text = "Name,Age\n\nRich,40\n";
    let from_bytes = Loader::new().load_bytes(text.as_bytes()).unwrap();
    let from_str = Loader::new().load_str(text).unwrap();
    let from_tsv = Loader::new()
        .format(Format::Tsv)
        .load_bytes(b"Name\tAge\n\nRich\t40\n")
        .unwrap();

    for mut csv in [from_bytes, from_str, from_tsv] {
        assert_eq!(csv.count(), 2);
        assert_eq!(csv.row(1).unwrap().fields(), &[String::new()]);
        assert_eq!(csv.row(1).unwrap().get("Age").unwrap(), "");
        csv.set_row(2).unwrap();
        assert_eq!(csv.get("Name").unwrap(), "Rich");
    }
}

#[test]
fn test_no_header_row() {
    let text = "Name,Age\nRich,40\nFred,1000\nWilma,0\n,56\nBam Bam,\n";
    let mut csv = Table::from_csv_str(text, 0).unwrap();

    assert_eq!(csv.count(), 6);
    assert_eq!(csv.cell(0, Some(1)).unwrap(), "Name");
    assert!(matches!(csv.get("Name"), Err(Error::UnknownField(_))));

    csv.extract_headers(None).unwrap();
    assert_eq!(csv.count(), 5);
    assert_eq!(csv.get("Name").unwrap(), "Rich");
}

#[test]
fn test_header_row_two() {
    let text = "Quarterly report,,\nName,,Age\nRich,a,40\nFred,b,1000\nWilma,c,0\nBam Bam,d,\n";
    let mut csv = Table::from_csv_str(text, 2).unwrap();

    assert_eq!(csv.count(), 4);
    assert_eq!(csv.headers(), vec!["Name", "Age"]);
    assert_eq!(csv.cell(1, Some(1)).unwrap(), "a");
    assert_eq!(csv.get("Age").unwrap(), "40");
    assert_eq!(csv.cell(0, Some(4)).unwrap(), "Bam Bam");
}

#[test]
fn test_header_row_out_of_range() {
    let err = Table::from_csv_str("a,b\n", 2).unwrap_err();
    assert!(matches!(
        err,
        Error::HeaderRowOutOfRange {
            requested: 2,
            available: 1
        }
    ));
}

#[test]
fn test_string_loader_splits_lines_first() {
    let text = "Name,Address\nFred,\"The Cave\nHovelshire\"\nBetty,Elsewhere\n";

    let csv = Table::from_csv_str(text, 1).unwrap();
    assert_eq!(csv.count(), 3);
    assert_eq!(csv.row(1).unwrap().get("Address").unwrap(), "The Cave");

    // The byte loader keeps the quoted line break.
    let csv = Loader::new().load_bytes(text.as_bytes()).unwrap();
    assert_eq!(csv.count(), 2);
}

#[test]
fn test_from_temp_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, " Name ,Age,,").unwrap();
    writeln!(temp_file, "Alice,30,x,y").unwrap();
    writeln!(temp_file, "Bob,25").unwrap();
    temp_file.flush().unwrap();

    let mut csv = Table::from_path(temp_file.path(), None, 1).unwrap();
    assert_eq!(csv.headers(), vec!["Name", "Age"]);
    assert_eq!(csv.raw_headers().unwrap().len(), 4);

    assert_eq!(csv.cell(3, Some(1)).unwrap(), "y");
    assert_eq!(csv.cell(4, None).unwrap(), "");
    assert!(matches!(csv.cell(5, None), Err(Error::ColumnOutOfBounds(5))));
    assert_eq!(csv.cell(3, Some(2)).unwrap(), "");
}

#[test]
fn test_unreadable_file() {
    let err = Table::from_path("/no/such/dir/data.csv", None, 1).unwrap_err();
    match err {
        Error::SourceUnreadable { path, source } => {
            assert_eq!(path, PathBuf::from("/no/such/dir/data.csv"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_max_record_len() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "Name\tBio").unwrap();
    writeln!(temp_file, "Fred\tLives in a cave").unwrap();
    temp_file.flush().unwrap();

    assert!(Table::from_tsv_path(temp_file.path(), Some(64), 1).is_ok());
    assert!(Table::from_tsv_path(temp_file.path(), Some(0), 1).is_ok());
    let err = Table::from_tsv_path(temp_file.path(), Some(10), 1).unwrap_err();
    assert!(matches!(err, Error::RecordTooLong { row: 2, limit: 10 }));

    // "Wilma" is the first field longer than 4 bytes.
    let err = Table::from_path(fixture("testcase-1.csv"), Some(4), 1).unwrap_err();
    assert!(matches!(err, Error::RecordTooLong { row: 4, limit: 4 }));
}

#[test]
fn test_utf8_bom_and_utf16() {
    let mut data = vec![0xEF, 0xBB, 0xBF];
    data.extend_from_slice(b"Name,Age\nRich,40\n");
    let csv = Loader::new().load_bytes(&data).unwrap();
    assert_eq!(csv.headers(), vec!["Name", "Age"]);

    let mut utf16 = vec![0xFF, 0xFE];
    for unit in "Name,Age\nRich,40\n".encode_utf16() {
        utf16.extend_from_slice(&unit.to_le_bytes());
    }
    let csv = Loader::new().load_reader(Cursor::new(utf16)).unwrap();
    assert_eq!(csv.get("Age").unwrap(), "40");
}

#[test]
fn test_round_trip() {
    let original = Table::from_path(fixture("testcase-1.csv"), None, 1).unwrap();
    let text = original.to_csv_string().unwrap();
    let decoded = Loader::new().load_bytes(text.as_bytes()).unwrap();

    assert_eq!(decoded.raw_headers(), original.raw_headers());
    assert_eq!(decoded.rows(), original.rows());
}

#[test]
fn test_round_trip_quoted_fields() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(
        temp_file,
        "Name,Note,\nFred,\"a, b\",\nBetty,\"she said \"\"hi\"\"\",x\nBarney,\"two\nlines\",\n"
    )
    .unwrap();
    temp_file.flush().unwrap();

    let original = Table::from_path(temp_file.path(), None, 1).unwrap();
    let text = original.to_csv_string().unwrap();
    let decoded = Loader::new().load_bytes(text.as_bytes()).unwrap();

    assert_eq!(decoded.raw_headers(), original.raw_headers());
    assert_eq!(decoded.rows(), original.rows());
    assert_eq!(decoded.row(2).unwrap().get("Note").unwrap(), "she said \"hi\"");
}

#[test]
fn test_tsv_to_csv() {
    let csv = Loader::new()
        .format(Format::Tsv)
        .load_path(fixture("testcase-4.tsv"))
        .unwrap();
    assert_eq!(
        csv.to_csv_string().unwrap(),
        "Name,Address\nFred,The Cave\nHovelshire\n,Betty,Elsewhere\n"
    );
}

#[test]
fn test_nested_cursor_is_shared() {
    let mut csv = Table::from_csv_str("n\n1\n2\n", 1).unwrap();

    csv.rewind();
    let mut outer_rows = 0;
    while csv.valid() {
        outer_rows += 1;
        // An inner walk over the same table exhausts the shared cursor.
        csv.rewind();
        while csv.valid() {
            csv.advance();
        }
    }
    assert_eq!(outer_rows, 1);

    // Views don't share it.
    let mut pairs = Vec::new();
    for a in &csv {
        for b in &csv {
            pairs.push((a.row_number(), b.row_number()));
        }
    }
    assert_eq!(pairs, vec![(1, 1), (1, 2), (2, 1), (2, 2)]);
}
