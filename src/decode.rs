//! Splitting delimited text into rows of string fields.

use crate::error::{Error, Result};
use crate::loader::Format;

/// Decoded rows, in source order, each an ordered list of fields.
pub type Records = Vec<Vec<String>>;

/// Decode comma-separated text.
///
/// Quoted fields may contain delimiters, doubled quotes and line breaks.
/// Records may have differing field counts. A blank line becomes a record
/// with one empty field, so record numbers follow source lines.
///
/// `max_field_len` caps the byte length of any single field; `None` or
/// `Some(0)` means unlimited.
pub fn decode_csv(text: &str, max_field_len: Option<usize>) -> Result<Records> {
    let limit = max_field_len.filter(|&n| n > 0);
    let mut reader = csv_reader(Format::Csv.delimiter()).from_reader(text.as_bytes());

    let mut records = Vec::new();
    let mut record = csv::StringRecord::new();
    let mut end = 0;
    while reader.read_record(&mut record)? {
        push_blank_lines(&mut records, text, end);
        end = usize::try_from(reader.position().byte()).unwrap_or(text.len());

        if let Some(limit) = limit
            && record.iter().any(|field| field.len() > limit)
        {
            return Err(Error::RecordTooLong {
                row: records.len() + 1,
                limit,
            });
        }
        records.push(record.iter().map(str::to_string).collect());
    }
    push_blank_lines(&mut records, text, end);

    Ok(records)
}

/// Decode comma-separated text one physical line at a time.
///
/// The text is split on line breaks first and each line is then parsed as a
/// CSV record, so a quoted field cannot span lines: an open quote runs to the
/// end of its line. A blank line becomes a record with one empty field. Use
/// [`decode_csv`] when embedded newlines matter.
pub fn decode_csv_lines(text: &str) -> Result<Records> {
    let builder = csv_reader(Format::Csv.delimiter());

    let mut records = Vec::new();
    let mut record = csv::StringRecord::new();
    for line in text.lines() {
        if line.is_empty() {
            records.push(vec![String::new()]);
            continue;
        }
        let mut reader = builder.from_reader(line.as_bytes());
        while reader.read_record(&mut record)? {
            records.push(record.iter().map(str::to_string).collect());
        }
    }

    Ok(records)
}

/// Decode tab-separated text.
///
/// Every line is one record, split on tabs with no quote handling, so fields
/// cannot contain tabs or line breaks. Trailing `\r`, `\0` and `\x0B` are
/// stripped from each line; a blank line becomes a record with one empty
/// field.
///
/// `max_line_len` caps the byte length of a line (without its terminator);
/// `None` or `Some(0)` means unlimited.
pub fn decode_tsv(text: &str, max_line_len: Option<usize>) -> Result<Records> {
    let limit = max_line_len.filter(|&n| n > 0);

    let mut records = Vec::new();
    for line in text.lines() {
        let line = line.trim_end_matches(['\r', '\0', '\x0B']);
        if let Some(limit) = limit
            && line.len() > limit
        {
            return Err(Error::RecordTooLong {
                row: records.len() + 1,
                limit,
            });
        }
        records.push(
            line.split(Format::Tsv.delimiter() as char)
                .map(str::to_string)
                .collect(),
        );
    }

    Ok(records)
}

/// Push one empty-field record per line break the csv reader skipped after
/// byte offset `end`.
fn push_blank_lines(records: &mut Records, text: &str, end: usize) {
    let bytes = text.as_bytes();
    let mut rest = bytes.get(end..).unwrap_or_default();
    // A CRLF terminator leaves its `\n` for the next read.
    if let Some(tail) = rest.strip_prefix(b"\n")
        && end.checked_sub(1).and_then(|i| bytes.get(i)) == Some(&b'\r')
    {
        rest = tail;
    }
    loop {
        rest = match rest {
            [b'\r', b'\n', tail @ ..] | [b'\r' | b'\n', tail @ ..] => tail,
            _ => break,
        };
        records.push(vec![String::new()]);
    }
}

fn csv_reader(delimiter: u8) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true);
    builder
}
